//! Argument validation and narrowing to the native index type.
//!
//! The public routines take `i64` dimensions and strides. Native kernels take
//! [`BlasInt`], which is narrower unless the `ilp64` feature is enabled; every
//! value passed across is checked before the cast.

use crate::vector::VectorLayout;
use crate::{BlasError, Result};

/// Index type of the native BLAS kernels.
#[cfg(not(feature = "ilp64"))]
pub type BlasInt = i32;

/// Index type of the native BLAS kernels.
#[cfg(feature = "ilp64")]
pub type BlasInt = i64;

/// Validated dimensions of a symmetric/Hermitian matrix-vector call,
/// converted to the types the kernels index with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SymmetricMvDims {
    pub n: usize,
    pub lda: usize,
    pub incx: isize,
    pub incy: isize,
}

/// Validated dimensions of a level-1 vector call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VectorPairDims {
    pub n: usize,
    pub incx: isize,
    pub incy: isize,
}

/// Dimensions narrowed to [`BlasInt`] for a native kernel call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NativeDims {
    pub n: BlasInt,
    pub lda: BlasInt,
    pub incx: BlasInt,
    pub incy: BlasInt,
}

#[inline]
fn ensure(ok: bool, routine: &'static str, condition: &'static str, value: i64) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(BlasError::invalid(routine, condition, value))
    }
}

/// Whether `value` is representable as a non-truncated [`BlasInt`] magnitude.
#[inline]
fn fits_native(value: i64) -> bool {
    std::mem::size_of::<i64>() <= std::mem::size_of::<BlasInt>()
        || value.unsigned_abs() <= BlasInt::MAX as u64
}

/// Narrow `value` to [`BlasInt`], failing if its magnitude does not fit.
pub(crate) fn to_blas_int(
    routine: &'static str,
    condition: &'static str,
    value: i64,
) -> Result<BlasInt> {
    ensure(fits_native(value), routine, condition, value)?;
    BlasInt::try_from(value).map_err(|_| BlasError::invalid(routine, condition, value))
}

/// Number of elements an `n`-by-`n` matrix with leading dimension `lda` spans.
#[inline]
pub(crate) fn matrix_span(n: u64, lda: u64) -> u128 {
    if n == 0 {
        0
    } else {
        (n as u128 - 1) * lda as u128 + n as u128
    }
}

fn to_usize(routine: &'static str, condition: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| BlasError::invalid(routine, condition, value))
}

fn to_isize(routine: &'static str, condition: &'static str, value: i64) -> Result<isize> {
    isize::try_from(value).map_err(|_| BlasError::invalid(routine, condition, value))
}

/// Fail unless a slice of `len` elements holds every element of `layout`.
fn ensure_covers(
    routine: &'static str,
    condition: &'static str,
    layout: VectorLayout,
    len: usize,
) -> Result<()> {
    let covered = layout.required_len().is_some_and(|required| required <= len);
    ensure(covered, routine, condition, len as i64)
}

/// Validate the arguments of `y = alpha*A*x + beta*y` with `A` n-by-n
/// symmetric or Hermitian.
///
/// Checks, in order: `n >= 0`, `lda >= n`, `incx != 0`, `incy != 0`, then
/// that `a`, `x`, `y` hold every element the call addresses.
#[allow(clippy::too_many_arguments)]
pub(crate) fn check_symmetric_mv(
    routine: &'static str,
    n: i64,
    lda: i64,
    incx: i64,
    incy: i64,
    a_len: usize,
    x_len: usize,
    y_len: usize,
) -> Result<SymmetricMvDims> {
    ensure(n >= 0, routine, "n >= 0", n)?;
    ensure(lda >= n, routine, "lda >= n", lda)?;
    ensure(incx != 0, routine, "incx != 0", incx)?;
    ensure(incy != 0, routine, "incy != 0", incy)?;

    let dims = SymmetricMvDims {
        n: to_usize(routine, "n fits in usize", n)?,
        lda: to_usize(routine, "lda fits in usize", lda)?,
        incx: to_isize(routine, "incx fits in isize", incx)?,
        incy: to_isize(routine, "incy fits in isize", incy)?,
    };
    ensure(
        matrix_span(n as u64, lda as u64) <= a_len as u128,
        routine,
        "a.len() >= lda*(n-1) + n",
        a_len as i64,
    )?;
    let x = VectorLayout::new(dims.n, dims.incx);
    ensure_covers(routine, "x.len() >= 1 + (n-1)*|incx|", x, x_len)?;
    let y = VectorLayout::new(dims.n, dims.incy);
    ensure_covers(routine, "y.len() >= 1 + (n-1)*|incy|", y, y_len)?;
    Ok(dims)
}

/// Validate the arguments of a two-vector level-1 routine.
pub(crate) fn check_vector_pair(
    routine: &'static str,
    n: i64,
    incx: i64,
    incy: i64,
    x_len: usize,
    y_len: usize,
) -> Result<VectorPairDims> {
    ensure(n >= 0, routine, "n >= 0", n)?;
    ensure(incx != 0, routine, "incx != 0", incx)?;
    ensure(incy != 0, routine, "incy != 0", incy)?;

    let dims = VectorPairDims {
        n: to_usize(routine, "n fits in usize", n)?,
        incx: to_isize(routine, "incx fits in isize", incx)?,
        incy: to_isize(routine, "incy fits in isize", incy)?,
    };
    let x = VectorLayout::new(dims.n, dims.incx);
    ensure_covers(routine, "x.len() >= 1 + (n-1)*|incx|", x, x_len)?;
    let y = VectorLayout::new(dims.n, dims.incy);
    ensure_covers(routine, "y.len() >= 1 + (n-1)*|incy|", y, y_len)?;
    Ok(dims)
}

impl NativeDims {
    /// Narrow validated `i64` arguments to [`BlasInt`].
    pub(crate) fn narrow(
        routine: &'static str,
        n: i64,
        lda: i64,
        incx: i64,
        incy: i64,
    ) -> Result<Self> {
        Ok(NativeDims {
            n: to_blas_int(routine, "n <= BlasInt::MAX", n)?,
            lda: to_blas_int(routine, "lda <= BlasInt::MAX", lda)?,
            incx: to_blas_int(routine, "|incx| <= BlasInt::MAX", incx)?,
            incy: to_blas_int(routine, "|incy| <= BlasInt::MAX", incy)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition_of(err: BlasError) -> &'static str {
        match err {
            BlasError::InvalidArgument { condition, .. } => condition,
        }
    }

    #[test]
    fn test_check_symmetric_mv_ok() {
        let dims = check_symmetric_mv("hemv", 3, 4, 1, -2, 11, 3, 5).unwrap();
        assert_eq!(
            dims,
            SymmetricMvDims {
                n: 3,
                lda: 4,
                incx: 1,
                incy: -2
            }
        );
    }

    #[test]
    fn test_check_symmetric_mv_empty() {
        // n = 0 needs no storage at all.
        let dims = check_symmetric_mv("hemv", 0, 0, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(dims.n, 0);
    }

    #[test]
    fn test_check_symmetric_mv_rejections() {
        let cases: [(i64, i64, i64, i64, &str); 5] = [
            (-1, 1, 1, 1, "n >= 0"),
            (3, 2, 1, 1, "lda >= n"),
            (3, 3, 0, 1, "incx != 0"),
            (3, 3, 1, 0, "incy != 0"),
            (3, 3, 1, 1, "a.len() >= lda*(n-1) + n"),
        ];
        for (n, lda, incx, incy, condition) in cases {
            // a is one element short for the last case only
            let a_len = if condition.starts_with("a.len") { 8 } else { 64 };
            let err = check_symmetric_mv("hemv", n, lda, incx, incy, a_len, 64, 64).unwrap_err();
            assert_eq!(condition_of(err), condition);
        }
    }

    #[test]
    fn test_check_symmetric_mv_short_vectors() {
        let err = check_symmetric_mv("symv", 3, 3, -3, 1, 9, 6, 3).unwrap_err();
        assert_eq!(condition_of(err), "x.len() >= 1 + (n-1)*|incx|");
        let err = check_symmetric_mv("symv", 3, 3, 1, 2, 9, 3, 4).unwrap_err();
        assert_eq!(condition_of(err), "y.len() >= 1 + (n-1)*|incy|");
    }

    #[test]
    fn test_error_reports_routine_and_value() {
        let err = check_symmetric_mv("hemv", 4, 2, 1, 1, 64, 64, 64).unwrap_err();
        assert_eq!(
            err,
            BlasError::InvalidArgument {
                routine: "hemv",
                condition: "lda >= n",
                value: 2,
            }
        );
        assert_eq!(err.to_string(), "hemv: invalid argument, lda >= n (got 2)");
    }

    #[test]
    fn test_check_vector_pair() {
        let dims = check_vector_pair("axpy", 4, -1, 2, 4, 7).unwrap();
        assert_eq!(
            dims,
            VectorPairDims {
                n: 4,
                incx: -1,
                incy: 2
            }
        );
        assert!(check_vector_pair("axpy", -1, 1, 1, 0, 0).is_err());
        assert!(check_vector_pair("axpy", 2, 0, 1, 8, 8).is_err());
        assert!(check_vector_pair("axpy", 2, 1, 0, 8, 8).is_err());
        assert!(check_vector_pair("axpy", 4, 1, 2, 4, 6).is_err());
    }

    #[test]
    fn test_vector_coverage_uses_stride_magnitude() {
        // 1 + 3*|-3| = 10 elements
        assert!(check_vector_pair("axpy", 4, -3, 1, 10, 4).is_ok());
        let err = check_vector_pair("axpy", 4, -3, 1, 9, 4).unwrap_err();
        assert_eq!(condition_of(err), "x.len() >= 1 + (n-1)*|incx|");
        // A span that overflows usize is never covered.
        let err = check_vector_pair("axpy", 4, 1, i64::MAX, 4, usize::MAX).unwrap_err();
        assert_eq!(condition_of(err), "y.len() >= 1 + (n-1)*|incy|");
    }

    #[test]
    fn test_matrix_span() {
        assert_eq!(matrix_span(0, 0), 0);
        assert_eq!(matrix_span(3, 5), 13);
    }

    #[test]
    fn test_narrow_in_range() {
        let dims = NativeDims::narrow("hemv", 10, 12, -1, 3).unwrap();
        assert_eq!(dims.n, 10);
        assert_eq!(dims.lda, 12);
        assert_eq!(dims.incx, -1);
        assert_eq!(dims.incy, 3);
    }

    #[cfg(not(feature = "ilp64"))]
    #[test]
    fn test_narrow_overflow() {
        let big = i32::MAX as i64 + 1;
        let err = NativeDims::narrow("hemv", big, big, 1, 1).unwrap_err();
        assert_eq!(condition_of(err), "n <= BlasInt::MAX");
        let err = NativeDims::narrow("hemv", 1, big, 1, 1).unwrap_err();
        assert_eq!(condition_of(err), "lda <= BlasInt::MAX");
        // |i32::MIN| does not fit even though i32::MIN itself does
        let err = NativeDims::narrow("hemv", 1, 1, i32::MIN as i64, 1).unwrap_err();
        assert_eq!(condition_of(err), "|incx| <= BlasInt::MAX");
        let err = NativeDims::narrow("hemv", 1, 1, 1, -big).unwrap_err();
        assert_eq!(condition_of(err), "|incy| <= BlasInt::MAX");
    }

    #[cfg(feature = "ilp64")]
    #[test]
    fn test_narrow_ilp64_accepts_wide() {
        let big = i32::MAX as i64 + 1;
        assert!(NativeDims::narrow("hemv", big, big, -big, big).is_ok());
    }
}
