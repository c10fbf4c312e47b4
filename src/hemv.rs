//! Hermitian matrix-vector multiply, `y = alpha*A*x + beta*y`.
//!
//! Real precisions run the generic kernel directly (a real Hermitian matrix
//! is symmetric). Complex precisions delegate to a column-major-only native
//! kernel; row-major callers are corrected around it by conjugating
//! `alpha`, `beta`, `x` and `y`.

use num_complex::{Complex32, Complex64};
use strided_blas_traits::HermitianScalar;

use crate::check::{check_symmetric_mv, NativeDims};
use crate::counter::{CallRecord, Counter, NoCounter};
use crate::enums::{Layout, Uplo};
use crate::kernel::{symmetric_mv, Hermitian};
use crate::native::NativeHemv;
use crate::vector::{conj_in_place, conj_into_contiguous, VectorLayout};
use crate::Result;

const ROUTINE: &str = "hemv";

/// Per-precision `hemv` overloads.
///
/// Implemented for `f32`, `f64`, `Complex32` and `Complex64`. Any other
/// [`HermitianScalar`] can use [`hemv_generic`].
pub trait Hemv: HermitianScalar {
    #[allow(clippy::too_many_arguments)]
    fn hemv(
        layout: Layout,
        uplo: Uplo,
        n: i64,
        alpha: Self,
        a: &[Self],
        lda: i64,
        x: &[Self],
        incx: i64,
        beta: Self,
        y: &mut [Self],
        incy: i64,
    ) -> Result<()>;
}

macro_rules! impl_hemv_generic {
    ($($t:ty),*) => {
        $(
            impl Hemv for $t {
                fn hemv(
                    layout: Layout,
                    uplo: Uplo,
                    n: i64,
                    alpha: $t,
                    a: &[$t],
                    lda: i64,
                    x: &[$t],
                    incx: i64,
                    beta: $t,
                    y: &mut [$t],
                    incy: i64,
                ) -> Result<()> {
                    hemv_generic(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
                }
            }
        )*
    };
}

macro_rules! impl_hemv_native {
    ($($t:ty),*) => {
        $(
            impl Hemv for $t {
                fn hemv(
                    layout: Layout,
                    uplo: Uplo,
                    n: i64,
                    alpha: $t,
                    a: &[$t],
                    lda: i64,
                    x: &[$t],
                    incx: i64,
                    beta: $t,
                    y: &mut [$t],
                    incy: i64,
                ) -> Result<()> {
                    hemv_native(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
                }
            }
        )*
    };
}

impl_hemv_generic!(f32, f64);
impl_hemv_native!(Complex32, Complex64);

/// Hermitian matrix-vector multiply, `y = alpha*A*x + beta*y`.
///
/// - `layout`: storage order of `A`.
/// - `uplo`: which triangle of `A` is referenced; the other is implied by
///   `A[j,i] = conj(A[i,j])`.
/// - `n`: order of `A`, `n >= 0`.
/// - `alpha`: if zero, `A` and `x` are not read.
/// - `a`: `n`-by-`n` matrix in an array with leading dimension `lda >= n`.
///   Imaginary parts of the diagonal are not read and are taken as zero.
/// - `x`: `n` elements with stride `incx != 0`; `incx < 0` traverses
///   `x` backwards.
/// - `beta`: if zero, `y` need not be set on input.
/// - `y`: `n` elements with stride `incy != 0`, overwritten with the result.
///
/// # Errors
///
/// [`BlasError::InvalidArgument`](crate::BlasError::InvalidArgument) if
/// `n < 0`, `lda < n`, a stride is zero, a slice is too short for the
/// addressed elements, or (for the native complex path) a dimension exceeds
/// [`BlasInt`](crate::BlasInt). Nothing is written on error.
#[allow(clippy::too_many_arguments)]
pub fn hemv<T: Hemv>(
    layout: Layout,
    uplo: Uplo,
    n: i64,
    alpha: T,
    a: &[T],
    lda: i64,
    x: &[T],
    incx: i64,
    beta: T,
    y: &mut [T],
    incy: i64,
) -> Result<()> {
    hemv_with_counter(&NoCounter, layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
}

/// [`hemv`], recording the call shape in `counter` once the call completes.
#[allow(clippy::too_many_arguments)]
pub fn hemv_with_counter<T: Hemv, C: Counter + ?Sized>(
    counter: &C,
    layout: Layout,
    uplo: Uplo,
    n: i64,
    alpha: T,
    a: &[T],
    lda: i64,
    x: &[T],
    incx: i64,
    beta: T,
    y: &mut [T],
    incy: i64,
) -> Result<()> {
    T::hemv(layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)?;
    counter.insert(CallRecord::Hemv { uplo, n });
    Ok(())
}

/// Hermitian matrix-vector multiply for any [`HermitianScalar`], computed by
/// the generic kernel without a native backend.
///
/// Semantics and errors are those of [`hemv`], except that dimensions are not
/// narrowed to [`BlasInt`](crate::BlasInt).
#[allow(clippy::too_many_arguments)]
pub fn hemv_generic<T: HermitianScalar>(
    layout: Layout,
    uplo: Uplo,
    n: i64,
    alpha: T,
    a: &[T],
    lda: i64,
    x: &[T],
    incx: i64,
    beta: T,
    y: &mut [T],
    incy: i64,
) -> Result<()> {
    let dims = check_symmetric_mv(ROUTINE, n, lda, incx, incy, a.len(), x.len(), y.len())?;
    symmetric_mv::<T, Hermitian>(
        layout, uplo, dims.n, alpha, a, dims.lda, x, dims.incx, beta, y, dims.incy,
    );
    Ok(())
}

/// Row-major correction around a column-major native kernel.
///
/// For row-major `A`, `conj(A)` is the column-major matrix with the opposite
/// triangle, and `y = alpha*A*x + beta*y` is equivalent to
/// `conj(y) = conj(alpha)*conj(A)*conj(x) + conj(beta)*conj(y)`. `y` must be
/// conjugated before the call, since the native kernel reads it for the
/// `beta` term, and conjugated back afterwards.
#[allow(clippy::too_many_arguments)]
fn hemv_native<T>(
    layout: Layout,
    uplo: Uplo,
    n: i64,
    alpha: T,
    a: &[T],
    lda: i64,
    x: &[T],
    incx: i64,
    beta: T,
    y: &mut [T],
    incy: i64,
) -> Result<()>
where
    T: NativeHemv + HermitianScalar,
{
    let dims = check_symmetric_mv(ROUTINE, n, lda, incx, incy, a.len(), x.len(), y.len())?;
    let native = NativeDims::narrow(ROUTINE, n, lda, incx, incy)?;

    let yl = VectorLayout::new(dims.n, dims.incy);
    let row_major = layout == Layout::RowMajor;

    let (uplo, alpha, beta) = if row_major {
        (uplo.flip(), alpha.conj(), beta.conj())
    } else {
        (uplo, alpha, beta)
    };

    // Owned by this frame, so it is released on every exit path.
    let x_conj: Vec<T>;
    let (x, incx) = if row_major {
        tracing::debug!(
            routine = ROUTINE,
            native = T::NATIVE_NAME,
            n,
            "row-major: conjugating operands around column-major kernel"
        );
        x_conj = conj_into_contiguous(x, VectorLayout::new(dims.n, dims.incx));
        conj_in_place(y, yl);
        (&x_conj[..], 1)
    } else {
        (x, native.incx)
    };

    T::native_hemv(
        uplo.to_char() as u8,
        native.n,
        alpha,
        a,
        native.lda,
        x,
        incx,
        beta,
        y,
        native.incy,
    );

    if row_major {
        conj_in_place(y, yl);
    }
    Ok(())
}
