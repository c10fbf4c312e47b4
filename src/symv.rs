//! Symmetric matrix-vector multiply, `y = alpha*A*x + beta*y`.

use strided_blas_traits::ScalarBase;

use crate::check::check_symmetric_mv;
use crate::counter::{CallRecord, Counter, NoCounter};
use crate::enums::{Layout, Uplo};
use crate::kernel::{symmetric_mv, Symmetric};
use crate::Result;

/// Symmetric matrix-vector multiply, `y = alpha*A*x + beta*y`, with
/// `A[j,i] = A[i,j]`.
///
/// Arguments are as for [`hemv`](crate::hemv), except that nothing is
/// conjugated and the full diagonal entry is used. Complex symmetric (not
/// Hermitian) matrices are supported.
#[allow(clippy::too_many_arguments)]
pub fn symv<T: ScalarBase>(
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
    symv_with_counter(&NoCounter, layout, uplo, n, alpha, a, lda, x, incx, beta, y, incy)
}

/// [`symv`], recording the call shape in `counter` once the call completes.
#[allow(clippy::too_many_arguments)]
pub fn symv_with_counter<T: ScalarBase, C: Counter + ?Sized>(
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
    let dims = check_symmetric_mv("symv", n, lda, incx, incy, a.len(), x.len(), y.len())?;
    symmetric_mv::<T, Symmetric>(
        layout, uplo, dims.n, alpha, a, dims.lda, x, dims.incx, beta, y, dims.incy,
    );
    counter.insert(CallRecord::Symv { uplo, n });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_symv_upper_row_major() {
        // A = [[1, 2, 4], [2, 3, 5], [4, 5, 6]], upper triangle row-major
        let a = [1.0, 2.0, 4.0, 0.0, 3.0, 5.0, 0.0, 0.0, 6.0];
        let x = [1.0, -2.0, 3.0];
        let mut y = [-4.0, -1.0, 3.0];
        symv(Layout::RowMajor, Uplo::Upper, 3, 2.0, &a, 3, &x, 1, 3.0, &mut y, 1).unwrap();
        assert_eq!(y, [6.0, 19.0, 33.0]);
    }

    #[test]
    fn test_symv_integers() {
        // Exact arithmetic on a type without conjugation.
        let a = [2i64, 0, 1, 3];
        let x = [1i64, 1];
        let mut y = [10i64, 20];
        symv(Layout::ColMajor, Uplo::Upper, 2, 1, &a, 2, &x, 1, 1, &mut y, 1).unwrap();
        assert_eq!(y, [13, 24]);
    }

    #[test]
    fn test_symv_complex_row_major_no_conjugation() {
        // Complex symmetric A = [[1, 2i], [2i, 1]], lower triangle row-major
        let c = Complex64::new;
        let a = [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 2.0), c(1.0, 0.0)];
        let x = [c(0.0, 0.0), c(1.0, 0.0)];
        let mut y = [c(0.0, 0.0); 2];
        symv(
            Layout::RowMajor,
            Uplo::Lower,
            2,
            c(1.0, 0.0),
            &a,
            2,
            &x,
            1,
            c(0.0, 0.0),
            &mut y,
            1,
        )
        .unwrap();
        assert_eq!(y, [c(0.0, 2.0), c(1.0, 0.0)]);
    }

    #[test]
    fn test_symv_rejects_zero_stride() {
        let (a, x, mut y) = ([0.0; 4], [0.0; 2], [0.0; 2]);
        let (col, upper) = (Layout::ColMajor, Uplo::Upper);
        let err = symv(col, upper, 2, 1.0, &a, 2, &x, 1, 0.0, &mut y, 0).unwrap_err();
        assert_eq!(err.to_string(), "symv: invalid argument, incy != 0 (got 0)");
    }
}
