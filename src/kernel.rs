//! Generic symmetric/Hermitian matrix-vector kernel.
//!
//! Computes `y = alpha*A*x + beta*y` where only one triangle of `A` is
//! stored. One sweep over the stored triangle, column by column, applies each
//! entry twice: directly (`y[i] += alpha*x[j]*A[i,j]`) and mirrored across the
//! diagonal (`y[j] += alpha*mirror(A[i,j])*x[i]`), so the unstored triangle is
//! never materialized.
//!
//! # Layout normalization
//!
//! Row-major storage is read as column-major storage of the transpose with the
//! triangle selector flipped. For a Hermitian matrix the transpose is the
//! conjugate of the original, so stored entries are read through [`Conj`];
//! for a symmetric matrix they are read through [`Identity`]. The choice is
//! a type parameter of the loop body, never a per-element branch.

use strided_blas_traits::{Conj, ElementOp, HermitianScalar, Identity, ScalarBase};

use crate::enums::{Layout, Uplo};
use crate::matrix::Stored;
use crate::vector::{scale_in_place, VectorLayout};

/// The symmetry implied between the stored and the unstored triangle.
pub trait Symmetry<T: Copy>: 'static {
    /// Routine name used in diagnostics.
    const NAME: &'static str;

    /// Element operation applied to stored entries when the matrix is
    /// row-major.
    type RowMajorOp: ElementOp<T>;

    /// The entry at `(j, i)` given the entry at `(i, j)`.
    fn mirror(a: T) -> T;

    /// The effective value of a stored diagonal entry.
    fn diagonal(a: T) -> T;
}

/// `A[j,i] = conj(A[i,j])`; the diagonal is real.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hermitian;

/// `A[j,i] = A[i,j]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symmetric;

impl<T: HermitianScalar> Symmetry<T> for Hermitian {
    const NAME: &'static str = "hemv";
    type RowMajorOp = Conj;

    #[inline(always)]
    fn mirror(a: T) -> T {
        a.conj()
    }

    #[inline(always)]
    fn diagonal(a: T) -> T {
        a.real_part()
    }
}

impl<T: ScalarBase> Symmetry<T> for Symmetric {
    const NAME: &'static str = "symv";
    type RowMajorOp = Identity;

    #[inline(always)]
    fn mirror(a: T) -> T {
        a
    }

    #[inline(always)]
    fn diagonal(a: T) -> T {
        a
    }
}

/// `y = alpha*A*x + beta*y` on validated arguments.
///
/// Callers must have checked that `a`, `x`, `y` cover `n`, `lda`, `incx`,
/// `incy` (see `check::check_symmetric_mv`); indexing panics otherwise.
#[allow(clippy::too_many_arguments)]
pub(crate) fn symmetric_mv<T, S>(
    layout: Layout,
    uplo: Uplo,
    n: usize,
    alpha: T,
    a: &[T],
    lda: usize,
    x: &[T],
    incx: isize,
    beta: T,
    y: &mut [T],
    incy: isize,
) where
    T: ScalarBase,
    S: Symmetry<T>,
{
    let zero = T::zero();
    let one = T::one();

    if n == 0 || (alpha == zero && beta == one) {
        tracing::trace!(routine = S::NAME, n, "quick return");
        return;
    }

    let stored = layout.normalize(uplo);
    let xl = VectorLayout::new(n, incx);
    let yl = VectorLayout::new(n, incy);

    scale_in_place(y, yl, beta);
    if alpha == zero {
        return;
    }

    let a = Stored::new(a, lda);
    tracing::trace!(
        routine = S::NAME,
        ?layout,
        ?uplo,
        ?stored,
        n,
        incx,
        incy,
        "accumulate"
    );
    match layout {
        Layout::ColMajor => accumulate::<T, S, Identity>(stored, alpha, a, x, xl, y, yl),
        Layout::RowMajor => accumulate::<T, S, S::RowMajorOp>(stored, alpha, a, x, xl, y, yl),
    }
}

/// `y += alpha*A*x` with `A` stored column-major in the `stored` triangle,
/// entries read through `Op`.
fn accumulate<T, S, Op>(
    stored: Uplo,
    alpha: T,
    a: Stored<'_, T>,
    x: &[T],
    xl: VectorLayout,
    y: &mut [T],
    yl: VectorLayout,
) where
    T: ScalarBase,
    S: Symmetry<T>,
    Op: ElementOp<T>,
{
    let n = xl.len();
    let zero = T::zero();

    if xl.is_unit() && yl.is_unit() {
        match stored {
            Uplo::Upper => {
                for j in 0..n {
                    let tmp1 = alpha * x[j];
                    let mut tmp2 = zero;
                    for i in 0..j {
                        let aij = Op::apply(a.at(i, j));
                        y[i] = y[i] + tmp1 * aij;
                        tmp2 = tmp2 + S::mirror(aij) * x[i];
                    }
                    y[j] = y[j] + (tmp1 * S::diagonal(a.at(j, j)) + alpha * tmp2);
                }
            }
            Uplo::Lower => {
                for j in 0..n {
                    let tmp1 = alpha * x[j];
                    let mut tmp2 = zero;
                    for i in j + 1..n {
                        let aij = Op::apply(a.at(i, j));
                        y[i] = y[i] + tmp1 * aij;
                        tmp2 = tmp2 + S::mirror(aij) * x[i];
                    }
                    y[j] = y[j] + (tmp1 * S::diagonal(a.at(j, j)) + alpha * tmp2);
                }
            }
        }
        return;
    }

    // Non-unit or negative stride: running indices advanced by the stride.
    let (incx, incy) = (xl.inc(), yl.inc());
    let kx = xl.start() as isize;
    let ky = yl.start() as isize;
    match stored {
        Uplo::Upper => {
            let (mut jx, mut jy) = (kx, ky);
            for j in 0..n {
                let tmp1 = alpha * x[jx as usize];
                let mut tmp2 = zero;
                let (mut ix, mut iy) = (kx, ky);
                for i in 0..j {
                    let aij = Op::apply(a.at(i, j));
                    y[iy as usize] = y[iy as usize] + tmp1 * aij;
                    tmp2 = tmp2 + S::mirror(aij) * x[ix as usize];
                    ix += incx;
                    iy += incy;
                }
                y[jy as usize] =
                    y[jy as usize] + (tmp1 * S::diagonal(a.at(j, j)) + alpha * tmp2);
                jx += incx;
                jy += incy;
            }
        }
        Uplo::Lower => {
            let (mut jx, mut jy) = (kx, ky);
            for j in 0..n {
                let tmp1 = alpha * x[jx as usize];
                let mut tmp2 = zero;
                let (mut ix, mut iy) = (jx, jy);
                for i in j + 1..n {
                    ix += incx;
                    iy += incy;
                    let aij = Op::apply(a.at(i, j));
                    y[iy as usize] = y[iy as usize] + tmp1 * aij;
                    tmp2 = tmp2 + S::mirror(aij) * x[ix as usize];
                }
                y[jy as usize] =
                    y[jy as usize] + (tmp1 * S::diagonal(a.at(j, j)) + alpha * tmp2);
                jx += incx;
                jy += incy;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_hermitian_upper_col_major_2x2() {
        // A = [[2, 3+4i], [3-4i, 5]]; the lower-left slot holds garbage.
        let a = [c(2.0, 0.0), c(99.0, 99.0), c(3.0, 4.0), c(5.0, 0.0)];
        let x = [c(1.0, 0.0), c(1.0, 0.0)];
        let mut y = [c(0.0, 0.0); 2];
        symmetric_mv::<_, Hermitian>(
            Layout::ColMajor,
            Uplo::Upper,
            2,
            c(1.0, 0.0),
            &a,
            2,
            &x,
            1,
            c(0.0, 0.0),
            &mut y,
            1,
        );
        assert_eq!(y, [c(5.0, 4.0), c(8.0, -4.0)]);
    }

    #[test]
    fn test_hermitian_lower_row_major_2x2() {
        // Same A, lower triangle stored row-major: [[2, _], [3-4i, 5]].
        let a = [c(2.0, 0.0), c(99.0, 99.0), c(3.0, -4.0), c(5.0, 0.0)];
        let x = [c(1.0, 0.0), c(1.0, 0.0)];
        let mut y = [c(0.0, 0.0); 2];
        symmetric_mv::<_, Hermitian>(
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
        );
        assert_eq!(y, [c(5.0, 4.0), c(8.0, -4.0)]);
    }

    #[test]
    fn test_symmetric_does_not_conjugate() {
        // Complex symmetric A = [[1, i], [i, 1]]
        let a = [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 1.0), c(1.0, 0.0)];
        let x = [c(1.0, 0.0), c(0.0, 0.0)];
        let mut y = [c(0.0, 0.0); 2];
        symmetric_mv::<_, Symmetric>(
            Layout::ColMajor,
            Uplo::Upper,
            2,
            c(1.0, 0.0),
            &a,
            2,
            &x,
            1,
            c(0.0, 0.0),
            &mut y,
            1,
        );
        assert_eq!(y, [c(1.0, 0.0), c(0.0, 1.0)]);
    }

    #[test]
    fn test_real_symmetric_lower_strided() {
        // A = [[1, 2, 4], [2, 3, 5], [4, 5, 6]] lower col-major, lda = 3
        let a = [1.0, 2.0, 4.0, 0.0, 3.0, 5.0, 0.0, 0.0, 6.0];
        // x = [1, -2, 3] stored with stride 2
        let x = [1.0, 0.0, -2.0, 0.0, 3.0];
        // y = [-4, -1, 3] stored reversed (stride -1)
        let mut y = [3.0, -1.0, -4.0];
        symmetric_mv::<f64, Symmetric>(
            Layout::ColMajor,
            Uplo::Lower,
            3,
            2.0,
            &a,
            3,
            &x,
            2,
            3.0,
            &mut y,
            -1,
        );
        // A*x = [9, 11, 12]; 2*A*x + 3*y = [6, 19, 33], stored reversed
        assert_eq!(y, [33.0, 19.0, 6.0]);
    }

    #[test]
    fn test_hermitian_diagonal_imaginary_part_ignored() {
        let x = [c(1.0, 2.0), c(-1.0, 0.5)];
        let run = |d0: Complex64, d1: Complex64| {
            let a = [d0, c(0.0, 0.0), c(3.0, 4.0), d1];
            let mut y = [c(1.0, 1.0); 2];
            symmetric_mv::<_, Hermitian>(
                Layout::ColMajor,
                Uplo::Upper,
                2,
                c(0.5, -1.0),
                &a,
                2,
                &x,
                1,
                c(2.0, 0.0),
                &mut y,
                1,
            );
            y
        };
        assert_eq!(
            run(c(2.0, 0.0), c(5.0, 0.0)),
            run(c(2.0, 17.0), c(5.0, -3.0))
        );
    }

    #[test]
    fn test_alpha_zero_only_scales() {
        let a = [f64::NAN; 4];
        let x = [f64::NAN; 2];
        let mut y = [1.0, 2.0];
        symmetric_mv::<f64, Symmetric>(
            Layout::RowMajor,
            Uplo::Upper,
            2,
            0.0,
            &a,
            2,
            &x,
            1,
            3.0,
            &mut y,
            1,
        );
        assert_eq!(y, [3.0, 6.0]);
    }
}
