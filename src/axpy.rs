//! `y = alpha*x + y` on strided vectors.

use strided_blas_traits::ScalarBase;

use crate::check::check_vector_pair;
use crate::counter::{CallRecord, Counter, NoCounter};
use crate::vector::VectorLayout;
use crate::Result;

/// Vector update `y = alpha*x + y`.
///
/// `x` and `y` hold `n` logical elements with nonzero strides `incx`, `incy`;
/// negative strides traverse in reverse. When `n == 0` or `alpha == 0`, `y` is
/// left untouched.
///
/// # Errors
///
/// [`BlasError::InvalidArgument`](crate::BlasError) if `n < 0`, a stride is
/// zero, or a slice is too short for `n` and its stride.
pub fn axpy<T: ScalarBase>(
    n: i64,
    alpha: T,
    x: &[T],
    incx: i64,
    y: &mut [T],
    incy: i64,
) -> Result<()> {
    axpy_with_counter(&NoCounter, n, alpha, x, incx, y, incy)
}

/// [`axpy`], recording the call shape in `counter` once the call completes.
pub fn axpy_with_counter<T: ScalarBase, C: Counter + ?Sized>(
    counter: &C,
    n: i64,
    alpha: T,
    x: &[T],
    incx: i64,
    y: &mut [T],
    incy: i64,
) -> Result<()> {
    let dims = check_vector_pair("axpy", n, incx, incy, x.len(), y.len())?;
    if dims.n != 0 && alpha != T::zero() {
        let xl = VectorLayout::new(dims.n, dims.incx);
        let yl = VectorLayout::new(dims.n, dims.incy);
        update(alpha, x, xl, y, yl);
    }
    counter.insert(CallRecord::Axpy { n });
    Ok(())
}

fn update<T: ScalarBase>(alpha: T, x: &[T], xl: VectorLayout, y: &mut [T], yl: VectorLayout) {
    if xl.is_unit() && yl.is_unit() {
        let n = xl.len();
        for (yi, &xi) in y[..n].iter_mut().zip(&x[..n]) {
            *yi = *yi + alpha * xi;
        }
    } else {
        for (ix, iy) in xl.offsets().zip(yl.offsets()) {
            y[iy] = y[iy] + alpha * x[ix];
        }
    }
}
