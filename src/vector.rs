//! Stride-generalized vector addressing.
//!
//! A vector view is `n` logical elements at `start + i*inc` in a backing
//! slice. For `inc > 0` logical element 0 is at the base of the slice; for
//! `inc < 0` it is the last physical element, so traversal runs backwards.
//! The base itself never moves.

use strided_blas_traits::{ElementOpApply, ScalarBase};

/// Addressing of `n` elements with a signed, nonzero stride.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorLayout {
    n: usize,
    inc: isize,
}

impl VectorLayout {
    /// Create a layout for `n` elements with stride `inc`.
    ///
    /// `inc` must be nonzero; the public routines reject a zero stride before
    /// a layout is ever built.
    #[inline]
    pub fn new(n: usize, inc: isize) -> Self {
        debug_assert!(inc != 0, "zero stride");
        VectorLayout { n, inc }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn inc(&self) -> isize {
        self.inc
    }

    /// Whether elements are adjacent and in forward order.
    #[inline]
    pub fn is_unit(&self) -> bool {
        self.inc == 1
    }

    /// Physical offset of logical element 0.
    #[inline]
    pub fn start(&self) -> usize {
        if self.inc > 0 || self.n == 0 {
            0
        } else {
            (self.n - 1) * self.inc.unsigned_abs()
        }
    }

    /// Minimum backing slice length, `1 + (n-1)*|inc|`, or `None` if that
    /// overflows `usize`.
    #[inline]
    pub fn required_len(&self) -> Option<usize> {
        if self.n == 0 {
            return Some(0);
        }
        (self.n - 1)
            .checked_mul(self.inc.unsigned_abs())?
            .checked_add(1)
    }

    /// Physical offsets in logical order, advancing a running index by the
    /// stride.
    pub fn offsets(&self) -> impl Iterator<Item = usize> {
        let inc = self.inc;
        (0..self.n).scan(self.start() as isize, move |ix, _| {
            let cur = *ix;
            *ix += inc;
            Some(cur as usize)
        })
    }
}

/// Copy the logical elements of `x` into a new unit-stride buffer, conjugated.
pub fn conj_into_contiguous<T: ElementOpApply>(x: &[T], layout: VectorLayout) -> Vec<T> {
    layout.offsets().map(|ix| x[ix].conj()).collect()
}

/// Conjugate the logical elements of `y` in place.
pub fn conj_in_place<T: ElementOpApply>(y: &mut [T], layout: VectorLayout) {
    if layout.is_unit() {
        for v in &mut y[..layout.len()] {
            *v = v.conj();
        }
    } else {
        for iy in layout.offsets() {
            y[iy] = y[iy].conj();
        }
    }
}

/// `y = beta * y` over the logical elements of `y`.
///
/// `beta == 0` overwrites with zero without reading `y`, so NaN or
/// uninitialized-looking input does not propagate.
pub fn scale_in_place<T: ScalarBase>(y: &mut [T], layout: VectorLayout, beta: T) {
    if beta == T::one() {
        return;
    }
    let zero = T::zero();
    if layout.is_unit() {
        let y = &mut y[..layout.len()];
        if beta == zero {
            y.fill(zero);
        } else {
            for v in y.iter_mut() {
                *v = beta * *v;
            }
        }
    } else if beta == zero {
        for iy in layout.offsets() {
            y[iy] = zero;
        }
    } else {
        for iy in layout.offsets() {
            y[iy] = beta * y[iy];
        }
    }
}
