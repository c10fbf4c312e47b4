//! Element operations applied lazily to stored matrix entries.
//!
//! Two operations are needed by the symmetric/Hermitian kernels:
//! - `identity`: No transformation
//! - `conj`: Complex conjugate
//!
//! They are selected at the type level so that the kernel's inner loop is
//! monomorphized once per operation instead of branching per element.
//!
//! `Identity` implements `ElementOp<T>` for any `T: Copy`, requiring no
//! additional bounds. `Conj` requires `T: ElementOpApply`, which lets custom
//! scalar types use `Identity`-only kernels (e.g. `symv`) without
//! implementing conjugation.

use num_complex::Complex;
use num_traits::Num;

// ---------------------------------------------------------------------------
// ElementOpApply: trait for types that support conjugation
// ---------------------------------------------------------------------------

/// Trait for types that support complex conjugation.
///
/// The default implementation returns `self` unchanged, so real-valued types
/// (and custom types without an imaginary part) can simply write:
/// ```ignore
/// impl ElementOpApply for MyType {}
/// ```
pub trait ElementOpApply: Copy {
    #[inline(always)]
    fn conj(self) -> Self {
        self
    }
}

// Real types: conjugation is the identity
macro_rules! impl_element_op_apply_real {
    ($($t:ty),*) => {
        $(impl ElementOpApply for $t {})*
    };
}

impl_element_op_apply_real!(
    f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

// Complex types: override with actual conjugation
impl<T: Num + Copy + Clone + std::ops::Neg<Output = T>> ElementOpApply for Complex<T> {
    #[inline(always)]
    fn conj(self) -> Self {
        Complex::conj(&self)
    }
}

// ---------------------------------------------------------------------------
// Marker types
// ---------------------------------------------------------------------------

/// Identity operation: f(x) = x
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Complex conjugate operation: f(x) = conj(x)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conj;

// ---------------------------------------------------------------------------
// ElementOp<T>: generic over element type
// ---------------------------------------------------------------------------

/// Trait for element-wise operations applied when reading stored entries.
///
/// Both operations are involutions: applying one twice is the identity.
pub trait ElementOp<T>: Copy + Default + 'static {
    /// Apply the operation to a value.
    fn apply(value: T) -> T;
}

// Identity: works with ANY Copy type (no ElementOpApply needed)
impl<T: Copy> ElementOp<T> for Identity {
    #[inline(always)]
    fn apply(value: T) -> T {
        value
    }
}

impl<T: ElementOpApply> ElementOp<T> for Conj {
    #[inline(always)]
    fn apply(value: T) -> T {
        value.conj()
    }
}
