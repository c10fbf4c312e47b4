//! Scalar type bounds for the matrix-vector kernels.

use num_complex::Complex;
use num_traits::Float;

use crate::element_op::ElementOpApply;

/// Shared trait bounds for all element types usable with the symmetric
/// kernels, independent of conjugation support.
///
/// `ScalarBase` does **not** require `ElementOpApply`. This allows custom
/// scalar types (e.g., modular integers) to run `symv` and `axpy` without
/// implementing conj.
pub trait ScalarBase:
    Copy
    + Send
    + Sync
    + std::ops::Mul<Output = Self>
    + std::ops::Add<Output = Self>
    + num_traits::Zero
    + num_traits::One
    + PartialEq
{
}

impl<T> ScalarBase for T where
    T: Copy
        + Send
        + Sync
        + std::ops::Mul<Output = T>
        + std::ops::Add<Output = T>
        + num_traits::Zero
        + num_traits::One
        + PartialEq
{
}

/// Scalars that can serve as entries of a Hermitian matrix.
///
/// Adds real-part extraction on top of conjugation. For real types both are
/// the identity, which is why a Hermitian kernel over `f32`/`f64` coincides
/// with the symmetric one.
pub trait HermitianScalar: ScalarBase + ElementOpApply {
    /// The real part of `self`, embedded back into `Self` (imaginary part zero).
    fn real_part(self) -> Self;
}

impl HermitianScalar for f32 {
    #[inline(always)]
    fn real_part(self) -> Self {
        self
    }
}

impl HermitianScalar for f64 {
    #[inline(always)]
    fn real_part(self) -> Self {
        self
    }
}

impl<T> HermitianScalar for Complex<T>
where
    T: Float + Send + Sync,
{
    #[inline(always)]
    fn real_part(self) -> Self {
        Complex::new(self.re, T::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};
    use num_traits::{One, Zero};

    fn assert_scalar_base<T: ScalarBase>() {}
    fn assert_hermitian<T: HermitianScalar>() {}

    #[test]
    fn test_standard_types() {
        assert_scalar_base::<f32>();
        assert_scalar_base::<f64>();
        assert_scalar_base::<i32>();
        assert_scalar_base::<i64>();
        assert_scalar_base::<Complex64>();

        assert_hermitian::<f32>();
        assert_hermitian::<f64>();
        assert_hermitian::<Complex32>();
        assert_hermitian::<Complex64>();
    }

    #[test]
    fn test_real_part() {
        assert_eq!(2.5f64.real_part(), 2.5);
        assert_eq!((-1.0f32).real_part(), -1.0);
        assert_eq!(Complex64::new(3.0, 4.0).real_part(), Complex64::new(3.0, 0.0));
        assert_eq!(Complex32::new(-2.0, 9.0).real_part(), Complex32::new(-2.0, 0.0));
    }

    #[test]
    fn test_custom_type_without_conjugation() {
        // Arithmetic modulo 7: a ring without a notion of conjugation,
        // which still satisfies ScalarBase.
        #[derive(Debug, Clone, Copy, PartialEq)]
        struct Mod7(u8);

        impl std::ops::Add for Mod7 {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Mod7((self.0 + rhs.0) % 7)
            }
        }

        impl std::ops::Mul for Mod7 {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Mod7((self.0 * rhs.0) % 7)
            }
        }

        impl num_traits::Zero for Mod7 {
            fn zero() -> Self {
                Mod7(0)
            }
            fn is_zero(&self) -> bool {
                self.0 == 0
            }
        }

        impl num_traits::One for Mod7 {
            fn one() -> Self {
                Mod7(1)
            }
        }

        assert_scalar_base::<Mod7>();

        let a = Mod7(3);
        let b = Mod7(5);
        assert_eq!(a + b, Mod7(1));
        assert_eq!(a * b, Mod7(1));
        assert!(Mod7::zero().is_zero());
        assert!(!a.is_zero());
        assert_eq!(Mod7::one(), Mod7(1));
    }
}
