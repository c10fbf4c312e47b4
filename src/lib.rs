//! Layout-generic BLAS interface for symmetric and Hermitian matrix-vector
//! products over strided vectors.
//!
//! One mathematical definition, `y = alpha*A*x + beta*y` with `A` stored as a
//! single triangle, is adapted to every combination of
//! {row-major, column-major} × {upper, lower} × {positive, negative stride}
//! × {real, complex} scalars.
//!
//! # Operations
//!
//! - [`hemv`]: Hermitian matrix-vector multiply, overloaded per precision via
//!   the [`Hemv`] trait (`f32`, `f64`, `Complex32`, `Complex64`)
//! - [`hemv_generic`]: the same operation for any [`HermitianScalar`]
//! - [`symv`]: symmetric matrix-vector multiply for any [`ScalarBase`]
//! - [`axpy`]: `y = alpha*x + y` on strided vectors
//!
//! Each has a `*_with_counter` variant that reports the call shape to a
//! [`Counter`] after validation succeeds.
//!
//! # Storage conventions
//!
//! - `A` is `n`-by-`n` in an array with leading dimension `lda >= n`. Only the
//!   triangle selected by [`Uplo`] (plus the diagonal) is read. For Hermitian
//!   matrices the imaginary part of the diagonal is never read.
//! - Row-major storage of the upper (lower) triangle is treated as
//!   column-major storage of the lower (upper) triangle of the conjugate
//!   transpose.
//! - A vector with stride `inc < 0` is traversed in reverse: logical element 0
//!   is the last physical one.
//!
//! # Example
//!
//! ```rust
//! use num_complex::Complex64;
//! use strided_blas::{hemv, Layout, Uplo};
//!
//! // A = [[2, 3+4i], [3-4i, 5]], upper triangle stored column-major
//! let a = vec![
//!     Complex64::new(2.0, 0.0), Complex64::new(0.0, 0.0),
//!     Complex64::new(3.0, 4.0), Complex64::new(5.0, 0.0),
//! ];
//! let x = vec![Complex64::new(1.0, 0.0); 2];
//! let mut y = vec![Complex64::new(0.0, 0.0); 2];
//!
//! let one = Complex64::new(1.0, 0.0);
//! let zero = Complex64::new(0.0, 0.0);
//! hemv(Layout::ColMajor, Uplo::Upper, 2, one, &a, 2, &x, 1, zero, &mut y, 1).unwrap();
//!
//! assert_eq!(y, vec![Complex64::new(5.0, 4.0), Complex64::new(8.0, -4.0)]);
//! ```
//!
//! # Backends
//!
//! The complex [`Hemv`] overloads delegate to a column-major-only native
//! kernel ([`NativeHemv`]). With the `blas` feature this is CBLAS
//! `?hemv`; without it, a reference implementation built on the generic
//! kernel's column-major path.

#[cfg(all(feature = "blas", feature = "ilp64"))]
compile_error!("Features `blas` and `ilp64` are mutually exclusive: cblas-sys uses 32-bit indices.");

#[cfg(feature = "blas")]
extern crate cblas_sys;

mod axpy;
mod check;
pub mod counter;
mod enums;
mod hemv;
mod kernel;
mod matrix;
mod native;
mod symv;
pub mod vector;

pub use strided_blas_traits::{
    Conj, ElementOp, ElementOpApply, HermitianScalar, Identity, ScalarBase,
};

pub use axpy::{axpy, axpy_with_counter};
pub use check::BlasInt;
pub use counter::{CallRecord, Counter, CounterId, CountingSet, NoCounter};
pub use enums::{Layout, Uplo};
pub use hemv::{hemv, hemv_generic, hemv_with_counter, Hemv};
pub use kernel::{Hermitian, Symmetric, Symmetry};
pub use native::NativeHemv;
pub use symv::{symv, symv_with_counter};

// ============================================================================
// Error types
// ============================================================================

/// Errors raised by the BLAS routines.
///
/// Every error is detected before any output is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlasError {
    /// A precondition on the call's arguments is violated.
    #[error("{routine}: invalid argument, {condition} (got {value})")]
    InvalidArgument {
        /// Name of the public routine that rejected the call.
        routine: &'static str,
        /// The violated precondition, e.g. `"lda >= n"`.
        condition: &'static str,
        /// The offending value.
        value: i64,
    },
}

impl BlasError {
    pub(crate) fn invalid(routine: &'static str, condition: &'static str, value: i64) -> Self {
        BlasError::InvalidArgument {
            routine,
            condition,
            value,
        }
    }
}

/// Result type for BLAS routines.
pub type Result<T> = std::result::Result<T, BlasError>;
