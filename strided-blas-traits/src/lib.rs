//! Scalar capability traits shared by the strided-blas kernels.
//!
//! This crate provides the numeric vocabulary the generic matrix-vector
//! kernels are written against:
//!
//! - [`ScalarBase`]: the ring operations every kernel needs (`+`, `*`, zero, one)
//! - [`ElementOpApply`] / [`HermitianScalar`]: conjugation and real-part
//!   extraction, identity for real types
//! - [`ElementOp`] with [`Identity`] and [`Conj`]: type-level element
//!   operations, so a kernel body can read a stored triangle conjugated
//!   without a runtime branch in the inner loop
//!
//! Downstream crates can implement these traits for their own scalar types
//! without orphan rule violations.

pub mod element_op;
pub mod scalar;

pub use element_op::{Conj, ElementOp, ElementOpApply, Identity};
pub use scalar::{HermitianScalar, ScalarBase};
