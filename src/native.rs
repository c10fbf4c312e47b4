//! Column-major-only native complex Hermitian kernels.
//!
//! With the `blas` feature these are CBLAS `cblas_chemv` / `cblas_zhemv`,
//! always called with `CblasColMajor`. Without it, a reference implementation
//! runs the generic kernel's column-major path. Either way the contract is the
//! Fortran one: column-major storage, a `'U'`/`'L'` triangle code and
//! [`BlasInt`] dimensions. Row-major callers go through the correction wrapper
//! in `hemv`.

use num_complex::{Complex32, Complex64};

use crate::check::BlasInt;

/// Type-level dispatch to a native column-major `?hemv`.
///
/// Implemented for `Complex32` (`chemv`) and `Complex64` (`zhemv`).
pub trait NativeHemv: Sized {
    /// Native kernel name, for diagnostics.
    const NATIVE_NAME: &'static str;

    /// `y = alpha*A*x + beta*y` with `A` Hermitian, column-major.
    ///
    /// `uplo` is `b'U'` or `b'L'`. Arguments must already be validated:
    /// `n >= 0`, `lda >= n`, nonzero strides, and `a`, `x`, `y` covering every
    /// addressed element.
    #[allow(clippy::too_many_arguments)]
    fn native_hemv(
        uplo: u8,
        n: BlasInt,
        alpha: Self,
        a: &[Self],
        lda: BlasInt,
        x: &[Self],
        incx: BlasInt,
        beta: Self,
        y: &mut [Self],
        incy: BlasInt,
    );
}

#[cfg(feature = "blas")]
mod blas_impl {
    use super::*;

    #[inline]
    pub(super) fn cblas_uplo(uplo: u8) -> cblas_sys::CBLAS_UPLO {
        if uplo.to_ascii_uppercase() == b'L' {
            cblas_sys::CBLAS_UPLO::CblasLower
        } else {
            cblas_sys::CBLAS_UPLO::CblasUpper
        }
    }

    impl NativeHemv for Complex32 {
        const NATIVE_NAME: &'static str = "cblas_chemv";

        fn native_hemv(
            uplo: u8,
            n: BlasInt,
            alpha: Complex32,
            a: &[Complex32],
            lda: BlasInt,
            x: &[Complex32],
            incx: BlasInt,
            beta: Complex32,
            y: &mut [Complex32],
            incy: BlasInt,
        ) {
            // SAFETY: slice lengths were validated against n, lda and the
            // strides; Complex32 is repr(C) [re, im] like CBLAS's complex float.
            unsafe {
                cblas_sys::cblas_chemv(
                    cblas_sys::CBLAS_LAYOUT::CblasColMajor,
                    cblas_uplo(uplo),
                    n,
                    (&alpha) as *const _ as *const _,
                    a.as_ptr() as *const _,
                    lda,
                    x.as_ptr() as *const _,
                    incx,
                    (&beta) as *const _ as *const _,
                    y.as_mut_ptr() as *mut _,
                    incy,
                );
            }
        }
    }

    impl NativeHemv for Complex64 {
        const NATIVE_NAME: &'static str = "cblas_zhemv";

        fn native_hemv(
            uplo: u8,
            n: BlasInt,
            alpha: Complex64,
            a: &[Complex64],
            lda: BlasInt,
            x: &[Complex64],
            incx: BlasInt,
            beta: Complex64,
            y: &mut [Complex64],
            incy: BlasInt,
        ) {
            // SAFETY: see Complex32.
            unsafe {
                cblas_sys::cblas_zhemv(
                    cblas_sys::CBLAS_LAYOUT::CblasColMajor,
                    cblas_uplo(uplo),
                    n,
                    (&alpha) as *const _ as *const _,
                    a.as_ptr() as *const _,
                    lda,
                    x.as_ptr() as *const _,
                    incx,
                    (&beta) as *const _ as *const _,
                    y.as_mut_ptr() as *mut _,
                    incy,
                );
            }
        }
    }
}

#[cfg(not(feature = "blas"))]
mod reference {
    use super::*;
    use crate::enums::{Layout, Uplo};
    use crate::kernel::{symmetric_mv, Hermitian};

    macro_rules! impl_reference_hemv {
        ($t:ty, $name:literal) => {
            impl NativeHemv for $t {
                const NATIVE_NAME: &'static str = $name;

                fn native_hemv(
                    uplo: u8,
                    n: BlasInt,
                    alpha: $t,
                    a: &[$t],
                    lda: BlasInt,
                    x: &[$t],
                    incx: BlasInt,
                    beta: $t,
                    y: &mut [$t],
                    incy: BlasInt,
                ) {
                    // Fortran LSAME semantics: anything but 'L' means upper.
                    let uplo = if uplo.to_ascii_uppercase() == b'L' {
                        Uplo::Lower
                    } else {
                        Uplo::Upper
                    };
                    symmetric_mv::<$t, Hermitian>(
                        Layout::ColMajor,
                        uplo,
                        n as usize,
                        alpha,
                        a,
                        lda as usize,
                        x,
                        incx as isize,
                        beta,
                        y,
                        incy as isize,
                    );
                }
            }
        };
    }

    impl_reference_hemv!(Complex32, "reference_chemv");
    impl_reference_hemv!(Complex64, "reference_zhemv");
}
