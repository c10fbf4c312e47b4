//! CBLAS-style layout and triangle enumerations.
//!
//! Rust enums are closed, so an unrecognized layout or triangle can only enter
//! through the integer/char conversions below, which reject it with
//! [`BlasError::InvalidArgument`].

use crate::{BlasError, Result};

/// Memory layout for matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layout {
    /// Column-major (Fortran-style): elements in a column are contiguous.
    ColMajor,
    /// Row-major (C-style): elements in a row are contiguous.
    RowMajor,
}

/// Which triangle of a symmetric/Hermitian matrix is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Uplo {
    /// Only the upper triangle (and diagonal) is referenced.
    Upper,
    /// Only the lower triangle (and diagonal) is referenced.
    Lower,
}

impl Layout {
    /// CBLAS enumerator value (`CblasRowMajor = 101`, `CblasColMajor = 102`).
    pub const fn code(self) -> i32 {
        match self {
            Layout::RowMajor => 101,
            Layout::ColMajor => 102,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Layout::ColMajor => 'C',
            Layout::RowMajor => 'R',
        }
    }

    /// Parse `'C'` / `'R'` (case-insensitive).
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Layout::ColMajor),
            'R' => Ok(Layout::RowMajor),
            _ => Err(BlasError::invalid(
                "Layout::from_char",
                "layout is 'C' or 'R'",
                c as i64,
            )),
        }
    }

    /// Triangle of the column-major matrix equivalent to storing `uplo` in
    /// this layout.
    ///
    /// Row-major storage of one triangle is column-major storage of the other
    /// triangle of the (conjugate) transpose.
    #[inline]
    pub fn normalize(self, uplo: Uplo) -> Uplo {
        match self {
            Layout::ColMajor => uplo,
            Layout::RowMajor => uplo.flip(),
        }
    }
}

impl TryFrom<i32> for Layout {
    type Error = BlasError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            101 => Ok(Layout::RowMajor),
            102 => Ok(Layout::ColMajor),
            _ => Err(BlasError::invalid(
                "Layout::try_from",
                "layout is CblasRowMajor (101) or CblasColMajor (102)",
                code as i64,
            )),
        }
    }
}

impl Uplo {
    /// CBLAS enumerator value (`CblasUpper = 121`, `CblasLower = 122`).
    pub const fn code(self) -> i32 {
        match self {
            Uplo::Upper => 121,
            Uplo::Lower => 122,
        }
    }

    /// Fortran character code passed to native kernels.
    pub const fn to_char(self) -> char {
        match self {
            Uplo::Upper => 'U',
            Uplo::Lower => 'L',
        }
    }

    /// Parse `'U'` / `'L'` (case-insensitive).
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'U' => Ok(Uplo::Upper),
            'L' => Ok(Uplo::Lower),
            _ => Err(BlasError::invalid(
                "Uplo::from_char",
                "uplo is 'U' or 'L'",
                c as i64,
            )),
        }
    }

    /// Swap Upper <=> Lower.
    #[inline]
    pub const fn flip(self) -> Self {
        match self {
            Uplo::Upper => Uplo::Lower,
            Uplo::Lower => Uplo::Upper,
        }
    }
}

impl TryFrom<i32> for Uplo {
    type Error = BlasError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            121 => Ok(Uplo::Upper),
            122 => Ok(Uplo::Lower),
            _ => Err(BlasError::invalid(
                "Uplo::try_from",
                "uplo is CblasUpper (121) or CblasLower (122)",
                code as i64,
            )),
        }
    }
}
