//! Triangular matrix addressing.

/// Read-only view of a stored square matrix, addressed column-major.
///
/// Row-major callers are normalized to column-major before a view is built
/// (see [`Layout::normalize`](crate::Layout::normalize)), so `at(i, j)` always
/// reads `data[i + j*lda]`. The kernels only call `at` on entries inside the
/// selected triangle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stored<'a, T> {
    data: &'a [T],
    lda: usize,
}

impl<'a, T: Copy> Stored<'a, T> {
    #[inline]
    pub(crate) fn new(data: &'a [T], lda: usize) -> Self {
        Stored { data, lda }
    }

    #[inline(always)]
    pub(crate) fn at(&self, i: usize, j: usize) -> T {
        self.data[i + j * self.lda]
    }
}
