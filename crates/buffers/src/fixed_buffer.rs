//! Inline fixed-length buffers.
//!
//! The length is part of the type, so a buffer can never grow or shrink. Indexing outside
//! `[0, N)` through `Index`/`IndexMut` panics; `try_get`/`try_set` report
//! [`BufferError::IndexOutOfRange`] instead.

use core::ops::{Index, IndexMut};
use core::slice::{Iter, IterMut};

use crate::BufferError;

/// Inline storage for exactly `N` plain-data values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedBuffer<T: Copy, const N: usize> {
    items: [T; N],
}

/// Per-axis storage (width, height).
pub type FixedBuffer2<T> = FixedBuffer<T, 2>;
/// Per-physical-edge storage (left, top, right, bottom).
pub type FixedBuffer4<T> = FixedBuffer<T, 4>;
/// Inset storage (four physical edges plus start and end).
pub type FixedBuffer6<T> = FixedBuffer<T, 6>;
/// Full box-edge storage (physical, logical, combined, and `all`).
pub type FixedBuffer9<T> = FixedBuffer<T, 9>;
/// Small per-node tables such as the measurement cache.
pub type FixedBuffer16<T> = FixedBuffer<T, 16>;

impl<T: Copy, const N: usize> FixedBuffer<T, N> {
    /// Number of slots, fixed at compile time.
    pub const LENGTH: usize = N;

    /// Wrap an existing array.
    #[inline]
    pub const fn new(items: [T; N]) -> Self {
        Self { items }
    }

    /// Create a buffer with every slot set to `value`.
    #[inline]
    pub const fn filled(value: T) -> Self {
        Self { items: [value; N] }
    }

    /// Number of slots. Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// True only for the degenerate zero-length buffer.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Read a slot by value.
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfRange`] when `index >= N`.
    #[inline]
    pub fn try_get(&self, index: usize) -> Result<T, BufferError> {
        self.items
            .get(index)
            .copied()
            .ok_or(BufferError::IndexOutOfRange { index, length: N })
    }

    /// Overwrite a slot.
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfRange`] when `index >= N`.
    #[inline]
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let slot = self
            .items
            .get_mut(index)
            .ok_or(BufferError::IndexOutOfRange { index, length: N })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub const fn into_inner(self) -> [T; N] {
        self.items
    }
}

impl<T: Copy + Default, const N: usize> Default for FixedBuffer<T, N> {
    fn default() -> Self {
        Self {
            items: [T::default(); N],
        }
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for FixedBuffer<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T: Copy, const N: usize> Index<usize> for FixedBuffer<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T: Copy, const N: usize> IndexMut<usize> for FixedBuffer<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'buffer, T: Copy, const N: usize> IntoIterator for &'buffer FixedBuffer<T, N> {
    type Item = &'buffer T;
    type IntoIter = Iter<'buffer, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
