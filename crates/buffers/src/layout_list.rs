//! Growable list of plain-data elements with explicit capacity management.
//!
//! Storage is a boxed slice that is always fully initialised; `count` tracks how many leading
//! slots are live. Growth doubles the capacity and block-copies the live prefix. Insertion and
//! removal shift the tail with a single `copy_within`, and the slot vacated by a removal is reset
//! to `T::default()` so stale data never lingers past `count`.
//!
//! Ownership replaces manual disposal: [`LayoutList::dispose`] consumes the list, so a second
//! dispose or any use after dispose is rejected at compile time.

use core::num::NonZeroUsize;
use core::ops::{Index, IndexMut};
use core::slice::Iter;

use log::trace;

use crate::BufferError;

/// Memory arena tag carried by a list.
///
/// The tag records the intended lifetime of the storage (per-frame scratch, job scratch, or
/// long-lived). All variants currently draw from the global allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Allocator {
    /// Scratch storage released within the current frame.
    Temp,
    /// Scratch storage handed to a background job.
    TempJob,
    /// Storage that lives as long as its owner.
    #[default]
    Persistent,
}

/// A growable list of `Copy` elements.
#[derive(Debug, Clone)]
pub struct LayoutList<T: Copy + Default> {
    buffer: Box<[T]>,
    count: usize,
    allocator: Allocator,
}

impl<T: Copy + Default> LayoutList<T> {
    /// Create a list with room for `initial_capacity` elements.
    ///
    /// # Errors
    /// Returns [`BufferError::InvalidCapacity`] when `initial_capacity` is zero.
    pub fn new(initial_capacity: usize, allocator: Allocator) -> Result<Self, BufferError> {
        let capacity = NonZeroUsize::new(initial_capacity).ok_or(BufferError::InvalidCapacity)?;
        Ok(Self::with_capacity(capacity, allocator))
    }

    /// Infallible constructor for callers that already hold a non-zero capacity.
    pub fn with_capacity(capacity: NonZeroUsize, allocator: Allocator) -> Self {
        Self {
            buffer: vec![T::default(); capacity.get()].into_boxed_slice(),
            count: 0,
            allocator,
        }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub const fn allocator(&self) -> Allocator {
        self.allocator
    }

    /// Live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.count]
    }

    /// Live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.count]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Restartable cursor over the live elements.
    #[inline]
    pub fn cursor(&self) -> LayoutListCursor<'_, T> {
        LayoutListCursor {
            list: self,
            position: 0,
        }
    }

    /// Append an element, growing when full.
    pub fn push(&mut self, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.buffer[self.count] = value;
        self.count += 1;
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.count.checked_sub(1)?;
        let value = self.buffer[last];
        self.buffer[last] = T::default();
        self.count = last;
        Some(value)
    }

    /// Insert `value` at `index`, shifting the tail right by one slot.
    ///
    /// # Panics
    /// Panics when `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) {
        assert!(
            index <= self.count,
            "insertion index {index} out of range for length {}",
            self.count
        );
        self.insert_unchecked_range(index, value);
    }

    /// Checked variant of [`Self::insert`].
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfRange`] when `index > len()`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        if index > self.count {
            return Err(BufferError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }
        self.insert_unchecked_range(index, value);
        Ok(())
    }

    fn insert_unchecked_range(&mut self, index: usize, value: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        self.buffer.copy_within(index..self.count, index + 1);
        self.buffer[index] = value;
        self.count += 1;
    }

    /// Remove the element at `index`, shifting the tail left and clearing the vacated slot.
    ///
    /// # Panics
    /// Panics when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> T {
        assert!(
            index < self.count,
            "removal index {index} out of range for length {}",
            self.count
        );
        self.remove_in_range(index)
    }

    /// Checked variant of [`Self::remove_at`].
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfRange`] when `index >= len()`.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, BufferError> {
        if index >= self.count {
            return Err(BufferError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }
        Ok(self.remove_in_range(index))
    }

    fn remove_in_range(&mut self, index: usize) -> T {
        let removed = self.buffer[index];
        self.buffer.copy_within(index + 1..self.count, index);
        self.count -= 1;
        self.buffer[self.count] = T::default();
        removed
    }

    /// Reset the count to zero. Capacity is retained.
    pub fn clear(&mut self) {
        self.buffer[..self.count].fill(T::default());
        self.count = 0;
    }

    /// Release the storage. Consuming `self` makes a second release impossible.
    pub fn dispose(self) {
        trace!(
            target: "layout::list",
            "dispose: capacity={} count={} allocator={:?}",
            self.capacity(),
            self.count,
            self.allocator
        );
        drop(self);
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity().saturating_mul(2).max(1);
        trace!(
            target: "layout::list",
            "grow: {} -> {} ({:?})",
            self.capacity(),
            new_capacity,
            self.allocator
        );
        let mut grown = vec![T::default(); new_capacity].into_boxed_slice();
        grown[..self.count].copy_from_slice(&self.buffer[..self.count]);
        self.buffer = grown;
    }
}

impl<T: Copy + Default + PartialEq> LayoutList<T> {
    /// Position of the first element equal to `value`.
    ///
    /// Comparison uses `PartialEq`, not a byte-wise compare, so padding bytes and alternate
    /// bit patterns of equal values (for example `0.0` and `-0.0`) never cause a miss.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Copy + Default> Index<usize> for LayoutList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T: Copy + Default> IndexMut<usize> for LayoutList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'list, T: Copy + Default> IntoIterator for &'list LayoutList<T> {
    type Item = &'list T;
    type IntoIter = Iter<'list, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sequential cursor over a [`LayoutList`] that can be rewound with [`Self::reset`].
///
/// The cursor borrows the list, so the list cannot be mutated while it is being enumerated.
#[derive(Debug, Clone)]
pub struct LayoutListCursor<'list, T: Copy + Default> {
    list: &'list LayoutList<T>,
    position: usize,
}

impl<T: Copy + Default> LayoutListCursor<'_, T> {
    /// Rewind to the first element.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Index of the element the next call to `next` will yield.
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<'list, T: Copy + Default> Iterator for LayoutListCursor<'list, T> {
    type Item = &'list T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.list.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}
