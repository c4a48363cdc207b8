//! Contiguous buffer with automatic growth and shrink.
//!
//! The buffer's capacity is owned by a policy, never by the caller: growth
//! multiplies, shrink halves, and both replace the whole buffer in one
//! allocate-move-swap step so a failed allocation leaves the previous
//! buffer untouched.

use core::fmt;
use core::slice;

use crate::error::SequenceError;
use crate::sequence::{Sequence, checked_index, checked_insert_index};

/// An array list over a contiguous buffer.
///
/// The live elements occupy slots `[0, size)`; the capacity tracked by the
/// growth/shrink policy is always at least `size`. When an append or insert
/// finds the buffer full, capacity becomes `2 * capacity + 1`, so growth
/// succeeds even from capacity 0. After a delete that leaves
/// `size * 2 <= capacity` with `size > 0`, capacity becomes
/// `max(capacity / 2, size)`. Both directions reallocate and move the live
/// elements, keeping amortized cost O(1) per operation.
///
/// # Example
///
/// ```
/// use lineup_collections::{DynamicArray, Sequence};
///
/// let mut list = DynamicArray::with_capacity(2);
/// for i in 0..6 {
///     list.append(i).unwrap();
/// }
///
/// // Two growths: 2 -> 5 at the third append, 5 -> 11 at the sixth.
/// assert_eq!(list.size(), 6);
/// assert_eq!(list.capacity(), 11);
/// assert_eq!(list.get_at(4), Ok(&4));
/// ```
pub struct DynamicArray<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with capacity 0.
    ///
    /// The first append triggers a growth to capacity 1.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
        }
    }

    /// Creates an empty array with the given starting capacity.
    ///
    /// After construction the capacity is managed solely by the
    /// growth/shrink policy.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the capacity the policy currently maintains.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over the elements in position order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    fn grow(&mut self) -> Result<(), SequenceError> {
        self.reallocate(self.capacity * 2 + 1)
    }

    /// Replaces the buffer with one of `new_capacity` slots.
    ///
    /// The old buffer stays live until the new one holds every element,
    /// so a failed allocation has no effect.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        debug_assert!(new_capacity >= self.buf.len());

        let mut next = Vec::new();
        next.try_reserve_exact(new_capacity)
            .map_err(|_| SequenceError::CapacityError)?;
        next.append(&mut self.buf);
        self.buf = next;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Sequence<T> for DynamicArray<T> {
    fn append(&mut self, element: T) -> Result<(), SequenceError> {
        if self.buf.len() == self.capacity {
            self.grow()?;
        }
        self.buf.push(element);
        Ok(())
    }

    fn append_all(&mut self, mut elements: Vec<T>) -> Result<(), SequenceError> {
        let required = self.buf.len() + elements.len();
        let mut target = self.capacity;
        while target < required {
            target = target * 2 + 1;
        }
        if target != self.capacity {
            self.reallocate(target)?;
        }
        self.buf.append(&mut elements);
        Ok(())
    }

    fn insert_at(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let index = checked_insert_index(index, self.buf.len())?;
        if self.buf.len() == self.capacity {
            self.grow()?;
        }
        // Shifts [index, size) one slot right before writing the element.
        self.buf.insert(index, element);
        Ok(())
    }

    fn set_at(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let index = checked_index(index, self.buf.len())?;
        self.buf[index] = element;
        Ok(())
    }

    fn get_at(&self, index: isize) -> Result<&T, SequenceError> {
        let index = checked_index(index, self.buf.len())?;
        Ok(&self.buf[index])
    }

    fn delete_at(&mut self, index: isize) -> Result<T, SequenceError> {
        let index = checked_index(index, self.buf.len())?;
        let remaining = self.buf.len() - 1;

        if remaining > 0 && remaining * 2 <= self.capacity {
            // Allocate the smaller buffer before touching the live one; a
            // failed shrink leaves the deletion unapplied.
            let target = (self.capacity / 2).max(remaining);
            let mut next = Vec::new();
            next.try_reserve_exact(target)
                .map_err(|_| SequenceError::CapacityError)?;

            let removed = self.buf.remove(index);
            next.append(&mut self.buf);
            self.buf = next;
            self.capacity = target;
            return Ok(removed);
        }

        Ok(self.buf.remove(index))
    }

    #[inline]
    fn size(&self) -> usize {
        self.buf.len()
    }

    /// Drops the buffer and resets both size and capacity to 0.
    ///
    /// The next append reallocates from scratch.
    fn clear(&mut self) {
        self.buf = Vec::new();
        self.capacity = 0;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
