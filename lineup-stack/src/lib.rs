//! # lineup-stack
//!
//! Last-in first-out stack built on the `lineup-collections` sequential
//! containers.
//!
//! The stack owns a backing [`Sequence`] and exposes only the LIFO surface:
//! push, pop, and top. By default it sits on a [`DynamicArray`], so pushes
//! amortize through the array's doubling growth and pops participate in its
//! halving shrink. Any other sequence kind can be plugged in when a different
//! layout trade-off is wanted.
//!
//! ## Example
//!
//! ```
//! use lineup_stack::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//!
//! assert_eq!(stack.top(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert!(stack.is_empty());
//! ```
//!
//! Any sequence can back the stack:
//!
//! ```
//! use lineup_collections::SinglyLinkedList;
//! use lineup_stack::Stack;
//!
//! let mut stack = Stack::with_sequence(SinglyLinkedList::new());
//! stack.push("bottom").unwrap();
//! stack.push("top").unwrap();
//! assert_eq!(stack.pop(), Ok("top"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

use core::marker::PhantomData;

use lineup_collections::{DynamicArray, Sequence, SequenceError};

/// Last-in first-out stack over a pluggable sequential container.
///
/// The top of the stack is the last position of the backing sequence, so
/// push and pop never shift existing elements on an array backend.
#[derive(Debug)]
pub struct Stack<T, S = DynamicArray<T>> {
    inner: S,
    _element: PhantomData<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack over a [`DynamicArray`] with capacity zero.
    #[inline]
    pub const fn new() -> Self {
        Self {
            inner: DynamicArray::new(),
            _element: PhantomData,
        }
    }

    /// Creates an empty stack whose array backend starts at `capacity`.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: DynamicArray::with_capacity(capacity),
            _element: PhantomData,
        }
    }
}

impl<T, S: Sequence<T>> Stack<T, S> {
    /// Wraps an existing sequence, stacking on top of its current contents.
    #[inline]
    pub fn with_sequence(inner: S) -> Self {
        Self {
            inner,
            _element: PhantomData,
        }
    }

    /// Pushes an element onto the top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityError`] when the backing sequence
    /// cannot grow.
    #[inline]
    pub fn push(&mut self, element: T) -> Result<(), SequenceError> {
        self.inner.append(element)
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyContainer`] when the stack is empty.
    /// Errors from the backing sequence propagate: the default array
    /// backend reports [`SequenceError::CapacityError`] when a triggered
    /// shrink cannot allocate, leaving the element in place.
    pub fn pop(&mut self) -> Result<T, SequenceError> {
        if self.inner.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        self.inner.delete_at(self.inner.size() as isize - 1)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::EmptyContainer`] when the stack is empty.
    pub fn top(&self) -> Result<&T, SequenceError> {
        if self.inner.is_empty() {
            return Err(SequenceError::EmptyContainer);
        }
        self.inner.get_at(self.inner.size() as isize - 1)
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns `true` when the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every element and releases the backing storage.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Consumes the stack and returns the backing sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S: Sequence<T> + Default> Default for Stack<T, S> {
    fn default() -> Self {
        Self::with_sequence(S::default())
    }
}
