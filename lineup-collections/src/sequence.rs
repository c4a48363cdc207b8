//! The operation contract shared by every container in the crate.

use crate::error::SequenceError;

/// Ordered, indexable collection operations.
///
/// All four containers implement this trait independently; callers program
/// against the capability set, not against a concrete representation. The
/// trait is object safe, so heterogeneous containers can sit behind
/// `&mut dyn Sequence<T>` or `Box<dyn Sequence<T>>`.
///
/// Indices are signed. The linear containers reject indices outside their
/// valid range; the circular list maps any integer, including negative
/// values, onto an existing slot by true-modulo wrapping.
///
/// | Container | `insert_at` range | `get_at`/`set_at`/`delete_at` range |
/// |---|---|---|
/// | [`DynamicArray`] | `[0, size]` | `[0, size)` |
/// | [`SinglyLinkedList`], [`DoublyLinkedList`] | `[0, size)` | `[0, size)` |
/// | [`CircularLinkedList`] | any integer (wrapped) | any integer (wrapped) |
///
/// # Example
///
/// ```
/// use lineup_collections::{DynamicArray, Sequence, SinglyLinkedList};
///
/// fn fill(seq: &mut dyn Sequence<i32>) {
///     for i in 0..4 {
///         seq.append(i).unwrap();
///     }
/// }
///
/// let mut array = DynamicArray::new();
/// let mut list = SinglyLinkedList::new();
/// fill(&mut array);
/// fill(&mut list);
///
/// assert_eq!(array.get_at(2), Ok(&2));
/// assert_eq!(list.get_at(2), Ok(&2));
/// ```
///
/// [`DynamicArray`]: crate::DynamicArray
/// [`SinglyLinkedList`]: crate::SinglyLinkedList
/// [`DoublyLinkedList`]: crate::DoublyLinkedList
/// [`CircularLinkedList`]: crate::CircularLinkedList
pub trait Sequence<T> {
    /// Appends an element at the end.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityError`] if a buffer-backed
    /// container cannot allocate room for the element. Linked containers
    /// do not fail.
    fn append(&mut self, element: T) -> Result<(), SequenceError>;

    /// Appends an ordered batch of elements.
    ///
    /// For the buffer-backed container the batch is atomic with respect to
    /// capacity: room for every element is secured before any element is
    /// moved in.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::CapacityError`] if securing room fails, in
    /// which case no element has been appended.
    fn append_all(&mut self, elements: Vec<T>) -> Result<(), SequenceError>;

    /// Inserts an element at a position, pushing later elements one slot
    /// toward the end.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] when the index is
    /// outside the container's insertion range, or
    /// [`SequenceError::EmptyContainer`] for the circular list on an empty
    /// ring. The buffer-backed container can also return
    /// [`SequenceError::CapacityError`] when it is full and growth fails.
    fn insert_at(&mut self, index: isize, element: T) -> Result<(), SequenceError>;

    /// Replaces the element at a position. Size is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] or, for the circular
    /// list on an empty ring, [`SequenceError::EmptyContainer`].
    fn set_at(&mut self, index: isize, element: T) -> Result<(), SequenceError>;

    /// Returns a reference to the element at a position.
    ///
    /// A failed lookup yields no element at all, so an error can never be
    /// confused with an element that happens to equal some default.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] or, for the circular
    /// list on an empty ring, [`SequenceError::EmptyContainer`].
    fn get_at(&self, index: isize) -> Result<&T, SequenceError>;

    /// Removes and returns the element at a position, pulling later
    /// elements one slot toward the start.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] or, for the circular
    /// list on an empty ring, [`SequenceError::EmptyContainer`]. The
    /// buffer-backed container can also return
    /// [`SequenceError::CapacityError`] when a triggered shrink cannot
    /// allocate; the element is then not removed.
    fn delete_at(&mut self, index: isize) -> Result<T, SequenceError>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the container holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Removes every element and releases all owned storage.
    ///
    /// Clearing an already empty container is a no-op.
    fn clear(&mut self);
}

/// Maps a signed index into `[0, len)`.
#[inline]
pub(crate) fn checked_index(index: isize, len: usize) -> Result<usize, SequenceError> {
    if index < 0 || index as usize >= len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }
    Ok(index as usize)
}

/// Maps a signed index into `[0, len]`, where `len` is the append position.
#[inline]
pub(crate) fn checked_insert_index(index: isize, len: usize) -> Result<usize, SequenceError> {
    if index < 0 || index as usize > len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }
    Ok(index as usize)
}
