//! Circular linked list with modular index translation.
//!
//! The last node links back to the first, so every index operation wraps
//! instead of bounds-checking: `convert_index(i) = ((i % size) + size) %
//! size` maps any integer onto `[0, size)` by true modulo. The only index
//! failure is operating on an empty ring, where no slot exists to wrap to.

use core::fmt;

use slab::Slab;

use crate::error::SequenceError;
use crate::node::{NONE, Node};
use crate::sequence::Sequence;

/// A circular linked list.
///
/// Whenever the list is non-empty, `tail.next == head`; a sole node links
/// to itself. Indices passed to `get_at`, `set_at`, `insert_at`, and
/// `delete_at` are wrapped by true modulo, so any integer, including
/// negative values, resolves to an existing slot. On an empty ring those
/// operations fail with [`SequenceError::EmptyContainer`]; only `append`
/// and `append_all` are valid there.
///
/// The ring link is a plain arena key, not an owning reference, so
/// dropping or clearing the list releases the arena in one step without
/// walking the cycle.
///
/// # Example
///
/// ```
/// use lineup_collections::{CircularLinkedList, Sequence};
///
/// let mut ring = CircularLinkedList::new();
/// ring.append_all(vec![0, 1, 2]).unwrap();
///
/// assert_eq!(ring.get_at(3), Ok(&0));
/// assert_eq!(ring.get_at(-1), Ok(&2));
/// assert_eq!(ring.get_at(-4), Ok(&2));
/// ```
pub struct CircularLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> CircularLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        }
    }

    /// Returns an iterator yielding each element exactly once, starting
    /// at the head and stopping at the wrap point.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// True-modulo index translation. Caller guarantees `len > 0`.
    #[inline]
    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.len as isize) as usize
    }

    /// Walks `steps` forward from the head.
    fn walk(&self, steps: usize) -> usize {
        let mut key = self.head;
        for _ in 0..steps {
            key = self.nodes[key].next;
        }
        key
    }

    fn guard_non_empty(&self) -> Result<(), SequenceError> {
        if self.len == 0 {
            return Err(SequenceError::EmptyContainer);
        }
        Ok(())
    }
}

impl<T> Sequence<T> for CircularLinkedList<T> {
    fn append(&mut self, element: T) -> Result<(), SequenceError> {
        let key = self.nodes.insert(Node::new(element));
        if self.tail == NONE {
            // Sole node closes the ring on itself.
            self.nodes[key].next = key;
            self.head = key;
        } else {
            self.nodes[key].next = self.head;
            self.nodes[self.tail].next = key;
        }
        self.tail = key;
        self.len += 1;
        Ok(())
    }

    fn append_all(&mut self, elements: Vec<T>) -> Result<(), SequenceError> {
        for element in elements {
            self.append(element)?;
        }
        Ok(())
    }

    fn insert_at(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        self.guard_non_empty()?;
        let index = self.wrap(index);

        if index == 0 {
            // New head; the ring closure moves with it.
            let key = self.nodes.insert(Node {
                element,
                next: self.head,
                prev: NONE,
            });
            self.nodes[self.tail].next = key;
            self.head = key;
        } else {
            let before = self.walk(index - 1);
            let key = self.nodes.insert(Node {
                element,
                next: self.nodes[before].next,
                prev: NONE,
            });
            self.nodes[before].next = key;
        }
        self.len += 1;
        Ok(())
    }

    fn set_at(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        self.guard_non_empty()?;
        let key = self.walk(self.wrap(index));
        self.nodes[key].element = element;
        Ok(())
    }

    fn get_at(&self, index: isize) -> Result<&T, SequenceError> {
        self.guard_non_empty()?;
        let key = self.walk(self.wrap(index));
        Ok(&self.nodes[key].element)
    }

    fn delete_at(&mut self, index: isize) -> Result<T, SequenceError> {
        self.guard_non_empty()?;

        if self.len == 1 {
            // The sole node must not linger as a stale self-link.
            let node = self.nodes.remove(self.head);
            self.head = NONE;
            self.tail = NONE;
            self.len = 0;
            return Ok(node.element);
        }

        let index = self.wrap(index);
        let node = if index == 0 {
            let node = self.nodes.remove(self.head);
            self.head = node.next;
            self.nodes[self.tail].next = self.head;
            node
        } else {
            let before = self.walk(index - 1);
            let key = self.nodes[before].next;
            let node = self.nodes.remove(key);
            self.nodes[before].next = node.next;
            if key == self.tail {
                // Predecessor becomes the tail; its next is already head.
                self.tail = before;
            }
            node
        };
        self.len -= 1;
        Ok(node.element)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    /// Releases the whole arena in one step; the ring is never walked.
    fn clear(&mut self) {
        self.nodes = Slab::new();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }
}

impl<T> Default for CircularLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over references to the ring's elements, bounded by count.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring_of(values: &[i32]) -> CircularLinkedList<i32> {
        let mut ring = CircularLinkedList::new();
        ring.append_all(values.to_vec()).unwrap();
        ring
    }

    fn contents(ring: &CircularLinkedList<i32>) -> Vec<i32> {
        ring.iter().copied().collect()
    }

    #[test]
    fn new_is_empty() {
        let ring: CircularLinkedList<i32> = CircularLinkedList::new();
        assert!(ring.is_empty());
        assert_eq!(ring.iter().count(), 0);
    }

    #[test]
    fn sole_node_links_to_itself() {
        let ring = ring_of(&[7]);

        // Every index resolves to the one element.
        assert_eq!(ring.get_at(0), Ok(&7));
        assert_eq!(ring.get_at(1), Ok(&7));
        assert_eq!(ring.get_at(-1), Ok(&7));
        assert_eq!(ring.get_at(100), Ok(&7));
    }

    #[test]
    fn wrap_law() {
        let ring = ring_of(&[0, 1, 2]);

        assert_eq!(ring.get_at(3), Ok(&0));
        assert_eq!(ring.get_at(-1), Ok(&2));
        assert_eq!(ring.get_at(-4), Ok(&2));
        assert_eq!(ring.get_at(7), Ok(&1));
    }

    #[test]
    fn empty_ring_rejects_index_operations() {
        let mut ring: CircularLinkedList<i32> = CircularLinkedList::new();

        assert_eq!(ring.get_at(0), Err(SequenceError::EmptyContainer));
        assert_eq!(ring.set_at(0, 1), Err(SequenceError::EmptyContainer));
        assert_eq!(ring.insert_at(0, 1), Err(SequenceError::EmptyContainer));
        assert_eq!(ring.delete_at(0), Err(SequenceError::EmptyContainer));
    }

    #[test]
    fn append_closes_the_ring() {
        let ring = ring_of(&[1, 2, 3]);

        assert_eq!(contents(&ring), vec![1, 2, 3]);
        // One step past the tail lands back on the head.
        assert_eq!(ring.get_at(3), Ok(&1));
    }

    #[test]
    fn insert_at_zero_splices_new_head() {
        let mut ring = ring_of(&[2, 3]);

        ring.insert_at(0, 1).unwrap();
        assert_eq!(contents(&ring), vec![1, 2, 3]);
        // tail.next follows the new head.
        assert_eq!(ring.get_at(3), Ok(&1));
    }

    #[test]
    fn insert_wraps_index() {
        let mut ring = ring_of(&[1, 2, 3]);

        // Index 4 wraps to position 1.
        ring.insert_at(4, 9).unwrap();
        assert_eq!(contents(&ring), vec![1, 9, 2, 3]);
    }

    #[test]
    fn insert_negative_index() {
        let mut ring = ring_of(&[1, 2, 3]);

        // Index -1 wraps to position 2.
        ring.insert_at(-1, 9).unwrap();
        assert_eq!(contents(&ring), vec![1, 2, 9, 3]);
    }

    #[test]
    fn insert_into_sole_element_ring() {
        let mut ring = ring_of(&[2]);

        // Any index wraps to 0 and becomes the new head.
        ring.insert_at(5, 1).unwrap();
        assert_eq!(contents(&ring), vec![1, 2]);
        assert_eq!(ring.get_at(2), Ok(&1));
    }

    #[test]
    fn delete_sole_element_fully_clears() {
        let mut ring = ring_of(&[7]);

        assert_eq!(ring.delete_at(0), Ok(7));
        assert!(ring.is_empty());
        assert_eq!(ring.get_at(0), Err(SequenceError::EmptyContainer));

        // The ring is rebuildable after the clear.
        ring.append(8).unwrap();
        assert_eq!(ring.get_at(3), Ok(&8));
    }

    #[test]
    fn delete_head_repoints_closure() {
        let mut ring = ring_of(&[1, 2, 3]);

        assert_eq!(ring.delete_at(0), Ok(1));
        assert_eq!(contents(&ring), vec![2, 3]);
        assert_eq!(ring.get_at(2), Ok(&2));
    }

    #[test]
    fn delete_tail_repoints_tail() {
        let mut ring = ring_of(&[1, 2, 3]);

        assert_eq!(ring.delete_at(2), Ok(3));
        assert_eq!(contents(&ring), vec![1, 2]);
        // New tail still closes onto the head.
        assert_eq!(ring.get_at(2), Ok(&1));

        ring.append(4).unwrap();
        assert_eq!(contents(&ring), vec![1, 2, 4]);
    }

    #[test]
    fn delete_wraps_index() {
        let mut ring = ring_of(&[1, 2, 3]);

        // Index -2 wraps to position 1.
        assert_eq!(ring.delete_at(-2), Ok(2));
        assert_eq!(contents(&ring), vec![1, 3]);
    }

    #[test]
    fn set_wraps_index() {
        let mut ring = ring_of(&[1, 2, 3]);

        ring.set_at(-1, 9).unwrap();
        assert_eq!(contents(&ring), vec![1, 2, 9]);
        ring.set_at(3, 8).unwrap();
        assert_eq!(contents(&ring), vec![8, 2, 9]);
    }

    #[test]
    fn iter_stops_at_wrap_point() {
        let ring = ring_of(&[1, 2, 3]);

        let mut iter = ring.iter();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn clear_releases_the_ring() {
        let mut ring = ring_of(&[1, 2, 3]);

        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.get_at(0), Err(SequenceError::EmptyContainer));
        // The arena itself was released, not just emptied.
        assert_eq!(ring.nodes.capacity(), 0);

        ring.append_all(vec![4, 5]).unwrap();
        assert_eq!(contents(&ring), vec![4, 5]);
    }
}
