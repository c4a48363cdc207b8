//! Bidirectional linked list.
//!
//! Forward links are the ownership spine; back links exist for traversal
//! only. A spliced node carries both of its links before either neighbor
//! is repointed, so no operation leaves a half-linked pair observable.

use core::fmt;

use slab::Slab;

use crate::error::SequenceError;
use crate::node::{NONE, Node};
use crate::sequence::{Sequence, checked_index};

/// A doubly linked list with a cached tail.
///
/// Same operation set and costs as [`SinglyLinkedList`], with back links
/// maintained symmetrically on every insert and delete: whenever
/// `node.next` exists, `node.next.prev == node`. Index walks start from
/// whichever end is nearer.
///
/// The iterator is double ended, so the list can be traversed from the
/// tail with [`Iterator::rev`].
///
/// # Example
///
/// ```
/// use lineup_collections::{DoublyLinkedList, Sequence};
///
/// let mut list = DoublyLinkedList::new();
/// list.append_all(vec![1, 2, 3]).unwrap();
///
/// let backward: Vec<i32> = list.iter().rev().copied().collect();
/// assert_eq!(backward, vec![3, 2, 1]);
/// ```
///
/// [`SinglyLinkedList`]: crate::SinglyLinkedList
pub struct DoublyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
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

    /// Returns a double-ended iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
        }
    }

    /// Walks to the node at `index` from the nearer end. Caller
    /// guarantees `index < len`.
    fn node_key(&self, index: usize) -> usize {
        if index <= self.len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            key
        } else {
            let mut key = self.tail;
            for _ in 0..(self.len - 1 - index) {
                key = self.nodes[key].prev;
            }
            key
        }
    }
}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    fn append(&mut self, element: T) -> Result<(), SequenceError> {
        let key = self.nodes.insert(Node {
            element,
            next: NONE,
            prev: self.tail,
        });
        if self.tail == NONE {
            self.head = key;
        } else {
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
        let index = checked_index(index, self.len)?;

        if index == 0 {
            // The new node is fully linked before the old head is touched.
            let key = self.nodes.insert(Node {
                element,
                next: self.head,
                prev: NONE,
            });
            self.nodes[self.head].prev = key;
            self.head = key;
        } else {
            let at = self.node_key(index);
            let before = self.nodes[at].prev;
            let key = self.nodes.insert(Node {
                element,
                next: at,
                prev: before,
            });
            self.nodes[before].next = key;
            self.nodes[at].prev = key;
        }
        self.len += 1;
        Ok(())
    }

    fn set_at(&mut self, index: isize, element: T) -> Result<(), SequenceError> {
        let index = checked_index(index, self.len)?;
        let key = self.node_key(index);
        self.nodes[key].element = element;
        Ok(())
    }

    fn get_at(&self, index: isize) -> Result<&T, SequenceError> {
        let index = checked_index(index, self.len)?;
        Ok(&self.nodes[self.node_key(index)].element)
    }

    fn delete_at(&mut self, index: isize) -> Result<T, SequenceError> {
        let index = checked_index(index, self.len)?;

        let key = self.node_key(index);
        let node = self.nodes.remove(key);

        // Deleting the sole element resets both ends through the NONE arms.
        if node.prev == NONE {
            self.head = node.next;
        } else {
            self.nodes[node.prev].next = node.next;
        }
        if node.next == NONE {
            self.tail = node.prev;
        } else {
            self.nodes[node.next].prev = node.prev;
        }

        self.len -= 1;
        Ok(node.element)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        // A fresh arena releases the node storage, not just the entries.
        self.nodes = Slab::new();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Double-ended iterator over references to the list's elements.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == NONE {
            return None;
        }
        let node = &self.nodes[self.front];

        // The ends met; this is the last element from either direction.
        if self.front == self.back {
            self.front = NONE;
            self.back = NONE;
        } else {
            self.front = node.next;
        }
        Some(&node.element)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back == NONE {
            return None;
        }
        let node = &self.nodes[self.back];

        if self.front == self.back {
            self.front = NONE;
            self.back = NONE;
        } else {
            self.back = node.prev;
        }
        Some(&node.element)
    }
}
