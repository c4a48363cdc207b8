//! Forward-only linked list.

use core::fmt;

use slab::Slab;

use crate::error::SequenceError;
use crate::node::{NONE, Node};
use crate::sequence::{Sequence, checked_index};

/// A singly linked list with a cached tail.
///
/// Nodes live in an arena owned by the list; `append` is O(1) through the
/// tail, every index operation walks from the head and costs O(index).
/// Unlike the array, `insert_at` accepts only `[0, size)`; appending at
/// the end goes through `append`.
///
/// # Example
///
/// ```
/// use lineup_collections::{Sequence, SinglyLinkedList};
///
/// let mut list = SinglyLinkedList::new();
/// list.append("b").unwrap();
/// list.insert_at(0, "a").unwrap();
///
/// assert_eq!(list.get_at(0), Ok(&"a"));
/// assert_eq!(list.get_at(1), Ok(&"b"));
/// ```
pub struct SinglyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
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

    /// Returns an iterator over the elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    /// Walks to the node at `index`. Caller guarantees `index < len`.
    fn node_key(&self, index: usize) -> usize {
        let mut key = self.head;
        for _ in 0..index {
            key = self.nodes[key].next;
        }
        key
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn append(&mut self, element: T) -> Result<(), SequenceError> {
        let key = self.nodes.insert(Node::new(element));
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
            let key = self.nodes.insert(Node {
                element,
                next: self.head,
                prev: NONE,
            });
            self.head = key;
        } else {
            let before = self.node_key(index - 1);
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

        let node = if index == 0 {
            let node = self.nodes.remove(self.head);
            self.head = node.next;
            if self.head == NONE {
                self.tail = NONE;
            }
            node
        } else {
            let before = self.node_key(index - 1);
            let key = self.nodes[before].next;
            let node = self.nodes.remove(key);
            self.nodes[before].next = node.next;
            if key == self.tail {
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

    fn clear(&mut self) {
        // A fresh arena releases the node storage, not just the entries.
        self.nodes = Slab::new();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over references to the list's elements.
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NONE {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        Some(&node.element)
    }
}
