//! Generic sequential containers behind a single contract.
//!
//! Four structurally different containers expose one operation set, the
//! [`Sequence`] trait: a capacity-managed contiguous buffer and three
//! linked-node structures. Callers program against the contract and pick
//! a representation by cost profile, not by API.
//!
//! | Container | Representation | Index semantics |
//! |-----------|----------------|-----------------|
//! | [`DynamicArray`] | contiguous buffer, grow `2c + 1`, shrink `max(c/2, size)` | bounds checked |
//! | [`SinglyLinkedList`] | forward chain, cached tail | bounds checked |
//! | [`DoublyLinkedList`] | bidirectional chain | bounds checked |
//! | [`CircularLinkedList`] | ring, `tail.next == head` | wrapped by true modulo |
//!
//! Every fallible operation returns a [`SequenceError`] value; nothing
//! panics on contract misuse and no error is reported alongside a usable
//! result.
//!
//! The linked containers keep their nodes in a `slab::Slab` arena and
//! link them by key, so the circular closure is a lookup, not an owning
//! reference, and dropping a container never walks the ring.
//!
//! # Quick Start
//!
//! ```
//! use lineup_collections::{DynamicArray, Sequence, SequenceError};
//!
//! let mut list = DynamicArray::new();
//! list.append(1).unwrap();
//! list.append(3).unwrap();
//! list.insert_at(1, 2).unwrap();
//!
//! assert_eq!(list.size(), 3);
//! assert_eq!(list.get_at(1), Ok(&2));
//! assert_eq!(
//!     list.get_at(7),
//!     Err(SequenceError::IndexOutOfRange { index: 7, len: 3 })
//! );
//! ```
//!
//! # Polymorphic use
//!
//! ```
//! use lineup_collections::{CircularLinkedList, DynamicArray, Sequence};
//!
//! let mut containers: Vec<Box<dyn Sequence<u32>>> = vec![
//!     Box::new(DynamicArray::new()),
//!     Box::new(CircularLinkedList::new()),
//! ];
//!
//! for seq in &mut containers {
//!     seq.append(5).unwrap();
//!     assert_eq!(seq.get_at(0), Ok(&5));
//! }
//! ```

#![warn(missing_docs)]

pub mod array;
pub mod circular;
pub mod doubly;
pub mod error;
mod node;
pub mod sequence;
pub mod singly;

pub use array::DynamicArray;
pub use circular::CircularLinkedList;
pub use doubly::DoublyLinkedList;
pub use error::SequenceError;
pub use sequence::Sequence;
pub use singly::SinglyLinkedList;
