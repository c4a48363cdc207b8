//! Link-chain unit shared by the three linked containers.
//!
//! Nodes live in a `slab::Slab` arena owned by their container; neighbor
//! links are plain slab keys with [`NONE`] as the null value. The container
//! holds the only ownership root, so the circular variant's tail-to-head
//! link can never form an ownership cycle.

/// Null link. A live slab can never hand out `usize::MAX` as a key.
pub(crate) const NONE: usize = usize::MAX;

/// One element and its neighbor links.
///
/// The back link is maintained only by the doubly linked list and stays
/// [`NONE`] in the other variants.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: usize,
    pub(crate) prev: usize,
}

impl<T> Node<T> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(element: T) -> Self {
        Self {
            element,
            next: NONE,
            prev: NONE,
        }
    }
}
