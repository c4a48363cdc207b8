//! Failure values shared by every container in the crate.

use core::fmt;

/// Error returned by the fallible operations of the [`Sequence`] contract.
///
/// Errors are always returned as values. No operation panics on contract
/// misuse, retries internally, or reports success alongside a failure.
///
/// [`Sequence`]: crate::Sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The index lies outside the structurally valid range for the
    /// operation and the container kind.
    ///
    /// The valid range differs per family: the array accepts `[0, size]`
    /// for insertion and `[0, size)` elsewhere, the linear linked lists
    /// accept `[0, size)` everywhere, and the circular list wraps indices
    /// instead of rejecting them.
    IndexOutOfRange {
        /// The rejected index, as passed by the caller.
        index: isize,
        /// Element count at the time of the call.
        len: usize,
    },
    /// The operation needs at least one element and the container has none.
    ///
    /// Reported by the circular list, whose modular index translation is
    /// undefined on an empty ring.
    EmptyContainer,
    /// Buffer growth or shrink could not allocate its replacement buffer.
    ///
    /// The container keeps its previous buffer untouched; the failed
    /// operation has no effect.
    CapacityError,
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::EmptyContainer => write!(f, "container is empty"),
            Self::CapacityError => write!(f, "capacity change failed"),
        }
    }
}

impl std::error::Error for SequenceError {}
