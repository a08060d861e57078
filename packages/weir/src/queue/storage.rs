// the storage contract the synchronization core wraps.

use super::error::{EmptyError, FullError};

/// Non-synchronized sequence storage a bounded queue can be built over
///
/// Implementations hold the buffered elements and enforce the configured
/// capacity, nothing more: they never block and never synchronize. The
/// wrapping queue serializes every access behind its own lock, and the
/// storage trusts it to do so--a storage observed from two threads at once
/// is a bug in the wrapper, not something the storage detects.
///
/// The FIFO implementations pop in insertion order. An ordering
/// implementation may pop by some other discipline instead ([`MaxHeap`] pops
/// the maximum element); the wrapping queue is agnostic either way.
///
/// [`MaxHeap`]: super::heap::MaxHeap
pub trait Storage {
    /// Type of the buffered elements
    type Item;

    /// Number of elements currently held
    fn len(&self) -> usize;

    /// Configured maximum number of elements
    ///
    /// This is the constructed bound, which the underlying allocation is not
    /// required to reflect: a growable storage still reports the bound it was
    /// asked to enforce.
    fn capacity(&self) -> usize;

    /// Insert an element, or hand it back if there is no room
    ///
    /// A rejecting push must not change any state.
    fn push(&mut self, elem: Self::Item) -> Result<(), FullError<Self::Item>>;

    /// Remove and return the next element per the storage's discipline
    fn pop(&mut self) -> Result<Self::Item, EmptyError>;

    /// Short name of the storage discipline, for summaries
    fn label(&self) -> &'static str;
}
