// exposed API of bounded queues

use super::error::{EmptyError, FullError};
use std::fmt;

pub use super::{
    channel::ChannelQueue,
    circular::CircularBuffer,
    heap::{MaxHeap, Prioritized},
    list::ListBuffer,
    ring::SlotRing,
    slice::SliceBuffer,
    storage::Storage,
    sync::SyncQueue,
};


// ==== the queue contract ====


/// Contract shared by every bounded queue in this crate
///
/// One logical queue is shared by reference across threads (wrap it in an
/// [`Arc`], or hand out borrows under a scope); instances are never cloned or
/// copied. All interaction happens through this surface--callers never see
/// the backing storage--and every implementation passes the same conformance
/// scenarios, so swapping one backend for another never touches call sites.
///
/// The [`Display`] requirement is the observability hook: the rendering names
/// the backend and reports the current length and the capacity.
///
/// [`Arc`]: std::sync::Arc
/// [`Display`]: std::fmt::Display
pub trait BoundedQueue<T>: fmt::Display + Send + Sync {
    /// Insert a value, blocking while the queue is full
    ///
    /// Parks the calling thread until room is available, inserts at the tail
    /// (or heap position), and wakes one blocked [`get`](Self::get). Never
    /// fails--but there is also no timeout, so a put against a full queue
    /// that no one ever drains parks forever. Cancellation, where needed,
    /// belongs to the caller.
    fn put(&self, value: T);

    /// Insert a value if there is room, without blocking
    ///
    /// On a full queue this returns [`FullError`] immediately--the rejected
    /// value rides back in the error and no state changes. An expected
    /// outcome rather than a failure; nothing is retried internally, so
    /// retry-with-backoff or falling back to [`put`](Self::put) is the
    /// caller's choice.
    fn try_put(&self, value: T) -> Result<(), FullError<T>>;

    /// Remove and return the next element, blocking while the queue is empty
    ///
    /// FIFO backends return the oldest element, the heap backends the
    /// maximum. Wakes one blocked [`put`](Self::put) on the way out.
    fn get(&self) -> T;

    /// Remove and return the next element if there is one, without blocking
    ///
    /// Returns [`EmptyError`] immediately on an empty queue; otherwise
    /// behaves like [`get`](Self::get).
    fn try_get(&self) -> Result<T, EmptyError>;

    /// Number of elements currently enqueued
    ///
    /// A snapshot taken under the queue's lock. Under concurrent mutation it
    /// may be stale the instant it returns; callers must not assume a
    /// subsequent operation sees the same value.
    fn len(&self) -> usize;

    /// Maximum number of elements the queue holds
    fn capacity(&self) -> usize;

    /// Release anything that would otherwise leak; producer-side, at most once
    ///
    /// A no-op for the lock-backed queues. For [`ChannelQueue`] it stops
    /// further puts while everything already enqueued stays retrievable.
    /// Closing twice, or putting after close, is a caller bug the queue does
    /// not absorb: both panic.
    fn close(&self);
}


// ==== per-backend factories ====


/// Create a bounded queue over a preallocated circular buffer
///
/// Panics if `capacity` is zero.
pub fn circular_backed<T: Send>(capacity: usize) -> SyncQueue<CircularBuffer<T>> {
    SyncQueue::new(CircularBuffer::new(capacity))
}

/// Create a bounded queue over a linked list
///
/// Panics if `capacity` is zero.
pub fn list_backed<T: Send>(capacity: usize) -> SyncQueue<ListBuffer<T>> {
    SyncQueue::new(ListBuffer::new(capacity))
}

/// Create a bounded queue over a fixed ring of linked slots
///
/// Panics if `capacity` is zero.
pub fn ring_backed<T: Send>(capacity: usize) -> SyncQueue<SlotRing<T>> {
    SyncQueue::new(SlotRing::new(capacity))
}

/// Create a bounded queue over a growable sequence
///
/// Panics if `capacity` is zero.
pub fn slice_backed<T: Send>(capacity: usize) -> SyncQueue<SliceBuffer<T>> {
    SyncQueue::new(SliceBuffer::new(capacity))
}

/// Create a bounded queue that drains naturally ordered payloads largest
/// first
///
/// Same synchronization core as the FIFO factories, handed a heap-ordered
/// storage: the payload's own [`Ord`] is the priority. Panics if `capacity`
/// is zero.
pub fn heap_backed<T: Ord + Send>(capacity: usize) -> SyncQueue<MaxHeap<T>> {
    SyncQueue::new(MaxHeap::new(capacity))
}

/// Create a bounded queue that drains by explicit priority key, highest
/// first
///
/// Elements are [`Prioritized`] pairs; among equal keys the drain order is
/// unspecified. Panics if `capacity` is zero.
pub fn priority_backed<T: Send>(capacity: usize) -> SyncQueue<MaxHeap<Prioritized<T>>> {
    SyncQueue::new(MaxHeap::new(capacity))
}

/// Create a bounded queue over an MPMC channel
///
/// Panics if `capacity` is zero.
pub fn channel_backed<T: Send>(capacity: usize) -> ChannelQueue<T> {
    ChannelQueue::new(capacity)
}


// ==== tests ====
