// queue error types.

use std::fmt::{self, Debug, Formatter};
use thiserror::Error;

/// Error for trying to remove from a queue which currently holds no elements
///
/// An expected outcome of the non-blocking removal operations, not a failure:
/// callers branch on it as ordinary control flow (retry, back off, or fall
/// back to a blocking get). The blocking operations never surface it.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[error("queue is empty")]
pub struct EmptyError;

/// Error for trying to insert into a queue which currently has no room
///
/// Carries the rejected value back out, so a failed non-blocking insert never
/// costs the caller ownership of the element. Like [`EmptyError`], this is an
/// expected outcome of the non-blocking operations; the blocking operations
/// never surface it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FullError<T> {
    /// The value that could not be enqueued
    pub value: T,
}

impl<T> fmt::Display for FullError<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("queue is full")
    }
}

// Error requires Debug on Self, and Debug here requires T: Debug, so the impl
// is gated rather than unconditional.
impl<T: Debug> std::error::Error for FullError<T> {}
