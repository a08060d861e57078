//! Bounded queues for concurrent producers and consumers, generic over the
//! storage discipline backing them.

#[macro_use]
extern crate tracing;

mod queue;

pub use crate::queue::api::*;

/// Error types
pub mod error {
    pub use crate::queue::error::*;
}
