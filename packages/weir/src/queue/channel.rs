// the channel-backed queue: same contract, no hand-rolled lock on the data
// path.

use super::{
    api::BoundedQueue,
    error::{EmptyError, FullError},
};
use std::{
    fmt::{self, Display, Formatter},
    sync::Mutex,
};

/// Bounded queue over a [`flume`] MPMC channel
///
/// The channel is the sole piece of state: blocking puts and gets map to
/// blocking sends and receives, the non-blocking forms to their `try_`
/// counterparts, and the channel's own scheduling delivers the blocking and
/// wakeup guarantees [`SyncQueue`] assembles by hand from a lock and two
/// conditions. Both satisfy the same contract and pass the same conformance
/// scenarios; the contract, not the locking strategy, is the point.
///
/// Unlike the lock-backed queues, [`close`](BoundedQueue::close) here has
/// work to do: it drops the producer half so the channel stops accepting
/// sends, while everything already buffered stays retrievable. Close is a
/// producer-side call, made at most once.
///
/// [`SyncQueue`]: super::sync::SyncQueue
pub struct ChannelQueue<T> {
    // taken by close(). a put in flight holds its own clone, so closing never
    // disturbs an already-blocked send.
    sender: Mutex<Option<flume::Sender<T>>>,
    receiver: flume::Receiver<T>,
    capacity: usize,
}

impl<T> ChannelQueue<T> {
    /// Construct with the given capacity.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        let (sender, receiver) = flume::bounded(capacity);
        ChannelQueue { sender: Mutex::new(Some(sender)), receiver, capacity }
    }

    // clone the producer half out from under the lock, so the lock is never
    // held across a blocking send.
    fn sender(&self) -> flume::Sender<T> {
        self.sender
            .lock()
            .unwrap()
            .clone()
            .expect("put on a closed queue")
    }
}

impl<T: Send> BoundedQueue<T> for ChannelQueue<T> {
    fn put(&self, value: T) {
        if self.sender().send(value).is_err() {
            // the queue owns the receiver for its whole lifetime
            unreachable!("receiver half dropped (internal bug)");
        }
    }

    fn try_put(&self, value: T) -> Result<(), FullError<T>> {
        match self.sender().try_send(value) {
            Ok(()) => Ok(()),
            Err(flume::TrySendError::Full(value)) => Err(FullError { value }),
            Err(flume::TrySendError::Disconnected(_)) => {
                unreachable!("receiver half dropped (internal bug)")
            }
        }
    }

    fn get(&self) -> T {
        // a closed channel keeps delivering its buffered elements; only once
        // those are drained does recv report disconnection.
        self.receiver.recv().expect("get on a closed and drained queue")
    }

    fn try_get(&self) -> Result<T, EmptyError> {
        // a closed-and-drained channel reads the same as an empty one.
        self.receiver.try_recv().map_err(|_| EmptyError)
    }

    fn len(&self) -> usize {
        self.receiver.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn close(&self) {
        trace!("closing channel-backed queue");
        let sender = self.sender.lock().unwrap().take();
        assert!(sender.is_some(), "queue closed twice");
        // dropping the producer half is the close; buffered elements stay
        // retrievable through the receiver.
    }
}

impl<T> Display for ChannelQueue<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "channel len:{} cap:{}", self.receiver.len(), self.capacity)
    }
}
