// the synchronization core: one lock, two wait conditions, any storage.

use super::{
    api::BoundedQueue,
    error::{EmptyError, FullError},
    storage::Storage,
};
use std::{
    fmt::{self, Display, Formatter},
    sync::{Condvar, Mutex},
};

/// Bounded queue built from a lock and two wait conditions around a
/// [`Storage`]
///
/// The one synchronization protocol in this crate, shared by every
/// lock-backed queue: the storage differs per backend, the locking never
/// does. Every operation takes the lock before touching the storage and
/// releases it on every exit path, so no mutation is ever observed partially
/// applied and the queue's length can never disagree with the storage's.
///
/// Blocked operations park on a condition and recheck their predicate in a
/// loop after every wakeup. Each successful insertion signals one blocked
/// get and each successful removal signals one blocked put--one new element
/// or freed slot can satisfy at most one waiter, so waking exactly one is
/// sufficient and is the intended minimal-wakeup design.
///
/// Construct through the factory functions in this crate, or through
/// [`SyncQueue::new`] to inject a custom storage.
pub struct SyncQueue<S> {
    // the sole arbiter of mutation: every touch of the storage happens with
    // this held, and it is never held across a park.
    lockable: Mutex<S>,
    // waited on by puts that found the storage at capacity; signaled once per
    // successful removal.
    room: Condvar,
    // waited on by gets that found the storage empty; signaled once per
    // successful insertion.
    data: Condvar,
}

impl<S: Storage> SyncQueue<S> {
    /// Wrap a storage in the synchronization protocol.
    pub fn new(storage: S) -> Self {
        SyncQueue {
            lockable: Mutex::new(storage),
            room: Condvar::new(),
            data: Condvar::new(),
        }
    }
}

impl<S: Storage + Send> BoundedQueue<S::Item> for SyncQueue<S> {
    fn put(&self, value: S::Item) {
        let mut storage = self.lockable.lock().unwrap();
        if storage.len() == storage.capacity() {
            trace!("queue full, put parking");
        }
        // recheck after every wakeup: the wakeup may be spurious, and a
        // racing put may have taken the freed slot first.
        while storage.len() == storage.capacity() {
            storage = self.room.wait(storage).unwrap();
        }
        storage
            .push(value)
            .ok()
            .expect("push rejected below capacity (internal bug)");
        self.data.notify_one();
    }

    fn try_put(&self, value: S::Item) -> Result<(), FullError<S::Item>> {
        let mut storage = self.lockable.lock().unwrap();
        // the storage enforces the bound itself: a saturated push hands the
        // value back without mutating anything.
        storage.push(value)?;
        self.data.notify_one();
        Ok(())
    }

    fn get(&self) -> S::Item {
        let mut storage = self.lockable.lock().unwrap();
        if storage.len() == 0 {
            trace!("queue empty, get parking");
        }
        while storage.len() == 0 {
            storage = self.data.wait(storage).unwrap();
        }
        let value = storage
            .pop()
            .ok()
            .expect("pop failed above zero length (internal bug)");
        self.room.notify_one();
        value
    }

    fn try_get(&self) -> Result<S::Item, EmptyError> {
        let mut storage = self.lockable.lock().unwrap();
        let value = storage.pop()?;
        self.room.notify_one();
        Ok(value)
    }

    fn len(&self) -> usize {
        self.lockable.lock().unwrap().len()
    }

    fn capacity(&self) -> usize {
        self.lockable.lock().unwrap().capacity()
    }

    fn close(&self) {
        // nothing here outlives the queue: the lock and conditions are
        // per-instance and go away with it.
        trace!("close on a lock-backed queue is a no-op");
    }
}

impl<S: Storage> Display for SyncQueue<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let storage = self.lockable.lock().unwrap();
        write!(f, "{} len:{} cap:{}", storage.label(), storage.len(), storage.capacity())
    }
}
