// fixed circular buffer storage.

use super::{
    error::{EmptyError, FullError},
    storage::Storage,
};
use std::mem::MaybeUninit;

/// Fixed-capacity circular buffer
///
/// The whole allocation is made up front; pushes and pops move a window of
/// initialized slots through it with modular arithmetic, so neither operation
/// ever allocates or shifts elements.
pub struct CircularBuffer<T> {
    // memory layout:
    //
    // - a logical index (front is 0) exists if it's in [0, len)
    // - a logical index I lives at slot (start + I) % capacity
    // - slots are assumed to be initialized iff a logical index maps to them
    //
    // invariant: start < slots.len()
    start: usize,
    len: usize,
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> CircularBuffer<T> {
    /// Construct empty with the given capacity.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        CircularBuffer {
            start: 0,
            len: 0,
            slots: Box::new_uninit_slice(capacity),
        }
    }

    // convert from logical index to slot index. valid for idx <= len, where
    // idx == len is the slot the next push writes.
    fn slot_idx(&self, idx: usize) -> usize {
        debug_assert!(self.len <= self.slots.len(), "len > cap (internal bug)");
        debug_assert!(idx <= self.len, "logical index out of bounds (internal bug)");
        (self.start + idx) % self.slots.len()
    }
}

impl<T> Storage for CircularBuffer<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn push(&mut self, elem: T) -> Result<(), FullError<T>> {
        if self.len == self.slots.len() {
            return Err(FullError { value: elem });
        }
        let idx = self.slot_idx(self.len);
        self.slots[idx].write(elem);
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T, EmptyError> {
        if self.len == 0 {
            return Err(EmptyError);
        }
        // safety: len > 0, so logical index 0 maps to an initialized slot.
        // advancing start past it marks it uninitialized again.
        let elem = unsafe { self.slots[self.start].assume_init_read() };
        self.start = (self.start + 1) % self.slots.len();
        self.len -= 1;
        Ok(elem)
    }

    fn label(&self) -> &'static str {
        "circular"
    }
}

impl<T> Drop for CircularBuffer<T> {
    fn drop(&mut self) {
        // drop initialized elements
        for i in 0..self.len {
            let idx = (self.start + i) % self.slots.len();
            // safety: i < len, so the slot is initialized and about to be
            // forgotten along with the allocation.
            unsafe { self.slots[idx].assume_init_drop() };
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_pcg::Pcg32;
    use std::{
        collections::VecDeque,
        sync::{
            atomic::{AtomicUsize, Ordering::Relaxed},
            Arc,
        },
    };

    fn new_rng() -> impl Rng {
        Pcg32::from_seed(0xdeadbeefdeadbeefdeadbeefdeadbeefu128.to_le_bytes())
    }

    #[test]
    fn equivalent_to_vecdeque() {
        let mut rng = new_rng();
        for _ in 0..20 {
            let mut model = VecDeque::new();
            let mut buffer = CircularBuffer::new(64);
            for i in 0u32..10_000 {
                if rng.gen_ratio(52, 100) {
                    match buffer.push(i) {
                        Ok(()) => model.push_back(i),
                        Err(FullError { value }) => {
                            assert_eq!(value, i);
                            assert_eq!(model.len(), 64);
                        }
                    }
                } else {
                    assert_eq!(buffer.pop().ok(), model.pop_front());
                }
                assert_eq!(buffer.len(), model.len());
            }
        }
    }

    #[test]
    fn rejecting_push_changes_nothing() {
        let mut buffer = CircularBuffer::new(2);
        buffer.push(10).unwrap();
        buffer.push(11).unwrap();
        let rejected = buffer.push(12).unwrap_err();
        assert_eq!(rejected.value, 12);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.pop().unwrap(), 10);
        assert_eq!(buffer.pop().unwrap(), 11);
        assert_eq!(buffer.pop(), Err(EmptyError));
    }

    struct Tally(Arc<AtomicUsize>);

    impl Drop for Tally {
        fn drop(&mut self) {
            self.0.fetch_add(1, Relaxed);
        }
    }

    #[test]
    fn drops_buffered_elements() {
        let drops = Arc::new(AtomicUsize::new(0));
        let mut buffer = CircularBuffer::new(8);
        // walk the window off slot zero so the drop loop has to wrap
        for _ in 0..5 {
            buffer.push(Tally(Arc::clone(&drops))).ok().unwrap();
        }
        for _ in 0..3 {
            drop(buffer.pop().ok().unwrap());
        }
        for _ in 0..4 {
            buffer.push(Tally(Arc::clone(&drops))).ok().unwrap();
        }
        assert_eq!(drops.load(Relaxed), 3);
        drop(buffer);
        assert_eq!(drops.load(Relaxed), 9);
    }
}
