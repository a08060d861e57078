// max-heap storage and the keyed element type for priority queues.

use super::{
    error::{EmptyError, FullError},
    storage::Storage,
};
use std::{cmp::Ordering, collections::BinaryHeap};

/// Payload paired with an explicit priority key
///
/// Ordering considers only the key: elements with equal keys compare equal
/// regardless of payload, and the order equal-keyed elements come back out of
/// a queue in is unspecified. Higher keys drain first.
#[derive(Debug, Copy, Clone)]
pub struct Prioritized<T> {
    /// The payload; never inspected by the queue
    pub value: T,
    /// The priority key
    pub priority: i64,
}

impl<T> PartialEq for Prioritized<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<T> Eq for Prioritized<T> {}

impl<T> PartialOrd for Prioritized<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Prioritized<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

/// Heap-ordered storage: pops return the maximum element
///
/// The one storage in this crate that is not FIFO. Instantiated at
/// [`Prioritized<T>`] it pops by explicit key; instantiated at a payload with
/// its own [`Ord`] (integers, say) the payload is its own key.
pub struct MaxHeap<T> {
    heap: BinaryHeap<T>,
    capacity: usize,
}

impl<T: Ord> MaxHeap<T> {
    /// Construct empty with the given capacity.
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be positive");
        MaxHeap { heap: BinaryHeap::with_capacity(capacity), capacity }
    }
}

impl<T: Ord> Storage for MaxHeap<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn push(&mut self, elem: T) -> Result<(), FullError<T>> {
        if self.heap.len() == self.capacity {
            return Err(FullError { value: elem });
        }
        self.heap.push(elem);
        Ok(())
    }

    fn pop(&mut self) -> Result<T, EmptyError> {
        self.heap.pop().ok_or(EmptyError)
    }

    fn label(&self) -> &'static str {
        "heap"
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;
    use rand_pcg::Pcg32;

    fn new_rng() -> impl Rng {
        Pcg32::from_seed(0xa11ce5a11ce5a11ce5a11ce5a11ce5a1u128.to_le_bytes())
    }

    #[test]
    fn pops_maximum_first() {
        let mut rng = new_rng();
        let mut keys: Vec<i64> = (0..32).collect();
        keys.shuffle(&mut rng);

        let mut heap = MaxHeap::new(32);
        for &k in &keys {
            heap.push(k).unwrap();
        }
        let rejected = heap.push(999).unwrap_err();
        assert_eq!(rejected.value, 999);

        for expect in (0..32).rev() {
            assert_eq!(heap.pop().unwrap(), expect);
        }
        assert_eq!(heap.pop(), Err(EmptyError));
    }

    #[test]
    fn keyed_elements_drain_by_key() {
        let mut rng = new_rng();
        let mut keys: Vec<i64> = (0..16).collect();
        keys.shuffle(&mut rng);

        let mut heap = MaxHeap::new(16);
        for &k in &keys {
            heap.push(Prioritized { value: k * 10, priority: k }).unwrap();
        }
        for expect in (0..16).rev() {
            let item = heap.pop().unwrap();
            assert_eq!(item.priority, expect);
            assert_eq!(item.value, expect * 10);
        }
    }

    #[test]
    fn equal_keys_compare_equal() {
        let a = Prioritized { value: "a", priority: 3 };
        let b = Prioritized { value: "b", priority: 3 };
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a, b);
        assert!(Prioritized { value: "c", priority: 4 } > a);
    }
}
