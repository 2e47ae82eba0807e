use ordered_float::OrderedFloat;
use std::collections::BinaryHeap;

/// Keeps the `k` smallest `(distance, index)` pairs offered to it.
///
/// A max-heap on distance: the root is the worst candidate held, and is
/// evicted when a strictly closer one arrives at capacity. Created per query.
pub struct BoundedTopK {
    capacity: usize,
    heap: BinaryHeap<(OrderedFloat<f64>, usize)>,
}

impl BoundedTopK {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        BoundedTopK {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Returns `true` if the candidate was kept.
    pub fn offer(&mut self, distance: f64, index: usize) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.heap.len() < self.capacity {
            self.heap.push((OrderedFloat(distance), index));
            return true;
        }
        if distance < self.worst() {
            self.heap.pop();
            self.heap.push((OrderedFloat(distance), index));
            return true;
        }
        false
    }

    /// Largest distance held, or infinity while not yet full.
    #[must_use]
    pub fn worst(&self) -> f64 {
        if self.heap.len() < self.capacity {
            return f64::INFINITY;
        }
        self.heap.peek().map_or(f64::INFINITY, |(distance, _)| distance.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Empties the structure, returning its entries in heap order.
    pub fn drain(&mut self) -> Vec<(f64, usize)> {
        self.heap
            .drain()
            .map(|(distance, index)| (distance.0, index))
            .collect()
    }

    /// Entries by ascending distance, ties by ascending index.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<(f64, usize)> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|(distance, index)| (distance.0, index))
            .collect()
    }

    #[must_use]
    pub fn into_sorted_indices(self) -> Vec<usize> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|(_, index)| index)
            .collect()
    }
}
