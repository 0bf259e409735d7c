//! Rolling delta window for stability detection
//!
//! The window keeps the last `capacity` delta maps in a FIFO queue together
//! with their running sum, so each step costs O(size of one delta) instead
//! of re-summing the whole window.
//!
//! The driving discipline is queue, evaluate, age:
//!
//! ```text
//! On each record r:
//!   W.push(r.deltas)        // queue and add into the rolling sum
//!   if |W| < capacity:      // not enough history yet
//!     return false
//!   ok = test(W.rolling)    // evaluate over exactly `capacity` records
//!   W.age()                 // drop the oldest, subtract it back out
//!   return ok
//! ```
//!
//! Alongside the sum the window tracks a running molecule count that starts
//! at the initial population size and absorbs every pushed delta. It is
//! never reset by aging.

use std::collections::VecDeque;
use stoch_core::{DeltaMap, HashableMolecule};

/// Fixed-size FIFO of delta maps with a running aggregate
#[derive(Debug, Clone)]
pub struct DeltaWindow<M: HashableMolecule> {
    /// Number of deltas the window holds when full
    capacity: usize,
    /// Queued deltas, oldest first
    queue: VecDeque<DeltaMap<M>>,
    /// Sum of every delta in `queue`
    rolling: DeltaMap<M>,
    /// Population size implied by the initial count and all pushed deltas
    molecule_count: i64,
}

impl<M: HashableMolecule> DeltaWindow<M> {
    /// Create a window of `capacity` deltas over a population of
    /// `molecule_count` molecules.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, molecule_count: i64) -> Self {
        assert!(capacity >= 1, "A delta window needs a length of at least one");
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity),
            rolling: DeltaMap::new(),
            molecule_count,
        }
    }

    /// Queue a new delta and fold it into the running totals
    pub fn push(&mut self, deltas: DeltaMap<M>) {
        self.rolling.merge(&deltas);
        self.molecule_count += deltas.net_change();
        self.queue.push_back(deltas);
        debug_assert!(self.queue.len() <= self.capacity);
    }

    /// Drop the oldest delta and subtract it from the rolling sum.
    ///
    /// The molecule count is left untouched.
    pub fn age(&mut self) -> Option<DeltaMap<M>> {
        let oldest = self.queue.pop_front()?;
        self.rolling.unmerge(&oldest);
        Some(oldest)
    }

    /// Whether the window holds exactly `capacity` deltas
    pub fn is_full(&self) -> bool {
        self.queue.len() == self.capacity
    }

    /// Sum of absolute values of the rolling sum
    pub fn deviation(&self) -> u64 {
        self.rolling.deviation()
    }

    /// Sum of all queued deltas
    pub fn rolling(&self) -> &DeltaMap<M> {
        &self.rolling
    }

    /// Running molecule count
    pub fn molecule_count(&self) -> i64 {
        self.molecule_count
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of queued deltas
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(entries: &[(i32, i64)]) -> DeltaMap<i32> {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_window_basic() {
        let mut window = DeltaWindow::new(3, 10);
        assert!(window.is_empty());

        window.push(delta(&[(1, -2), (2, 1)]));
        assert_eq!(window.len(), 1);
        assert!(!window.is_full());
        assert_eq!(window.molecule_count(), 9);
        assert_eq!(window.deviation(), 3);
    }

    #[test]
    fn test_window_fills_and_ages() {
        let mut window = DeltaWindow::new(2, 0);

        window.push(delta(&[(1, 1)]));
        window.push(delta(&[(2, 1)]));
        assert!(window.is_full());
        assert_eq!(window.deviation(), 2);

        let oldest = window.age().unwrap();
        assert_eq!(oldest.get(&1), 1);
        assert_eq!(window.len(), 1);
        assert_eq!(window.rolling().get(&1), 0);
        assert_eq!(window.deviation(), 1);

        // Aging never touches the running molecule count
        assert_eq!(window.molecule_count(), 2);
    }

    #[test]
    fn test_opposite_deltas_cancel() {
        let mut window = DeltaWindow::new(2, 5);

        window.push(delta(&[(0, 1), (1, -1)]));
        window.push(delta(&[(0, -1), (1, 1)]));

        assert!(window.is_full());
        assert_eq!(window.deviation(), 0);
        assert_eq!(window.molecule_count(), 5);
    }

    #[test]
    fn test_age_empty_window() {
        let mut window: DeltaWindow<i32> = DeltaWindow::new(1, 0);
        assert!(window.age().is_none());
    }

    #[test]
    #[should_panic(expected = "at least one")]
    fn test_zero_capacity_panics() {
        let _: DeltaWindow<i32> = DeltaWindow::new(0, 0);
    }
}
