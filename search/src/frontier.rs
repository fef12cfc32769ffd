//! Breadth-first frontier with exact-state deduplication.
//!
//! A FIFO queue guarantees that the first time a signature is discovered it
//! was reached by a shortest ingredient path. The visited set is keyed by the
//! canonical `EffectSet` alone (path and depth are ignored), so later, longer
//! routes to the same effects are suppressed.

use std::collections::{BTreeSet, VecDeque};

use mixpath_kernel::effects::EffectSet;

use crate::node::SearchState;

/// FIFO frontier manager.
///
/// Maintains:
/// - A `VecDeque` of states in discovery order
/// - A `BTreeSet<EffectSet>` of every signature ever enqueued
pub struct BreadthFirstFrontier {
    queue: VecDeque<SearchState>,
    visited: BTreeSet<EffectSet>,
    high_water: u64,
}

impl BreadthFirstFrontier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            visited: BTreeSet::new(),
            high_water: 0,
        }
    }

    /// Enqueue a state and mark its signature as visited.
    ///
    /// Returns `false` if the signature was already visited (state not added).
    pub fn push(&mut self, state: SearchState) -> bool {
        if self.visited.contains(&state.effects) {
            return false;
        }
        self.visited.insert(state.effects.clone());
        self.queue.push_back(state);
        let size = self.queue.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
        true
    }

    /// Dequeue the oldest state.
    #[must_use]
    pub fn pop(&mut self) -> Option<SearchState> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn is_visited(&self, signature: &EffectSet) -> bool {
        self.visited.contains(signature)
    }

    /// Number of distinct signatures seen so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of queue length.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

impl Default for BreadthFirstFrontier {
    fn default() -> Self {
        Self::new()
    }
}
