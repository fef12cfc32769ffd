//! Per-search counters and the termination reason.

use serde::Serialize;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Goal mode found a state satisfying the desired effects.
    GoalReached,
    /// Every reachable state within the depth cap was processed.
    FrontierExhausted,
    /// The observer asked the search to stop.
    Cancelled,
}

/// Counters collected over one base's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States dequeued and processed.
    pub expansions: u64,
    /// Child effect sets computed (one per ingredient per expanded state).
    pub candidates_generated: u64,
    /// Children discarded because their signature was already visited.
    pub duplicates_suppressed: u64,
    /// States at the depth cap, processed but not expanded.
    pub depth_capped: u64,
    /// Largest frontier size.
    pub frontier_high_water: u64,
    /// Deepest processed state.
    pub max_depth_reached: u32,
    pub termination: TerminationReason,
}

impl SearchStats {
    pub(crate) fn new() -> Self {
        Self {
            expansions: 0,
            candidates_generated: 0,
            duplicates_suppressed: 0,
            depth_capped: 0,
            frontier_high_water: 0,
            max_depth_reached: 0,
            termination: TerminationReason::FrontierExhausted,
        }
    }
}
