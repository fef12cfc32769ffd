//! Cross-worker cancellation for goal mode.
//!
//! The only state workers share besides the progress channel. Payoff mode
//! never records a solution, so its workers always run to exhaustion.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

use crate::config::TieBreak;

const NO_WINNER: usize = usize::MAX;

/// Shared stop signal, consulted by every worker before each dequeued state.
///
/// - [`TieBreak::Canonical`]: publishes the shallowest solution depth seen.
///   A worker keeps processing states at or above that depth, so every base
///   with an equally short solution still finds it.
/// - [`TieBreak::FirstFound`]: the first recorded solution stops everyone.
#[derive(Debug)]
pub struct CancelState {
    tie_break: TieBreak,
    stopped: AtomicBool,
    best_depth: AtomicU32,
    first: AtomicUsize,
}

impl CancelState {
    #[must_use]
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            tie_break,
            stopped: AtomicBool::new(false),
            best_depth: AtomicU32::new(u32::MAX),
            first: AtomicUsize::new(NO_WINNER),
        }
    }

    /// Record that job `index` found a solution at `depth`.
    pub fn record_solution(&self, index: usize, depth: u32) {
        let _ = self
            .first
            .compare_exchange(NO_WINNER, index, Ordering::AcqRel, Ordering::Acquire);
        match self.tie_break {
            TieBreak::Canonical => {
                self.best_depth.fetch_min(depth, Ordering::AcqRel);
            }
            TieBreak::FirstFound => self.stopped.store(true, Ordering::Release),
        }
    }

    /// Whether a worker should process a state at `depth`.
    #[must_use]
    pub fn keep_going(&self, depth: u32) -> bool {
        !self.is_stopped() && depth <= self.best_depth.load(Ordering::Acquire)
    }

    /// Whether workers should stop taking new jobs.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Job index of the first recorded solution.
    #[must_use]
    pub fn first_found(&self) -> Option<usize> {
        match self.first.load(Ordering::Acquire) {
            NO_WINNER => None,
            index => Some(index),
        }
    }

    #[must_use]
    pub fn best_depth(&self) -> Option<u32> {
        match self.best_depth.load(Ordering::Acquire) {
            u32::MAX => None,
            depth => Some(depth),
        }
    }
}
