//! Progress plumbing between workers and the coordinator.
//!
//! Workers push expansion counts into a bounded channel without ever
//! blocking mid-search: when the channel is full the count is held back and
//! merged into the next message. Only the final flush after a search uses a
//! blocking send, so no expansion goes unreported.

use std::cell::Cell;
use std::sync::mpsc::{SyncSender, TrySendError};

use serde::Serialize;

use mixpath_search::contract::SearchObserver;

use crate::cancel::CancelState;

/// Upper bound on states a dispatch could dequeue:
/// `base_count × Σ_{d=1..max_depth} rule_count^d`, saturating at `u64::MAX`.
///
/// Deduplication makes the real count far smaller, so this only scales a
/// progress display.
#[must_use]
pub fn estimate_work(rule_count: usize, max_depth: u32, base_count: usize) -> u64 {
    let rules = u128::try_from(rule_count).unwrap_or(u128::MAX);
    let bases = u128::try_from(base_count).unwrap_or(u128::MAX);
    let per_base = match rules {
        0 => 0,
        1 => u128::from(max_depth),
        _ => {
            let mut total: u128 = 0;
            let mut term: u128 = 1;
            for _ in 0..max_depth {
                term = term.saturating_mul(rules);
                total = total.saturating_add(term);
                if total >= u128::from(u64::MAX) {
                    break;
                }
            }
            total
        }
    };
    u64::try_from(per_base.saturating_mul(bases)).unwrap_or(u64::MAX)
}

/// What the caller's progress callback receives.
///
/// `completed` never decreases over one dispatch. It may stay far below
/// `estimate`; it is not a completion signal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub completed: u64,
    pub estimate: u64,
}

impl ProgressSnapshot {
    /// `completed / estimate`, clamped to `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.estimate == 0 {
            return 1.0;
        }
        (self.completed as f64 / self.estimate as f64).min(1.0)
    }
}

/// Worker-side observer: forwards progress and answers cancellation probes.
pub(crate) struct ProgressReporter<'a> {
    tx: SyncSender<u64>,
    pending: Cell<u64>,
    cancel: &'a CancelState,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(tx: SyncSender<u64>, cancel: &'a CancelState) -> Self {
        Self {
            tx,
            pending: Cell::new(0),
            cancel,
        }
    }

    /// Deliver whatever is still held back.
    ///
    /// Blocks until the coordinator drains a slot or drops the receiver.
    pub(crate) fn finish(self) {
        let pending = self.pending.get();
        if pending > 0 {
            // Disconnected only if the coordinator is gone; nothing to report to.
            let _ = self.tx.send(pending);
        }
    }
}

impl SearchObserver for ProgressReporter<'_> {
    fn on_progress(&self, expansions: u64) {
        let pending = self.pending.get().saturating_add(expansions);
        match self.tx.try_send(pending) {
            Ok(()) | Err(TrySendError::Disconnected(_)) => self.pending.set(0),
            Err(TrySendError::Full(_)) => self.pending.set(pending),
        }
    }

    fn keep_going(&self, depth: u32) -> bool {
        self.cancel.keep_going(depth)
    }
}
