//! Value scoring for payoff mode.

use mixpath_kernel::catalog::{BaseProduct, PriceTables};
use mixpath_kernel::payoff::PayoffEvaluator;

use crate::node::SearchState;

/// Trait for state scoring.
///
/// Higher is better. Must be deterministic: same `(base, state)` → same score.
pub trait ValueScorer: Send + Sync {
    fn score(&self, base: &BaseProduct, state: &SearchState) -> f64;
}

/// Default scorer: profit under a set of price tables.
#[derive(Debug, Clone, Copy)]
pub struct PayoffScorer<'a> {
    evaluator: PayoffEvaluator<'a>,
}

impl<'a> PayoffScorer<'a> {
    #[must_use]
    pub fn new(tables: &'a PriceTables) -> Self {
        Self {
            evaluator: PayoffEvaluator::new(tables),
        }
    }
}

impl ValueScorer for PayoffScorer<'_> {
    fn score(&self, base: &BaseProduct, state: &SearchState) -> f64 {
        self.evaluator.profit(base, &state.path, &state.effects)
    }
}
