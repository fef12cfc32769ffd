//! Choosing one winner among per-base results.

use std::cmp::Ordering;

use mixpath_search::node::{PayoffResult, SolutionRecord};

/// Canonical goal-mode order: shorter path first, then base name, then the
/// path itself compared ingredient by ingredient.
#[must_use]
pub fn goal_order(a: &SolutionRecord, b: &SolutionRecord) -> Ordering {
    a.depth()
        .cmp(&b.depth())
        .then_with(|| a.base.cmp(&b.base))
        .then_with(|| a.path.cmp(&b.path))
}

/// The canonical winner among goal-mode solutions.
pub fn select_goal<'a, I>(candidates: I) -> Option<&'a SolutionRecord>
where
    I: IntoIterator<Item = &'a SolutionRecord>,
{
    candidates.into_iter().min_by(|a, b| goal_order(a, b))
}

/// Payoff-mode order: higher profit first, ties by base name then path.
/// A NaN profit ranks below every number.
#[must_use]
pub fn payoff_order(a: &PayoffResult, b: &PayoffResult) -> Ordering {
    a.profit
        .is_nan()
        .cmp(&b.profit.is_nan())
        .then_with(|| b.profit.total_cmp(&a.profit))
        .then_with(|| a.solution.base.cmp(&b.solution.base))
        .then_with(|| a.solution.path.cmp(&b.solution.path))
}

pub fn select_payoff<'a, I>(candidates: I) -> Option<&'a PayoffResult>
where
    I: IntoIterator<Item = &'a PayoffResult>,
{
    candidates.into_iter().min_by(|a, b| payoff_order(a, b))
}
