//! Search entry points and the shared breadth-first traversal.
//!
//! Both modes run the same skeleton: pop the oldest state, let the mode
//! inspect it, and unless the depth cap is reached, enqueue one child per
//! ingredient whose resulting effect set has not been seen before.
//!
//! - **Goal mode** stops at the first state whose effects are a superset of
//!   the desired set. FIFO order makes that state's path a shortest one.
//! - **Payoff mode** never stops early; it scores every processed state
//!   (including those at the cap) and keeps the best.

use mixpath_kernel::catalog::{BaseProduct, RuleCatalog};
use mixpath_kernel::effects::EffectSet;
use mixpath_kernel::operators::apply::apply;
use tracing::debug;

use crate::contract::SearchObserver;
use crate::error::SearchError;
use crate::frontier::BreadthFirstFrontier;
use crate::node::{PayoffResult, SearchState, SolutionRecord};
use crate::policy::SearchPolicy;
use crate::scorer::ValueScorer;
use crate::stats::{SearchStats, TerminationReason};

/// Result of a goal-mode search over one base.
#[derive(Debug, Clone)]
pub struct GoalSearchResult {
    /// A shortest path to the desired effects, if one exists within the cap.
    pub solution: Option<SolutionRecord>,
    pub stats: SearchStats,
}

impl GoalSearchResult {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.stats.termination == TerminationReason::GoalReached
    }
}

/// Result of a payoff-mode search over one base.
#[derive(Debug, Clone)]
pub struct PayoffSearchResult {
    /// The highest-scoring processed state. `None` only if cancelled before
    /// the start state was processed.
    pub best: Option<PayoffResult>,
    pub stats: SearchStats,
}

/// What the mode wants after inspecting a dequeued state.
enum Visit {
    Continue,
    Stop,
}

/// Find a shortest ingredient path from `base` to a superset of `desired`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for pre-flight policy failures.
pub fn search_goal(
    base: &BaseProduct,
    rules: &RuleCatalog,
    desired: &EffectSet,
    policy: &SearchPolicy,
    observer: &dyn SearchObserver,
) -> Result<GoalSearchResult, SearchError> {
    policy.validate()?;
    debug!(base = %base.name, max_depth = policy.max_depth, desired = %desired, "goal search started");

    let (stopped_at, stats) = traverse(base, rules, policy, observer, |state| {
        if state.effects.is_superset_of(desired) {
            Visit::Stop
        } else {
            Visit::Continue
        }
    });

    debug!(
        base = %base.name,
        expansions = stats.expansions,
        termination = ?stats.termination,
        "goal search finished"
    );
    Ok(GoalSearchResult {
        solution: stopped_at.map(SearchState::into_solution),
        stats,
    })
}

/// Find the highest-scoring state reachable from `base` within the cap.
///
/// Ties keep the first state processed, i.e. the one with the shortest path.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for pre-flight policy failures.
pub fn search_payoff(
    base: &BaseProduct,
    rules: &RuleCatalog,
    scorer: &dyn ValueScorer,
    policy: &SearchPolicy,
    observer: &dyn SearchObserver,
) -> Result<PayoffSearchResult, SearchError> {
    policy.validate()?;
    debug!(base = %base.name, max_depth = policy.max_depth, "payoff search started");

    let mut best: Option<PayoffResult> = None;
    let (_, stats) = traverse(base, rules, policy, observer, |state| {
        let profit = scorer.score(base, state);
        let improves = match &best {
            Some(current) => profit > current.profit,
            None => true,
        };
        if improves {
            best = Some(PayoffResult {
                solution: state.clone().into_solution(),
                profit,
            });
        }
        Visit::Continue
    });

    debug!(
        base = %base.name,
        expansions = stats.expansions,
        best_profit = best.as_ref().map(|b| b.profit),
        termination = ?stats.termination,
        "payoff search finished"
    );
    Ok(PayoffSearchResult { best, stats })
}

/// Breadth-first traversal from `base`'s start state.
///
/// Returns the state `visit` stopped on, if any, plus the counters.
fn traverse<F>(
    base: &BaseProduct,
    rules: &RuleCatalog,
    policy: &SearchPolicy,
    observer: &dyn SearchObserver,
    mut visit: F,
) -> (Option<SearchState>, SearchStats)
where
    F: FnMut(&SearchState) -> Visit,
{
    let mut frontier = BreadthFirstFrontier::new();
    let mut stats = SearchStats::new();
    let mut unreported: u64 = 0;

    frontier.push(SearchState::root(base));

    let stopped_at = loop {
        let Some(current) = frontier.pop() else {
            stats.termination = TerminationReason::FrontierExhausted;
            break None;
        };

        let depth = current.depth();
        if !observer.keep_going(depth) {
            stats.termination = TerminationReason::Cancelled;
            break None;
        }

        stats.expansions += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(depth);
        unreported += 1;
        if unreported >= policy.report_interval {
            observer.on_progress(unreported);
            unreported = 0;
        }

        if let Visit::Stop = visit(&current) {
            stats.termination = TerminationReason::GoalReached;
            break Some(current);
        }

        if depth >= policy.max_depth {
            stats.depth_capped += 1;
            continue;
        }

        for (ingredient, rule) in rules.iter() {
            let effects = apply(&current.effects, rule);
            stats.candidates_generated += 1;
            if frontier.is_visited(&effects) {
                stats.duplicates_suppressed += 1;
                continue;
            }
            frontier.push(current.child(ingredient, effects));
        }
    };

    if unreported > 0 {
        observer.on_progress(unreported);
    }
    stats.frontier_high_water = frontier.high_water();
    (stopped_at, stats)
}
