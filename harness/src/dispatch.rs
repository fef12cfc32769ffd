//! Parallel dispatcher: one search per selected base on a scoped worker pool.
//!
//! # Pipeline
//!
//! ```text
//! select bases → catalog_digest() → estimate_work()
//!   → workers: [pull base index → search_goal()/search_payoff()] × N
//!   → coordinator: drain progress until every sender is gone
//!   → join workers → select winner → report
//! ```
//!
//! Workers share the catalog by reference, a job counter, the progress
//! channel and the [`CancelState`]. Nothing else.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use mixpath_kernel::catalog::{BaseCatalog, BaseProduct, Catalog, CatalogError};
use mixpath_kernel::effects::{Effect, EffectSet, EffectSetError};
use mixpath_kernel::proof::hash::catalog_digest;
use mixpath_search::contract::SearchObserver;
use mixpath_search::error::SearchError;
use mixpath_search::policy::{SearchPolicy, DEFAULT_GOAL_DEPTH, DEFAULT_PAYOFF_DEPTH};
use mixpath_search::scorer::PayoffScorer;
use mixpath_search::search::{search_goal, search_payoff};

use crate::cancel::CancelState;
use crate::config::{DispatchConfig, TieBreak};
use crate::progress::{estimate_work, ProgressReporter, ProgressSnapshot};
use crate::report::{BaseRunSummary, GoalOutcome, GoalReport, PayoffOutcome, PayoffReport};
use crate::selection::{select_goal, select_payoff};

/// Error before or during a dispatch. Domain negatives are outcomes, not errors.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("unknown base product `{name}`")]
    UnknownBase { name: String },
    #[error("desired effects can never be reached: {0}")]
    GoalExceedsCapacity(#[from] EffectSetError),
    #[error("search worker {worker} panicked")]
    WorkerPanicked { worker: usize },
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("cannot digest catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Which bases to search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseFilter {
    #[default]
    All,
    Only(Vec<String>),
}

impl BaseFilter {
    /// Resolve against a catalog. The result is in base-name order without
    /// duplicates.
    ///
    /// # Errors
    ///
    /// [`DispatchError::UnknownBase`] for the first name not in `bases`.
    pub fn select<'c>(&self, bases: &'c BaseCatalog) -> Result<Vec<&'c BaseProduct>, DispatchError> {
        match self {
            Self::All => Ok(bases.iter().collect()),
            Self::Only(names) => {
                let mut selected = names
                    .iter()
                    .map(|name| {
                        bases
                            .get(name)
                            .ok_or_else(|| DispatchError::UnknownBase { name: name.clone() })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                selected.sort_by(|a, b| a.name.cmp(&b.name));
                selected.dedup_by(|a, b| a.name == b.name);
                Ok(selected)
            }
        }
    }
}

fn default_goal_depth() -> u32 {
    DEFAULT_GOAL_DEPTH
}

fn default_payoff_depth() -> u32 {
    DEFAULT_PAYOFF_DEPTH
}

/// Goal mode: find a shortest mix containing every `desired` effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalRequest {
    pub desired: Vec<Effect>,
    #[serde(default)]
    pub bases: BaseFilter,
    #[serde(default = "default_goal_depth")]
    pub max_depth: u32,
}

impl GoalRequest {
    #[must_use]
    pub fn new<I>(desired: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Effect>,
    {
        Self {
            desired: desired.into_iter().map(Into::into).collect(),
            bases: BaseFilter::All,
            max_depth: DEFAULT_GOAL_DEPTH,
        }
    }

    #[must_use]
    pub fn with_bases(mut self, bases: BaseFilter) -> Self {
        self.bases = bases;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Payoff mode: find the most profitable mix within the depth cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffRequest {
    #[serde(default)]
    pub bases: BaseFilter,
    #[serde(default = "default_payoff_depth")]
    pub max_depth: u32,
}

impl Default for PayoffRequest {
    fn default() -> Self {
        Self {
            bases: BaseFilter::All,
            max_depth: DEFAULT_PAYOFF_DEPTH,
        }
    }
}

impl PayoffRequest {
    #[must_use]
    pub fn with_bases(mut self, bases: BaseFilter) -> Self {
        self.bases = bases;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Run a goal-mode search over every selected base.
///
/// `on_progress` is called on the calling thread with a non-decreasing
/// completed count.
///
/// # Errors
///
/// [`DispatchError::GoalExceedsCapacity`] if more desired effects are given
/// than a mix can hold, [`DispatchError::UnknownBase`] for a bad filter,
/// [`DispatchError::WorkerPanicked`] if a worker dies.
pub fn run_goal(
    catalog: &Catalog,
    request: &GoalRequest,
    config: &DispatchConfig,
    on_progress: &mut dyn FnMut(ProgressSnapshot),
) -> Result<GoalReport, DispatchError> {
    let desired = EffectSet::try_from_effects(request.desired.iter().cloned())?;
    let bases = request.bases.select(catalog.bases())?;
    let catalog_digest = catalog_digest(catalog)?;
    let policy = SearchPolicy::with_max_depth(request.max_depth);
    let estimate = estimate_work(catalog.rules().len(), request.max_depth, bases.len());
    let cancel = CancelState::new(config.tie_break);

    info!(
        bases = bases.len(),
        max_depth = request.max_depth,
        desired = %desired,
        tie_break = ?config.tie_break,
        estimate,
        "goal dispatch started"
    );

    let run = run_pool(&bases, config, estimate, &cancel, on_progress, |index, base, observer| {
        let result = search_goal(base, catalog.rules(), &desired, &policy, observer)?;
        if let Some(solution) = &result.solution {
            let depth = u32::try_from(solution.depth()).unwrap_or(u32::MAX);
            trace!(base = %base.name, depth, "solution recorded");
            cancel.record_solution(index, depth);
        }
        Ok(result)
    })?;

    let winner = match config.tie_break {
        TieBreak::Canonical => {
            select_goal(run.results.iter().filter_map(|(_, r)| r.solution.as_ref()))
        }
        TieBreak::FirstFound => cancel.first_found().and_then(|first| {
            run.results
                .iter()
                .find(|(index, _)| *index == first)
                .and_then(|(_, r)| r.solution.as_ref())
        }),
    };
    let outcome = winner.cloned().map_or(GoalOutcome::NoSolutionFound, |solution| {
        GoalOutcome::Found { solution }
    });

    let summaries = run
        .results
        .iter()
        .map(|(index, r)| BaseRunSummary {
            base: bases[*index].name.clone(),
            found: r.solution.is_some(),
            stats: r.stats,
        })
        .collect();

    info!(
        found = matches!(outcome, GoalOutcome::Found { .. }),
        completed = run.progress.completed,
        "goal dispatch finished"
    );
    Ok(GoalReport {
        outcome,
        desired,
        max_depth: request.max_depth,
        tie_break: config.tie_break,
        bases: summaries,
        progress: run.progress,
        catalog_digest,
    })
}

/// Run a payoff-mode search over every selected base. No base is cancelled.
///
/// # Errors
///
/// [`DispatchError::UnknownBase`] for a bad filter,
/// [`DispatchError::WorkerPanicked`] if a worker dies.
pub fn run_payoff(
    catalog: &Catalog,
    request: &PayoffRequest,
    config: &DispatchConfig,
    on_progress: &mut dyn FnMut(ProgressSnapshot),
) -> Result<PayoffReport, DispatchError> {
    let bases = request.bases.select(catalog.bases())?;
    let catalog_digest = catalog_digest(catalog)?;
    let policy = SearchPolicy::with_max_depth(request.max_depth);
    let estimate = estimate_work(catalog.rules().len(), request.max_depth, bases.len());
    let cancel = CancelState::new(config.tie_break);
    let scorer = PayoffScorer::new(catalog.prices());

    info!(
        bases = bases.len(),
        max_depth = request.max_depth,
        estimate,
        "payoff dispatch started"
    );

    let run = run_pool(&bases, config, estimate, &cancel, on_progress, |_, base, observer| {
        search_payoff(base, catalog.rules(), &scorer, &policy, observer)
    })?;

    let outcome = select_payoff(run.results.iter().filter_map(|(_, r)| r.best.as_ref()))
        .cloned()
        .map_or(PayoffOutcome::NoProfitableMixFound, |best| PayoffOutcome::Found { best });

    let summaries = run
        .results
        .iter()
        .map(|(index, r)| BaseRunSummary {
            base: bases[*index].name.clone(),
            found: r.best.is_some(),
            stats: r.stats,
        })
        .collect();

    info!(
        best_profit = match &outcome {
            PayoffOutcome::Found { best } => Some(best.profit),
            PayoffOutcome::NoProfitableMixFound => None,
        },
        completed = run.progress.completed,
        "payoff dispatch finished"
    );
    Ok(PayoffReport {
        outcome,
        max_depth: request.max_depth,
        bases: summaries,
        progress: run.progress,
        catalog_digest,
    })
}

/// Per-job results (ordered by job index) and the final progress count.
struct PoolRun<R> {
    results: Vec<(usize, R)>,
    progress: ProgressSnapshot,
}

/// Run `job` once per base on a scoped pool and drain progress meanwhile.
///
/// Jobs are handed out in index order through an atomic counter. Once the
/// cancel state is stopped, workers take no further jobs.
fn run_pool<R, F>(
    bases: &[&BaseProduct],
    config: &DispatchConfig,
    estimate: u64,
    cancel: &CancelState,
    on_progress: &mut dyn FnMut(ProgressSnapshot),
    job: F,
) -> Result<PoolRun<R>, DispatchError>
where
    R: Send,
    F: Fn(usize, &BaseProduct, &dyn SearchObserver) -> Result<R, SearchError> + Sync,
{
    let workers = config.worker_count(bases.len());
    let poll_interval = config.poll_interval();
    let next = AtomicUsize::new(0);
    let mut progress = ProgressSnapshot {
        completed: 0,
        estimate,
    };

    debug!(workers, jobs = bases.len(), "worker pool starting");

    let mut results = thread::scope(|scope| {
        // Created inside the scope: an unwinding `on_progress` drops `rx`
        // before the join, so blocked senders see `Disconnected`.
        let (tx, rx) = mpsc::sync_channel::<u64>(config.channel_capacity());
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                let tx = tx.clone();
                let next = &next;
                let job = &job;
                scope.spawn(move || -> Result<Vec<(usize, R)>, SearchError> {
                    let mut done = Vec::new();
                    loop {
                        if cancel.is_stopped() {
                            trace!(worker, "worker stopping early");
                            break;
                        }
                        let index = next.fetch_add(1, Ordering::Relaxed);
                        let Some(base) = bases.get(index) else {
                            break;
                        };
                        debug!(worker, base = %base.name, "worker took base");
                        let reporter = ProgressReporter::new(tx.clone(), cancel);
                        let outcome = job(index, base, &reporter);
                        reporter.finish();
                        done.push((index, outcome?));
                    }
                    Ok(done)
                })
            })
            .collect();
        // Workers hold the only remaining senders.
        drop(tx);

        loop {
            match rx.recv_timeout(poll_interval) {
                Ok(count) => {
                    progress.completed = progress.completed.saturating_add(count);
                    on_progress(progress);
                }
                Err(RecvTimeoutError::Timeout) => {
                    trace!(completed = progress.completed, "waiting on workers");
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }

        let joined: Vec<_> = handles
            .into_iter()
            .map(thread::ScopedJoinHandle::join)
            .collect();
        let mut results = Vec::with_capacity(bases.len());
        for (worker, outcome) in joined.into_iter().enumerate() {
            match outcome {
                Ok(done) => results.extend(done?),
                Err(_) => return Err(DispatchError::WorkerPanicked { worker }),
            }
        }
        Ok(results)
    })?;

    results.sort_by_key(|(index, _)| *index);
    Ok(PoolRun { results, progress })
}
