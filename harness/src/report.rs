//! Dispatch reports: the outcome, per-base statistics, and the digest of
//! the catalog that produced them.
//!
//! A report serializes to JSON. Given the same catalog, request and a
//! [`TieBreak::Canonical`] configuration, `outcome` and `catalog_digest` are
//! identical across runs and processes. Per-base statistics of a goal run
//! depend on when cancellation reached each worker; payoff runs are never
//! cancelled, so their statistics are reproducible too.
//!
//! [`TieBreak::Canonical`]: crate::config::TieBreak::Canonical

use serde::Serialize;

use mixpath_kernel::effects::EffectSet;
use mixpath_kernel::proof::hash::ContentHash;
use mixpath_search::node::{PayoffResult, SolutionRecord};
use mixpath_search::stats::SearchStats;

use crate::config::TieBreak;
use crate::progress::ProgressSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalOutcome {
    Found { solution: SolutionRecord },
    /// Every selected base exhausted its search within the depth cap.
    NoSolutionFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffOutcome {
    Found { best: PayoffResult },
    /// Only possible when no base was selected.
    NoProfitableMixFound,
}

/// What one base's search did.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseRunSummary {
    pub base: String,
    /// Goal mode: reached the goal. Payoff mode: produced a best state.
    pub found: bool,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalReport {
    pub outcome: GoalOutcome,
    pub desired: EffectSet,
    pub max_depth: u32,
    pub tie_break: TieBreak,
    /// Bases that were searched, by name. With [`TieBreak::FirstFound`],
    /// bases skipped after the winner are absent.
    pub bases: Vec<BaseRunSummary>,
    pub progress: ProgressSnapshot,
    pub catalog_digest: ContentHash,
}

impl GoalReport {
    #[must_use]
    pub fn solution(&self) -> Option<&SolutionRecord> {
        match &self.outcome {
            GoalOutcome::Found { solution } => Some(solution),
            GoalOutcome::NoSolutionFound => None,
        }
    }

    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffReport {
    pub outcome: PayoffOutcome,
    pub max_depth: u32,
    pub bases: Vec<BaseRunSummary>,
    pub progress: ProgressSnapshot,
    pub catalog_digest: ContentHash,
}

impl PayoffReport {
    #[must_use]
    pub fn best(&self) -> Option<&PayoffResult> {
        match &self.outcome {
            PayoffOutcome::Found { best } => Some(best),
            PayoffOutcome::NoProfitableMixFound => None,
        }
    }

    /// # Errors
    ///
    /// Returns the serializer error if encoding fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
