//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default depth cap in goal mode.
pub const DEFAULT_GOAL_DEPTH: u32 = 16;

/// Default depth cap in payoff mode.
pub const DEFAULT_PAYOFF_DEPTH: u32 = 8;

/// Expansions between two progress reports.
pub const DEFAULT_REPORT_INTERVAL: u64 = 1000;

/// Depth cap and reporting cadence for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Maximum ingredient applications on any path.
    pub max_depth: u32,
    /// Expansions per progress report. Must be non-zero.
    #[serde(default = "default_report_interval")]
    pub report_interval: u64,
}

fn default_report_interval() -> u64 {
    DEFAULT_REPORT_INTERVAL
}

impl SearchPolicy {
    #[must_use]
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }

    #[must_use]
    pub fn goal_default() -> Self {
        Self::with_max_depth(DEFAULT_GOAL_DEPTH)
    }

    #[must_use]
    pub fn payoff_default() -> Self {
        Self::with_max_depth(DEFAULT_PAYOFF_DEPTH)
    }

    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `report_interval` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.report_interval == 0 {
            return Err(SearchError::InvalidPolicy {
                detail: "report_interval must be at least 1".into(),
            });
        }
        Ok(())
    }
}
