//! Dispatch configuration: how many workers, how progress flows, how ties
//! between bases are broken.
//!
//! Every field has a default, so `{}` is a valid configuration file.

use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default bound of the worker → coordinator progress channel.
pub const DEFAULT_PROGRESS_CAPACITY: usize = 64;

/// Default coordinator wake-up interval while waiting on progress.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// How goal mode chooses among bases that all reach the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Minimum depth, then base name, then path. Reproducible.
    #[default]
    Canonical,
    /// Whichever worker finishes first wins and stops the rest.
    FirstFound,
}

/// Error loading a [`DispatchConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read dispatch config: {0}")]
    Io(#[from] std::io::Error),
    #[error("dispatch config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Worker thread count. `None` uses the machine's available parallelism.
    /// Never more than the number of selected bases.
    pub worker_threads: Option<NonZeroUsize>,
    /// Bound of the progress channel. Zero is treated as one.
    pub progress_capacity: usize,
    pub poll_interval_ms: u64,
    pub tie_break: TieBreak,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            progress_capacity: DEFAULT_PROGRESS_CAPACITY,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            tie_break: TieBreak::Canonical,
        }
    }
}

impl DispatchConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`DispatchConfig::from_json_slice`].
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Number of workers to spawn for `jobs` bases. Zero only when `jobs` is zero.
    #[must_use]
    pub fn worker_count(&self, jobs: usize) -> usize {
        let wanted = self
            .worker_threads
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);
        wanted.min(jobs)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    #[must_use]
    pub fn channel_capacity(&self) -> usize {
        self.progress_capacity.max(1)
    }
}
