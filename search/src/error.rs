//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime outcomes
//! (goal reached, frontier exhausted, cancelled) are expressed via
//! [`crate::stats::TerminationReason`]; "no solution" is a valid result,
//! never an error.

/// Typed failure for pre-flight search validation.
///
/// Returned before the first state is expanded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy carries a value the engine cannot run with.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
