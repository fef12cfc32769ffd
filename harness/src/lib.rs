//! Mixpath Harness: parallel dispatch of per-base searches.
//!
//! The harness runs one `mixpath_search` search per selected base on a
//! scoped worker pool, streams progress back to the caller, and picks one
//! winner under the mode's selection rule.
//!
//! The harness does NOT implement search logic. It owns scheduling,
//! cancellation, selection and reporting.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cancel;
pub mod config;
pub mod dispatch;
pub mod progress;
pub mod report;
pub mod selection;
