//! Mixpath Search: single-base breadth-first search over the mixing graph.
//!
//! This crate depends only on `mixpath_kernel`. It does NOT depend on
//! `mixpath_harness`; parallelism and cross-base selection live there.
//!
//! # Crate dependency graph
//!
//! ```text
//! mixpath_kernel  ←  mixpath_search  ←  mixpath_harness
//! (effects, rules)   (frontier, BFS)     (dispatch, reports)
//! ```
//!
//! # Key types
//!
//! - [`SearchState`]: base, canonical effect set, ingredient path
//! - [`BreadthFirstFrontier`]: FIFO queue with a visited set keyed by effects
//! - [`SearchPolicy`]: depth cap and progress batching
//! - [`SearchObserver`]: progress and cancellation hooks
//! - [`ValueScorer`]: payoff-mode state valuation
//!
//! [`SearchState`]: node::SearchState
//! [`BreadthFirstFrontier`]: frontier::BreadthFirstFrontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchObserver`]: contract::SearchObserver
//! [`ValueScorer`]: scorer::ValueScorer

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod scorer;
pub mod search;
pub mod stats;
