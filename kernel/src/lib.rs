//! Mixpath Kernel: the deterministic core of the mix pathfinder.
//!
//! # API Surface
//!
//! - [`catalog::Catalog`] -- immutable rules, bases and price tables
//! - [`operators::apply::apply`] -- the transition function (one ingredient, one step)
//! - [`payoff::PayoffEvaluator`] -- profit of a finished mix
//! - [`proof::replay::replay_verify`] -- re-derive a path and check its claimed effects
//!
//! # Module Dependency Direction
//!
//! `effects` ← `catalog` ← `operators` ← `proof`, and `catalog` ← `payoff`.
//!
//! One-way only. No cycles.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod effects;
pub mod operators;
pub mod payoff;
pub mod proof;
