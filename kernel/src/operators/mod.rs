//! Operators module: the transition function applied at every search step.
//!
//! Depends on `effects` and `catalog`. Does not import from `proof`.

pub mod apply;
