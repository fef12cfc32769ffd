//! Effect vocabulary: opaque labels and the capacity-bounded `EffectSet`.
//!
//! Depends on nothing internal.

pub mod label;
pub mod set;

pub use label::{Effect, Ingredient};
pub use set::{canonicalize, EffectSet, EffectSetError, MAX_EFFECTS};
