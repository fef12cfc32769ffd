//! Proof module: content digests and replay verification of mix paths.
//!
//! Depends on `effects`, `catalog` and `operators`.

pub mod hash;
pub mod replay;
