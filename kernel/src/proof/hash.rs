//! Canonical hashing with domain separation.
//!
//! Algorithm: SHA-256. Every digest is computed over
//! `domain_prefix || data`, where each prefix is null-terminated so no
//! prefix is a prefix of another.

use sha2::{Digest, Sha256};

use crate::catalog::{Catalog, CatalogError};

/// Domain prefix for catalog digests.
pub const DOMAIN_CATALOG: &[u8] = b"MIXPATH::CATALOG::V1\0";

/// Domain prefix for solution-record digests.
pub const DOMAIN_SOLUTION: &[u8] = b"MIXPATH::SOLUTION::V1\0";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
///
/// Invariant: the inner string always contains a `:` separator with
/// non-empty substrings on both sides (enforced by [`ContentHash::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

impl serde::Serialize for ContentHash {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.full)
    }
}

/// SHA-256 of `domain || data`, formatted as `"sha256:<hex>"`.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    let full = format!("sha256:{hex}");
    ContentHash { full, colon: 6 }
}

/// Digest of a catalog's canonical JSON.
///
/// # Errors
///
/// Propagates [`CatalogError::Json`] if the catalog cannot be serialized.
pub fn catalog_digest(catalog: &Catalog) -> Result<ContentHash, CatalogError> {
    let bytes = catalog.to_json_bytes()?;
    Ok(canonical_hash(DOMAIN_CATALOG, &bytes))
}
