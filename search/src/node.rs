//! Search states and the records a search hands back.

use std::sync::Arc;

use serde::Serialize;

use mixpath_kernel::catalog::BaseProduct;
use mixpath_kernel::effects::{EffectSet, Ingredient};
use mixpath_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SOLUTION};

/// A node of the implicit transition graph.
///
/// Parent and child are independent values: a child owns its own copy of
/// the path, so any number of states can sit in the frontier at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Originating base name.
    pub base: Arc<str>,
    pub effects: EffectSet,
    /// Ingredients applied so far, in order.
    pub path: Vec<Ingredient>,
}

impl SearchState {
    /// The start state for `base`: its starting effects, empty path.
    #[must_use]
    pub fn root(base: &BaseProduct) -> Self {
        Self {
            base: Arc::from(base.name.as_str()),
            effects: base.effects.clone(),
            path: Vec::new(),
        }
    }

    /// Number of ingredients applied.
    #[must_use]
    pub fn depth(&self) -> u32 {
        u32::try_from(self.path.len()).unwrap_or(u32::MAX)
    }

    /// The state reached by applying `ingredient`, which produced `effects`.
    #[must_use]
    pub fn child(&self, ingredient: &Ingredient, effects: EffectSet) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(ingredient.clone());
        Self {
            base: Arc::clone(&self.base),
            effects,
            path,
        }
    }

    #[must_use]
    pub fn into_solution(self) -> SolutionRecord {
        SolutionRecord {
            base: self.base.to_string(),
            effects: self.effects,
            path: self.path,
        }
    }
}

/// A finished mix: which base, which ingredients, which effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionRecord {
    pub base: String,
    pub effects: EffectSet,
    pub path: Vec<Ingredient>,
}

impl SolutionRecord {
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Content digest of the record, for cross-run comparison.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the record cannot be encoded.
    pub fn digest(&self) -> Result<ContentHash, serde_json::Error> {
        let bytes = serde_json::to_vec(self)?;
        Ok(canonical_hash(DOMAIN_SOLUTION, &bytes))
    }
}

/// A solution together with its computed profit (payoff mode).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoffResult {
    #[serde(flatten)]
    pub solution: SolutionRecord,
    pub profit: f64,
}
