//! Replay: re-derive a mix from its base and ingredient path.
//!
//! Used to audit a solution record independently of the search that
//! produced it, and to show the per-step changes of a path.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::effects::{EffectSet, Ingredient};
use crate::operators::apply::{apply_traced, StepRecord};

/// Typed failure for replay.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    #[error("unknown base `{name}`")]
    UnknownBase { name: String },
    #[error("unknown ingredient `{name}` at step {step}")]
    UnknownIngredient { name: String, step: usize },
    #[error("replayed effects [{actual}] differ from claimed [{expected}]")]
    Divergence {
        expected: EffectSet,
        actual: EffectSet,
    },
}

/// One replayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    pub ingredient: Ingredient,
    #[serde(flatten)]
    pub record: StepRecord,
    /// Effects after this step.
    pub effects: EffectSet,
}

/// The full derivation of a path from its base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayTrace {
    pub base: String,
    pub start: EffectSet,
    pub steps: Vec<ReplayStep>,
}

impl ReplayTrace {
    /// Effects after the last step (the start set for an empty path).
    #[must_use]
    pub fn final_effects(&self) -> &EffectSet {
        self.steps.last().map_or(&self.start, |s| &s.effects)
    }
}

/// Re-apply `path` from `base` using the catalog's rules.
///
/// # Errors
///
/// [`ReplayError::UnknownBase`] or [`ReplayError::UnknownIngredient`] when a
/// name is not in the catalog.
pub fn replay(catalog: &Catalog, base: &str, path: &[Ingredient]) -> Result<ReplayTrace, ReplayError> {
    let start = catalog
        .bases()
        .get(base)
        .ok_or_else(|| ReplayError::UnknownBase {
            name: base.to_owned(),
        })?
        .effects
        .clone();

    let mut current = start.clone();
    let mut steps = Vec::with_capacity(path.len());
    for (step, ingredient) in path.iter().enumerate() {
        let rule = catalog
            .rules()
            .get(ingredient.as_str())
            .ok_or_else(|| ReplayError::UnknownIngredient {
                name: ingredient.to_string(),
                step,
            })?;
        let (next, record) = apply_traced(&current, rule);
        steps.push(ReplayStep {
            ingredient: ingredient.clone(),
            record,
            effects: next.clone(),
        });
        current = next;
    }

    Ok(ReplayTrace {
        base: base.to_owned(),
        start,
        steps,
    })
}

/// Replay `path` and check it ends at `claimed`.
///
/// # Errors
///
/// Any [`replay`] error, or [`ReplayError::Divergence`] on mismatch.
pub fn replay_verify(
    catalog: &Catalog,
    base: &str,
    path: &[Ingredient],
    claimed: &EffectSet,
) -> Result<ReplayTrace, ReplayError> {
    let trace = replay(catalog, base, path)?;
    if trace.final_effects() != claimed {
        return Err(ReplayError::Divergence {
            expected: claimed.clone(),
            actual: trace.final_effects().clone(),
        });
    }
    Ok(trace)
}
