//! `EffectSet`: the capacity-bounded, always-canonical set of effects.
//!
//! The canonical form (sorted by label text, no duplicates) is the only
//! representation this type ever holds, so derived equality, ordering and
//! hashing double as the search deduplication signature.

use serde::{Deserialize, Serialize};

use crate::effects::label::Effect;

/// Hard capacity of an effect set.
pub const MAX_EFFECTS: usize = 8;

/// Failure constructing an `EffectSet`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EffectSetError {
    /// More distinct labels than `MAX_EFFECTS`.
    #[error("effect set holds at most {MAX_EFFECTS} effects, got {count}")]
    CapacityExceeded { count: usize },
}

/// A canonical set of at most [`MAX_EFFECTS`] effects.
///
/// Invariant: `effects` is strictly increasing and `effects.len() <= MAX_EFFECTS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<Effect>", into = "Vec<Effect>")]
pub struct EffectSet {
    effects: Vec<Effect>,
}

impl EffectSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            effects: Vec::with_capacity(MAX_EFFECTS),
        }
    }

    /// Build a set from arbitrary labels (duplicates collapse).
    ///
    /// # Errors
    ///
    /// Returns [`EffectSetError::CapacityExceeded`] when the labels contain
    /// more than `MAX_EFFECTS` distinct effects.
    pub fn try_from_effects<I>(labels: I) -> Result<Self, EffectSetError>
    where
        I: IntoIterator<Item = Effect>,
    {
        let effects = canonicalize(labels);
        if effects.len() > MAX_EFFECTS {
            return Err(EffectSetError::CapacityExceeded {
                count: effects.len(),
            });
        }
        Ok(Self { effects })
    }

    /// Convenience constructor from label text.
    ///
    /// # Errors
    ///
    /// Same as [`EffectSet::try_from_effects`].
    pub fn try_from_labels(labels: &[&str]) -> Result<Self, EffectSetError> {
        Self::try_from_effects(labels.iter().map(|l| Effect::new(l)))
    }

    /// Whether `effect` is in the set.
    #[must_use]
    pub fn contains(&self, effect: &Effect) -> bool {
        self.effects.binary_search(effect).is_ok()
    }

    /// Insert an effect, keeping canonical order.
    ///
    /// Returns `false` if the effect was already present or the set is full.
    pub fn insert(&mut self, effect: Effect) -> bool {
        match self.effects.binary_search(&effect) {
            Ok(_) => false,
            Err(_) if self.is_full() => false,
            Err(pos) => {
                self.effects.insert(pos, effect);
                true
            }
        }
    }

    /// Remove an effect. Returns `false` if it was absent.
    pub fn remove(&mut self, effect: &Effect) -> bool {
        match self.effects.binary_search(effect) {
            Ok(pos) => {
                self.effects.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    /// Number of effects held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the set holds no effects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Whether no further effect can be inserted.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.effects.len() >= MAX_EFFECTS
    }

    /// Whether every effect of `other` is present in `self`.
    #[must_use]
    pub fn is_superset_of(&self, other: &EffectSet) -> bool {
        other.effects.iter().all(|e| self.contains(e))
    }

    /// Effects in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }

    /// The canonical (sorted) labels.
    #[must_use]
    pub fn as_slice(&self) -> &[Effect] {
        &self.effects
    }
}

impl TryFrom<Vec<Effect>> for EffectSet {
    type Error = EffectSetError;

    fn try_from(labels: Vec<Effect>) -> Result<Self, Self::Error> {
        Self::try_from_effects(labels)
    }
}

impl From<EffectSet> for Vec<Effect> {
    fn from(set: EffectSet) -> Self {
        set.effects
    }
}

impl<'a> IntoIterator for &'a EffectSet {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

impl std::fmt::Display for EffectSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, effect) in self.effects.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(effect.as_str())?;
        }
        Ok(())
    }
}

/// Sort and deduplicate labels into canonical order.
///
/// Idempotent: canonicalizing canonical input returns it unchanged.
#[must_use]
pub fn canonicalize<I>(labels: I) -> Vec<Effect>
where
    I: IntoIterator<Item = Effect>,
{
    let mut effects: Vec<Effect> = labels.into_iter().collect();
    effects.sort_unstable();
    effects.dedup();
    effects
}
