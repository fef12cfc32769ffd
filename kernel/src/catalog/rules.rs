//! Ingredient rules and the rule catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, Ingredient};

/// How one ingredient rewrites an effect set.
///
/// `replaces` maps a source effect to its target; a `None` target removes
/// the source outright. `adds` lists the effects the ingredient always
/// confers, in grant order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IngredientRuleSpec")]
pub struct IngredientRule {
    pub replaces: BTreeMap<Effect, Option<Effect>>,
    pub adds: Vec<Effect>,
}

/// Wire form of a rule. An empty-string target means removal, same as `null`.
#[derive(Deserialize)]
struct IngredientRuleSpec {
    #[serde(default)]
    replaces: BTreeMap<Effect, Option<Effect>>,
    #[serde(default)]
    adds: Vec<Effect>,
}

impl From<IngredientRuleSpec> for IngredientRule {
    fn from(spec: IngredientRuleSpec) -> Self {
        let replaces = spec
            .replaces
            .into_iter()
            .map(|(source, target)| (source, target.filter(|t| !t.is_empty())))
            .collect();
        Self {
            replaces,
            adds: spec.adds,
        }
    }
}

impl IngredientRule {
    /// A rule that neither replaces nor adds anything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `source → target`.
    #[must_use]
    pub fn replace(mut self, source: &str, target: &str) -> Self {
        let target = (!target.is_empty()).then(|| Effect::new(target));
        self.replaces.insert(Effect::new(source), target);
        self
    }

    /// Declare that `source` is removed with no replacement.
    #[must_use]
    pub fn remove(mut self, source: &str) -> Self {
        self.replaces.insert(Effect::new(source), None);
        self
    }

    /// Append an unconditional addition.
    #[must_use]
    pub fn add(mut self, effect: &str) -> Self {
        self.adds.push(Effect::new(effect));
        self
    }

    /// The replacement entry for `source`, if any.
    ///
    /// Outer `None`: no entry. `Some(None)`: pure removal.
    #[must_use]
    pub fn replacement(&self, source: &Effect) -> Option<Option<&Effect>> {
        self.replaces.get(source).map(Option::as_ref)
    }
}

/// Immutable mapping from ingredient name to rule.
///
/// Iteration is in ingredient-name order, which fixes the BFS child order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    rules: BTreeMap<Ingredient, IngredientRule>,
}

impl RuleCatalog {
    /// Wrap an existing ingredient-to-rule map.
    #[must_use]
    pub fn new(rules: BTreeMap<Ingredient, IngredientRule>) -> Self {
        Self { rules }
    }

    /// The rule for `ingredient`, if cataloged.
    #[must_use]
    pub fn get(&self, ingredient: &str) -> Option<&IngredientRule> {
        self.rules.get(ingredient)
    }

    /// Look up the shared ingredient label together with its rule.
    #[must_use]
    pub fn get_entry(&self, ingredient: &str) -> Option<(&Ingredient, &IngredientRule)> {
        self.rules.get_key_value(ingredient)
    }

    /// All `(ingredient, rule)` pairs in ingredient-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ingredient, &IngredientRule)> + '_ {
        self.rules.iter()
    }

    /// Ingredient names in order.
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> + '_ {
        self.rules.keys()
    }

    /// Number of ingredients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no ingredient is cataloged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Every effect some rule can produce: all additions plus all
    /// non-removal replacement targets, sorted.
    #[must_use]
    pub fn known_effects(&self) -> Vec<Effect> {
        let mut known = BTreeSet::new();
        for rule in self.rules.values() {
            known.extend(rule.adds.iter().filter(|e| !e.is_empty()).cloned());
            known.extend(rule.replaces.values().flatten().cloned());
        }
        known.into_iter().collect()
    }
}

impl FromIterator<(Ingredient, IngredientRule)> for RuleCatalog {
    fn from_iter<T: IntoIterator<Item = (Ingredient, IngredientRule)>>(iter: T) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
