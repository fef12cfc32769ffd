//! Economic tables for payoff mode.
//!
//! Lookups are total: an ingredient or effect missing from a table is
//! economically neutral and contributes 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, Ingredient};

/// Ingredient costs and effect price multipliers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTables {
    #[serde(default)]
    pub ingredient_costs: BTreeMap<Ingredient, f64>,
    #[serde(default)]
    pub effect_multipliers: BTreeMap<Effect, f64>,
}

impl PriceTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cost(mut self, ingredient: &str, cost: f64) -> Self {
        self.ingredient_costs.insert(Ingredient::new(ingredient), cost);
        self
    }

    #[must_use]
    pub fn with_multiplier(mut self, effect: &str, multiplier: f64) -> Self {
        self.effect_multipliers.insert(Effect::new(effect), multiplier);
        self
    }

    /// Cost of one use of `ingredient`; 0.0 when unlisted.
    #[must_use]
    pub fn ingredient_cost(&self, ingredient: &Ingredient) -> f64 {
        self.ingredient_costs.get(ingredient).copied().unwrap_or(0.0)
    }

    /// Price multiplier contributed by `effect`; 0.0 when unlisted.
    #[must_use]
    pub fn effect_multiplier(&self, effect: &Effect) -> f64 {
        self.effect_multipliers.get(effect).copied().unwrap_or(0.0)
    }
}
