//! Payoff evaluation: what a finished mix is worth.
//!
//! ```text
//! cost       = Σ ingredient_cost(i)      for i in path (repeats charge again)
//! multiplier = 1 + Σ effect_multiplier(e) for e in effects
//! value      = base.price × multiplier
//! profit     = value − cost
//! ```

use crate::catalog::{BaseProduct, PriceTables};
use crate::effects::{EffectSet, Ingredient};

/// Evaluates mixes against a set of price tables.
#[derive(Debug, Clone, Copy)]
pub struct PayoffEvaluator<'a> {
    tables: &'a PriceTables,
}

impl<'a> PayoffEvaluator<'a> {
    #[must_use]
    pub fn new(tables: &'a PriceTables) -> Self {
        Self { tables }
    }

    /// Total ingredient spend for `path`.
    #[must_use]
    pub fn cost(&self, path: &[Ingredient]) -> f64 {
        path.iter().map(|i| self.tables.ingredient_cost(i)).sum()
    }

    #[must_use]
    pub fn multiplier(&self, effects: &EffectSet) -> f64 {
        1.0 + effects
            .iter()
            .map(|e| self.tables.effect_multiplier(e))
            .sum::<f64>()
    }

    /// Sale value of `base` carrying `effects`.
    #[must_use]
    pub fn value(&self, base: &BaseProduct, effects: &EffectSet) -> f64 {
        base.price * self.multiplier(effects)
    }

    #[must_use]
    pub fn profit(&self, base: &BaseProduct, path: &[Ingredient], effects: &EffectSet) -> f64 {
        self.value(base, effects) - self.cost(path)
    }
}
