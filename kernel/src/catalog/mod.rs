//! Catalogs: the immutable configuration every search runs against.
//!
//! A [`Catalog`] bundles the rule catalog, the base-product catalog and the
//! payoff price tables. It is constructed once (from code, JSON, or
//! [`Catalog::builtin`]) and passed by reference into searches; nothing
//! mutates it afterwards.
//!
//! # JSON layout
//!
//! ```json
//! {
//!   "bases": { "OG Kush": { "effects": ["Calming"], "price": 38.0 } },
//!   "ingredients": {
//!     "Banana": { "replaces": { "Calming": "Sneaky" }, "adds": ["Gingeritis"] }
//!   },
//!   "prices": {
//!     "ingredient_costs": { "Banana": 2.0 },
//!     "effect_multipliers": { "Sneaky": 0.24 }
//!   }
//! }
//! ```

pub mod bases;
pub mod builtin;
pub mod prices;
pub mod rules;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, EffectSet, EffectSetError, MAX_EFFECTS};

pub use bases::{BaseCatalog, BaseProduct};
pub use prices::PriceTables;
pub use rules::{IngredientRule, RuleCatalog};

/// Failure loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("base `{base}` starts with {count} effects; at most {MAX_EFFECTS} are supported")]
    BaseCapacityExceeded { base: String, count: usize },
    #[error("catalog contains an empty {kind} name")]
    EmptyName { kind: &'static str },
    #[error("{what} is {value}; prices must be finite")]
    NonFinitePrice { what: String, value: f64 },
}

/// Rules, bases and prices for one search configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "CatalogSpec")]
pub struct Catalog {
    rules: RuleCatalog,
    bases: BaseCatalog,
    prices: PriceTables,
}

impl Catalog {
    /// Assemble a catalog from parts, rejecting NaN and infinite prices.
    ///
    /// # Errors
    ///
    /// [`CatalogError::NonFinitePrice`] naming the first offending entry.
    pub fn new(rules: RuleCatalog, bases: BaseCatalog, prices: PriceTables) -> Result<Self, CatalogError> {
        let catalog = Self::from_parts(rules, bases, prices);
        catalog.check_prices()?;
        Ok(catalog)
    }

    fn from_parts(rules: RuleCatalog, bases: BaseCatalog, prices: PriceTables) -> Self {
        Self {
            rules,
            bases,
            prices,
        }
    }

    /// Every base price, ingredient cost and effect multiplier is finite.
    fn check_prices(&self) -> Result<(), CatalogError> {
        if let Some(base) = self.bases.iter().find(|b| !b.price.is_finite()) {
            return Err(CatalogError::NonFinitePrice {
                what: format!("base `{}` price", base.name),
                value: base.price,
            });
        }
        if let Some((ingredient, &cost)) =
            self.prices.ingredient_costs.iter().find(|(_, c)| !c.is_finite())
        {
            return Err(CatalogError::NonFinitePrice {
                what: format!("ingredient `{ingredient}` cost"),
                value: cost,
            });
        }
        if let Some((effect, &multiplier)) =
            self.prices.effect_multipliers.iter().find(|(_, m)| !m.is_finite())
        {
            return Err(CatalogError::NonFinitePrice {
                what: format!("effect `{effect}` multiplier"),
                value: multiplier,
            });
        }
        Ok(())
    }

    /// Ingredient rules.
    #[must_use]
    pub fn rules(&self) -> &RuleCatalog {
        &self.rules
    }

    /// Base products.
    #[must_use]
    pub fn bases(&self) -> &BaseCatalog {
        &self.bases
    }

    /// Payoff price tables.
    #[must_use]
    pub fn prices(&self) -> &PriceTables {
        &self.prices
    }

    /// Parse and validate a catalog from JSON bytes.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Json`] for malformed input, otherwise the validation
    /// errors of [`Catalog::try_from`].
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let spec: CatalogSpec = serde_json::from_slice(bytes)?;
        Self::try_from(spec)
    }

    /// Serialize to JSON. Maps are ordered, so equal catalogs produce equal bytes.
    ///
    /// Prices are finite by construction, so every number survives the trip.
    ///
    /// # Errors
    ///
    /// [`CatalogError::Json`] if the serializer fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CatalogError> {
        Ok(serde_json::to_vec(&self.to_spec())?)
    }

    fn to_spec(&self) -> CatalogSpec {
        CatalogSpec {
            bases: self
                .bases
                .iter()
                .map(|b| {
                    (
                        b.name.clone(),
                        BaseSpec {
                            effects: b.effects.as_slice().to_vec(),
                            price: b.price,
                        },
                    )
                })
                .collect(),
            ingredients: self.rules.clone(),
            prices: self.prices.clone(),
        }
    }
}

impl Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

/// Wire form of a [`Catalog`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default)]
    pub bases: BTreeMap<String, BaseSpec>,
    #[serde(default)]
    pub ingredients: RuleCatalog,
    #[serde(default)]
    pub prices: PriceTables,
}

/// Wire form of a [`BaseProduct`]; the name is the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseSpec {
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub price: f64,
}

impl TryFrom<CatalogSpec> for Catalog {
    type Error = CatalogError;

    fn try_from(spec: CatalogSpec) -> Result<Self, Self::Error> {
        if spec.ingredients.ingredients().any(|i| i.is_empty()) {
            return Err(CatalogError::EmptyName { kind: "ingredient" });
        }

        let mut bases = Vec::with_capacity(spec.bases.len());
        for (name, base) in spec.bases {
            if name.is_empty() {
                return Err(CatalogError::EmptyName { kind: "base" });
            }
            let effects = match EffectSet::try_from_effects(base.effects) {
                Ok(effects) => effects,
                Err(EffectSetError::CapacityExceeded { count }) => {
                    return Err(CatalogError::BaseCapacityExceeded { base: name, count });
                }
            };
            bases.push(BaseProduct {
                name,
                effects,
                price: base.price,
            });
        }

        Self::new(spec.ingredients, bases.into_iter().collect(), spec.prices)
    }
}
