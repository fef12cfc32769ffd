//! Base products: the starting points of every search.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::effects::EffectSet;

/// An immutable base-product catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseProduct {
    pub name: String,
    /// Effects the base starts with.
    pub effects: EffectSet,
    /// Sale price before effect multipliers (payoff mode only).
    pub price: f64,
}

impl BaseProduct {
    /// A base product with the given starting effects and sale price.
    #[must_use]
    pub fn new(name: &str, effects: EffectSet, price: f64) -> Self {
        Self {
            name: name.to_owned(),
            effects,
            price,
        }
    }
}

/// Base products keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaseCatalog {
    bases: BTreeMap<String, BaseProduct>,
}

impl BaseCatalog {
    /// The base product called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BaseProduct> {
        self.bases.get(name)
    }

    /// Base products in name order.
    pub fn iter(&self) -> impl Iterator<Item = &BaseProduct> + '_ {
        self.bases.values()
    }

    /// Base names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.bases.keys().map(String::as_str)
    }

    /// Number of base products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }
}

impl FromIterator<BaseProduct> for BaseCatalog {
    fn from_iter<T: IntoIterator<Item = BaseProduct>>(iter: T) -> Self {
        Self {
            bases: iter.into_iter().map(|b| (b.name.clone(), b)).collect(),
        }
    }
}
