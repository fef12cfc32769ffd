//! The stock catalog: four base products and sixteen ingredients.

use crate::effects::{EffectSet, Ingredient};

use super::{BaseCatalog, BaseProduct, Catalog, IngredientRule, PriceTables, RuleCatalog};

/// `(name, starting effect, price)`.
const BASES: [(&str, &str, f64); 4] = [
    ("OG Kush", "Calming", 38.0),
    ("Sour Diesel", "Refreshing", 40.0),
    ("Green Crack", "Energizing", 43.0),
    ("Granddaddy Purple", "Sedating", 44.0),
];

const INGREDIENT_COSTS: [(&str, f64); 16] = [
    ("Addy", 9.0),
    ("Banana", 2.0),
    ("Battery", 8.0),
    ("Chili", 7.0),
    ("Cuke", 2.0),
    ("Donut", 3.0),
    ("Energy Drink", 6.0),
    ("Flu Medicine", 5.0),
    ("Gasoline", 5.0),
    ("Horse Semen", 9.0),
    ("Iodine", 8.0),
    ("Mega Bean", 7.0),
    ("Motor Oil", 6.0),
    ("Mouth Wash", 4.0),
    ("Paracetamol", 3.0),
    ("Viagra", 4.0),
];

const EFFECT_MULTIPLIERS: [(&str, f64); 34] = [
    ("Anti-Gravity", 0.54),
    ("Athletic", 0.32),
    ("Balding", 0.30),
    ("Bright-Eyed", 0.40),
    ("Calming", 0.10),
    ("Calorie-Dense", 0.28),
    ("Cyclopean", 0.56),
    ("Disorienting", 0.00),
    ("Electrifying", 0.50),
    ("Energizing", 0.22),
    ("Euphoric", 0.18),
    ("Explosive", 0.00),
    ("Focused", 0.16),
    ("Foggy", 0.36),
    ("Gingeritis", 0.20),
    ("Glowing", 0.48),
    ("Jennerising", 0.42),
    ("Laxative", 0.00),
    ("Long-Faced", 0.52),
    ("Munchies", 0.12),
    ("Paranoia", 0.00),
    ("Refreshing", 0.14),
    ("Schizophrenic", 0.00),
    ("Sedating", 0.26),
    ("Seizure-Inducing", 0.00),
    ("Shrinking", 0.60),
    ("Slippery", 0.34),
    ("Smelly", 0.00),
    ("Sneaky", 0.24),
    ("Spicy", 0.38),
    ("Thought-Provoking", 0.44),
    ("Toxic", 0.00),
    ("Tropic Thunder", 0.46),
    ("Zombifying", 0.58),
];

impl Catalog {
    /// The stock catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_parts(builtin_rules(), builtin_bases(), builtin_prices())
    }
}

fn builtin_bases() -> BaseCatalog {
    BASES
        .iter()
        .map(|&(name, effect, price)| {
            let mut effects = EffectSet::new();
            effects.insert(effect.into());
            BaseProduct::new(name, effects, price)
        })
        .collect()
}

fn builtin_prices() -> PriceTables {
    let tables = INGREDIENT_COSTS
        .iter()
        .fold(PriceTables::new(), |t, &(name, cost)| t.with_cost(name, cost));
    EFFECT_MULTIPLIERS
        .iter()
        .fold(tables, |t, &(effect, m)| t.with_multiplier(effect, m))
}

#[allow(clippy::too_many_lines)]
fn builtin_rules() -> RuleCatalog {
    let rules = [
        (
            "Addy",
            IngredientRule::new()
                .replace("Long-Faced", "Electrifying")
                .replace("Foggy", "Energizing")
                .replace("Explosive", "Euphoric")
                .replace("Sedating", "Gingeritis")
                .replace("Glowing", "Refreshing")
                .add("Thought-Provoking"),
        ),
        (
            "Banana",
            IngredientRule::new()
                .replace("Smelly", "Anti-Gravity")
                .replace("Disorienting", "Focused")
                .replace("Paranoia", "Jennerising")
                .replace("Long-Faced", "Refreshing")
                .replace("Focused", "Seizure-Inducing")
                .replace("Toxic", "Smelly")
                .replace("Calming", "Sneaky")
                .replace("Cyclopean", "Thought-Provoking")
                .replace("Energizing", "Thought-Provoking")
                .add("Gingeritis"),
        ),
        (
            "Battery",
            IngredientRule::new()
                .replace("Laxative", "Calorie-Dense")
                .replace("Electrifying", "Euphoric")
                .replace("Cyclopean", "Glowing")
                .replace("Shrinking", "Munchies")
                .replace("Munchies", "Tropic Thunder")
                .replace("Euphoric", "Zombifying")
                .add("Bright-Eyed"),
        ),
        (
            "Chili",
            IngredientRule::new()
                .replace("Sneaky", "Bright-Eyed")
                .replace("Athletic", "Euphoric")
                .replace("Laxative", "Long-Faced")
                .replace("Shrinking", "Refreshing")
                .replace("Munchies", "Toxic")
                .replace("Anti-Gravity", "Tropic Thunder")
                .add("Spicy"),
        ),
        (
            "Cuke",
            IngredientRule::new()
                .replace("Munchies", "Athletic")
                .replace("Slippery", "Munchies")
                .replace("Foggy", "Cyclopean")
                .replace("Toxic", "Euphoric")
                .replace("Euphoric", "Laxative")
                .replace("Sneaky", "Paranoia")
                .replace("Gingeritis", "Thought-Provoking")
                .add("Energizing"),
        ),
        (
            "Donut",
            IngredientRule::new()
                .replace("Shrinking", "Energizing")
                .replace("Focused", "Euphoric")
                .replace("Calorie-Dense", "Explosive")
                .replace("Jennerising", "Gingeritis")
                .replace("Anti-Gravity", "Slippery")
                .replace("Balding", "Sneaky")
                .add("Calorie-Dense"),
        ),
        (
            "Energy Drink",
            IngredientRule::new()
                .replace("Schizophrenic", "Balding")
                .replace("Glowing", "Disorienting")
                .replace("Disorienting", "Electrifying")
                .replace("Euphoric", "Energizing")
                .replace("Spicy", "Euphoric")
                .replace("Foggy", "Laxative")
                .replace("Sedating", "Munchies")
                .replace("Focused", "Shrinking")
                .replace("Tropic Thunder", "Sneaky")
                .add("Athletic"),
        ),
        (
            "Flu Medicine",
            IngredientRule::new()
                .replace("Calming", "Bright-Eyed")
                .replace("Focused", "Calming")
                .replace("Laxative", "Euphoric")
                .replace("Cyclopean", "Foggy")
                .replace("Thought-Provoking", "Gingeritis")
                .replace("Athletic", "Munchies")
                .replace("Shrinking", "Paranoia")
                .replace("Electrifying", "Refreshing")
                .replace("Munchies", "Slippery")
                .replace("Euphoric", "Toxic")
                .add("Sedating"),
        ),
        (
            "Gasoline",
            IngredientRule::new()
                .replace("Paranoia", "Calming")
                .replace("Electrifying", "Disorienting")
                .replace("Energizing", "Spicy")
                .replace("Shrinking", "Focused")
                .replace("Laxative", "Foggy")
                .replace("Disorienting", "Glowing")
                .replace("Munchies", "Sedating")
                .replace("Gingeritis", "Smelly")
                .replace("Jennerising", "Sneaky")
                .replace("Euphoric", "Spicy")
                .replace("Sneaky", "Tropic Thunder")
                .add("Toxic"),
        ),
        (
            "Horse Semen",
            IngredientRule::new()
                .replace("Anti-Gravity", "Calming")
                .replace("Thought-Provoking", "Electrifying")
                .replace("Gingeritis", "Refreshing")
                .add("Long-Faced"),
        ),
        (
            "Iodine",
            IngredientRule::new()
                .replace("Calorie-Dense", "Gingeritis")
                .replace("Foggy", "Paranoia")
                .replace("Calming", "Balding")
                .replace("Euphoric", "Seizure-Inducing")
                .replace("Toxic", "Sneaky")
                .replace("Refreshing", "Thought-Provoking")
                .add("Jennerising"),
        ),
        (
            "Mega Bean",
            IngredientRule::new()
                .replace("Sneaky", "Calming")
                .replace("Thought-Provoking", "Energizing")
                .replace("Energizing", "Cyclopean")
                .replace("Focused", "Disorienting")
                .replace("Shrinking", "Electrifying")
                .replace("Seizure-Inducing", "Focused")
                .replace("Calming", "Glowing")
                .replace("Athletic", "Laxative")
                .replace("Jennerising", "Paranoia")
                .replace("Slippery", "Toxic")
                .add("Foggy"),
        ),
        (
            "Motor Oil",
            IngredientRule::new()
                .replace("Paranoia", "Anti-Gravity")
                .replace("Energizing", "Munchies")
                .replace("Munchies", "Schizophrenic")
                .replace("Euphoric", "Sedating")
                .replace("Foggy", "Toxic")
                .add("Slippery"),
        ),
        (
            "Mouth Wash",
            IngredientRule::new()
                .replace("Calming", "Anti-Gravity")
                .replace("Focused", "Jennerising")
                .replace("Explosive", "Sedating")
                .replace("Calorie-Dense", "Sneaky")
                .add("Balding"),
        ),
        (
            "Paracetamol",
            IngredientRule::new()
                .replace("Munchies", "Anti-Gravity")
                .replace("Electrifying", "Athletic")
                .replace("Paranoia", "Balding")
                .replace("Energizing", "Balding")
                .replace("Spicy", "Bright-Eyed")
                .replace("Foggy", "Calming")
                .replace("Focused", "Gingeritis")
                .replace("Calming", "Slippery")
                .replace("Glowing", "Toxic")
                .replace("Toxic", "Tropic Thunder")
                .add("Sneaky"),
        ),
        (
            "Viagra",
            IngredientRule::new()
                .replace("Euphoric", "Bright-Eyed")
                .replace("Laxative", "Calming")
                .replace("Athletic", "Sneaky")
                .replace("Disorienting", "Toxic")
                .add("Tropic Thunder"),
        ),
    ];

    rules
        .into_iter()
        .map(|(name, rule)| (Ingredient::new(name), rule))
        .collect()
}
