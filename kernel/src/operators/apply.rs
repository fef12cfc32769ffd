//! `apply()`: compute the effect set produced by mixing in one ingredient.
//!
//! Replacement decisions are evaluated against a snapshot of the input, so a
//! replacement's output is never replaced again within the same step:
//!
//! 1. For every effect in the snapshot with a replacement entry: a removal
//!    entry schedules removal; a target entry schedules `source → target`
//!    unless the target is already in the snapshot (then it is a no-op).
//! 2. All scheduled removals are applied, then all scheduled targets.
//! 3. The ingredient's additions are granted in declared order while the set
//!    has room; once it is full the rest are dropped.
//!
//! Pure and allocation-light: safe to call from any number of search
//! threads at once.

use serde::Serialize;

use crate::catalog::IngredientRule;
use crate::effects::{Effect, EffectSet};

/// One replacement that fired during a step. `target == None` is a removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplacementRecord {
    pub source: Effect,
    pub target: Option<Effect>,
}

/// What a single ingredient application changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// Replacements that fired, in canonical source order.
    pub replaced: Vec<ReplacementRecord>,
    /// Additions that were actually granted, in declared order.
    pub added: Vec<Effect>,
}

/// Apply `rule` to `effects`, returning the canonical successor set.
#[must_use]
pub fn apply(effects: &EffectSet, rule: &IngredientRule) -> EffectSet {
    transition(effects, rule, None)
}

/// Like [`apply`], also recording which replacements and additions fired.
#[must_use]
pub fn apply_traced(effects: &EffectSet, rule: &IngredientRule) -> (EffectSet, StepRecord) {
    let mut record = StepRecord::default();
    let next = transition(effects, rule, Some(&mut record));
    (next, record)
}

fn transition(
    snapshot: &EffectSet,
    rule: &IngredientRule,
    mut record: Option<&mut StepRecord>,
) -> EffectSet {
    let mut removed: Vec<&Effect> = Vec::new();
    let mut targets: Vec<&Effect> = Vec::new();

    for source in snapshot {
        let target = match rule.replacement(source) {
            None => continue,
            Some(Some(target)) if snapshot.contains(target) => continue,
            Some(target) => target,
        };
        removed.push(source);
        targets.extend(target);
        if let Some(r) = record.as_deref_mut() {
            r.replaced.push(ReplacementRecord {
                source: source.clone(),
                target: target.cloned(),
            });
        }
    }

    let mut next = snapshot.clone();
    for source in &removed {
        next.remove(source);
    }
    // Each target is paired with a removal, so these never hit capacity.
    for target in targets {
        next.insert(target.clone());
    }

    for addition in &rule.adds {
        if next.is_full() {
            break;
        }
        if addition.is_empty() {
            continue;
        }
        let replaced_away = removed.contains(&addition);
        if (!next.contains(addition) || replaced_away) && next.insert(addition.clone()) {
            if let Some(r) = record.as_deref_mut() {
                r.added.push(addition.clone());
            }
        }
    }

    next
}
