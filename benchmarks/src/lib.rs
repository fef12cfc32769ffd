//! Shared helpers for mixpath benchmark suites.

use std::num::NonZeroUsize;

use mixpath_harness::config::DispatchConfig;
use mixpath_harness::dispatch::{GoalRequest, PayoffRequest};
use mixpath_kernel::catalog::Catalog;
use mixpath_kernel::effects::{Effect, EffectSet};

/// A named dispatch workload over the built-in catalog.
pub enum Regime {
    Goal(GoalRequest),
    Payoff(PayoffRequest),
}

/// Workloads covering early exit, exhaustion and deep payoff sweeps.
#[must_use]
pub fn regimes() -> Vec<(&'static str, Regime)> {
    vec![
        ("goal_start_state", Regime::Goal(GoalRequest::new(["Energizing"]))),
        ("goal_two_effects", Regime::Goal(GoalRequest::new(["Anti-Gravity", "Sneaky"]))),
        (
            "goal_exhaustive_dead_end",
            Regime::Goal(GoalRequest::new(["Never-Produced"]).with_max_depth(4)),
        ),
        ("payoff_depth_3", Regime::Payoff(PayoffRequest::default().with_max_depth(3))),
        ("payoff_depth_5", Regime::Payoff(PayoffRequest::default().with_max_depth(5))),
    ]
}

/// Dispatch configuration with a fixed pool size.
#[must_use]
pub fn config_with_workers(workers: usize) -> DispatchConfig {
    DispatchConfig {
        worker_threads: NonZeroUsize::new(workers),
        ..DispatchConfig::default()
    }
}

/// Deterministic effect sets of sizes `1..=8` drawn from the catalog vocabulary.
///
/// # Panics
///
/// Panics if the catalog produces no effects. Benchmark setup failures are fatal.
#[must_use]
pub fn sample_effect_sets(catalog: &Catalog) -> Vec<EffectSet> {
    let vocabulary: Vec<Effect> = catalog.rules().known_effects();
    assert!(!vocabulary.is_empty(), "catalog has no effects");
    (1..=8)
        .map(|size| {
            let picks = (0..size).map(|i| vocabulary[(i * 7 + size) % vocabulary.len()].clone());
            EffectSet::try_from_effects(picks).expect("at most eight picks")
        })
        .collect()
}
