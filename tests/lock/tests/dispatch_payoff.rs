//! Payoff-mode dispatch lock: profit arithmetic through the full stack,
//! depth-zero boundary, cross-base tie-break, and catalogs loaded from disk.

use std::io::Write;
use std::num::NonZeroUsize;

use mixpath_harness::config::DispatchConfig;
use mixpath_harness::dispatch::{run_payoff, BaseFilter, PayoffRequest};
use mixpath_harness::report::PayoffOutcome;
use mixpath_kernel::catalog::Catalog;
use mixpath_kernel::effects::Ingredient;

const SINGLE: &str = r#"{
    "bases": { "OG Kush": { "effects": [], "price": 38 } },
    "ingredients": { "Cuke": { "adds": ["Gingeritis"] } },
    "prices": {
        "ingredient_costs": { "Cuke": 2 },
        "effect_multipliers": { "Gingeritis": 0.20 }
    }
}"#;

const TWINS: &str = r#"{
    "bases": {
        "Zeta": { "effects": ["Calming"], "price": 50 },
        "Alpha": { "effects": ["Calming"], "price": 50 }
    },
    "ingredients": { "Water": {} },
    "prices": { "effect_multipliers": { "Calming": 0.10 } }
}"#;

fn config(workers: usize) -> DispatchConfig {
    DispatchConfig {
        worker_threads: NonZeroUsize::new(workers),
        ..DispatchConfig::default()
    }
}

fn load(json: &str) -> Catalog {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    let bytes = std::fs::read(file.path()).unwrap();
    Catalog::from_json_slice(&bytes).unwrap()
}

#[test]
fn single_ingredient_profit() {
    let catalog = load(SINGLE);
    let report = run_payoff(&catalog, &PayoffRequest::default(), &config(1), &mut |_| {}).unwrap();
    let best = report.best().unwrap();
    assert!((best.profit - 43.6).abs() < 1e-9, "profit {}", best.profit);
    assert_eq!(best.solution.path, vec![Ingredient::new("Cuke")]);
}

#[test]
fn depth_zero_returns_start_state_evaluation() {
    let catalog = load(SINGLE);
    let request = PayoffRequest::default().with_max_depth(0);
    let report = run_payoff(&catalog, &request, &config(1), &mut |_| {}).unwrap();
    let best = report.best().unwrap();
    assert!(best.solution.path.is_empty());
    assert!((best.profit - 38.0).abs() < 1e-9);
}

#[test]
fn equal_profits_break_ties_by_base_name() {
    let catalog = load(TWINS);
    for workers in [1, 2] {
        let report = run_payoff(&catalog, &PayoffRequest::default(), &config(workers), &mut |_| {}).unwrap();
        let best = report.best().unwrap();
        assert_eq!(best.solution.base, "Alpha");
        assert!(best.solution.path.is_empty(), "start state is reached first");
    }
}

#[test]
fn builtin_payoff_is_reproducible() {
    let catalog = Catalog::builtin();
    let request = PayoffRequest::default().with_max_depth(3);
    let first = run_payoff(&catalog, &request, &config(1), &mut |_| {}).unwrap();
    let second = run_payoff(&catalog, &request, &config(4), &mut |_| {}).unwrap();
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.bases, second.bases);
    assert_eq!(first.progress.completed, second.progress.completed);
}

#[test]
fn payoff_never_beats_deeper_cap() {
    let catalog = Catalog::builtin();
    let shallow = run_payoff(&catalog, &PayoffRequest::default().with_max_depth(1), &config(4), &mut |_| {})
        .unwrap();
    let deeper = run_payoff(&catalog, &PayoffRequest::default().with_max_depth(2), &config(4), &mut |_| {})
        .unwrap();
    assert!(deeper.best().unwrap().profit >= shallow.best().unwrap().profit);
}

#[test]
fn empty_base_selection_is_no_profitable_mix() {
    let catalog = Catalog::builtin();
    let request = PayoffRequest::default().with_bases(BaseFilter::Only(Vec::new()));
    let report = run_payoff(&catalog, &request, &config(2), &mut |_| {}).unwrap();
    assert_eq!(report.outcome, PayoffOutcome::NoProfitableMixFound);
    let json: serde_json::Value = serde_json::from_slice(&report.to_json_bytes().unwrap()).unwrap();
    assert_eq!(json["outcome"]["status"], "no_profitable_mix_found");
}
