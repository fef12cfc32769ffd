//! Goal-mode dispatch lock: canonical tie-break determinism, cross-base
//! cancellation, negative outcomes, request validation and report shape.

use std::num::NonZeroUsize;

use mixpath_harness::config::{DispatchConfig, TieBreak};
use mixpath_harness::dispatch::{run_goal, BaseFilter, DispatchError, GoalRequest};
use mixpath_harness::report::GoalOutcome;
use mixpath_kernel::catalog::{BaseProduct, Catalog};
use mixpath_kernel::effects::{EffectSet, Ingredient};
use mixpath_kernel::proof::hash::catalog_digest;
use mixpath_kernel::proof::replay::replay_verify;
use mixpath_search::stats::TerminationReason;

fn config(workers: usize) -> DispatchConfig {
    DispatchConfig {
        worker_threads: NonZeroUsize::new(workers),
        ..DispatchConfig::default()
    }
}

/// Builtin rules with two bases: "Quick Base" starts on the goal, "Deep Base"
/// can never reach it and would otherwise search the whole depth-16 space.
/// "Deep Base" sorts first, so it is always taken before the goal is found.
fn race_catalog() -> Catalog {
    let builtin = Catalog::builtin();
    let bases = [
        BaseProduct::new("Deep Base", EffectSet::try_from_labels(&["Calming"]).unwrap(), 38.0),
        BaseProduct::new("Quick Base", EffectSet::try_from_labels(&["Marker"]).unwrap(), 40.0),
    ];
    Catalog::new(builtin.rules().clone(), bases.into_iter().collect(), builtin.prices().clone()).unwrap()
}

fn assert_deep_base_cancelled(tie_break: TieBreak) {
    let catalog = race_catalog();
    let cfg = DispatchConfig {
        tie_break,
        ..config(2)
    };
    let report = run_goal(&catalog, &GoalRequest::new(["Marker"]), &cfg, &mut |_| {}).unwrap();

    let solution = report.solution().unwrap();
    assert_eq!(solution.base, "Quick Base");
    assert_eq!(solution.depth(), 0);

    let deep = report
        .bases
        .iter()
        .find(|b| b.base == "Deep Base")
        .expect("the first job is always started");
    assert!(!deep.found);
    assert_eq!(deep.stats.termination, TerminationReason::Cancelled, "{tie_break:?}");
}

#[test]
fn canonical_stops_losers_beyond_the_best_depth() {
    assert_deep_base_cancelled(TieBreak::Canonical);
}

#[test]
fn first_found_stops_every_other_base() {
    assert_deep_base_cancelled(TieBreak::FirstFound);
}

#[test]
fn canonical_winner_is_stable_across_runs_and_pool_sizes() {
    let catalog = Catalog::builtin();
    let request = GoalRequest::new(["Anti-Gravity", "Sneaky"]);
    let reference = run_goal(&catalog, &request, &config(1), &mut |_| {}).unwrap();
    for workers in [1, 2, 4, 8] {
        for _ in 0..3 {
            let report = run_goal(&catalog, &request, &config(workers), &mut |_| {}).unwrap();
            assert_eq!(report.outcome, reference.outcome, "workers={workers}");
        }
    }
}

#[test]
fn canonical_winner_is_minimal_over_single_base_searches() {
    let catalog = Catalog::builtin();
    let desired = ["Anti-Gravity", "Sneaky"];
    let report = run_goal(&catalog, &GoalRequest::new(desired), &config(4), &mut |_| {}).unwrap();
    let winner = report.solution().unwrap().clone();

    for name in catalog.bases().names() {
        let single = run_goal(
            &catalog,
            &GoalRequest::new(desired).with_bases(BaseFilter::Only(vec![name.to_owned()])),
            &config(1),
            &mut |_| {},
        )
        .unwrap();
        let solution = single.solution().unwrap();
        assert!(
            (winner.depth(), &winner.base, &winner.path) <= (solution.depth(), &solution.base, &solution.path),
            "{name} beats the dispatch winner"
        );
    }
}

#[test]
fn winner_replays_from_catalog() {
    let catalog = Catalog::builtin();
    let report = run_goal(&catalog, &GoalRequest::new(["Zombifying"]), &config(4), &mut |_| {}).unwrap();
    let solution = report.solution().unwrap();
    let trace = replay_verify(&catalog, &solution.base, &solution.path, &solution.effects).unwrap();
    assert_eq!(trace.steps.len(), solution.depth());
}

#[test]
fn start_state_satisfying_goal_wins_with_empty_path() {
    let catalog = Catalog::builtin();
    let report = run_goal(&catalog, &GoalRequest::new(["Energizing"]), &config(4), &mut |_| {}).unwrap();
    let solution = report.solution().unwrap();
    assert_eq!(solution.base, "Green Crack");
    assert_eq!(solution.path, Vec::<Ingredient>::new());
}

#[test]
fn depth_cap_zero_finds_only_start_states() {
    let catalog = Catalog::builtin();
    let request = GoalRequest::new(["Sneaky"]).with_max_depth(0);
    let report = run_goal(&catalog, &request, &config(2), &mut |_| {}).unwrap();
    assert_eq!(report.outcome, GoalOutcome::NoSolutionFound);
    assert!(report.bases.iter().all(|b| b.stats.expansions == 1));
    assert_eq!(report.progress.estimate, 0);
}

#[test]
fn unreachable_goal_is_an_outcome_not_an_error() {
    let catalog = Catalog::builtin();
    let request = GoalRequest::new(["Never-Produced"]).with_max_depth(3);
    let report = run_goal(&catalog, &request, &config(4), &mut |_| {}).unwrap();
    assert!(report.solution().is_none());
    assert_eq!(report.bases.len(), catalog.bases().len());
}

#[test]
fn oversized_goal_and_unknown_base_are_errors() {
    let catalog = Catalog::builtin();
    let big = GoalRequest::new(["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    assert!(matches!(
        run_goal(&catalog, &big, &config(1), &mut |_| {}),
        Err(DispatchError::GoalExceedsCapacity(_))
    ));

    let unknown = GoalRequest::new(["Sneaky"]).with_bases(BaseFilter::Only(vec!["Nope".into()]));
    assert!(matches!(
        run_goal(&catalog, &unknown, &config(1), &mut |_| {}),
        Err(DispatchError::UnknownBase { .. })
    ));
}

#[test]
fn first_found_still_satisfies_goal_at_some_depth() {
    let catalog = Catalog::builtin();
    let cfg = DispatchConfig {
        tie_break: TieBreak::FirstFound,
        ..config(4)
    };
    let report = run_goal(&catalog, &GoalRequest::new(["Anti-Gravity", "Sneaky"]), &cfg, &mut |_| {}).unwrap();
    let solution = report.solution().unwrap();
    replay_verify(&catalog, &solution.base, &solution.path, &solution.effects).unwrap();
}

#[test]
fn report_serializes_with_status_and_digest() {
    let catalog = Catalog::builtin();
    let report = run_goal(&catalog, &GoalRequest::new(["Sneaky"]), &config(2), &mut |_| {}).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&report.to_json_bytes().unwrap()).unwrap();
    assert_eq!(json["outcome"]["status"], "found");
    assert_eq!(json["outcome"]["solution"]["base"], "Granddaddy Purple");
    assert_eq!(json["outcome"]["solution"]["path"], serde_json::json!(["Paracetamol"]));
    assert_eq!(json["tie_break"], "canonical");
    assert_eq!(
        json["catalog_digest"],
        catalog_digest(&catalog).unwrap().as_str()
    );
}
