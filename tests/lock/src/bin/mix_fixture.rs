//! Binary that runs goal and payoff dispatches over the built-in catalog
//! and prints deterministic output lines for cross-process verification.
//!
//! Usage: `mix_fixture`
//!
//! Output: key=value lines on stdout. Logs (`RUST_LOG`) go to stderr.

use mixpath_harness::config::DispatchConfig;
use mixpath_harness::dispatch::{run_goal, run_payoff, GoalRequest, PayoffRequest};
use mixpath_kernel::catalog::Catalog;
use mixpath_kernel::effects::Ingredient;
use tracing_subscriber::EnvFilter;

fn join_path(path: &[Ingredient]) -> String {
    path.iter()
        .map(Ingredient::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin();
    let config = DispatchConfig::default();

    let goal = run_goal(
        &catalog,
        &GoalRequest::new(["Anti-Gravity", "Sneaky"]),
        &config,
        &mut |_| {},
    )
    .expect("goal dispatch failed");
    let solution = goal.solution().expect("goal must be reachable");

    println!("catalog_digest={}", goal.catalog_digest.as_str());
    println!("goal_base={}", solution.base);
    println!("goal_path={}", join_path(&solution.path));
    println!("goal_effects={}", solution.effects);
    println!("goal_depth={}", solution.depth());
    println!(
        "goal_solution_digest={}",
        solution.digest().expect("solution digest failed").as_str()
    );

    let payoff = run_payoff(
        &catalog,
        &PayoffRequest::default().with_max_depth(3),
        &config,
        &mut |_| {},
    )
    .expect("payoff dispatch failed");
    let best = payoff.best().expect("payoff must produce a best mix");
    let expansions: u64 = payoff.bases.iter().map(|b| b.stats.expansions).sum();

    println!("payoff_base={}", best.solution.base);
    println!("payoff_path={}", join_path(&best.solution.path));
    println!("payoff_effects={}", best.solution.effects);
    println!("payoff_profit={:.6}", best.profit);
    println!("payoff_total_expansions={expansions}");
    println!("payoff_completed={}", payoff.progress.completed);
}
