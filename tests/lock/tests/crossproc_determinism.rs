//! Cross-process determinism: spawns `mix_fixture` under several
//! environment variants and asserts identical stdout. Proves dispatch
//! results do not depend on cwd, locale, logging or scheduling.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Cargo builds the package's binaries before its integration tests and
/// exports their paths.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mix_fixture"))
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {} (overrides={env_overrides:?}): {e}", bin.display())
    });
    assert!(
        output.status.success(),
        "mix_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn fixture_output_is_identical_across_environments() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let baseline = run_variant(workspace_root(), &[]);
    let variants = [
        run_variant(tmp.path(), &[]),
        run_variant(workspace_root(), &[("LC_ALL", "C"), ("LANG", "C")]),
        run_variant(workspace_root(), &[("LC_ALL", "tr_TR.UTF-8"), ("RUST_LOG", "trace")]),
        run_variant(tmp.path(), &[("RUST_LOG", "mixpath_harness=debug")]),
    ];
    for (i, output) in variants.iter().enumerate() {
        assert_eq!(output, &baseline, "variant {i} diverged");
    }
}

#[test]
fn fixture_output_has_expected_keys() {
    let output = run_variant(workspace_root(), &[]);
    let keys: Vec<&str> = output
        .lines()
        .filter_map(|line| line.split_once('=').map(|(k, _)| k))
        .collect();
    assert_eq!(
        keys,
        [
            "catalog_digest",
            "goal_base",
            "goal_path",
            "goal_effects",
            "goal_depth",
            "goal_solution_digest",
            "payoff_base",
            "payoff_path",
            "payoff_effects",
            "payoff_profit",
            "payoff_total_expansions",
            "payoff_completed",
        ]
    );
    assert!(output.contains("catalog_digest=sha256:"));
}
