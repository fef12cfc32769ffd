//! Build-graph isolation: the kernel knows nothing about search or
//! dispatch, and search knows nothing about dispatch.

use std::fmt::Write;
use std::fs;
use std::path::Path;

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

fn scan(dir: &Path, forbidden: &[&str], violations: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan(&path, forbidden, violations);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let Ok(content) = fs::read_to_string(&path) else {
                continue;
            };
            for (line_no, line) in content.lines().enumerate() {
                let trimmed = line.trim();
                if trimmed.starts_with("//") {
                    continue;
                }
                if forbidden.iter().any(|p| trimmed.contains(p)) {
                    violations.push(format!("{}:{}: {line}", path.display(), line_no + 1));
                }
            }
        }
    }
}

fn assert_clean(crate_dir: &str, forbidden: &[&str]) {
    let root = workspace_root().join(crate_dir);
    let mut violations = Vec::new();
    scan(&root.join("src"), forbidden, &mut violations);

    let manifest = fs::read_to_string(root.join("Cargo.toml")).expect("manifest exists");
    for (line_no, line) in manifest.lines().enumerate() {
        let dep = line.replace('-', "_");
        if forbidden.iter().any(|p| dep.contains(p)) {
            violations.push(format!("{crate_dir}/Cargo.toml:{}: {line}", line_no + 1));
        }
    }

    if !violations.is_empty() {
        let mut msg = format!("{crate_dir} reaches into a higher layer:\n");
        for v in &violations {
            let _ = writeln!(msg, "  {v}");
        }
        panic!("{msg}");
    }
}

#[test]
fn kernel_depends_on_no_other_member() {
    assert_clean("kernel", &["mixpath_search", "mixpath_harness"]);
}

#[test]
fn search_does_not_depend_on_harness() {
    assert_clean("search", &["mixpath_harness"]);
}
