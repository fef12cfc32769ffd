//! Transition lock: snapshot replacement, capacity truncation, and
//! determinism of `apply` against the built-in rules.

use mixpath_kernel::catalog::{Catalog, IngredientRule};
use mixpath_kernel::effects::{canonicalize, EffectSet, MAX_EFFECTS};
use mixpath_kernel::operators::apply::{apply, apply_traced};

fn set(labels: &[&str]) -> EffectSet {
    EffectSet::try_from_labels(labels).unwrap()
}

fn builtin_rule(name: &str) -> IngredientRule {
    Catalog::builtin().rules().get(name).unwrap().clone()
}

#[test]
fn replace_then_add_is_sorted() {
    let rule = IngredientRule::new().replace("Calming", "Sneaky").add("Balding");
    assert_eq!(apply(&set(&["Calming"]), &rule), set(&["Balding", "Sneaky"]));
}

#[test]
fn addition_dropped_when_present_and_full() {
    let full = set(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let rule = IngredientRule::new().replace("A", "Z").add("H");
    let next = apply(&full, &rule);
    assert_eq!(next, set(&["B", "C", "D", "E", "F", "G", "H", "Z"]));
    assert_eq!(next.len(), MAX_EFFECTS);
}

#[test]
fn apply_is_deterministic_for_every_builtin_pair() {
    let catalog = Catalog::builtin();
    let starts = [
        set(&["Calming"]),
        set(&["Energizing", "Munchies", "Toxic"]),
        set(&["Anti-Gravity", "Balding", "Cyclopean", "Foggy", "Glowing", "Shrinking", "Spicy", "Zombifying"]),
    ];
    for start in &starts {
        for (_, rule) in catalog.rules().iter() {
            let once = apply(start, rule);
            assert_eq!(once, apply(start, rule));
            assert!(once.len() <= MAX_EFFECTS);
            assert_eq!(canonicalize(once.iter().cloned()), once.as_slice());
        }
    }
}

#[test]
fn builtin_cuke_does_not_chain_within_one_step() {
    // Cuke: Toxic→Euphoric and Euphoric→Laxative. Euphoric was not in the
    // snapshot, so the freshly produced Euphoric is not replaced again.
    let next = apply(&set(&["Toxic"]), &builtin_rule("Cuke"));
    assert_eq!(next, set(&["Energizing", "Euphoric"]));
}

#[test]
fn builtin_cuke_skips_replacement_onto_snapshot_member() {
    // Toxic→Euphoric is blocked because Euphoric is present; Euphoric itself
    // still turns into Laxative.
    let next = apply(&set(&["Euphoric", "Toxic"]), &builtin_rule("Cuke"));
    assert_eq!(next, set(&["Energizing", "Laxative", "Toxic"]));
}

#[test]
fn builtin_banana_blocks_replacement_onto_present_target() {
    // Calming→Sneaky is a no-op when Sneaky is already there.
    let next = apply(&set(&["Calming", "Sneaky"]), &builtin_rule("Banana"));
    assert_eq!(next, set(&["Calming", "Gingeritis", "Sneaky"]));
}

#[test]
fn traced_step_reports_what_fired() {
    let (next, record) = apply_traced(&set(&["Calming"]), &builtin_rule("Banana"));
    assert_eq!(next, set(&["Gingeritis", "Sneaky"]));
    assert_eq!(record.replaced.len(), 1);
    assert_eq!(record.replaced[0].source.as_str(), "Calming");
    assert_eq!(record.replaced[0].target.as_ref().map(|t| t.as_str()), Some("Sneaky"));
    assert_eq!(record.added.len(), 1);
    assert_eq!(record.added[0].as_str(), "Gingeritis");
}

#[test]
fn removal_entry_deletes_without_replacement() {
    let rule: IngredientRule =
        serde_json::from_str(r#"{"replaces":{"Toxic":""},"adds":[]}"#).unwrap();
    assert_eq!(apply(&set(&["Calming", "Toxic"]), &rule), set(&["Calming"]));
}
