// Recognition over the whole built-in catalog

use std::collections::HashSet;

use chord_designer_wasm::catalog::catalog;
use chord_designer_wasm::models::{open_strings, StringState};
use chord_designer_wasm::recognizer::{recognize, strings_to_pattern};

#[test]
fn test_every_unshadowed_entry_recognizes_itself() {
    let shadowed: HashSet<String> = catalog()
        .shadowed()
        .into_iter()
        .map(|s| s.chord_name)
        .collect();

    for entry in catalog().entries() {
        if shadowed.contains(&entry.chord_name) {
            continue;
        }
        let strings = entry.to_strings().expect("catalog entries parse");
        assert_eq!(
            recognize(&strings),
            Some(entry.display_name()),
            "{} ({})",
            entry.chord_name,
            entry.strings
        );
    }
}

#[test]
fn test_shadowed_entries_resolve_to_first_entry() {
    for shadow in catalog().shadowed() {
        let entry = catalog().find(&shadow.chord_name).unwrap();
        let first = catalog().find(&shadow.shadowed_by).unwrap();
        let strings = entry.to_strings().unwrap();
        assert_eq!(recognize(&strings), Some(first.display_name()));
    }
}

#[test]
fn test_pattern_round_trips_catalog_strings() {
    for entry in catalog().entries() {
        let strings = entry.to_strings().unwrap();
        assert_eq!(strings_to_pattern(&strings), entry.strings);
    }
}

#[test]
fn test_fingers_are_ignored() {
    for entry in catalog().entries() {
        let mut strings = entry.to_strings().unwrap();
        let with_fingers = recognize(&strings);
        for state in strings.iter_mut() {
            *state = state.with_finger(None);
        }
        assert_eq!(recognize(&strings), with_fingers, "{}", entry.chord_name);
    }
}

#[test]
fn test_unknown_shapes() {
    assert_eq!(recognize(&open_strings()), None);
    assert_eq!(recognize(&[StringState::muted(); 6]), None);
    assert_eq!(recognize(&[StringState::fretted(21, None); 6]), None);
}
