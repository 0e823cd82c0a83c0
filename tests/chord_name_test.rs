// Chord key formatting

use chord_designer_wasm::catalog::catalog;
use chord_designer_wasm::models::{format_name, ChordName};

#[test]
fn test_catalog_display_names() {
    for entry in catalog().entries() {
        let name = entry.display_name();
        let parts = ChordName::parse(&entry.chord_name);

        assert!(!name.contains(','), "{}", name);
        assert!(name.starts_with(&parts.root));
        assert_eq!(name, format!("{}{}{}", parts.root, parts.quality, parts.tension));
    }
}

#[test]
fn test_common_names() {
    assert_eq!(format_name("C,,,"), "C");
    assert_eq!(format_name("A,m,,"), "Am");
    assert_eq!(format_name("D,m,7,"), "Dm7");
    assert_eq!(format_name("B,b,7b9,"), "Bb7b9");
}

#[test]
fn test_bass_note_is_slashed() {
    assert_eq!(format_name("C,,,G"), "C/G");
    assert_eq!(format_name("A,m,7,E"), "Am7/E");
}

#[test]
fn test_empty_keys_pass_through() {
    assert_eq!(format_name(""), "");
    assert_eq!(format_name(",,,"), ",,,");
}

#[test]
fn test_short_keys() {
    assert_eq!(format_name("E"), "E");
    assert_eq!(format_name("E,m"), "Em");
}
