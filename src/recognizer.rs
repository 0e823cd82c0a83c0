//! Chord recognizer
//!
//! Names a fingering by exact fret-pattern lookup in the catalog. Fingers are
//! ignored, and the first catalog entry with the pattern wins.

use crate::catalog::catalog;
use crate::models::{to_low_to_high, ChordEntry, GuitarStrings};

/// Catalog-format fret pattern for editor strings (e.g. `"X 3 2 0 1 0"`)
pub fn strings_to_pattern(strings: &GuitarStrings) -> String {
    to_low_to_high(strings)
        .iter()
        .map(|s| s.fret.token())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name of the catalog chord with exactly these frets, if any
pub fn recognize(strings: &GuitarStrings) -> Option<String> {
    recognize_in(strings, catalog().entries())
}

pub fn recognize_in(strings: &GuitarStrings, entries: &[ChordEntry]) -> Option<String> {
    let pattern = strings_to_pattern(strings);
    let found = entries
        .iter()
        .find(|entry| entry.strings == pattern)
        .map(ChordEntry::display_name);

    log::debug!("recognize('{}') -> {:?}", pattern, found);
    found
}
