//! Shared types for the WASM API
//!
//! View types sent to JavaScript. Catalog entries carry their formatted
//! display name so the UI never formats keys itself.

use serde::{Deserialize, Serialize};

use crate::catalog::ChordCategory;
use crate::models::ChordEntry;

/// A catalog entry as shown in lists and search results
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChordSummary {
    /// Structured key, e.g. `"A,m,,"`
    pub chord_name: String,
    /// Display name, e.g. `"Am"`
    pub display_name: String,
    pub strings: String,
    pub fingering: String,
}

impl From<&ChordEntry> for ChordSummary {
    fn from(entry: &ChordEntry) -> Self {
        Self {
            chord_name: entry.chord_name.clone(),
            display_name: entry.display_name(),
            strings: entry.strings.clone(),
            fingering: entry.fingering.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CategoryView {
    pub name: String,
    pub description: String,
    pub chords: Vec<ChordSummary>,
}

impl From<&ChordCategory> for CategoryView {
    fn from(category: &ChordCategory) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            chords: category.chords.iter().map(ChordSummary::from).collect(),
        }
    }
}

/// Chords sharing a root note
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RootGroup {
    pub root: String,
    pub chords: Vec<ChordSummary>,
}
