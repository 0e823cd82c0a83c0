//! Chord catalog
//!
//! A fixed, hand-curated table of chord shapes, embedded from `chords.yaml`
//! and parsed once per process. Entries are grouped into display categories;
//! flattening the categories in file order gives the catalog order, which is
//! also the recognizer's tie-break.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ChordEntry, ChordError, Result};

const CHORDS_YAML: &str = include_str!("chords.yaml");

/// Root notes in display order
pub const ROOT_NOTES: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

static CATALOG: Lazy<Catalog> = Lazy::new(|| match Catalog::from_yaml(CHORDS_YAML) {
    Ok(catalog) => {
        log::debug!(
            "Chord catalog loaded: {} entries, {} shadowed patterns",
            catalog.len(),
            catalog.shadowed().len()
        );
        catalog
    }
    Err(e) => {
        log::error!("Failed to load chord catalog: {}", e);
        Catalog::default()
    }
});

/// The process-wide chord catalog
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// A named group of chords for browsing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordCategory {
    pub name: String,
    pub description: String,
    pub chords: Vec<ChordEntry>,
}

#[derive(Deserialize)]
struct CatalogFile {
    categories: Vec<ChordCategory>,
}

/// An entry the recognizer can never return because an earlier entry has
/// the same fret pattern
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShadowedEntry {
    pub chord_name: String,
    pub shadowed_by: String,
    pub strings: String,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    categories: Vec<ChordCategory>,
    entries: Vec<ChordEntry>,
}

impl Catalog {
    /// Parse and validate a catalog table
    ///
    /// Every entry must have six fret tokens and six finger tokens.
    pub fn from_yaml(source: &str) -> Result<Self> {
        let file: CatalogFile = serde_yaml::from_str(source)
            .map_err(|e| ChordError::Catalog(format!("Failed to parse chord table: {}", e)))?;

        let mut entries = Vec::new();
        for category in &file.categories {
            for entry in &category.chords {
                entry.frets().and_then(|_| entry.fingers()).map_err(|e| {
                    ChordError::Catalog(format!("{} ({}): {}", entry.chord_name, category.name, e))
                })?;
                entries.push(entry.clone());
            }
        }

        Ok(Self {
            categories: file.categories,
            entries,
        })
    }

    pub fn entries(&self) -> &[ChordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Categories that contain at least one chord
    pub fn categories(&self) -> Vec<&ChordCategory> {
        self.categories
            .iter()
            .filter(|category| !category.chords.is_empty())
            .collect()
    }

    /// Entries grouped by root note, in [`ROOT_NOTES`] order
    ///
    /// Matching is on the whole root part, so `Bb` chords are not listed under `B`.
    pub fn by_root(&self) -> Vec<(&'static str, Vec<&ChordEntry>)> {
        ROOT_NOTES
            .iter()
            .map(|&root| {
                let prefix = format!("{},", root);
                let chords = self
                    .entries
                    .iter()
                    .filter(|entry| entry.chord_name.starts_with(&prefix))
                    .collect();
                (root, chords)
            })
            .collect()
    }

    /// Look up an entry by its structured key (e.g. `"A,m,,"`)
    pub fn find(&self, chord_name: &str) -> Option<&ChordEntry> {
        self.entries.iter().find(|entry| entry.chord_name == chord_name)
    }

    /// Entries hidden from recognition by an earlier entry with the same frets
    pub fn shadowed(&self) -> Vec<ShadowedEntry> {
        let mut first_by_pattern: HashMap<&str, &str> = HashMap::new();
        let mut shadowed = Vec::new();

        for entry in &self.entries {
            match first_by_pattern.get(entry.strings.as_str()) {
                Some(first) => shadowed.push(ShadowedEntry {
                    chord_name: entry.chord_name.clone(),
                    shadowed_by: first.to_string(),
                    strings: entry.strings.clone(),
                }),
                None => {
                    first_by_pattern.insert(&entry.strings, &entry.chord_name);
                }
            }
        }

        shadowed
    }
}
