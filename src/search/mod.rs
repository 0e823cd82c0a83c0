//! Chord search
//!
//! Substring search over the catalog's display names. Both sides are
//! compared through [`normalize`], which ignores case, slashes and
//! surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::catalog;
use crate::models::ChordEntry;

/// Comparison key for search: lowercased, `/` removed, trimmed
///
/// `"C/G"` and `"CG"` normalize to the same key. Never used for display.
pub fn normalize(text: &str) -> String {
    text.to_lowercase().replace('/', "").trim().to_string()
}

/// Search the process-wide catalog
pub fn search(query: &str) -> Vec<ChordEntry> {
    search_in(query, catalog().entries())
}

/// Search a list of entries
///
/// An entry matches when its normalized name contains the query or the query
/// contains its name. Results are ordered exact match first, then prefix
/// matches, then shorter display names; ties keep catalog order.
/// A blank query matches nothing.
pub fn search_in(query: &str, entries: &[ChordEntry]) -> Vec<ChordEntry> {
    let query = normalize(query);
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(Rank, &ChordEntry)> = entries
        .iter()
        .filter_map(|entry| {
            let display = entry.display_name();
            let name = normalize(&display);
            if name.contains(&query) || query.contains(&name) {
                Some((Rank::new(&name, &display, &query), entry))
            } else {
                None
            }
        })
        .collect();

    // sort_by is stable, so equal ranks stay in catalog order
    matches.sort_by(|(a, _), (b, _)| a.cmp(b));

    log::debug!("search('{}'): {} matches", query, matches.len());
    matches.into_iter().map(|(_, entry)| entry.clone()).collect()
}

#[derive(Debug, PartialEq, Eq)]
struct Rank {
    exact: bool,
    prefix: bool,
    display_len: usize,
}

impl Rank {
    fn new(name: &str, display: &str, query: &str) -> Self {
        Self {
            exact: name == query,
            prefix: name.starts_with(query),
            display_len: display.chars().count(),
        }
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .exact
            .cmp(&self.exact)
            .then(other.prefix.cmp(&self.prefix))
            .then(self.display_len.cmp(&other.display_len))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A run of text that does or does not match the search query
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub matched: bool,
}

/// Split `text` around case-insensitive occurrences of `query`
pub fn highlight(text: &str, query: &str) -> Vec<HighlightSegment> {
    let query = query.trim();
    if query.is_empty() {
        return vec![HighlightSegment { text: text.to_string(), matched: false }];
    }

    let haystack = text.to_ascii_lowercase();
    let needle = query.to_ascii_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for (start, found) in haystack.match_indices(&needle) {
        if start > cursor {
            segments.push(HighlightSegment { text: text[cursor..start].to_string(), matched: false });
        }
        let end = start + found.len();
        segments.push(HighlightSegment { text: text[start..end].to_string(), matched: true });
        cursor = end;
    }
    if cursor < text.len() {
        segments.push(HighlightSegment { text: text[cursor..].to_string(), matched: false });
    }

    segments
}
