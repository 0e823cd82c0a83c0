//! Chord names and catalog entries
//!
//! Chords are keyed by a structured name `root,quality,tension,bass`
//! (e.g. `"D,m,7,"` for Dm7, `"C,,,"` for C major). Empty parts are allowed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::core::{
    to_low_to_high, Fret, GuitarStrings, StringState, MUTED_TOKEN, STRING_COUNT,
};
use super::errors::{ChordError, Result};

/// A structured chord key split into its four parts
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChordName {
    pub root: String,
    pub quality: String,
    pub tension: String,
    pub bass: String,
}

impl ChordName {
    /// Split a structured key; missing trailing parts are empty
    pub fn parse(key: &str) -> Self {
        let mut parts = key.split(',');
        let mut next = || parts.next().unwrap_or_default().to_string();
        Self {
            root: next(),
            quality: next(),
            tension: next(),
            bass: next(),
        }
    }
}

impl fmt::Display for ChordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.root, self.quality, self.tension)?;
        if !self.bass.is_empty() {
            write!(f, "/{}", self.bass)?;
        }
        Ok(())
    }
}

/// Turn a structured key into display text (`"D,m,7,"` -> `"Dm7"`)
///
/// A key that formats to nothing is returned unchanged.
pub fn format_name(key: &str) -> String {
    let name = ChordName::parse(key).to_string();
    if name.is_empty() {
        key.to_string()
    } else {
        name
    }
}

/// One named chord shape from the catalog
///
/// `strings` and `fingering` hold six space-separated tokens each, low E first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChordEntry {
    #[serde(rename = "chordName", alias = "name")]
    pub chord_name: String,
    pub strings: String,
    pub fingering: String,
}

impl ChordEntry {
    pub fn new(chord_name: &str, strings: &str, fingering: &str) -> Self {
        Self {
            chord_name: chord_name.to_string(),
            strings: strings.to_string(),
            fingering: fingering.to_string(),
        }
    }

    pub fn display_name(&self) -> String {
        format_name(&self.chord_name)
    }

    pub fn root(&self) -> &str {
        self.chord_name.split(',').next().unwrap_or_default()
    }

    /// Parsed fret pattern, low E first
    pub fn frets(&self) -> Result<[Fret; STRING_COUNT]> {
        let tokens = split_tokens(&self.strings, "strings")?;
        let mut frets = [Fret::Open; STRING_COUNT];
        for (slot, token) in frets.iter_mut().zip(tokens) {
            *slot = Fret::parse_token(token)?;
        }
        Ok(frets)
    }

    /// Parsed finger assignments, low E first
    pub fn fingers(&self) -> Result<[Option<u8>; STRING_COUNT]> {
        let tokens = split_tokens(&self.fingering, "fingering")?;
        let mut fingers = [None; STRING_COUNT];
        for (slot, token) in fingers.iter_mut().zip(tokens) {
            *slot = parse_finger_token(token)?;
        }
        Ok(fingers)
    }

    /// Build the editor's string array (high E first) from this entry
    pub fn to_strings(&self) -> Result<GuitarStrings> {
        let frets = self.frets()?;
        let fingers = self.fingers()?;

        let mut low_to_high = [StringState::open(); STRING_COUNT];
        for (i, state) in low_to_high.iter_mut().enumerate() {
            *state = StringState::open().with_fret(frets[i]).with_finger(fingers[i]);
        }
        Ok(to_low_to_high(&low_to_high))
    }
}

fn split_tokens<'a>(pattern: &'a str, field: &'static str) -> Result<Vec<&'a str>> {
    let tokens: Vec<&str> = pattern.split_whitespace().collect();
    if tokens.len() != STRING_COUNT {
        return Err(ChordError::TokenCount {
            field,
            expected: STRING_COUNT,
            got: tokens.len(),
        });
    }
    Ok(tokens)
}

fn parse_finger_token(token: &str) -> Result<Option<u8>> {
    if token == MUTED_TOKEN {
        return Ok(None);
    }
    token
        .parse::<u8>()
        .map(|finger| (finger > 0).then_some(finger))
        .map_err(|_| ChordError::InvalidFingerToken(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("C,,,"), "C");
        assert_eq!(format_name("D,m,7,"), "Dm7");
        assert_eq!(format_name("F,maj,7,"), "Fmaj7");
        assert_eq!(format_name("C,,,G"), "C/G");
        assert_eq!(format_name("A,m"), "Am");
    }

    #[test]
    fn test_format_name_empty_falls_back() {
        assert_eq!(format_name(""), "");
        assert_eq!(format_name(",,,"), ",,,");
    }

    #[test]
    fn test_entry_to_strings_reverses() {
        // C major: X 3 2 0 1 0 (low E first)
        let entry = ChordEntry::new("C,,,", "X 3 2 0 1 0", "X 3 2 X 1 X");
        let strings = entry.to_strings().unwrap();

        // Editing order starts at high E
        assert_eq!(strings[0], StringState::open());
        assert_eq!(strings[1], StringState::fretted(1, Some(1)));
        assert_eq!(strings[2], StringState::open());
        assert_eq!(strings[3], StringState::fretted(2, Some(2)));
        assert_eq!(strings[4], StringState::fretted(3, Some(3)));
        assert_eq!(strings[5], StringState::muted());
    }

    #[test]
    fn test_finger_on_open_string_dropped() {
        let entry = ChordEntry::new("T,,,", "0 0 0 0 0 1", "1 X X X X 2");
        let strings = entry.to_strings().unwrap();
        assert_eq!(strings[5], StringState::open());
        assert_eq!(strings[0], StringState::fretted(1, Some(2)));
    }

    #[test]
    fn test_bad_patterns() {
        let short = ChordEntry::new("C,,,", "X 3 2 0 1", "X 3 2 X 1 X");
        assert!(matches!(
            short.to_strings(),
            Err(ChordError::TokenCount { field: "strings", got: 5, .. })
        ));

        let bad_finger = ChordEntry::new("C,,,", "X 3 2 0 1 0", "X 3 2 X one X");
        assert!(matches!(bad_finger.to_strings(), Err(ChordError::InvalidFingerToken(_))));
    }
}
