//! Core data structures for the chord designer
//!
//! A guitar chord is edited as a fixed array of six [`StringState`]s.
//! The editing order is high-pitch string first (high E at index 0); the
//! chord catalog, the diagram and the audio side all work low-pitch string
//! first. [`to_low_to_high`] is the single place that crosses between them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

use super::errors::{ChordError, Result};
use super::serde_helpers::{RawFret, RawStringState};

/// Number of physical strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Highest fret the editor lets a user place a note on
pub const TOTAL_FRETS: u8 = 21;

/// Number of fretting fingers (index, middle, ring, pinky)
pub const FINGER_COUNT: u8 = 4;

/// Token used for a muted string (and "no finger") in catalog patterns
pub const MUTED_TOKEN: &str = "X";

/// String names in editing order (high E first)
pub const STRING_NAMES: [&str; STRING_COUNT] = ["E", "B", "G", "D", "A", "E"];

/// String names in catalog/diagram order (low E first)
pub const STRING_NAMES_LOW_TO_HIGH: [&str; STRING_COUNT] = ["E", "A", "D", "G", "B", "E"];

/// What a single string does in a chord
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "RawFret", into = "RawFret")]
pub enum Fret {
    /// Not played
    Muted,
    /// Played without a finger on it
    Open,
    /// Pressed at the given fret
    Fretted(NonZeroU8),
}

impl Fret {
    /// Build a fret from a plain number, treating 0 as an open string
    pub fn at(fret: u8) -> Self {
        match NonZeroU8::new(fret) {
            Some(n) => Fret::Fretted(n),
            None => Fret::Open,
        }
    }

    /// Fret number if the string is pressed
    pub fn number(&self) -> Option<u8> {
        match self {
            Fret::Fretted(n) => Some(n.get()),
            _ => None,
        }
    }

    pub fn is_fretted(&self) -> bool {
        matches!(self, Fret::Fretted(_))
    }

    /// Parse a catalog token: `X` muted, `0` open, any other integer fretted
    pub fn parse_token(token: &str) -> Result<Self> {
        if token == MUTED_TOKEN {
            return Ok(Fret::Muted);
        }
        token
            .parse::<u8>()
            .map(Fret::at)
            .map_err(|_| ChordError::InvalidFretToken(token.to_string()))
    }

    /// Catalog token for this fret (inverse of [`Fret::parse_token`])
    pub fn token(&self) -> String {
        match self {
            Fret::Muted => MUTED_TOKEN.to_string(),
            Fret::Open => "0".to_string(),
            Fret::Fretted(n) => n.get().to_string(),
        }
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

/// State of one string: where it is fretted and, optionally, by which finger
///
/// Only fretted strings carry a finger. The constructors keep that invariant;
/// [`StringState::with_fret`] drops the finger when a string becomes open or muted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(from = "RawStringState")]
pub struct StringState {
    pub fret: Fret,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finger: Option<u8>,
}

impl StringState {
    pub fn open() -> Self {
        Self { fret: Fret::Open, finger: None }
    }

    pub fn muted() -> Self {
        Self { fret: Fret::Muted, finger: None }
    }

    /// A string pressed at `fret` (0 gives an open string and discards the finger)
    pub fn fretted(fret: u8, finger: Option<u8>) -> Self {
        Self::open().with_fret(Fret::at(fret)).with_finger(finger)
    }

    /// Change the fret, keeping the finger only while the string stays fretted
    pub fn with_fret(self, fret: Fret) -> Self {
        let finger = if fret.is_fretted() { self.finger } else { None };
        Self { fret, finger }
    }

    /// Assign a finger; ignored for open and muted strings
    pub fn with_finger(self, finger: Option<u8>) -> Self {
        if self.fret.is_fretted() {
            Self { finger, ..self }
        } else {
            self
        }
    }
}

impl Default for StringState {
    fn default() -> Self {
        Self::open()
    }
}

/// All six strings in editing order (high E first)
pub type GuitarStrings = [StringState; STRING_COUNT];

/// Six open strings
pub fn open_strings() -> GuitarStrings {
    [StringState::open(); STRING_COUNT]
}

/// Reverse editing order into catalog order (low E first), or back again
pub fn to_low_to_high(strings: &GuitarStrings) -> GuitarStrings {
    let mut reversed = *strings;
    reversed.reverse();
    reversed
}

/// Convert a caller-supplied list into the fixed-length array
pub fn guitar_strings(strings: Vec<StringState>) -> Result<GuitarStrings> {
    let got = strings.len();
    strings.try_into().map_err(|_| ChordError::TokenCount {
        field: "strings",
        expected: STRING_COUNT,
        got,
    })
}
