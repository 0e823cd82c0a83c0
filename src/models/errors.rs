//! Error types for the chord designer
//!
//! The pure core (formatting, search, recognition, layout) never fails.
//! These errors come from parsing catalog tokens, editor input validation
//! and preference (de)serialization.

use thiserror::Error;

/// Top-level error type
#[derive(Debug, Error)]
pub enum ChordError {
    /// A fret token that is neither `X` nor a non-negative integer
    #[error("Invalid fret token: '{0}'")]
    InvalidFretToken(String),

    /// A finger token that is neither `X` nor a small integer
    #[error("Invalid finger token: '{0}'")]
    InvalidFingerToken(String),

    /// A pattern or array with the wrong number of strings
    #[error("Expected {expected} {field} values, got {got}")]
    TokenCount {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("String index {0} out of range (0-5)")]
    StringIndexOutOfRange(usize),

    #[error("Fret {0} out of range (1-{max})", max = crate::models::TOTAL_FRETS)]
    FretOutOfRange(u8),

    /// Fretboard clicks address fret cells; the nut (fret 0) is not one
    #[error("Fret clicks must land on a fret cell (1-{max}), got {0}", max = crate::models::TOTAL_FRETS)]
    ClickOffFretboard(u8),

    #[error("Finger {0} out of range (1-{max})", max = crate::models::FINGER_COUNT)]
    FingerOutOfRange(u8),

    /// No catalog entry for a structured chord key
    #[error("Unknown chord: '{0}'")]
    UnknownChord(String),

    #[error("Invalid preferences: {0}")]
    Preferences(#[from] serde_json::Error),

    /// The embedded chord table failed to load
    #[error("Chord catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, ChordError>;
