//! Serde helpers for keeping the JSON shape the JavaScript side expects
//!
//! Frets cross the boundary as `number | "X"`, with `0` meaning open.

use serde::{Deserialize, Serialize};

use super::core::{Fret, StringState, MUTED_TOKEN};
use super::errors::ChordError;

/// Wire form of a [`Fret`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawFret {
    Number(u8),
    Text(String),
}

impl From<Fret> for RawFret {
    fn from(fret: Fret) -> Self {
        match fret {
            Fret::Muted => RawFret::Text(MUTED_TOKEN.to_string()),
            Fret::Open => RawFret::Number(0),
            Fret::Fretted(n) => RawFret::Number(n.get()),
        }
    }
}

impl TryFrom<RawFret> for Fret {
    type Error = ChordError;

    fn try_from(raw: RawFret) -> Result<Self, Self::Error> {
        match raw {
            RawFret::Number(n) => Ok(Fret::at(n)),
            RawFret::Text(text) => Fret::parse_token(&text),
        }
    }
}

/// Wire form of a [`StringState`]
///
/// Hosts may send a finger on an open or muted string, or `0` for "no
/// finger"; both are dropped on the way in.
#[derive(Deserialize)]
pub struct RawStringState {
    fret: Fret,
    #[serde(default)]
    finger: Option<u8>,
}

impl From<RawStringState> for StringState {
    fn from(raw: RawStringState) -> Self {
        StringState::open()
            .with_fret(raw.fret)
            .with_finger(raw.finger.filter(|f| *f > 0))
    }
}
