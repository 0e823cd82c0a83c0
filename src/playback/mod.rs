//! Chord playback planning
//!
//! Turns a fingering into a timed list of notes for a strum. Actual sound
//! output belongs to the host (Web Audio or a soundfont player); this module
//! only decides what plays and when.

pub mod defaults;

use serde::{Deserialize, Serialize};

pub use defaults::*;

use crate::config::GuitarType;
use crate::models::{to_low_to_high, Fret, GuitarStrings};

/// How fast the pick crosses the strings
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StrumSpeed {
    #[default]
    Normal,
    Slow,
}

impl StrumSpeed {
    /// Delay between neighbouring strings in milliseconds
    pub fn delay_ms(&self) -> u32 {
        match self {
            StrumSpeed::Normal => NORMAL_STRUM_MS,
            StrumSpeed::Slow => SLOW_STRUM_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StrumOptions {
    pub speed: StrumSpeed,
    pub guitar: GuitarType,
    /// Seconds each note rings
    pub duration: f64,
    pub velocity: u8,
}

impl Default for StrumOptions {
    fn default() -> Self {
        Self {
            speed: StrumSpeed::default(),
            guitar: GuitarType::default(),
            duration: DEFAULT_NOTE_DURATION,
            velocity: DEFAULT_VELOCITY,
        }
    }
}

/// One note of a strum
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StrumNote {
    /// Physical string, low E = 0
    pub string: usize,
    /// 0 for an open string
    pub fret: u8,
    pub frequency: f64,
    pub midi_note: u8,
    /// Seconds from the start of the strum
    pub onset: f64,
    pub duration: f64,
    pub velocity: u8,
    /// General MIDI program of the instrument
    pub program: u8,
}

/// Plan a downstrum (low E to high E) over the sounding strings
///
/// Muted strings are skipped but keep their time slot, so the gap is
/// audible the way it is on a real guitar.
pub fn plan_strum(strings: &GuitarStrings, options: &StrumOptions) -> Vec<StrumNote> {
    let delay = f64::from(options.speed.delay_ms()) / 1000.0;

    let notes: Vec<StrumNote> = to_low_to_high(strings)
        .iter()
        .enumerate()
        .filter_map(|(string, state)| {
            let fret = match state.fret {
                Fret::Muted => return None,
                Fret::Open => 0,
                Fret::Fretted(n) => n.get(),
            };
            Some(StrumNote {
                string,
                fret,
                frequency: OPEN_STRING_FREQUENCIES[string] * 2f64.powf(f64::from(fret) / 12.0),
                midi_note: OPEN_STRING_MIDI_NOTES[string].saturating_add(fret),
                onset: string as f64 * delay,
                duration: options.duration,
                velocity: options.velocity,
                program: options.guitar.midi_program(),
            })
        })
        .collect();

    log::debug!("plan_strum: {} notes at {} ms", notes.len(), options.speed.delay_ms());
    notes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::models::{open_strings, StringState};

    #[test]
    fn test_open_strings_strum() {
        let notes = plan_strum(&open_strings(), &StrumOptions::default());
        assert_eq!(notes.len(), 6);
        assert_eq!(notes[0].midi_note, 40);
        assert_eq!(notes[5].midi_note, 64);
        assert!((notes[0].frequency - 82.41).abs() < 1e-9);
        assert!((notes[5].onset - 0.25).abs() < 1e-9);
        assert!(notes.iter().all(|n| n.program == 24 && n.duration == 2.0));
    }

    #[test]
    fn test_muted_strings_leave_gaps() {
        // C: X 3 2 0 1 0
        let strings = catalog().find("C,,,").unwrap().to_strings().unwrap();
        let notes = plan_strum(&strings, &StrumOptions::default());

        assert_eq!(notes.len(), 5);
        assert_eq!(notes[0].string, 1);
        assert!((notes[0].onset - 0.05).abs() < 1e-9);
        assert_eq!(notes[0].midi_note, 48);
        assert_eq!(notes.iter().map(|n| n.fret).collect::<Vec<_>>(), vec![3, 2, 0, 1, 0]);
    }

    #[test]
    fn test_octave_doubles_frequency() {
        let mut strings = open_strings();
        strings[5] = StringState::fretted(12, None);
        let notes = plan_strum(&strings, &StrumOptions::default());
        assert!((notes[0].frequency - 164.82).abs() < 1e-9);
        assert_eq!(notes[0].midi_note, 52);
    }

    #[test]
    fn test_slow_strum_and_instrument() {
        let options = StrumOptions {
            speed: StrumSpeed::Slow,
            guitar: GuitarType::ElectricGuitarClean,
            ..Default::default()
        };
        let notes = plan_strum(&open_strings(), &options);
        assert!((notes[1].onset - 0.2).abs() < 1e-9);
        assert!(notes.iter().all(|n| n.program == 27));
    }

    #[test]
    fn test_all_muted_is_silent() {
        let strings = [StringState::muted(); 6];
        assert!(plan_strum(&strings, &StrumOptions::default()).is_empty());
    }
}
