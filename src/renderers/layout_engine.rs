//! Layout Engine - computes the logical layout of a chord diagram
//!
//! Takes the editor's strings and works out which frets are visible, which
//! strings get open/muted markers, where the barres are, and which dots a
//! barre already covers. Everything is in string/fret units; pixel geometry
//! is the display list's job.
//!
//! String indices in the layout are low E first (0 = low E, 5 = high E).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{to_low_to_high, Fret, GuitarStrings, StringState, STRING_COUNT};

/// Number of fret rows drawn in a diagram
pub const VISIBLE_FRETS: u8 = 5;

/// Logical layout of one chord diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiagramLayout {
    /// Lowest fret shown; 1 means the nut is drawn
    pub start_fret: u8,

    /// Open/muted markers above the nut, low E first
    pub markers: Vec<StringMarker>,

    /// Detected barres, in order of first appearance
    pub barres: Vec<Barre>,

    /// (fret, string) cells drawn by a barre rather than a dot
    pub covered: BTreeSet<CoveredCell>,

    /// One entry per fretted string, low E first
    pub dots: Vec<FingerDot>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MarkerKind {
    Open,
    Muted,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringMarker {
    pub string: usize,
    pub kind: MarkerKind,
}

/// One finger laid across several strings at one fret
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Barre {
    pub finger: u8,
    pub fret: u8,
    pub start_string: usize,
    pub end_string: usize,
    /// Lowest string the barre finger itself was assigned to
    pub anchor_string: usize,
}

impl Barre {
    pub fn spans(&self, string: usize) -> bool {
        (self.start_string..=self.end_string).contains(&string)
    }

    /// Midpoint of the bar, in string units
    pub fn center(&self) -> f32 {
        (self.start_string + self.end_string) as f32 / 2.0
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoveredCell {
    pub fret: u8,
    pub string: usize,
}

/// A fretted string and how to draw it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FingerDot {
    pub string: usize,
    pub fret: u8,
    /// 1-based row inside the visible window
    pub relative_fret: u16,
    pub finger: Option<u8>,
    /// Drawn as part of a barre; no separate dot
    pub covered: bool,
    /// Where the finger number goes (string units), if it is shown on this dot
    pub label_position: Option<f32>,
}

/// Compute the diagram layout for the editor's strings (high E first)
pub fn compute_layout(strings: &GuitarStrings) -> DiagramLayout {
    let strings = to_low_to_high(strings);
    let frets: Vec<Fret> = strings.iter().map(|s| s.fret).collect();

    let start_fret = window_start(&frets);
    let markers = string_markers(&frets);
    let barres = detect_barres(&strings);

    let mut covered = BTreeSet::new();
    for barre in &barres {
        for string in barre.start_string..=barre.end_string {
            covered.insert(CoveredCell { fret: barre.fret, string });
        }
    }

    let dots = strings
        .iter()
        .enumerate()
        .filter_map(|(string, state)| {
            let fret = state.fret.number()?;
            let barre = state
                .finger
                .and_then(|finger| barres.iter().find(|b| b.fret == fret && b.finger == finger));
            let label_position = match (state.finger, barre) {
                (None, _) => None,
                (Some(_), None) => Some(string as f32),
                (Some(_), Some(barre)) if barre.anchor_string == string => Some(barre.center()),
                (Some(_), Some(_)) => None,
            };

            Some(FingerDot {
                string,
                fret,
                relative_fret: u16::from(fret) - u16::from(start_fret) + 1,
                finger: state.finger,
                covered: covered.contains(&CoveredCell { fret, string }),
                label_position,
            })
        })
        .collect();

    DiagramLayout {
        start_fret,
        markers,
        barres,
        covered,
        dots,
    }
}

/// First fret of the visible window
///
/// Shapes that fit in the first [`VISIBLE_FRETS`] frets keep the nut in view;
/// anything reaching higher starts at its lowest fretted note.
pub fn window_start(frets: &[Fret]) -> u8 {
    let fretted: Vec<u8> = frets.iter().filter_map(Fret::number).collect();
    match (fretted.iter().min(), fretted.iter().max()) {
        (Some(&min), Some(&max)) if max > VISIBLE_FRETS => min.max(1),
        _ => 1,
    }
}

fn string_markers(frets: &[Fret]) -> Vec<StringMarker> {
    frets
        .iter()
        .enumerate()
        .filter_map(|(string, fret)| match fret {
            Fret::Open => Some(StringMarker { string, kind: MarkerKind::Open }),
            Fret::Muted => Some(StringMarker { string, kind: MarkerKind::Muted }),
            Fret::Fretted(_) => None,
        })
        .collect()
}

/// Group fingered positions by (finger, fret); groups of two or more strings
/// become barres
///
/// A barre's range is then widened over neighbouring strings that are fretted
/// at any fret, stopping at the first open or muted string.
fn detect_barres(strings: &[StringState; STRING_COUNT]) -> Vec<Barre> {
    // finger -> [(fret, strings)], both in order of first appearance
    let mut groups: Vec<(u8, Vec<(u8, Vec<usize>)>)> = Vec::new();

    for (string, state) in strings.iter().enumerate() {
        let (Some(fret), Some(finger)) = (state.fret.number(), state.finger) else {
            continue;
        };

        let idx = match groups.iter().position(|(f, _)| *f == finger) {
            Some(idx) => idx,
            None => {
                groups.push((finger, Vec::new()));
                groups.len() - 1
            }
        };

        let positions = &mut groups[idx].1;
        match positions.iter_mut().find(|(f, _)| *f == fret) {
            Some((_, touched)) => touched.push(string),
            None => positions.push((fret, vec![string])),
        }
    }

    let mut barres = Vec::new();
    for (finger, positions) in groups {
        for (fret, touched) in positions {
            if touched.len() < 2 {
                continue;
            }
            let (Some(&first), Some(&last)) = (touched.first(), touched.last()) else {
                continue;
            };

            let mut start_string = first;
            while start_string > 0 && strings[start_string - 1].fret.is_fretted() {
                start_string -= 1;
            }
            let mut end_string = last;
            while end_string + 1 < STRING_COUNT && strings[end_string + 1].fret.is_fretted() {
                end_string += 1;
            }

            barres.push(Barre {
                finger,
                fret,
                start_string,
                end_string,
                anchor_string: first,
            });
        }
    }

    barres
}
