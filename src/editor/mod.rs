//! Chord editor state
//!
//! Holds the chord being designed plus its undo history. Every mutation
//! builds the next [`ChordState`], re-runs the recognizer when the strings
//! changed, and records the result in the history, so undo/redo restore the
//! name together with the fingering.

use serde::{Deserialize, Serialize};

use crate::models::{
    open_strings, ChordEntry, ChordError, Fret, GuitarStrings, Result, FINGER_COUNT,
    STRING_COUNT, TOTAL_FRETS,
};
use crate::recognizer::recognize;
use crate::renderers::layout_engine::{compute_layout, DiagramLayout};
use crate::undo::History;

/// Everything one undo step restores
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChordState {
    /// High E first
    pub strings: GuitarStrings,
    /// Catalog name for the current frets, if any
    pub detected_name: Option<String>,
    pub custom_name: String,
    /// Show the custom name even when the chord is recognized
    pub use_custom: bool,
}

impl Default for ChordState {
    fn default() -> Self {
        Self {
            strings: open_strings(),
            detected_name: None,
            custom_name: String::new(),
            use_custom: false,
        }
    }
}

impl ChordState {
    /// Name to show: custom when forced, else detected, else custom
    pub fn chord_name(&self) -> String {
        if self.use_custom {
            return self.custom_name.clone();
        }
        self.detected_name
            .clone()
            .unwrap_or_else(|| self.custom_name.clone())
    }

    fn with_strings(&self, strings: GuitarStrings) -> Self {
        Self {
            strings,
            detected_name: recognize(&strings),
            ..self.clone()
        }
    }
}

/// Snapshot sent to the UI after every operation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    #[serde(flatten)]
    pub state: ChordState,
    pub chord_name: String,
    pub can_undo: bool,
    pub can_redo: bool,
}

pub struct ChordEditor {
    history: History<ChordState>,
}

impl Default for ChordEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChordEditor {
    pub fn new() -> Self {
        Self {
            history: History::new(ChordState::default()),
        }
    }

    pub fn state(&self) -> &ChordState {
        self.history.present()
    }

    pub fn strings(&self) -> &GuitarStrings {
        &self.state().strings
    }

    pub fn chord_name(&self) -> String {
        self.state().chord_name()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            state: self.state().clone(),
            chord_name: self.chord_name(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    /// Diagram layout for the current strings
    pub fn layout(&self) -> DiagramLayout {
        compute_layout(self.strings())
    }

    /// Put `fret` on a string; open and muted clear the finger
    pub fn set_fret(&mut self, string: usize, fret: Fret) -> Result<()> {
        check_string(string)?;
        check_fret(fret)?;

        let mut strings = *self.strings();
        strings[string] = strings[string].with_fret(fret);
        self.commit_strings(strings);
        Ok(())
    }

    /// Assign (or with `None`, clear) the finger on a fretted string
    ///
    /// Does nothing on open or muted strings.
    pub fn set_finger(&mut self, string: usize, finger: Option<u8>) -> Result<()> {
        check_string(string)?;
        if let Some(finger) = finger {
            if finger == 0 || finger > FINGER_COUNT {
                return Err(ChordError::FingerOutOfRange(finger));
            }
        }

        let mut strings = *self.strings();
        strings[string] = strings[string].with_finger(finger);
        self.commit_strings(strings);
        Ok(())
    }

    /// Click on a fret cell
    ///
    /// Clicking the string's current fret cycles its finger
    /// (none, 1, 2, 3, 4, none); any other fret moves the string there with
    /// no finger. Fret 0 is not a cell and is rejected; use
    /// [`ChordEditor::toggle_open_mute`] for open strings.
    pub fn click_fret(&mut self, string: usize, fret: u8) -> Result<()> {
        check_string(string)?;
        let fret = Fret::at(fret);
        if !fret.is_fretted() {
            return Err(ChordError::ClickOffFretboard(0));
        }
        check_fret(fret)?;

        let current = self.strings()[string];
        if current.fret == fret {
            self.set_finger(string, next_finger(current.finger))
        } else {
            let mut strings = *self.strings();
            strings[string] = current.with_fret(fret).with_finger(None);
            self.commit_strings(strings);
            Ok(())
        }
    }

    /// Muted becomes open; open and fretted become muted and open respectively
    pub fn toggle_open_mute(&mut self, string: usize) -> Result<()> {
        check_string(string)?;
        let next = match self.strings()[string].fret {
            Fret::Muted => Fret::Open,
            Fret::Open => Fret::Muted,
            Fret::Fretted(_) => Fret::Open,
        };
        self.set_fret(string, next)
    }

    /// Load a catalog chord
    ///
    /// The entry's own name is used even if an earlier entry shares its
    /// frets. The custom name is cleared.
    pub fn select_chord(&mut self, entry: &ChordEntry) -> Result<()> {
        let strings = entry.to_strings()?;
        log::info!("select_chord: {}", entry.chord_name);
        self.history.set(ChordState {
            strings,
            detected_name: Some(entry.display_name()),
            custom_name: String::new(),
            use_custom: false,
        });
        Ok(())
    }

    /// Load a catalog chord by its structured key (`"A,m,,"`)
    pub fn select_chord_by_key(&mut self, key: &str) -> Result<()> {
        let entry = crate::catalog::catalog()
            .find(key)
            .ok_or_else(|| ChordError::UnknownChord(key.to_string()))?;
        self.select_chord(entry)
    }

    pub fn set_custom_name(&mut self, name: &str) {
        let mut next = self.state().clone();
        next.custom_name = name.to_string();
        self.history.set(next);
    }

    pub fn set_use_custom(&mut self, use_custom: bool) {
        let mut next = self.state().clone();
        next.use_custom = use_custom;
        self.history.set(next);
    }

    /// Back to six open strings with no name (undoable)
    pub fn reset(&mut self) {
        self.history.set(ChordState::default());
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn commit_strings(&mut self, strings: GuitarStrings) {
        if strings == *self.strings() {
            return;
        }
        let next = self.state().with_strings(strings);
        log::debug!("strings changed, detected {:?}", next.detected_name);
        self.history.set(next);
    }
}

fn check_string(string: usize) -> Result<()> {
    if string >= STRING_COUNT {
        return Err(ChordError::StringIndexOutOfRange(string));
    }
    Ok(())
}

fn check_fret(fret: Fret) -> Result<()> {
    match fret.number() {
        Some(n) if n > TOTAL_FRETS => Err(ChordError::FretOutOfRange(n)),
        _ => Ok(()),
    }
}

fn next_finger(finger: Option<u8>) -> Option<u8> {
    match finger {
        None => Some(1),
        Some(f) if f < FINGER_COUNT => Some(f + 1),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StringState;

    /// Build C major by hand (editor order is high E first)
    fn play_c(editor: &mut ChordEditor) {
        editor.toggle_open_mute(5).unwrap();
        editor.click_fret(4, 3).unwrap();
        editor.click_fret(3, 2).unwrap();
        editor.click_fret(1, 1).unwrap();
    }

    #[test]
    fn test_initial_state() {
        let editor = ChordEditor::new();
        assert_eq!(*editor.strings(), open_strings());
        assert_eq!(editor.state().detected_name, None);
        assert_eq!(editor.chord_name(), "");
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_recognizes_as_you_edit() {
        let mut editor = ChordEditor::new();
        play_c(&mut editor);
        assert_eq!(editor.state().detected_name.as_deref(), Some("C"));
        assert_eq!(editor.chord_name(), "C");

        editor.click_fret(0, 3).unwrap();
        assert_eq!(editor.state().detected_name, None);
    }

    #[test]
    fn test_click_cycles_fingers() {
        let mut editor = ChordEditor::new();
        editor.click_fret(2, 5).unwrap();
        assert_eq!(editor.strings()[2], StringState::fretted(5, None));

        let mut seen = Vec::new();
        for _ in 0..5 {
            editor.click_fret(2, 5).unwrap();
            seen.push(editor.strings()[2].finger);
        }
        assert_eq!(seen, vec![Some(1), Some(2), Some(3), Some(4), None]);

        // A different fret drops the finger
        editor.click_fret(2, 5).unwrap();
        editor.click_fret(2, 6).unwrap();
        assert_eq!(editor.strings()[2], StringState::fretted(6, None));
    }

    #[test]
    fn test_toggle_open_mute() {
        let mut editor = ChordEditor::new();
        editor.toggle_open_mute(0).unwrap();
        assert_eq!(editor.strings()[0].fret, Fret::Muted);
        editor.toggle_open_mute(0).unwrap();
        assert_eq!(editor.strings()[0].fret, Fret::Open);

        editor.set_fret(0, Fret::at(4)).unwrap();
        editor.set_finger(0, Some(2)).unwrap();
        editor.toggle_open_mute(0).unwrap();
        assert_eq!(editor.strings()[0], StringState::open());
    }

    #[test]
    fn test_validation() {
        let mut editor = ChordEditor::new();
        assert!(matches!(
            editor.set_fret(6, Fret::Open),
            Err(ChordError::StringIndexOutOfRange(6))
        ));
        assert!(matches!(
            editor.set_fret(0, Fret::at(22)),
            Err(ChordError::FretOutOfRange(22))
        ));
        assert!(editor.set_fret(0, Fret::at(21)).is_ok());
        assert!(matches!(
            editor.set_finger(0, Some(5)),
            Err(ChordError::FingerOutOfRange(5))
        ));
        let err = editor.click_fret(0, 0).unwrap_err();
        assert!(matches!(err, ChordError::ClickOffFretboard(0)));
        assert_eq!(err.to_string(), "Fret clicks must land on a fret cell (1-21), got 0");
    }

    #[test]
    fn test_finger_on_open_string_is_ignored() {
        let mut editor = ChordEditor::new();
        editor.set_finger(3, Some(1)).unwrap();
        assert_eq!(editor.strings()[3].finger, None);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_select_chord_keeps_entry_name() {
        let mut editor = ChordEditor::new();
        editor.set_custom_name("mine");
        // A7#9 shares its frets with A7b9, which comes first
        editor.select_chord_by_key("A,,7#9,").unwrap();
        assert_eq!(editor.chord_name(), "A7#9");
        assert_eq!(editor.state().custom_name, "");

        assert!(matches!(
            editor.select_chord_by_key("H,,,"),
            Err(ChordError::UnknownChord(_))
        ));
    }

    #[test]
    fn test_custom_name() {
        let mut editor = ChordEditor::new();
        editor.set_custom_name("Mystery");
        assert_eq!(editor.chord_name(), "Mystery");

        play_c(&mut editor);
        assert_eq!(editor.chord_name(), "C");
        editor.set_use_custom(true);
        assert_eq!(editor.chord_name(), "Mystery");
    }

    #[test]
    fn test_undo_restores_name() {
        let mut editor = ChordEditor::new();
        play_c(&mut editor);
        editor.click_fret(0, 3).unwrap();
        assert_eq!(editor.chord_name(), "");

        assert!(editor.undo());
        assert_eq!(editor.chord_name(), "C");
        assert!(editor.redo());
        assert_eq!(editor.chord_name(), "");
    }

    #[test]
    fn test_reset_is_undoable() {
        let mut editor = ChordEditor::new();
        play_c(&mut editor);
        editor.reset();
        assert_eq!(*editor.state(), ChordState::default());
        assert!(editor.undo());
        assert_eq!(editor.chord_name(), "C");
    }

    #[test]
    fn test_layout_follows_state() {
        let mut editor = ChordEditor::new();
        editor.select_chord_by_key("F,,,").unwrap();
        let layout = editor.layout();
        assert_eq!(layout.start_fret, 1);
        assert_eq!(layout.barres.len(), 1);
    }

    #[test]
    fn test_snapshot() {
        let mut editor = ChordEditor::new();
        play_c(&mut editor);
        let json = serde_json::to_value(editor.snapshot()).unwrap();
        assert_eq!(json["chordName"], "C");
        assert_eq!(json["detectedName"], "C");
        assert_eq!(json["canUndo"], true);
        assert_eq!(json["strings"][5]["fret"], "X");
    }
}
