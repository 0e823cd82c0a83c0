//! Stateful editor API
//!
//! The chord being designed lives in WASM. Every call returns the new
//! editor snapshot so the UI can redraw from a single value.

use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use wasm_bindgen::prelude::*;

use super::helpers::{chord_error, serialize, validation_error};
use crate::editor::ChordEditor;
use crate::models::{ChordError, Fret};
use crate::{wasm_error, wasm_info};

// WASM-owned editor (canonical source of truth)
lazy_static! {
    static ref EDITOR: Mutex<Option<ChordEditor>> = Mutex::new(None);
}

fn lock_editor() -> Result<MutexGuard<'static, Option<ChordEditor>>, JsValue> {
    EDITOR.lock().map_err(|e| {
        wasm_error!("Failed to lock editor: {}", e);
        JsValue::from_str("Failed to lock editor")
    })
}

/// Run `op` on the editor (created on first use) and return its snapshot
fn with_editor<F>(name: &str, op: F) -> Result<JsValue, JsValue>
where
    F: FnOnce(&mut ChordEditor) -> Result<(), ChordError>,
{
    let mut guard = lock_editor()?;
    let editor = guard.get_or_insert_with(ChordEditor::new);

    op(editor).map_err(|e| {
        wasm_error!("{} failed: {}", name, e);
        chord_error(e)
    })?;

    wasm_info!("{} -> '{}'", name, editor.chord_name());
    serialize(&editor.snapshot(), "Editor state serialization error")
}

/// Start over with six open strings and no history
#[wasm_bindgen(js_name = editorReset)]
pub fn editor_reset() -> Result<JsValue, JsValue> {
    *lock_editor()? = Some(ChordEditor::new());
    with_editor("editorReset", |_| Ok(()))
}

#[wasm_bindgen(js_name = editorState)]
pub fn editor_state() -> Result<JsValue, JsValue> {
    with_editor("editorState", |_| Ok(()))
}

/// Current diagram layout
#[wasm_bindgen(js_name = editorLayout)]
pub fn editor_layout() -> Result<JsValue, JsValue> {
    let mut guard = lock_editor()?;
    let editor = guard.get_or_insert_with(ChordEditor::new);
    serialize(&editor.layout(), "Layout serialization error")
}

/// Clear the chord; unlike `editorReset` this can be undone
#[wasm_bindgen(js_name = editorClear)]
pub fn editor_clear() -> Result<JsValue, JsValue> {
    with_editor("editorClear", |editor| {
        editor.reset();
        Ok(())
    })
}

/// Click a fret cell; `string` is 0 = high E
#[wasm_bindgen(js_name = editorClickFret)]
pub fn editor_click_fret(string: usize, fret: u8) -> Result<JsValue, JsValue> {
    with_editor("editorClickFret", |editor| editor.click_fret(string, fret))
}

#[wasm_bindgen(js_name = editorToggleOpenMute)]
pub fn editor_toggle_open_mute(string: usize) -> Result<JsValue, JsValue> {
    with_editor("editorToggleOpenMute", |editor| editor.toggle_open_mute(string))
}

/// Set a fret from a token: `"X"` muted, `"0"` open, `"1"`..`"21"` fretted
#[wasm_bindgen(js_name = editorSetFret)]
pub fn editor_set_fret(string: usize, token: &str) -> Result<JsValue, JsValue> {
    let fret = Fret::parse_token(token.trim()).map_err(chord_error)?;
    with_editor("editorSetFret", |editor| editor.set_fret(string, fret))
}

/// Assign a finger (1-4); 0 clears it
#[wasm_bindgen(js_name = editorSetFinger)]
pub fn editor_set_finger(string: usize, finger: u8) -> Result<JsValue, JsValue> {
    let finger = if finger == 0 { None } else { Some(finger) };
    with_editor("editorSetFinger", |editor| editor.set_finger(string, finger))
}

/// Load a catalog chord by its structured key
#[wasm_bindgen(js_name = editorSelectChord)]
pub fn editor_select_chord(key: &str) -> Result<JsValue, JsValue> {
    if key.is_empty() {
        return Err(validation_error("editorSelectChord: empty chord key"));
    }
    with_editor("editorSelectChord", |editor| editor.select_chord_by_key(key))
}

#[wasm_bindgen(js_name = editorSetCustomName)]
pub fn editor_set_custom_name(name: &str) -> Result<JsValue, JsValue> {
    with_editor("editorSetCustomName", |editor| {
        editor.set_custom_name(name);
        Ok(())
    })
}

#[wasm_bindgen(js_name = editorSetUseCustom)]
pub fn editor_set_use_custom(use_custom: bool) -> Result<JsValue, JsValue> {
    with_editor("editorSetUseCustom", |editor| {
        editor.set_use_custom(use_custom);
        Ok(())
    })
}

#[wasm_bindgen(js_name = editorUndo)]
pub fn editor_undo() -> Result<JsValue, JsValue> {
    with_editor("editorUndo", |editor| {
        editor.undo();
        Ok(())
    })
}

#[wasm_bindgen(js_name = editorRedo)]
pub fn editor_redo() -> Result<JsValue, JsValue> {
    with_editor("editorRedo", |editor| {
        editor.redo();
        Ok(())
    })
}
