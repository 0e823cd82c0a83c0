//! Chord Designer WASM Module
//!
//! Core of a guitar chord designer: the chord catalog and its name
//! formatting, search, recognition of fingerings, diagram layout and
//! rendering, strum planning, and an undoable editor. The browser UI talks
//! to it through [`api`].

pub mod models;
pub mod catalog;
pub mod search;
pub mod recognizer;
pub mod renderers;
pub mod playback;
pub mod config;
pub mod undo;
pub mod editor;
pub mod api;

// Re-export commonly used types
pub use models::core::*;
pub use models::{format_name, ChordEntry, ChordError, ChordName};
pub use catalog::{catalog, Catalog, ChordCategory};
pub use config::DiagramPreferences;
pub use editor::{ChordEditor, ChordState};
pub use recognizer::recognize;
pub use renderers::{compute_layout, DiagramLayout};
pub use search::{highlight, normalize, search};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        wasm_warn!("logger already initialized: {}", e);
    }

    log::info!("Chord designer WASM module initialized ({} chords)", catalog().len());
}
