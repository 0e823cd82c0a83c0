//! Chord Designer WASM API
//!
//! This module provides the JavaScript-facing API for the chord designer.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `types`: View types sent to JavaScript
//! - `core`: Stateless functions (formatting, search, recognition, rendering, playback)
//! - `editor`: The WASM-owned chord editor with undo/redo

pub mod helpers;
pub mod types;
pub mod core;
pub mod editor;

pub use core::*;
pub use editor::*;
