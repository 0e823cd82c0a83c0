//! Models module for the chord designer
//!
//! This module contains the data models shared by the catalog,
//! recognizer, layout engine and editor.

pub mod core;
pub mod chord;
pub mod errors;
pub mod serde_helpers;

// Re-export commonly used types
pub use core::*;
pub use chord::{format_name, ChordEntry, ChordName};
pub use errors::{ChordError, Result};
