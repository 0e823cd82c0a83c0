//! Shared helpers for WASM API operations
//!
//! This module contains common patterns and utilities for serialization,
//! deserialization, logging and error conversion across all API operations.

use wasm_bindgen::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DiagramPreferences;
use crate::models::{guitar_strings, ChordError, GuitarStrings, StringState};

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================
//
// Outside wasm32 there is no console; messages go to the `log` facade so
// native tests still see them.

#[cfg(target_arch = "wasm32")]
pub fn log_debug(msg: &str) {
    web_sys::console::log_1(&format!("[WASM] {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_info(msg: &str) {
    web_sys::console::info_1(&format!("[WASM] {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_warn(msg: &str) {
    web_sys::console::warn_1(&format!("[WASM] ⚠️ {}", msg).into());
}

#[cfg(target_arch = "wasm32")]
pub fn log_error(msg: &str) {
    web_sys::console::error_1(&format!("[WASM] ❌ {}", msg).into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(msg: &str) {
    log::warn!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(msg: &str) {
    log::error!("[WASM] {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Uses the JSON-compatible serializer: maps (including flattened structs)
/// become plain objects and `None` becomes `null`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| {
            let msg = format!("{}: {}", error_context, e);
            log_error(&msg);
            JsValue::from_str(&msg)
        })
}

/// Read six string states (high E first) sent from JavaScript
pub fn deserialize_strings(value: JsValue) -> Result<GuitarStrings, JsValue> {
    let strings: Vec<StringState> = deserialize(value, "Strings deserialization error")?;
    guitar_strings(strings).map_err(chord_error)
}

/// Read preferences; `undefined`/`null` gives the defaults
pub fn deserialize_preferences(value: JsValue) -> Result<DiagramPreferences, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(DiagramPreferences::default());
    }
    deserialize(value, "Preferences deserialization error")
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log_error(&msg);
    JsValue::from_str(&msg)
}

/// Convert a domain error to a JsValue
pub fn chord_error(err: ChordError) -> JsValue {
    validation_error(err.to_string())
}
