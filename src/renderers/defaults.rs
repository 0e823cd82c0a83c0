//! Fixed drawing constants for chord diagrams
//!
//! Diagrams are always laid out at the base size; export sizes scale the
//! finished image rather than these values.

/// Base diagram width in pixels
pub const BASE_WIDTH: f32 = 140.0;

/// Base diagram height in pixels
pub const BASE_HEIGHT: f32 = 160.0;

/// Left/right padding (room for barre ends and the window fret number)
pub const SIDE_PADDING: f32 = 28.0;

/// Space above the nut for open/muted markers
pub const TOP_MARGIN: f32 = 24.0;

/// Space below the grid for string names and the chord name
pub const BOTTOM_MARGIN: f32 = 44.0;

pub const DOT_RADIUS: f32 = 7.0;

/// Barre thickness relative to the dot radius
pub const BARRE_HEIGHT_RATIO: f32 = 1.6;

pub const NUT_STROKE_WIDTH: f32 = 3.0;
pub const FRET_STROKE_WIDTH: f32 = 1.0;
pub const STRING_STROKE_WIDTH: f32 = 1.5;

pub const FONT_FAMILY: &str = "system-ui, sans-serif";
pub const MARKER_FONT_SIZE: f32 = 16.0;
pub const WINDOW_FRET_FONT_SIZE: f32 = 11.0;
pub const FINGER_FONT_SIZE: f32 = 12.0;
pub const STRING_NAME_FONT_SIZE: f32 = 14.0;
pub const CHORD_NAME_FONT_SIZE: f32 = 16.0;

/// Finger numbers are drawn on top of dots
pub const FINGER_TEXT_COLOR: &str = "white";

pub const OPEN_GLYPH: &str = "○";
pub const MUTED_GLYPH: &str = "✕";
