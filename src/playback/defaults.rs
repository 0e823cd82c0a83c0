//! Default values for chord playback

/// Open-string frequencies in Hz, low E first (standard tuning)
pub const OPEN_STRING_FREQUENCIES: [f64; 6] = [82.41, 110.0, 146.83, 196.0, 246.94, 329.63];

/// Open-string MIDI note numbers, low E first (E2 A2 D3 G3 B3 E4)
pub const OPEN_STRING_MIDI_NOTES: [u8; 6] = [40, 45, 50, 55, 59, 64];

/// Delay between neighbouring strings for a normal strum
pub const NORMAL_STRUM_MS: u32 = 50;

/// Delay between neighbouring strings for a slow strum
pub const SLOW_STRUM_MS: u32 = 200;

/// How long each note rings, in seconds
pub const DEFAULT_NOTE_DURATION: f64 = 2.0;

/// Default MIDI velocity (1-127)
pub const DEFAULT_VELOCITY: u8 = 80;
