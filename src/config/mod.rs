//! Diagram preferences
//!
//! Everything the user can choose about how a diagram looks, is exported and
//! sounds. The host owns a `DiagramPreferences` value (and persists it with
//! [`DiagramPreferences::to_json`]); renderer and playback take it as an
//! argument.

use serde::{Deserialize, Serialize};

use crate::models::Result;

/// Default stroke/fill colour for diagram lines, dots and text
pub const DEFAULT_DIAGRAM_COLOR: &str = "#545D6A";

/// Default background colour (JPG export and static display)
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Export size preset
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiagramSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl DiagramSize {
    pub const ALL: [DiagramSize; 5] = [
        DiagramSize::Xs,
        DiagramSize::Sm,
        DiagramSize::Md,
        DiagramSize::Lg,
        DiagramSize::Xl,
    ];

    /// Scale applied to the base diagram size
    pub fn scale(&self) -> f32 {
        match self {
            DiagramSize::Xs => 0.5,
            DiagramSize::Sm => 0.7,
            DiagramSize::Md => 1.0,
            DiagramSize::Lg => 1.3,
            DiagramSize::Xl => 1.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiagramSize::Xs => "xs",
            DiagramSize::Sm => "sm",
            DiagramSize::Md => "md",
            DiagramSize::Lg => "lg",
            DiagramSize::Xl => "xl",
        }
    }

    /// Parse a stored value, falling back to the default for anything unknown
    pub fn parse_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == value)
            .unwrap_or_default()
    }

    /// Output pixel size for a base width/height
    pub fn output_size(&self, base_width: f32, base_height: f32) -> (u32, u32) {
        (
            (base_width * self.scale()).round() as u32,
            (base_height * self.scale()).round() as u32,
        )
    }
}

/// Export image format
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Png,
    Jpg,
    Svg,
}

impl DownloadFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Png => "png",
            DownloadFormat::Jpg => "jpg",
            DownloadFormat::Svg => "svg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DownloadFormat::Png => "image/png",
            DownloadFormat::Jpg => "image/jpeg",
            DownloadFormat::Svg => "image/svg+xml",
        }
    }

    pub fn parse_or_default(value: &str) -> Self {
        [DownloadFormat::Png, DownloadFormat::Jpg, DownloadFormat::Svg]
            .into_iter()
            .find(|format| format.extension() == value)
            .unwrap_or_default()
    }

    /// JPG has no alpha channel, so it always gets a painted background
    pub fn needs_background(&self) -> bool {
        matches!(self, DownloadFormat::Jpg)
    }
}

/// Instrument voice used for playback
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GuitarType {
    #[default]
    AcousticGuitarNylon,
    AcousticGuitarSteel,
    ElectricGuitarClean,
}

impl GuitarType {
    pub fn label(&self) -> &'static str {
        match self {
            GuitarType::AcousticGuitarNylon => "Acoustic (nylon)",
            GuitarType::AcousticGuitarSteel => "Acoustic (steel)",
            GuitarType::ElectricGuitarClean => "Electric (clean)",
        }
    }

    /// General MIDI program number (0-based)
    pub fn midi_program(&self) -> u8 {
        match self {
            GuitarType::AcousticGuitarNylon => 24,
            GuitarType::AcousticGuitarSteel => 25,
            GuitarType::ElectricGuitarClean => 27,
        }
    }
}

/// User preferences for rendering, export and playback
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramPreferences {
    pub size: DiagramSize,
    pub format: DownloadFormat,
    pub guitar: GuitarType,
    pub show_fingers: bool,
    pub diagram_color: String,
    pub background_color: String,
}

impl Default for DiagramPreferences {
    fn default() -> Self {
        Self {
            size: DiagramSize::default(),
            format: DownloadFormat::default(),
            guitar: GuitarType::default(),
            show_fingers: false,
            diagram_color: DEFAULT_DIAGRAM_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

impl DiagramPreferences {
    /// Load stored preferences; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore the default colours, keeping everything else
    pub fn reset_colors(&mut self) {
        self.diagram_color = DEFAULT_DIAGRAM_COLOR.to_string();
        self.background_color = DEFAULT_BACKGROUND_COLOR.to_string();
    }
}

/// File name for an exported diagram, e.g. `"C-m7-md.png"`
///
/// Anything that is not an ASCII letter or digit becomes `-`.
pub fn export_file_name(chord_name: &str, size: DiagramSize, format: DownloadFormat) -> String {
    let stem = if chord_name.is_empty() {
        "chord".to_string()
    } else {
        chord_name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect()
    };
    format!("{}-{}.{}", stem, size.as_str(), format.extension())
}
