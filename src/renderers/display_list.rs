//! Display List for diagram rendering
//!
//! Turns a [`DiagramLayout`] into positioned drawing primitives. The result
//! carries every coordinate, colour and label, so a consumer (the SVG writer
//! here, or a canvas on the JavaScript side) draws it without any further
//! layout calculations.

use serde::{Deserialize, Serialize};

use super::defaults::*;
use super::layout_engine::{DiagramLayout, MarkerKind, VISIBLE_FRETS};
use crate::config::DiagramPreferences;
use crate::models::{STRING_COUNT, STRING_NAMES_LOW_TO_HIGH};

/// Everything needed to draw one diagram
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    pub width: f32,
    pub height: f32,

    /// Accessible title (`"Am chord diagram"`)
    pub title: String,

    /// Primitives in paint order
    pub elements: Vec<DiagramElement>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagramElement {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rx: f32,
        fill: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: String,
        stroke_width: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: String,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        font_weight: Option<String>,
        anchor: TextAnchor,
        fill: String,
    },
}

/// Grid geometry derived from the base size
#[derive(Clone, Copy, Debug)]
struct Grid {
    start_x: f32,
    start_y: f32,
    width: f32,
    height: f32,
    string_spacing: f32,
    fret_spacing: f32,
}

impl Grid {
    fn new() -> Self {
        let width = BASE_WIDTH - SIDE_PADDING * 2.0;
        let height = BASE_HEIGHT - TOP_MARGIN - BOTTOM_MARGIN;
        Self {
            start_x: SIDE_PADDING,
            start_y: TOP_MARGIN,
            width,
            height,
            string_spacing: width / (STRING_COUNT - 1) as f32,
            fret_spacing: height / f32::from(VISIBLE_FRETS),
        }
    }

    /// X for a (possibly fractional) string position
    fn string_x(&self, string: f32) -> f32 {
        self.start_x + string * self.string_spacing
    }

    /// Y of the middle of a 1-based window row
    fn row_center_y(&self, relative_fret: f32) -> f32 {
        self.start_y + (relative_fret - 0.5) * self.fret_spacing
    }
}

fn text(x: f32, y: f32, content: &str, font_size: f32, anchor: TextAnchor, fill: &str) -> DiagramElement {
    DiagramElement::Text {
        x,
        y,
        text: content.to_string(),
        font_size,
        font_weight: None,
        anchor,
        fill: fill.to_string(),
    }
}

fn bold(element: DiagramElement, weight: &str) -> DiagramElement {
    match element {
        DiagramElement::Text { x, y, text, font_size, anchor, fill, .. } => DiagramElement::Text {
            x,
            y,
            text,
            font_size,
            font_weight: Some(weight.to_string()),
            anchor,
            fill,
        },
        other => other,
    }
}

fn line(x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, stroke_width: f32) -> DiagramElement {
    DiagramElement::Line {
        x1,
        y1,
        x2,
        y2,
        stroke: stroke.to_string(),
        stroke_width,
    }
}

/// Build the display list for a layout
///
/// `opaque` paints the background colour (static display); JPG export
/// always gets a background.
pub fn build_display_list(
    layout: &DiagramLayout,
    chord_name: &str,
    prefs: &DiagramPreferences,
    opaque: bool,
) -> DisplayList {
    let grid = Grid::new();
    let color = prefs.diagram_color.as_str();
    let mut elements = Vec::new();

    if opaque || prefs.format.needs_background() {
        elements.push(DiagramElement::Rect {
            x: 0.0,
            y: 0.0,
            width: BASE_WIDTH,
            height: BASE_HEIGHT,
            rx: 0.0,
            fill: prefs.background_color.clone(),
        });
    }

    // Open/muted markers just above the nut
    for marker in &layout.markers {
        let glyph = match marker.kind {
            MarkerKind::Open => OPEN_GLYPH,
            MarkerKind::Muted => MUTED_GLYPH,
        };
        elements.push(text(
            grid.string_x(marker.string as f32),
            grid.start_y - 4.0,
            glyph,
            MARKER_FONT_SIZE,
            TextAnchor::Middle,
            color,
        ));
    }

    // Nut, or a thin top line plus the window's first fret number
    let right = grid.start_x + grid.width;
    if layout.start_fret == 1 {
        elements.push(line(grid.start_x, grid.start_y, right, grid.start_y, color, NUT_STROKE_WIDTH));
    } else {
        elements.push(line(grid.start_x, grid.start_y, right, grid.start_y, color, FRET_STROKE_WIDTH));
        elements.push(text(
            grid.start_x - 8.0,
            grid.start_y + grid.fret_spacing / 2.0 + 4.0,
            &layout.start_fret.to_string(),
            WINDOW_FRET_FONT_SIZE,
            TextAnchor::End,
            color,
        ));
    }

    for fret in 1..=VISIBLE_FRETS {
        let y = grid.start_y + f32::from(fret) * grid.fret_spacing;
        elements.push(line(grid.start_x, y, right, y, color, FRET_STROKE_WIDTH));
    }

    for string in 0..STRING_COUNT {
        let x = grid.string_x(string as f32);
        elements.push(line(x, grid.start_y, x, grid.start_y + grid.height, color, STRING_STROKE_WIDTH));
    }

    let barre_height = DOT_RADIUS * BARRE_HEIGHT_RATIO;
    for barre in &layout.barres {
        let relative = f32::from(barre.fret) - f32::from(layout.start_fret) + 1.0;
        let y = grid.row_center_y(relative);
        let x1 = grid.string_x(barre.start_string as f32);
        let x2 = grid.string_x(barre.end_string as f32);
        elements.push(DiagramElement::Rect {
            x: x1 - DOT_RADIUS,
            y: y - barre_height / 2.0,
            width: x2 - x1 + DOT_RADIUS * 2.0,
            height: barre_height,
            rx: barre_height / 2.0,
            fill: color.to_string(),
        });
    }

    for dot in &layout.dots {
        let y = grid.row_center_y(f32::from(dot.relative_fret));
        if !dot.covered {
            elements.push(DiagramElement::Circle {
                cx: grid.string_x(dot.string as f32),
                cy: y,
                r: DOT_RADIUS,
                fill: color.to_string(),
            });
        }
        if !prefs.show_fingers {
            continue;
        }
        if let (Some(finger), Some(position)) = (dot.finger, dot.label_position) {
            elements.push(bold(
                text(
                    grid.string_x(position),
                    y + 4.0,
                    &finger.to_string(),
                    FINGER_FONT_SIZE,
                    TextAnchor::Middle,
                    FINGER_TEXT_COLOR,
                ),
                "bold",
            ));
        }
    }

    for (string, name) in STRING_NAMES_LOW_TO_HIGH.iter().enumerate() {
        elements.push(bold(
            text(
                grid.string_x(string as f32),
                grid.start_y + grid.height + 14.0,
                name,
                STRING_NAME_FONT_SIZE,
                TextAnchor::Middle,
                color,
            ),
            "600",
        ));
    }

    if !chord_name.is_empty() {
        elements.push(bold(
            text(
                BASE_WIDTH / 2.0,
                BASE_HEIGHT - 8.0,
                chord_name,
                CHORD_NAME_FONT_SIZE,
                TextAnchor::Middle,
                color,
            ),
            "bold",
        ));
    }

    let title = if chord_name.is_empty() {
        "Chord diagram".to_string()
    } else {
        format!("{} chord diagram", chord_name)
    };

    DisplayList {
        width: BASE_WIDTH,
        height: BASE_HEIGHT,
        title,
        elements,
    }
}
