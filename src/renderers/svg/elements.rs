//! SVG element rendering
//!
//! One display-list primitive becomes one SVG element.

use crate::renderers::defaults::FONT_FAMILY;
use crate::renderers::display_list::{DiagramElement, TextAnchor};

pub struct SVGElementRenderer;

impl SVGElementRenderer {
    pub fn render_element(element: &DiagramElement) -> String {
        match element {
            DiagramElement::Rect { x, y, width, height, rx, fill } => {
                let corner = if *rx > 0.0 {
                    format!(r#" rx="{}""#, fmt_num(*rx))
                } else {
                    String::new()
                };
                format!(
                    r#"<rect x="{}" y="{}" width="{}" height="{}"{} fill="{}"/>"#,
                    fmt_num(*x),
                    fmt_num(*y),
                    fmt_num(*width),
                    fmt_num(*height),
                    corner,
                    escape_xml(fill)
                )
            }
            DiagramElement::Line { x1, y1, x2, y2, stroke, stroke_width } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                fmt_num(*x1),
                fmt_num(*y1),
                fmt_num(*x2),
                fmt_num(*y2),
                escape_xml(stroke),
                fmt_num(*stroke_width)
            ),
            DiagramElement::Circle { cx, cy, r, fill } => format!(
                r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                fmt_num(*cx),
                fmt_num(*cy),
                fmt_num(*r),
                escape_xml(fill)
            ),
            DiagramElement::Text { x, y, text, font_size, font_weight, anchor, fill } => {
                let weight = font_weight
                    .as_deref()
                    .map(|w| format!(r#" font-weight="{}""#, escape_xml(w)))
                    .unwrap_or_default();
                format!(
                    r#"<text x="{}" y="{}" font-family="{}" font-size="{}"{} text-anchor="{}" fill="{}">{}</text>"#,
                    fmt_num(*x),
                    fmt_num(*y),
                    FONT_FAMILY,
                    fmt_num(*font_size),
                    weight,
                    anchor_name(*anchor),
                    escape_xml(fill),
                    escape_xml(text)
                )
            }
        }
    }
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

/// Two decimals, trailing zeros dropped (`24`, `33.6`, `42.13`)
pub fn fmt_num(value: f32) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
