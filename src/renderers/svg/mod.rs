//! SVG rendering output
//!
//! Serializes a [`DisplayList`] as a standalone SVG document, used for SVG
//! export and for hosts that prefer markup over canvas drawing.

pub mod elements;
pub mod document;

pub use elements::*;
pub use document::*;

use crate::config::DiagramPreferences;
use crate::models::GuitarStrings;
use crate::renderers::display_list::{build_display_list, DisplayList};
use crate::renderers::layout_engine::compute_layout;

/// Standalone SVG document for a display list, at its base size
pub fn render_svg(list: &DisplayList) -> String {
    SVGDocumentGenerator::generate(list)
}

/// SVG document generator
pub struct SVGRenderer;

impl SVGRenderer {
    /// Full pipeline: strings -> layout -> display list -> SVG, sized for
    /// the preferred export size
    pub fn render_chord(strings: &GuitarStrings, chord_name: &str, prefs: &DiagramPreferences) -> String {
        let layout = compute_layout(strings);
        let list = build_display_list(&layout, chord_name, prefs, false);
        SVGDocumentGenerator::generate_scaled(&list, prefs.size.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;
    use crate::config::DiagramSize;

    #[test]
    fn test_render_chord_document() {
        let strings = catalog().find("C,,,").unwrap().to_strings().unwrap();
        let svg = SVGRenderer::render_chord(&strings, "C", &DiagramPreferences::default());

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 140 160""#));
        assert!(svg.contains("<title>C chord diagram</title>"));
        // X 3 2 0 1 0: three dots, one mute, two opens
        assert_eq!(svg.matches("<circle").count(), 3);
        assert_eq!(svg.matches(">✕<").count(), 1);
        assert_eq!(svg.matches(">○<").count(), 2);
    }

    #[test]
    fn test_render_svg_escapes_title() {
        let layout = compute_layout(&crate::models::open_strings());
        let list = build_display_list(&layout, "A<b>", &DiagramPreferences::default(), true);
        let svg = render_svg(&list);
        assert!(svg.contains("<title>A&lt;b&gt; chord diagram</title>"));
        assert!(svg.contains(r#"width="140" height="160""#));
        assert!(svg.contains(r##"fill="#FFFFFF""##));
    }

    #[test]
    fn test_export_size_scales_root_only() {
        let strings = crate::models::open_strings();
        let prefs = DiagramPreferences { size: DiagramSize::Xl, ..Default::default() };
        let svg = SVGRenderer::render_chord(&strings, "", &prefs);
        assert!(svg.contains(r#"width="210" height="240" viewBox="0 0 140 160""#));
    }
}
