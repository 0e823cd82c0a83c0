//! SVG document generation
//!
//! Wraps rendered elements in an `<svg>` root with a viewBox at the base
//! diagram size and an accessible title.

use super::elements::{escape_xml, fmt_num, SVGElementRenderer};
use crate::renderers::display_list::DisplayList;

pub struct SVGDocumentGenerator;

impl SVGDocumentGenerator {
    /// Generate the document at the list's own size
    pub fn generate(list: &DisplayList) -> String {
        Self::generate_scaled(list, 1.0)
    }

    /// Generate the document with its width/height attributes scaled; the
    /// viewBox stays at the base size
    pub fn generate_scaled(list: &DisplayList, scale: f32) -> String {
        let mut svg = String::new();
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" role="img">"#,
            fmt_num(list.width * scale),
            fmt_num(list.height * scale),
            fmt_num(list.width),
            fmt_num(list.height)
        ));
        svg.push_str(&format!("<title>{}</title>", escape_xml(&list.title)));
        for element in &list.elements {
            svg.push_str(&SVGElementRenderer::render_element(element));
        }
        svg.push_str("</svg>");
        svg
    }
}
