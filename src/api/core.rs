//! Stateless WASM API
//!
//! Pure functions over the catalog, the recognizer and the renderers. The
//! host passes strings (high E first) and preferences in; nothing here
//! touches the editor.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, deserialize_preferences, deserialize_strings, serialize};
use super::types::{CategoryView, ChordSummary, RootGroup};
use crate::catalog::catalog;
use crate::config::{export_file_name as file_name, DiagramPreferences, DiagramSize, DownloadFormat};
use crate::models::format_name;
use crate::playback::{plan_strum as plan, StrumOptions};
use crate::recognizer::recognize;
use crate::renderers::display_list::build_display_list;
use crate::renderers::layout_engine::compute_layout;
use crate::renderers::svg::SVGRenderer;
use crate::search::{highlight, normalize, search};
use crate::{wasm_info, wasm_log};

/// Display name for a structured chord key (`"A,m,7,"` -> `"Am7"`)
#[wasm_bindgen(js_name = formatChordName)]
pub fn format_chord_name(key: &str) -> String {
    format_name(key)
}

/// Comparison key used by search (lowercase, no `/`, trimmed)
#[wasm_bindgen(js_name = normalizeChordQuery)]
pub fn normalize_chord_query(query: &str) -> String {
    normalize(query)
}

/// Ranked catalog matches for a query
#[wasm_bindgen(js_name = searchChords)]
pub fn search_chords(query: &str) -> Result<JsValue, JsValue> {
    let results: Vec<ChordSummary> = search(query).iter().map(ChordSummary::from).collect();
    wasm_log!("searchChords('{}'): {} results", query, results.len());
    serialize(&results, "Search result serialization error")
}

/// Split text into matched/unmatched runs for highlighting
#[wasm_bindgen(js_name = highlightMatch)]
pub fn highlight_match(text: &str, query: &str) -> Result<JsValue, JsValue> {
    serialize(&highlight(text, query), "Highlight serialization error")
}

/// Catalog name for a fingering, or `undefined`
#[wasm_bindgen(js_name = detectChordName)]
pub fn detect_chord_name(strings_js: JsValue) -> Result<Option<String>, JsValue> {
    let strings = deserialize_strings(strings_js)?;
    Ok(recognize(&strings))
}

#[wasm_bindgen(js_name = computeDiagramLayout)]
pub fn compute_diagram_layout(strings_js: JsValue) -> Result<JsValue, JsValue> {
    let strings = deserialize_strings(strings_js)?;
    serialize(&compute_layout(&strings), "Layout serialization error")
}

/// Positioned drawing primitives for a canvas renderer
#[wasm_bindgen(js_name = buildDiagramDisplayList)]
pub fn build_diagram_display_list(
    strings_js: JsValue,
    chord_name: &str,
    prefs_js: JsValue,
    opaque: bool,
) -> Result<JsValue, JsValue> {
    let strings = deserialize_strings(strings_js)?;
    let prefs = deserialize_preferences(prefs_js)?;
    let list = build_display_list(&compute_layout(&strings), chord_name, &prefs, opaque);
    serialize(&list, "Display list serialization error")
}

/// Standalone SVG document at the preferred export size
#[wasm_bindgen(js_name = renderDiagramSvg)]
pub fn render_diagram_svg(strings_js: JsValue, chord_name: &str, prefs_js: JsValue) -> Result<String, JsValue> {
    let strings = deserialize_strings(strings_js)?;
    let prefs = deserialize_preferences(prefs_js)?;
    wasm_info!("renderDiagramSvg: '{}' size={}", chord_name, prefs.size.as_str());
    Ok(SVGRenderer::render_chord(&strings, chord_name, &prefs))
}

#[wasm_bindgen(js_name = getChordCategories)]
pub fn get_chord_categories() -> Result<JsValue, JsValue> {
    let categories: Vec<CategoryView> = catalog()
        .categories()
        .into_iter()
        .map(CategoryView::from)
        .collect();
    serialize(&categories, "Category serialization error")
}

#[wasm_bindgen(js_name = getChordsByRoot)]
pub fn get_chords_by_root() -> Result<JsValue, JsValue> {
    let groups: Vec<RootGroup> = catalog()
        .by_root()
        .into_iter()
        .map(|(root, chords)| RootGroup {
            root: root.to_string(),
            chords: chords.into_iter().map(ChordSummary::from).collect(),
        })
        .collect();
    serialize(&groups, "Root group serialization error")
}

/// Catalog entries that can never be recognized (same frets as an earlier entry)
#[wasm_bindgen(js_name = getShadowedChords)]
pub fn get_shadowed_chords() -> Result<JsValue, JsValue> {
    serialize(&catalog().shadowed(), "Shadowed entry serialization error")
}

/// Timed notes for strumming a fingering
#[wasm_bindgen(js_name = planStrum)]
pub fn plan_strum(strings_js: JsValue, options_js: JsValue) -> Result<JsValue, JsValue> {
    let strings = deserialize_strings(strings_js)?;
    let options: StrumOptions = if options_js.is_undefined() || options_js.is_null() {
        StrumOptions::default()
    } else {
        deserialize(options_js, "Strum options deserialization error")?
    };
    serialize(&plan(&strings, &options), "Strum serialization error")
}

#[wasm_bindgen(js_name = defaultPreferences)]
pub fn default_preferences() -> Result<JsValue, JsValue> {
    serialize(&DiagramPreferences::default(), "Preferences serialization error")
}

/// Download file name; unknown size/format values fall back to the defaults
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(chord_name: &str, size: &str, format: &str) -> String {
    file_name(
        chord_name,
        DiagramSize::parse_or_default(size),
        DownloadFormat::parse_or_default(format),
    )
}
