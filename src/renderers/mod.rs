//! Renderers module for the chord designer
//!
//! Diagram rendering runs in three steps: the layout engine works out the
//! logical diagram (window, markers, barres, dots), the display list turns
//! that into positioned primitives, and the SVG writer serializes them.

pub mod defaults;
pub mod layout_engine;
pub mod display_list;
pub mod svg;

// Re-export commonly used types
pub use layout_engine::{
    compute_layout,
    window_start,
    Barre,
    CoveredCell,
    DiagramLayout,
    FingerDot,
    MarkerKind,
    StringMarker,
    VISIBLE_FRETS,
};
pub use display_list::{build_display_list, DiagramElement, DisplayList, TextAnchor};
pub use svg::{render_svg, SVGRenderer};
