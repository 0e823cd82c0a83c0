// Diagram layout and rendering for every catalog chord

use chord_designer_wasm::catalog::catalog;
use chord_designer_wasm::config::DiagramPreferences;
use chord_designer_wasm::models::STRING_COUNT;
use chord_designer_wasm::renderers::layout_engine::{compute_layout, CoveredCell, VISIBLE_FRETS};
use chord_designer_wasm::renderers::svg::SVGRenderer;

#[test]
fn test_every_string_is_drawn_once() {
    for entry in catalog().entries() {
        let layout = compute_layout(&entry.to_strings().unwrap());
        let mut strings: Vec<usize> = layout
            .markers
            .iter()
            .map(|m| m.string)
            .chain(layout.dots.iter().map(|d| d.string))
            .collect();
        strings.sort_unstable();
        assert_eq!(strings, (0..STRING_COUNT).collect::<Vec<_>>(), "{}", entry.chord_name);
    }
}

#[test]
fn test_window_and_relative_frets() {
    for entry in catalog().entries() {
        let layout = compute_layout(&entry.to_strings().unwrap());
        let max = layout.dots.iter().map(|d| d.fret).max();
        match max {
            Some(max) if max > VISIBLE_FRETS => {
                let min = layout.dots.iter().map(|d| d.fret).min().unwrap();
                assert_eq!(layout.start_fret, min, "{}", entry.chord_name);
            }
            _ => assert_eq!(layout.start_fret, 1, "{}", entry.chord_name),
        }
        for dot in &layout.dots {
            assert!(dot.relative_fret >= 1);
            assert_eq!(u16::from(dot.fret), u16::from(layout.start_fret) + dot.relative_fret - 1);
        }
    }
}

#[test]
fn test_barres_extend_over_fretted_strings_only() {
    for entry in catalog().entries() {
        let layout = compute_layout(&entry.to_strings().unwrap());
        for barre in &layout.barres {
            assert!(barre.end_string > barre.start_string, "{}", entry.chord_name);

            // Unfretted strings may only sit between the barre finger's own strings
            let own: Vec<usize> = layout
                .dots
                .iter()
                .filter(|d| d.fret == barre.fret && d.finger == Some(barre.finger))
                .map(|d| d.string)
                .collect();
            let (first, last) = (own[0], own[own.len() - 1]);
            for string in barre.start_string..=barre.end_string {
                let fretted = layout.dots.iter().any(|d| d.string == string);
                assert!(
                    fretted || (first < string && string < last),
                    "{}: barre extended over unfretted string {}",
                    entry.chord_name,
                    string
                );
            }
        }
        for dot in &layout.dots {
            let cell = CoveredCell { fret: dot.fret, string: dot.string };
            assert_eq!(dot.covered, layout.covered.contains(&cell));
        }
    }
}

#[test]
fn test_barre_fingers_labelled_once() {
    for entry in catalog().entries() {
        let layout = compute_layout(&entry.to_strings().unwrap());
        for barre in &layout.barres {
            let labels = layout
                .dots
                .iter()
                .filter(|d| d.fret == barre.fret && d.finger == Some(barre.finger))
                .filter(|d| d.label_position.is_some())
                .count();
            assert_eq!(labels, 1, "{}", entry.chord_name);
        }
    }
}

#[test]
fn test_f_major_barre() {
    let layout = compute_layout(&catalog().find("F,,,").unwrap().to_strings().unwrap());
    assert_eq!(layout.start_fret, 1);
    assert_eq!(layout.barres.len(), 1);
    let barre = &layout.barres[0];
    assert_eq!((barre.finger, barre.fret, barre.start_string, barre.end_string), (1, 1, 0, 5));
}

#[test]
fn test_svg_for_every_chord() {
    let prefs = DiagramPreferences { show_fingers: true, ..Default::default() };
    for entry in catalog().entries() {
        let name = entry.display_name();
        let svg = SVGRenderer::render_chord(&entry.to_strings().unwrap(), &name, &prefs);
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(&format!("<title>{} chord diagram</title>", name)));
    }
}
