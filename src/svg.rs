//! A minimal SVG renderer honoring spec.md §6's SVG contract: a 9x9 grid
//! with thick block borders, one digit per solved square, and a
//! difficulty label. Geometry is this crate's own choice — the distilled
//! spec leaves it unspecified.
//!
//! Grounded on `examples/original_source/svg/svg.go`'s small
//! `Canvas`/`Rect`/`Text` writer; this module folds that shape into a
//! single string builder since the document is small enough not to
//! warrant a separate canvas abstraction.

use crate::values::Values;
use std::fmt::Write as _;

const CELL: u32 = 40;
const MARGIN: u32 = 20;
const GRID: u32 = CELL * 9;

/// Renders `values` as a standalone SVG document, with `difficulty`
/// printed as a label beneath the grid.
pub fn render(values: &Values, difficulty: f64) -> String {
    let width = GRID + MARGIN * 2;
    let height = GRID + MARGIN * 2 + 30;
    let mut svg = String::new();

    writeln!(
        svg,
        r#"<?xml version="1.0"?>
<svg width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg">"#
    )
    .unwrap();
    writeln!(
        svg,
        r#"<rect x="0" y="0" width="{width}" height="{height}" style="fill:white"/>"#
    )
    .unwrap();

    for i in 0..=9 {
        let stroke_width = if i % 3 == 0 { 3 } else { 1 };
        let x = MARGIN + i * CELL;
        writeln!(
            svg,
            r#"<line x1="{x}" y1="{MARGIN}" x2="{x}" y2="{}" style="stroke:black;stroke-width:{stroke_width}"/>"#,
            MARGIN + GRID
        )
        .unwrap();
        let y = MARGIN + i * CELL;
        writeln!(
            svg,
            r#"<line x1="{MARGIN}" y1="{y}" x2="{}" y2="{y}" style="stroke:black;stroke-width:{stroke_width}"/>"#,
            MARGIN + GRID
        )
        .unwrap();
    }

    for row in 0..9u32 {
        for col in 0..9u32 {
            let sq = (row * 9 + col) as usize;
            if let Some(d) = values[sq].single_member() {
                let x = MARGIN + col * CELL + CELL / 3;
                let y = MARGIN + row * CELL + CELL * 2 / 3;
                writeln!(
                    svg,
                    r#"<text x="{x}" y="{y}" style="font-size:20px">{d}</text>"#
                )
                .unwrap();
            }
        }
    }

    writeln!(
        svg,
        r#"<text x="{MARGIN}" y="{}" style="font-size:14px">difficulty: {difficulty:.2}</text>"#,
        MARGIN + GRID + 20
    )
    .unwrap();
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digitset::DigitSet;

    #[test]
    fn render_includes_svg_root_and_digits() {
        let mut v = Values::empty();
        v[0] = DigitSet::singleton(7);
        let doc = render(&v, 3.5);
        assert!(doc.starts_with("<?xml"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains(">7<"));
        assert!(doc.contains("difficulty: 3.50"));
    }

    #[test]
    fn render_draws_thick_block_borders() {
        let v = Values::empty();
        let doc = render(&v, 1.0);
        // Every third grid line (0, 3, 6, 9) should be drawn with weight 3.
        assert_eq!(doc.matches("stroke-width:3").count(), 8);
    }
}
