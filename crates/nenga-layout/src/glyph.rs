//! Per-character placement of a line of text
//!
//! Every character is placed on its own with a fixed advance. There is no
//! shaping or kerning: the caller picks the advance, and vertical runs use
//! the font size so glyphs sit in square cells.

use crate::types::Orientation;
use crate::units::mm_to_px;

/// Distance from a glyph's nominal top to its baseline, as a fraction of the
/// font size. Taken from the design metrics of the postcard typeface.
pub const ASCENDER_RATIO: f32 = 880.0 / 1000.0;

/// A surface that glyphs can be painted onto.
///
/// Coordinates and sizes are in raster pixels. `(x, y)` is the glyph origin on
/// the baseline, with y growing downwards.
pub trait Canvas {
    /// Reset the whole surface to white
    fn clear(&mut self);

    /// Paint a single character at `size` pixels with its origin at `(x, y)`
    fn draw_glyph(&mut self, ch: char, size: f32, x: f32, y: f32);
}

/// Where one character of a line ends up, in millimetres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x_mm: f32,
    pub y_mm: f32,
    pub size_mm: f32,
    pub orientation: Orientation,
}

/// Compute the placement of every character in `text`.
///
/// Horizontal runs step right by `advance` per character. Vertical runs step
/// down by `advance` and hang one font size to the left of the column anchor,
/// so the anchor is the right edge of the column. Both add the ascender offset
/// so the nominal origin marks the top of the glyph rather than its baseline.
pub fn place_line_chars(
    text: &str,
    start: (f32, f32),
    font_size: f32,
    advance: f32,
    orientation: Orientation,
) -> Vec<GlyphPlacement> {
    let baseline_offset = font_size * ASCENDER_RATIO;

    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let step = advance * i as f32;
            let (x, y) = match orientation {
                Orientation::Vertical => (start.0 - font_size, start.1 + step),
                Orientation::Horizontal => (start.0 + step, start.1),
            };
            GlyphPlacement {
                ch,
                x_mm: x,
                y_mm: y + baseline_offset,
                size_mm: font_size,
                orientation,
            }
        })
        .collect()
}

/// Paint `text` onto `canvas`, converting the placements to pixels.
pub fn draw_line_chars(
    canvas: &mut impl Canvas,
    text: &str,
    start: (f32, f32),
    font_size: f32,
    advance: f32,
    orientation: Orientation,
) {
    for placement in place_line_chars(text, start, font_size, advance, orientation) {
        canvas.draw_glyph(
            placement.ch,
            mm_to_px(placement.size_mm),
            mm_to_px(placement.x_mm),
            mm_to_px(placement.y_mm),
        );
    }
}
