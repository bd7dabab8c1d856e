//! Address wrapping into vertical lines

use crate::glyph::{Canvas, draw_line_chars};
use crate::normalize::normalize_address;
use crate::types::{Family, Orientation};

/// Greedily pack three address parts into lines of at most `max_chars`.
///
/// `part0` always opens the first line. Each following part starts a new
/// line when appending it would push the current last line over `max_chars`.
/// Parts are never split, so a single oversized part overflows its line.
/// Lengths count characters, so the parts should already be normalized.
pub fn wrap_address(part0: &str, part1: &str, part2: &str, max_chars: usize) -> Vec<String> {
    let mut lines = vec![part0.to_string()];

    for part in [part1, part2] {
        let last_len = lines.last().map_or(0, |line| line.chars().count());
        if last_len + part.chars().count() > max_chars {
            lines.push(String::new());
        }
        if let Some(last) = lines.last_mut() {
            last.push_str(part);
        }
    }

    lines
}

/// Normalize and wrap the address of a recipient or sender.
pub fn address_lines(family: &Family, max_chars: usize) -> Vec<String> {
    let region = normalize_address(&format!("{}{}", family.prefecture, family.municipalities));
    let street = normalize_address(&family.address);
    let building = normalize_address(&family.building);

    wrap_address(&region, &street, &building, max_chars)
}

/// Draw wrapped address lines as vertical columns.
///
/// Each line after the first moves one `line_height` to the left and is
/// indented downwards by one `font_size` per line.
pub fn draw_address(
    canvas: &mut impl Canvas,
    lines: &[String],
    anchor: (f32, f32),
    font_size: f32,
    line_height: f32,
) {
    for (i, line) in lines.iter().enumerate() {
        let start = (
            anchor.0 - line_height * i as f32,
            anchor.1 + font_size * i as f32,
        );
        draw_line_chars(
            canvas,
            line,
            start,
            font_size,
            font_size,
            Orientation::Vertical,
        );
    }
}
