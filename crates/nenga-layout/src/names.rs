//! Name block composition
//!
//! A family shares one surname and up to five personal names. Each name gets
//! its own vertical column, stepping leftwards, and only the first column
//! shows the surname. The more names there are, the smaller every column is
//! set so the block keeps roughly the same width.

use crate::glyph::{Canvas, draw_line_chars};
use crate::normalize::normalize_address;
use crate::types::Orientation;

/// Honorific appended below each recipient name
pub const HONORIFIC: char = '様';

/// Honorific size relative to the name font size
pub const HONORIFIC_RATIO: f32 = 0.7;

/// Gap between the end of the longest name and the honorific, in millimetres
pub const HONORIFIC_GAP_MM: f32 = 4.0;

pub const FULL_WIDTH_SPACE: char = '\u{3000}';

/// Shrink factor for font size and column pitch by number of names.
///
/// Counts outside 1..=5 fall back to 1.0.
pub fn name_scale_factor(name_count: usize) -> f32 {
    match name_count {
        1 => 1.0,
        2 => 0.95,
        3 => 0.9,
        4 => 0.85,
        5 => 0.8,
        _ => 1.0,
    }
}

/// Surname followed by a space, plus a full-width space when surname and the
/// longest personal name together are shorter than four characters.
pub fn family_name_label(family_name: &str, max_personal_name_length: usize) -> String {
    let mut label = format!("{family_name} ");
    if family_name.chars().count() + max_personal_name_length < 4 {
        label.push(FULL_WIDTH_SPACE);
    }
    label
}

/// One vertical name column
#[derive(Debug, Clone, PartialEq)]
pub struct NameColumn {
    /// Normalized text, surname label (or blank padding) plus personal name
    pub text: String,
    /// Column anchor in millimetres
    pub anchor: (f32, f32),
}

/// The trailing honorific for one column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HonorificPlacement {
    pub anchor: (f32, f32),
    pub font_size: f32,
}

/// Everything needed to paint a name block
#[derive(Debug, Clone, PartialEq)]
pub struct NamePlan {
    pub font_size: f32,
    pub line_height: f32,
    pub columns: Vec<NameColumn>,
    pub honorifics: Vec<HonorificPlacement>,
}

/// Lay out a family's names as parallel vertical columns.
///
/// Empty personal names are dropped, keeping order. With no names left the
/// plan is empty. Honorifics are only planned when `honorific` is set, which
/// the sender block leaves off.
pub fn compose_names(
    family_name: &str,
    personal_names: &[&str],
    base: (f32, f32),
    font_size: f32,
    line_height: f32,
    honorific: bool,
) -> NamePlan {
    let names: Vec<&str> = personal_names
        .iter()
        .copied()
        .filter(|name| !name.is_empty())
        .collect();
    let max_personal_name_length = names
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0);

    let label = family_name_label(family_name, max_personal_name_length);
    let label_length = label.chars().count();
    let padding: String = std::iter::repeat_n(FULL_WIDTH_SPACE, label_length).collect();

    let scale = name_scale_factor(names.len());
    let scaled_font_size = font_size * scale;
    let scaled_line_height = line_height * scale;

    let mut columns = Vec::with_capacity(names.len());
    let mut honorifics = Vec::new();

    for (i, name) in names.iter().enumerate() {
        let x = base.0 - i as f32 * scaled_line_height;
        let prefix = if i == 0 { &label } else { &padding };
        columns.push(NameColumn {
            text: normalize_address(&format!("{prefix}{name}")),
            anchor: (x, base.1),
        });

        if honorific {
            let y = base.1
                + scaled_font_size * (label_length + max_personal_name_length) as f32
                + HONORIFIC_GAP_MM;
            honorifics.push(HonorificPlacement {
                anchor: (x - scaled_font_size * (1.0 - HONORIFIC_RATIO) / 2.0, y),
                font_size: scaled_font_size * HONORIFIC_RATIO,
            });
        }
    }

    NamePlan {
        font_size: scaled_font_size,
        line_height: scaled_line_height,
        columns,
        honorifics,
    }
}

/// Paint a composed name block.
pub fn draw_names(canvas: &mut impl Canvas, plan: &NamePlan) {
    for column in &plan.columns {
        draw_line_chars(
            canvas,
            &column.text,
            column.anchor,
            plan.font_size,
            plan.font_size,
            Orientation::Vertical,
        );
    }

    let mut buf = [0u8; 4];
    let honorific: &str = HONORIFIC.encode_utf8(&mut buf);
    for placement in &plan.honorifics {
        draw_line_chars(
            canvas,
            honorific,
            placement.anchor,
            placement.font_size,
            0.0,
            Orientation::Vertical,
        );
    }
}
