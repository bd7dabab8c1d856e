//! One complete postcard face

use crate::address::{address_lines, draw_address};
use crate::glyph::{Canvas, draw_line_chars};
use crate::names::{compose_names, draw_names};
use crate::options::LayoutOptions;
use crate::types::{Family, Orientation};

/// Sender postal code digits are packed tighter than their font size
pub const SENDER_POSTAL_CODE_ADVANCE_RATIO: f32 = 0.85;

/// Clear `canvas` and paint the recipient side of a postcard onto it.
///
/// The canvas is left holding the finished card. Callers reusing one canvas
/// for several cards must take their snapshot before the next call.
pub fn draw_card(
    canvas: &mut impl Canvas,
    recipient: &Family,
    sender: Option<&Family>,
    options: &LayoutOptions,
) {
    let positions = &options.positions;
    let font_sizes = &options.font_sizes;
    let line_heights = &options.line_heights;

    canvas.clear();

    draw_line_chars(
        canvas,
        &recipient.postal_code,
        positions.postal_code,
        font_sizes.postal_code,
        options.postal_code_advance,
        Orientation::Horizontal,
    );

    let lines = address_lines(recipient, options.address_max_chars);
    draw_address(
        canvas,
        &lines,
        positions.address,
        font_sizes.address,
        line_heights.address,
    );

    let plan = compose_names(
        &recipient.family_name,
        &recipient.personal_names(),
        positions.name,
        font_sizes.name,
        line_heights.name,
        true,
    );
    draw_names(canvas, &plan);

    let Some(sender) = sender else {
        return;
    };

    draw_line_chars(
        canvas,
        &sender.postal_code,
        positions.sender_postal_code,
        font_sizes.sender_postal_code,
        font_sizes.sender_postal_code * SENDER_POSTAL_CODE_ADVANCE_RATIO,
        Orientation::Horizontal,
    );

    let lines = address_lines(sender, options.address_max_chars);
    draw_address(
        canvas,
        &lines,
        positions.sender_address,
        font_sizes.sender_address,
        line_heights.sender_address,
    );

    let plan = compose_names(
        &sender.family_name,
        &sender.personal_names(),
        positions.sender_name,
        font_sizes.sender_name,
        line_heights.sender_name,
        false,
    );
    draw_names(canvas, &plan);
}
