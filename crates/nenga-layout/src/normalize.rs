const IDEOGRAPHIC_SPACE: char = '\u{3000}';
const FULL_WIDTH_HYPHEN_MINUS: char = '\u{FF0D}';
const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

/// Bring address and name text into the full-width form used for vertical
/// setting.
///
/// ASCII becomes full-width and the various dashes collapse into one. The
/// output never contains a character the mapping would touch again, so the
/// function is idempotent and keeps the character count.
pub fn normalize_address(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

fn normalize_char(ch: char) -> char {
    match ch {
        ' ' => IDEOGRAPHIC_SPACE,
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FF70}' => FULL_WIDTH_HYPHEN_MINUS,
        '!'..='~' => char::from_u32(ch as u32 + FULL_WIDTH_OFFSET).unwrap_or(ch),
        _ => ch,
    }
}
