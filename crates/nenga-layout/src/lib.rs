pub mod address;
pub mod card;
pub mod glyph;
pub mod names;
mod normalize;
mod options;
mod records;
mod types;
pub mod units;

pub use address::{address_lines, draw_address, wrap_address};
pub use card::draw_card;
pub use glyph::{Canvas, GlyphPlacement, draw_line_chars, place_line_chars};
pub use names::{NamePlan, compose_names, draw_names, family_name_label, name_scale_factor};
pub use normalize::normalize_address;
pub use options::*;
pub use records::{load_families, load_sender, parse_families};
pub use types::*;
