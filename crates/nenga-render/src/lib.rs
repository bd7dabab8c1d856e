mod export;
mod font;
mod surface;
mod types;

pub use export::*;
pub use font::{GlyphFont, GlyphOutline, GlyphSource};
pub use surface::RasterSurface;
pub use types::*;
