use crate::types::Result;
use owned_ttf_parser::{AsFaceRef, OutlineBuilder, OwnedFace};
use std::path::Path;
use tiny_skia::PathBuilder;

/// A glyph outline in font design units, y pointing up
#[derive(Debug, Clone)]
pub struct GlyphOutline {
    pub path: tiny_skia::Path,
    pub units_per_em: f32,
}

/// Anything that can provide glyph outlines for characters.
///
/// Returns `None` when the character has nothing to paint, either because the
/// glyph is missing or because it is blank (spaces).
pub trait GlyphSource {
    fn outline(&self, ch: char) -> Option<GlyphOutline>;
}

/// A parsed TrueType or OpenType font
pub struct GlyphFont {
    face: OwnedFace,
}

impl GlyphFont {
    /// Parse a font from raw bytes. Collections use their first face.
    pub fn load(bytes: Vec<u8>) -> Result<GlyphFont> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(GlyphFont { face })
    }

    /// Read and parse a font file
    pub async fn load_file(path: impl AsRef<Path>) -> Result<GlyphFont> {
        let path = path.as_ref().to_owned();
        let bytes = tokio::fs::read(&path).await?;

        // Parsing walks the table directory, keep it off the runtime
        let face = tokio::task::spawn_blocking(move || OwnedFace::from_vec(bytes, 0)).await??;

        log::debug!("Loaded font {}", path.display());
        Ok(GlyphFont { face })
    }

    /// Family name of the font, if it has a Unicode one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }
}

impl GlyphSource for GlyphFont {
    fn outline(&self, ch: char) -> Option<GlyphOutline> {
        let face = self.face.as_face_ref();
        let Some(glyph_id) = face.glyph_index(ch) else {
            log::debug!("Font has no glyph for {:?}", ch);
            return None;
        };

        let mut builder = PathOutlineBuilder::new();
        face.outline_glyph(glyph_id, &mut builder)?;

        Some(GlyphOutline {
            path: builder.finish()?,
            units_per_em: face.units_per_em() as f32,
        })
    }
}

/// Collects ttf-parser outline commands into a tiny-skia path
struct PathOutlineBuilder {
    builder: PathBuilder,
}

impl PathOutlineBuilder {
    fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl OutlineBuilder for PathOutlineBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
