use crate::font::GlyphSource;
use crate::types::{RenderError, Result};
use image::{Rgb, RgbImage};
use nenga_layout::Canvas;
use nenga_layout::units::card_size_px;
use tiny_skia::{Color, FillRule, Paint, Pixmap, Transform};

/// A raster surface that paints glyph outlines in black on white.
///
/// One surface is meant to be reused for a whole batch: clear, draw, take a
/// [`snapshot`](RasterSurface::snapshot), repeat.
pub struct RasterSurface<'a, G: GlyphSource + ?Sized> {
    pixmap: Pixmap,
    glyphs: &'a G,
    paint: Paint<'static>,
}

impl<'a, G: GlyphSource + ?Sized> RasterSurface<'a, G> {
    pub fn new(glyphs: &'a G, width: u32, height: u32) -> Result<Self> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::SurfaceUnavailable { width, height })?;

        let mut paint = Paint::default();
        paint.set_color(Color::BLACK);
        paint.anti_alias = true;

        Ok(Self {
            pixmap,
            glyphs,
            paint,
        })
    }

    /// A surface sized for one postcard
    pub fn for_card(glyphs: &'a G) -> Result<Self> {
        let (width, height) = card_size_px();
        Self::new(glyphs, width, height)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Copy the current contents out as an RGB image
    pub fn snapshot(&self) -> RgbImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbImage::from_fn(width, self.pixmap.height(), |x, y| {
            let color = pixels[(y * width + x) as usize].demultiply();
            Rgb([color.red(), color.green(), color.blue()])
        })
    }
}

impl<G: GlyphSource + ?Sized> Canvas for RasterSurface<'_, G> {
    fn clear(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    fn draw_glyph(&mut self, ch: char, size: f32, x: f32, y: f32) {
        let Some(outline) = self.glyphs.outline(ch) else {
            return;
        };

        // Font units are y-up with the origin on the baseline
        let scale = size / outline.units_per_em;
        let transform = Transform::from_row(scale, 0.0, 0.0, -scale, x, y);
        self.pixmap.fill_path(
            &outline.path,
            &self.paint,
            FillRule::Winding,
            transform,
            None,
        );
    }
}
