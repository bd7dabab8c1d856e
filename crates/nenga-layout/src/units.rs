//! Unit conversion for postcard layout
//!
//! Every layout value is expressed in millimetres. Raster output works in
//! pixels at a fixed resolution and the PDF page in points.

// =============================================================================
// Card Dimensions
// =============================================================================

/// Postcard width in millimetres
pub const CARD_WIDTH_MM: f32 = 100.0;

/// Postcard height in millimetres
pub const CARD_HEIGHT_MM: f32 = 148.0;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Raster resolution in dots per inch
pub const RESOLUTION_DPI: f32 = 350.0;

/// Inches per millimetre, as used for the raster scale
pub const INCHES_PER_MM: f32 = 0.03937;

/// Millimetres per point (1 inch = 72 points, 1 inch = 25.4mm)
pub const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Convert millimetres to PDF points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm / MM_PER_POINT
}

/// Convert millimetres to raster pixels
#[inline]
pub fn mm_to_px(mm: f32) -> f32 {
    mm * (RESOLUTION_DPI * INCHES_PER_MM)
}

/// Raster surface size for one card. Fractional pixels are dropped.
pub fn card_size_px() -> (u32, u32) {
    (
        mm_to_px(CARD_WIDTH_MM) as u32,
        mm_to_px(CARD_HEIGHT_MM) as u32,
    )
}

/// PDF page size for one card
pub fn card_size_pt() -> (f32, f32) {
    (mm_to_pt(CARD_WIDTH_MM), mm_to_pt(CARD_HEIGHT_MM))
}
