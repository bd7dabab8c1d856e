//! Batch export of postcards into a single PDF
//!
//! Cards are rendered one after another on a single reused surface, then
//! each snapshot becomes a full-bleed image on its own page.

use crate::font::GlyphSource;
use crate::surface::RasterSurface;
use crate::types::*;
use chrono::Datelike;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use image::{ImageFormat, RgbImage};
use lopdf::{Dictionary, Document, Object, Stream};
use nenga_layout::units::card_size_pt;
use nenga_layout::{Family, LayoutOptions, draw_card};
use std::io::{Cursor, Write};
use std::path::Path;

/// Resource name of the card image on every page
pub const CARD_XOBJECT_NAME: &str = "Card";

/// File name for the exported document, e.g. `nenga2026.pdf`
pub fn output_file_name(year: i32) -> String {
    format!("nenga{year}.pdf")
}

/// File name for the exported document in the current calendar year
pub fn current_output_file_name() -> String {
    output_file_name(chrono::Local::now().year())
}

/// Render one image per recipient, in order.
///
/// All cards share one surface. Each card is cleared, drawn and snapshotted
/// before the next one starts.
pub fn render_cards<G: GlyphSource + ?Sized>(
    recipients: &[Family],
    sender: Option<&Family>,
    options: &LayoutOptions,
    glyphs: &G,
) -> Result<Vec<RgbImage>> {
    let mut surface = RasterSurface::for_card(glyphs)?;
    let mut images = Vec::with_capacity(recipients.len());

    for (i, recipient) in recipients.iter().enumerate() {
        draw_card(&mut surface, recipient, sender, options);
        images.push(surface.snapshot());
        log::debug!("Rendered card {}/{}", i + 1, recipients.len());
    }

    Ok(images)
}

/// Build a PDF with one card-sized page per image.
///
/// Images are encoded concurrently, but the document is only assembled once
/// every encoding has finished, and page `i` always receives image `i`. A
/// single failure fails the whole document.
pub async fn embed_cards(images: Vec<RgbImage>) -> Result<Document> {
    let handles: Vec<_> = images
        .into_iter()
        .map(|image| tokio::task::spawn_blocking(move || encode_image_xobject(&image)))
        .collect();

    let mut xobjects = Vec::with_capacity(handles.len());
    for handle in handles {
        xobjects.push(handle.await??);
    }

    Ok(assemble_document(xobjects))
}

/// Render every recipient and embed the cards into a PDF
pub async fn export_pdf<G: GlyphSource + ?Sized>(
    recipients: &[Family],
    sender: Option<&Family>,
    options: &LayoutOptions,
    glyphs: &G,
) -> Result<Document> {
    log::info!("Rendering {} postcards", recipients.len());
    let images = render_cards(recipients, sender, options, glyphs)?;
    embed_cards(images).await
}

/// Save the exported document
pub async fn save_pdf(mut doc: Document, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut writer = Vec::new();
        doc.save_to(&mut writer)?;
        Ok::<_, RenderError>(writer)
    })
    .await??;
    tokio::fs::write(&path, bytes).await?;
    log::info!("Saved {}", path.display());
    Ok(())
}

/// Encode a card image as PNG
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Save a card image as PNG
pub async fn save_png(image: RgbImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || encode_png(&image)).await??;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

fn encode_image_xobject(image: &RgbImage) -> std::io::Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image.as_raw())?;
    let compressed = encoder.finish()?;

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width() as i64));
    dict.set("Height", Object::Integer(image.height() as i64));
    dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));
    dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

    Ok(Stream::new(dict, compressed))
}

fn assemble_document(xobjects: Vec<Stream>) -> Document {
    let (width_pt, height_pt) = card_size_pt();
    let mut doc = Document::with_version("1.7");

    let pages_id = doc.new_object_id();

    // Image drawn over the whole page
    let content = format!(
        "q {} 0 0 {} 0 0 cm /{} Do Q\n",
        width_pt, height_pt, CARD_XOBJECT_NAME
    );

    let mut kids = Vec::with_capacity(xobjects.len());
    for xobject in xobjects {
        let image_id = doc.add_object(xobject);
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            content.clone().into_bytes(),
        ));

        let mut xobject_resources = Dictionary::new();
        xobject_resources.set(CARD_XOBJECT_NAME, Object::Reference(image_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobject_resources));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(width_pt),
                    Object::Real(height_pt),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(kids.len() as i64)),
        ("Kids", Object::Array(kids)),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}
