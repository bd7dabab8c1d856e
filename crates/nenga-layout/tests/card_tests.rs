use nenga_layout::names::HONORIFIC;
use nenga_layout::units::mm_to_px;
use nenga_layout::*;

mod common;
use common::{CanvasEvent, RecordingCanvas, assert_close};

fn yamada() -> Family {
    Family {
        postal_code: "1500041".into(),
        prefecture: "東京都".into(),
        municipalities: "渋谷区".into(),
        address: "神南1-1-1".into(),
        building: String::new(),
        family_name: "山田".into(),
        personal_name: "太郎".into(),
        ..Default::default()
    }
}

fn honorific_count(canvas: &RecordingCanvas) -> usize {
    canvas.text().chars().filter(|&ch| ch == HONORIFIC).count()
}

#[test]
fn test_card_clears_before_drawing() {
    let mut canvas = RecordingCanvas::default();
    draw_card(&mut canvas, &yamada(), None, &LayoutOptions::default());

    assert_eq!(canvas.events.first(), Some(&CanvasEvent::Clear));
    let clears = canvas
        .events
        .iter()
        .filter(|event| **event == CanvasEvent::Clear)
        .count();
    assert_eq!(clears, 1);
}

#[test]
fn test_card_recipient_only() {
    let mut canvas = RecordingCanvas::default();
    draw_card(&mut canvas, &yamada(), None, &LayoutOptions::default());

    // postal code, one address line, name column, honorific
    assert_eq!(
        canvas.text(),
        format!("1500041東京都渋谷区神南１－１－１山田\u{3000}太郎{HONORIFIC}")
    );
}

#[test]
fn test_card_postal_code_is_horizontal() {
    let options = LayoutOptions::default();
    let mut canvas = RecordingCanvas::default();
    draw_card(&mut canvas, &yamada(), None, &options);

    let glyphs = canvas.glyphs();
    let (x0, y0) = options.positions.postal_code;
    let font_size = options.font_sizes.postal_code;
    for (i, &(_, _, x, y)) in glyphs.iter().take(7).enumerate() {
        assert_close(x, mm_to_px(x0 + options.postal_code_advance * i as f32));
        assert_close(y, mm_to_px(y0 + font_size * 0.88));
    }
}

#[test]
fn test_card_with_sender_omits_sender_honorific() {
    let mut canvas = RecordingCanvas::default();
    let sender = yamada();
    draw_card(&mut canvas, &yamada(), Some(&sender), &LayoutOptions::default());

    assert_eq!(honorific_count(&canvas), 1);
    // Recipient block is 26 glyphs, sender block repeats it minus the honorific
    assert_eq!(canvas.glyphs().len(), 26 + 25);
}

#[test]
fn test_card_sender_postal_code_advance() {
    let options = LayoutOptions::default();
    let mut canvas = RecordingCanvas::default();
    let sender = Family {
        postal_code: "12".into(),
        ..Default::default()
    };
    let recipient = Family::default();
    draw_card(&mut canvas, &recipient, Some(&sender), &options);

    let glyphs = canvas.glyphs();
    assert_eq!(glyphs.len(), 2);
    let advance = options.font_sizes.sender_postal_code * 0.85;
    assert_close(glyphs[1].2 - glyphs[0].2, mm_to_px(advance));
}

#[test]
fn test_card_multiple_names_share_scaled_size() {
    let mut recipient = yamada();
    recipient.consecutive_name1 = "花子".into();
    recipient.consecutive_name3 = "次郎".into();

    let options = LayoutOptions::default();
    let mut canvas = RecordingCanvas::default();
    draw_card(&mut canvas, &recipient, None, &options);

    assert_eq!(honorific_count(&canvas), 3);
    let scaled = mm_to_px(options.font_sizes.name * 0.9);
    let name_sizes: Vec<f32> = canvas
        .glyphs()
        .into_iter()
        .filter(|&(ch, ..)| ch == '花' || ch == '次')
        .map(|(_, size, ..)| size)
        .collect();
    assert_eq!(name_sizes.len(), 2);
    for size in name_sizes {
        assert_close(size, scaled);
    }
}

#[test]
fn test_card_wraps_long_address() {
    let mut recipient = yamada();
    recipient.building = "渋谷ビル101".into();

    let mut options = LayoutOptions::default();
    options.address_max_chars = 13;
    let mut canvas = RecordingCanvas::default();
    draw_card(&mut canvas, &recipient, None, &options);

    // The building starts a second address column
    let (address_x, _) = options.positions.address;
    let building = canvas
        .glyphs()
        .into_iter()
        .find(|&(ch, ..)| ch == 'ビ')
        .expect("building drawn");
    assert_close(
        building.2,
        mm_to_px(address_x - options.line_heights.address - options.font_sizes.address),
    );
}
