use nenga_layout::*;

mod common;
use common::{RecordingCanvas, assert_close};

#[test]
fn test_wrap_fits_on_one_line() {
    let lines = wrap_address("A", "B", "C", 3);
    assert_eq!(lines, vec!["ABC".to_string()]);

    let lines = wrap_address("A", "B", "C", 100);
    assert_eq!(lines, vec!["ABC".to_string()]);
}

#[test]
fn test_wrap_breaks_before_overflowing_part() {
    let (a, b, c) = ("東京都渋谷区", "神南1-1-1", "渋谷ビル101");
    let lines = wrap_address(a, b, c, 10);

    assert!(lines.len() > 1);
    assert_eq!(lines.concat(), format!("{a}{b}{c}"));
    assert_eq!(lines, vec![a.to_string(), b.to_string(), c.to_string()]);
}

#[test]
fn test_wrap_joins_second_and_third_parts() {
    let lines = wrap_address("東京都渋谷区", "神南1", "2F", 5);
    assert_eq!(lines, vec!["東京都渋谷区".to_string(), "神南12F".to_string()]);
}

#[test]
fn test_wrap_limit_is_inclusive() {
    // 3 + 2 == 5 stays on one line
    let lines = wrap_address("abc", "de", "", 5);
    assert_eq!(lines, vec!["abcde".to_string()]);

    let lines = wrap_address("abc", "def", "", 5);
    assert_eq!(lines, vec!["abc".to_string(), "def".to_string()]);
}

#[test]
fn test_wrap_never_splits_long_parts() {
    let lines = wrap_address("AAAAAAAAAA", "BB", "CCCCCCCC", 4);
    assert_eq!(
        lines,
        vec![
            "AAAAAAAAAA".to_string(),
            "BB".to_string(),
            "CCCCCCCC".to_string()
        ]
    );
}

#[test]
fn test_wrap_empty_parts() {
    let lines = wrap_address("", "", "", 10);
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn test_address_lines_normalize_before_measuring() {
    let family = Family {
        prefecture: "東京都".into(),
        municipalities: "渋谷区".into(),
        address: "神南1-1-1".into(),
        building: "渋谷ビル101".into(),
        ..Default::default()
    };

    let lines = address_lines(&family, 13);
    assert_eq!(
        lines,
        vec![
            "東京都渋谷区神南１－１－１".to_string(),
            "渋谷ビル１０１".to_string()
        ]
    );
}

#[test]
fn test_draw_address_offsets_each_line() {
    let lines = vec!["東京".to_string(), "渋谷".to_string()];
    let mut canvas = RecordingCanvas::default();
    draw_address(&mut canvas, &lines, (90.0, 24.0), 5.0, 7.0);

    let glyphs = canvas.glyphs();
    assert_eq!(glyphs.len(), 4);

    // Second line: one pitch to the left, one font size lower
    let (ch, _, x, y) = glyphs[2];
    assert_eq!(ch, '渋');
    assert_close(x, units::mm_to_px(90.0 - 7.0 - 5.0));
    assert_close(y, units::mm_to_px(24.0 + 5.0 + 5.0 * 0.88));
}
