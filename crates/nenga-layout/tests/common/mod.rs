#![allow(dead_code)]

use nenga_layout::Canvas;

/// Something that happened to a [`RecordingCanvas`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasEvent {
    Clear,
    Glyph { ch: char, size: f32, x: f32, y: f32 },
}

/// Canvas that remembers every call instead of painting
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub events: Vec<CanvasEvent>,
}

impl RecordingCanvas {
    pub fn glyphs(&self) -> Vec<(char, f32, f32, f32)> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                CanvasEvent::Glyph { ch, size, x, y } => Some((ch, size, x, y)),
                CanvasEvent::Clear => None,
            })
            .collect()
    }

    pub fn text(&self) -> String {
        self.glyphs().into_iter().map(|(ch, ..)| ch).collect()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.events.push(CanvasEvent::Clear);
    }

    fn draw_glyph(&mut self, ch: char, size: f32, x: f32, y: f32) {
        self.events.push(CanvasEvent::Glyph { ch, size, x, y });
    }
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
