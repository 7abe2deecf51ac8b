//! Recording renderer

use glam::{Mat4, Vec2, Vec4};

use super::{FontId, Renderer, TextMetrics};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Camera(Mat4),
    Rect {
        xform: Mat4,
        size: Vec2,
        color: Vec4,
    },
    Line {
        p0: Vec2,
        p1: Vec2,
        width: f32,
        color: Vec4,
    },
    Circle {
        xform: Mat4,
        size: Vec2,
        color: Vec4,
    },
    Text {
        text: String,
        position: Vec2,
        metrics: TextMetrics,
        color: Vec4,
    },
}

/// Renderer that records every call for later inspection.
///
/// Text is measured as a square monospace font: each glyph is
/// `font_height * scale` wide and tall.
#[derive(Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded (start of frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text drawn, in order
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Renderer for DrawList {
    fn begin_frame(&mut self) {
        self.clear();
    }

    fn set_camera(&mut self, camera: Mat4) {
        self.commands.push(DrawCommand::Camera(camera));
    }

    fn draw_rect(&mut self, xform: Mat4, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Rect { xform, size, color });
    }

    fn draw_line(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Vec4) {
        self.commands.push(DrawCommand::Line {
            p0,
            p1,
            width,
            color,
        });
    }

    fn draw_circle(&mut self, xform: Mat4, size: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Circle { xform, size, color });
    }

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        font_height: u32,
        position: Vec2,
        scale: Vec2,
        color: Vec4,
    ) -> TextMetrics {
        let metrics = self.measure_text(font, text, font_height, scale);
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            metrics,
            color,
        });
        metrics
    }

    fn measure_text(&self, _font: FontId, text: &str, font_height: u32, scale: Vec2) -> TextMetrics {
        let glyphs = text.chars().count() as f32;
        TextMetrics {
            width: glyphs * font_height as f32 * scale.x,
            height: font_height as f32 * scale.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_records_in_order() {
        let mut list = DrawList::new();
        list.set_camera(Mat4::IDENTITY);
        list.draw_rect(Mat4::IDENTITY, Vec2::ONE, colors::WHITE);
        list.draw_line(Vec2::ZERO, Vec2::ONE, 1.0, colors::RED);
        list.draw_circle(Mat4::IDENTITY, Vec2::splat(4.0), colors::GREEN);

        assert_eq!(list.len(), 4);
        assert!(matches!(list.commands[0], DrawCommand::Camera(_)));
        assert_eq!((list.rect_count(), list.line_count(), list.circle_count()), (1, 1, 1));

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_text_metrics() {
        let mut list = DrawList::new();
        let m = list.draw_text(FontId(0), "SCORE", 48, Vec2::ZERO, Vec2::splat(0.25), colors::WHITE);
        assert_eq!(m, TextMetrics { width: 60.0, height: 12.0 });
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["SCORE"]);
    }
}
