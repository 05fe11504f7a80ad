//! A backend that records draw calls instead of producing page bytes.

use crate::error::RenderError;
use crate::traits::{CanvasRenderer, TextStyle};
use crate::utils::text_origin;
use furips_types::{Color, Point, Rect, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color, width: f32 },
    Fill { rect: Rect, color: Color },
    Line { from: Point, to: Point, color: Color, width: f32 },
    Text { rect: Rect, text: String, style: TextStyle, origin: Point },
    Image { rect: Rect, byte_len: usize },
}

/// Records every primitive in drawing order.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    page: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new(page: Size) -> Self {
        Self {
            page,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Text runs in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Bordered (stroked) rectangles in drawing order.
    pub fn stroked_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn image_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Image { .. }))
            .count()
    }
}

impl CanvasRenderer for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.page
    }

    fn draw_rect(&mut self, rect: Rect, border: Color, border_width: f32) {
        self.commands.push(DrawCommand::Rect {
            rect,
            color: border,
            width: border_width,
        });
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color) {
        self.commands.push(DrawCommand::Fill { rect, color: fill });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn write_text(&mut self, rect: Rect, text: &str, style: &TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            rect,
            text: text.to_string(),
            style: *style,
            origin: text_origin(rect, text, style),
        });
    }

    fn draw_image(&mut self, rect: Rect, encoded: &[u8]) -> Result<(), RenderError> {
        if encoded.is_empty() {
            return Err(RenderError::Image("empty image data".into()));
        }
        self.commands.push(DrawCommand::Image {
            rect,
            byte_len: encoded.len(),
        });
        Ok(())
    }
}
