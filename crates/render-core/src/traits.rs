use crate::error::RenderError;
use crate::types::CharacterGrid;
use furips_types::{Alignment, Color, Point, Rect, Size};

/// How a run of text is drawn inside its box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub alignment: Alignment,
    /// Simulated by drawing the run twice with a small horizontal offset.
    pub bold: bool,
    pub color: Color,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            alignment: Alignment::Left,
            bold: false,
            color: Color::BLACK,
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A trait for page backends, abstracting the primitive drawing operations.
///
/// Coordinates are layout units with the origin at the top-left corner of the page.
/// Implementations only mutate their in-memory page; none of these calls touch a file.
pub trait CanvasRenderer {
    fn page_size(&self) -> Size;

    fn draw_rect(&mut self, rect: Rect, border: Color, border_width: f32);

    fn fill_rect(&mut self, rect: Rect, fill: Color);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Writes a single line of text inside `rect`. Empty or whitespace-only text draws nothing.
    fn write_text(&mut self, rect: Rect, text: &str, style: &TextStyle);

    /// Places an encoded raster image (PNG/JPEG) inside `rect`. An error leaves the
    /// page unchanged so the caller can draw a fallback.
    fn draw_image(&mut self, rect: Rect, encoded: &[u8]) -> Result<(), RenderError>;

    /// Draws exactly `grid.count` bordered cells. Cell `i` holds character `i` of the
    /// source text, centred, when the text is long enough; otherwise it stays empty.
    fn draw_character_grid(&mut self, grid: &CharacterGrid<'_>) {
        let style = TextStyle::new(grid.font_size).centered();
        let mut buf = [0u8; 4];
        for (cell, ch) in grid.cells() {
            self.draw_rect(cell, grid.border_color, grid.border_width);
            if let Some(ch) = ch {
                self.write_text(cell, ch.encode_utf8(&mut buf), &style);
            }
        }
    }
}
