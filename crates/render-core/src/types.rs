use furips_types::{Color, Point, Rect, Size};

/// A fixed-count row of bordered single-character cells used for coded identifiers.
#[derive(Debug, Clone, Copy)]
pub struct CharacterGrid<'a> {
    pub origin: Point,
    pub box_size: f32,
    pub gap: f32,
    pub count: usize,
    pub source_text: &'a str,
    pub font_size: f32,
    pub border_width: f32,
    pub border_color: Color,
}

impl<'a> CharacterGrid<'a> {
    pub fn new(origin: Point, source_text: &'a str, count: usize) -> Self {
        Self {
            origin,
            box_size: 14.0,
            gap: 2.0,
            count,
            source_text,
            font_size: 8.0,
            border_width: 0.6,
            border_color: Color::BLACK,
        }
    }

    pub fn cell_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.origin.x + index as f32 * (self.box_size + self.gap),
            self.origin.y,
            self.box_size,
            self.box_size,
        )
    }

    /// Every cell paired with the character it shows. Always yields `count` items;
    /// characters past `count` are never shown.
    pub fn cells(&self) -> impl Iterator<Item = (Rect, Option<char>)> + '_ {
        let mut chars = self.source_text.chars();
        (0..self.count).map(move |i| (self.cell_rect(i), chars.next()))
    }

    pub fn width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f32 * self.box_size + (self.count - 1) as f32 * self.gap
    }
}

/// One serialized page, ready to be persisted. Owned by exactly one consumer.
#[derive(Debug)]
pub struct RenderedDocument {
    bytes: Vec<u8>,
    page_size: Size,
}

impl RenderedDocument {
    pub fn new(bytes: Vec<u8>, page_size: Size) -> Self {
        Self { bytes, page_size }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn page_size(&self) -> Size {
        self.page_size
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
