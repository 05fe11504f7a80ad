use crate::geometry::Rect;

/// Horizontal placement of text inside its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// What a planned box is for: the caption of a field or the bordered value cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxRole {
    Label,
    Value,
}

/// A computed rectangle ready to be drawn. Produced by the row planner and consumed
/// immediately by a canvas; never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alignment: Alignment,
    pub role: BoxRole,
}

impl LayoutBox {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_label(&self) -> bool {
        self.role == BoxRole::Label
    }
}
