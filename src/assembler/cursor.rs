use furips_types::{Rect, Size};

/// Vertical position of the next element on a single page.
///
/// Every placement advances the cursor by the element height plus a fixed gap, so
/// elements never overlap.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageCursor {
    y: f32,
    left: f32,
    width: f32,
    bottom: f32,
    gap: f32,
}

impl PageCursor {
    pub(crate) fn new(page: Size, margin: f32, gap: f32) -> Self {
        Self {
            y: margin,
            left: margin,
            width: (page.width - 2.0 * margin).max(0.0),
            bottom: page.height - margin,
            gap,
        }
    }

    pub(crate) fn y(&self) -> f32 {
        self.y
    }

    pub(crate) fn remaining(&self) -> f32 {
        (self.bottom - self.y).max(0.0)
    }

    pub(crate) fn fits(&self, height: f32) -> bool {
        self.y + height <= self.bottom
    }

    /// Claims a full-width band of `height` and moves below it.
    pub(crate) fn take(&mut self, height: f32) -> Rect {
        let frame = Rect::new(self.left, self.y, self.width, height);
        self.y += height + self.gap;
        frame
    }
}
