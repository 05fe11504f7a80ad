//! Horizontal row planning with proportional shrink-to-fit.
//!
//! A row is a sequence of field groups laid out left to right. Each group is a label
//! box followed by a bordered value box. When the unconstrained demand of the row is
//! wider than the frame, every label width, value width and gap is multiplied by the
//! same factor `available / demand`, so the row ends exactly at the frame's right edge.

use crate::metrics::estimate_width;
use furips_types::{Alignment, BoxRole, LayoutBox, Rect};

/// One field group of a row.
#[derive(Debug, Clone, Copy)]
pub struct RowField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Floor for the value box, applied before any scaling.
    pub min_box_width: f32,
}

impl<'a> RowField<'a> {
    pub fn new(label: &'a str, value: &'a str, min_box_width: f32) -> Self {
        Self {
            label,
            value,
            min_box_width,
        }
    }
}

/// Font sizes and spacing used to turn text into box widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStyle {
    pub label_font_size: f32,
    pub value_font_size: f32,
    /// Space between a label and its value box.
    pub gap: f32,
    /// Space between consecutive field groups.
    pub mid_gap: f32,
    /// Added to every estimated text width.
    pub inner_padding: f32,
}

impl Default for RowStyle {
    fn default() -> Self {
        Self {
            label_font_size: 7.0,
            value_font_size: 8.0,
            gap: 3.0,
            mid_gap: 8.0,
            inner_padding: 6.0,
        }
    }
}

/// Plans a row of `(label, value)` groups inside `frame`.
///
/// Returns two boxes per field, label first, in input order. Boxes take the frame's
/// `y` and `height`. Zero fields produce no boxes.
pub fn compute_two_box_row(fields: &[RowField<'_>], frame: Rect, style: &RowStyle) -> Vec<LayoutBox> {
    if fields.is_empty() {
        return Vec::new();
    }

    let demands: Vec<(f32, f32)> = fields
        .iter()
        .map(|f| {
            let label = estimate_width(f.label, style.label_font_size) + style.inner_padding;
            let value = (estimate_width(f.value, style.value_font_size) + style.inner_padding)
                .max(f.min_box_width);
            (label.max(0.0), value.max(0.0))
        })
        .collect();

    let gaps = style.gap * fields.len() as f32 + style.mid_gap * (fields.len() - 1) as f32;
    let total_demand: f32 = demands.iter().map(|(l, v)| l + v).sum::<f32>() + gaps;
    let scale = shrink_factor(total_demand, frame.width);
    if scale < 1.0 {
        log::debug!(
            "Row demand {:.1} exceeds {:.1}; scaling by {:.3}",
            total_demand,
            frame.width,
            scale
        );
    }

    let mut boxes = Vec::with_capacity(fields.len() * 2);
    let mut x = frame.x;
    for (i, (label_w, value_w)) in demands.iter().enumerate() {
        if i > 0 {
            x += style.mid_gap * scale;
        }
        boxes.push(make_box(x, frame, label_w * scale, BoxRole::Label));
        x += label_w * scale + style.gap * scale;
        boxes.push(make_box(x, frame, value_w * scale, BoxRole::Value));
        x += value_w * scale;
    }
    boxes
}

/// Plans a full-width row: a label at its natural width and a value box taking the
/// rest of the frame. A label wider than the frame is shrunk together with its gap and
/// the value box collapses to zero width.
pub fn compute_single_box_row(label: &str, frame: Rect, style: &RowStyle) -> Vec<LayoutBox> {
    let label_w = estimate_width(label, style.label_font_size) + style.inner_padding;
    let scale = shrink_factor(label_w + style.gap, frame.width);

    let label_w = label_w * scale;
    let gap = style.gap * scale;
    let value_x = frame.x + label_w + gap;
    let value_w = (frame.width - label_w - gap).max(0.0);

    vec![
        make_box(frame.x, frame, label_w, BoxRole::Label),
        make_box(value_x, frame, value_w, BoxRole::Value),
    ]
}

fn shrink_factor(demand: f32, available: f32) -> f32 {
    let available = available.max(0.0);
    if demand > available && demand > 0.0 {
        available / demand
    } else {
        1.0
    }
}

fn make_box(x: f32, frame: Rect, width: f32, role: BoxRole) -> LayoutBox {
    LayoutBox {
        x,
        y: frame.y,
        width: width.max(0.0),
        height: frame.height,
        alignment: Alignment::Left,
        role,
    }
}
