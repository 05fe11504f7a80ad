use crate::traits::TextStyle;
use furips_layout::estimate_width;
use furips_types::{Alignment, Point, Rect};

/// Left inset applied to left-aligned text so it does not touch the box border.
pub const TEXT_INSET: f32 = 2.0;

/// Horizontal offset of the second pass used to fake a bold weight.
pub const BOLD_OFFSET: f32 = 0.35;

/// Distance from the vertical centre of a box down to the baseline, as a fraction
/// of the font size.
const BASELINE_DROP: f32 = 0.35;

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline start of `text` inside `rect`, in layout (top-left origin) coordinates.
/// Text is vertically centred; centred text is placed with the width estimate.
pub fn text_origin(rect: Rect, text: &str, style: &TextStyle) -> Point {
    let x = match style.alignment {
        Alignment::Left => rect.x + TEXT_INSET,
        Alignment::Center => rect.x + (rect.width - estimate_width(text, style.font_size)) / 2.0,
    };
    let baseline = rect.y + rect.height / 2.0 + style.font_size * BASELINE_DROP;
    Point::new(x, baseline)
}

/// Encodes text for the standard Type1 fonts (WinAnsi). Characters outside Latin-1
/// are replaced with `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if c as u32 <= 255 { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_origin_uses_width_estimate() {
        let rect = Rect::new(100.0, 0.0, 14.0, 14.0);
        let style = TextStyle::new(8.0).centered();
        let origin = text_origin(rect, "A", &style);
        // 'A' estimates to 4pt wide.
        assert!((origin.x - 105.0).abs() < 1e-4);
        assert!((origin.y - (7.0 + 2.8)).abs() < 1e-4);
    }

    #[test]
    fn left_origin_is_inset() {
        let origin = text_origin(Rect::new(10.0, 10.0, 50.0, 10.0), "abc", &TextStyle::new(8.0));
        assert_eq!(origin.x, 12.0);
    }

    #[test]
    fn win_ansi_keeps_latin1() {
        assert_eq!(to_win_ansi("Pérez"), vec![b'P', 0xE9, b'r', b'e', b'z']);
        assert_eq!(to_win_ansi("€"), vec![b'?']);
    }

    #[test]
    fn flip() {
        assert_eq!(flip_y(42.0, 842.0), 800.0);
    }
}
