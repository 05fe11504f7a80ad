//! Text-width estimation.
//!
//! Widths come from a fixed average-glyph-width ratio instead of real font metrics.
//! Switching to glyph-accurate measurement would shift every planned row.

use std::borrow::Cow;

/// Average glyph advance of Helvetica as a fraction of the font size.
pub const AVERAGE_GLYPH_WIDTH_RATIO: f32 = 0.5;

const ELLIPSIS: &str = "...";

/// Estimated rendered width of `text` at `font_size`.
///
/// Zero for the empty string, never negative, and non-decreasing in the number of
/// characters for a fixed font size.
pub fn estimate_width(text: &str, font_size: f32) -> f32 {
    let glyphs = text.chars().count() as f32;
    glyphs * char_advance(font_size)
}

/// Returns `text` unchanged when it fits in `max_width`, otherwise the longest prefix
/// that fits, ending in `...` when there is room for it.
pub fn truncate_to_width(text: &str, font_size: f32, max_width: f32) -> Cow<'_, str> {
    let advance = char_advance(font_size);
    if advance == 0.0 || estimate_width(text, font_size) <= max_width {
        return Cow::Borrowed(text);
    }

    let fits = (max_width.max(0.0) / advance).floor() as usize;
    let ellipsis_len = ELLIPSIS.chars().count();
    if fits > ellipsis_len {
        let mut out: String = text.chars().take(fits - ellipsis_len).collect();
        out.push_str(ELLIPSIS);
        Cow::Owned(out)
    } else {
        Cow::Owned(text.chars().take(fits).collect())
    }
}

/// Greedy word wrap against the estimated width.
///
/// Words wider than a whole line are split at character boundaries. Every returned
/// line fits in `max_width` unless not even one character does.
pub fn wrap_lines(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let advance = char_advance(font_size);
    if advance == 0.0 {
        return vec![text.to_string()];
    }
    let per_line = ((max_width.max(0.0) / advance).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();
        let needed = if current_len == 0 { chars.len() } else { current_len + 1 + chars.len() };
        if needed <= per_line {
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.extend(chars);
            current_len += word.chars().count();
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while chars.len() > per_line {
            let rest = chars.split_off(per_line);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        current_len = chars.len();
        current = chars.into_iter().collect();
    }
    if current_len > 0 {
        lines.push(current);
    }
    lines
}

fn char_advance(font_size: f32) -> f32 {
    font_size.max(0.0) * AVERAGE_GLYPH_WIDTH_RATIO
}
