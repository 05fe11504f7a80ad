//! Pure page geometry for the FURIPS document engine.
//!
//! Nothing in this crate draws. It estimates text widths and turns field descriptors
//! into positioned [`LayoutBox`](furips_types::LayoutBox)es that a canvas consumes.

pub mod columns;
pub mod metrics;
pub mod row;

pub use columns::distribute_columns;
pub use metrics::{AVERAGE_GLYPH_WIDTH_RATIO, estimate_width, truncate_to_width, wrap_lines};
pub use row::{RowField, RowStyle, compute_single_box_row, compute_two_box_row};
