pub mod color;
pub mod geometry;
pub mod layout_box;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use layout_box::{Alignment, BoxRole, LayoutBox};
