//! PDF page backend using lopdf.
//!
//! [`LopdfCanvas`] accumulates content-stream operations for one fixed-size page and
//! serializes them into a [`RenderedDocument`](furips_render_core::RenderedDocument).

mod canvas;
mod image;
mod writer;

pub use canvas::LopdfCanvas;
pub use writer::PdfPageWriter;
