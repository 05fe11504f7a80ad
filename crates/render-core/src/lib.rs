//! Core rendering abstractions for FURIPS pages.
//!
//! This crate provides the pieces every drawing backend shares:
//! - `CanvasRenderer`, the capability set templates draw against
//! - `CharacterGrid`, the fixed-count coded-identifier row
//! - `RenderedDocument`, the serialized page handed to persistence
//! - `RecordingCanvas`, a display-list backend used for previews and tests

mod error;
pub mod recording;
mod traits;
mod types;
pub mod utils;

pub use error::RenderError;
pub use recording::{DrawCommand, RecordingCanvas};
pub use traits::{CanvasRenderer, TextStyle};
pub use types::{CharacterGrid, RenderedDocument};
