use crate::persist::PersistenceError;
use furips_render_core::RenderError;
use thiserror::Error;

/// Everything that can stop a document from being generated.
///
/// Missing header images, unresolved fields and rename collisions are not errors;
/// they degrade the output and are only logged.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Could not save document: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration is invalid: {0}")]
    Config(String),
}
