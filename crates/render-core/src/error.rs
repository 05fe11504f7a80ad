use thiserror::Error;

/// Failures of a page backend.
///
/// Only `Io` and `Pdf` abort serialization. `Image` is returned by
/// [`CanvasRenderer::draw_image`](crate::CanvasRenderer::draw_image) so the caller can
/// fall back to a placeholder.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error while writing the page: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF serialization failed: {0}")]
    Pdf(String),
    #[error("image could not be embedded: {0}")]
    Image(String),
    #[error("rendering failed: {0}")]
    Other(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
