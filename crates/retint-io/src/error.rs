use std::path::PathBuf;

use retint_core::ImageError;

/// Errors from loading, saving or configuring images.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to decode image: {0}")]
    Decode(image::ImageError),
    #[error("failed to encode image: {0}")]
    Encode(image::ImageError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid asset config: {0}")]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Image(#[from] ImageError),
}
