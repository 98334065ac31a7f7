//! Error types for komawari-color

use thiserror::Error;

/// Errors that can occur during thresholding and masking
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] komawari_core::Error),

    /// Empty image
    #[error("empty image: no samples to process")]
    EmptyImage,
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
