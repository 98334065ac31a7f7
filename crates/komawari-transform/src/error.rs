//! Error types for komawari-transform

use komawari_core::SourceError;
use thiserror::Error;

/// Errors that can occur while sampling a page
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] komawari_core::Error),

    /// The pixel source failed to deliver a pixel
    #[error("pixel source failed at ({x}, {y}): {source}")]
    Source {
        x: u32,
        y: u32,
        #[source]
        source: SourceError,
    },
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
