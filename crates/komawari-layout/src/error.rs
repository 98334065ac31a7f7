//! Error types for komawari-layout

use komawari_color::ColorError;
use komawari_region::RegionError;
use komawari_transform::TransformError;
use thiserror::Error;

/// Errors that can occur while building requests or running detection
///
/// A cancellation observed by any stage surfaces as [`LayoutError::Cancelled`]
/// rather than wrapped inside the stage's own error.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Core library error
    #[error("core error: {0}")]
    Core(komawari_core::Error),

    /// Sampling error
    #[error("transform error: {0}")]
    Transform(TransformError),

    /// Thresholding or masking error
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// Component extraction error
    #[error("region error: {0}")]
    Region(RegionError),

    /// Request failed validation
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Detector configuration failed validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Detection was cancelled through its token
    #[error("detection cancelled")]
    Cancelled,
}

impl From<komawari_core::Error> for LayoutError {
    fn from(err: komawari_core::Error) -> Self {
        match err {
            komawari_core::Error::Cancelled => Self::Cancelled,
            other => Self::Core(other),
        }
    }
}

impl From<TransformError> for LayoutError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Core(komawari_core::Error::Cancelled) => Self::Cancelled,
            other => Self::Transform(other),
        }
    }
}

impl From<RegionError> for LayoutError {
    fn from(err: RegionError) -> Self {
        match err {
            RegionError::Core(komawari_core::Error::Cancelled) => Self::Cancelled,
            other => Self::Region(other),
        }
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
