//! Error types for komawari-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Komawari core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Rectangle with non-positive width or height
    #[error("invalid rect: ({left},{top},{right},{bottom})")]
    InvalidRect {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Buffer length does not match the declared dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    BufferLength { expected: usize, actual: usize },

    /// The operation observed a cancellation request
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type alias for komawari operations
pub type Result<T> = std::result::Result<T, Error>;
