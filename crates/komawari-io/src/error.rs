//! I/O error types
//!
//! Decoder failures from the `image` crate and out-of-range pixel reads are
//! reported through one error type.

use thiserror::Error;

/// Error type for page loading and pixel access
#[derive(Error, Debug)]
pub enum IoError {
    /// The file could not be read or decoded
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A pixel outside the page was requested
    #[error("pixel ({x}, {y}) outside {width}x{height} page")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// An error from the core library
    #[error("core error: {0}")]
    Core(#[from] komawari_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
