//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] komawari_core::Error),

    /// A shape does not fit on the synthetic page
    #[error("shape ({x}, {y}, {w}x{h}) does not fit on a {page_w}x{page_h} page")]
    ShapeOutOfPage {
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        page_w: u32,
        page_h: u32,
    },
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
