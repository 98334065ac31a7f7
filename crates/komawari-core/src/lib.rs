//! Komawari Core - Basic data structures for panel detection
//!
//! This crate provides the fundamental data structures used throughout
//! the komawari workspace:
//!
//! - [`PixelSource`] - Read access to a page bitmap, plus [`PackedPixels`]
//! - [`Rect`] / [`Size`] / [`PointF`] - Page geometry
//! - [`LumaHistogram`] - 256-bin luma histogram
//! - [`SampledImage`] - Downsampled luma grid
//! - [`BinaryMask`] - Foreground mask over a sample grid
//! - [`CancelToken`] - Cooperative cancellation flag

pub mod cancel;
pub mod error;
pub mod geometry;
pub mod histogram;
pub mod mask;
pub mod pixel;
pub mod sample;

pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use geometry::{PointF, Rect, Size};
pub use histogram::{HISTOGRAM_BINS, LumaHistogram};
pub use mask::BinaryMask;
pub use pixel::{PackedPixels, PixelSource, SourceError, compose_rgb, luma};
