//! komawari-transform - Page downsampling
//!
//! Detection works on a bounded-resolution luma grid. This crate reduces a
//! full-resolution [`PixelSource`](komawari_core::PixelSource) to a
//! [`SampledImage`](komawari_core::sample::SampledImage) by area averaging.

pub mod error;
pub mod sample;

pub use komawari_core;

pub use error::{TransformError, TransformResult};
pub use sample::{DEFAULT_TARGET_MAX_DIMENSION, sample_grid_size, sample_page, sample_step};
