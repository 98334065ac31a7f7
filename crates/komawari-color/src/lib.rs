//! komawari-color - Thresholding and foreground masking
//!
//! - **Thresholding** ([`threshold`]): Otsu's method over a luma histogram,
//!   background polarity estimation
//! - **Masking** ([`mask`]): Luma grid to foreground mask with a tolerance
//!   band around the threshold

pub mod error;
pub mod mask;
pub mod threshold;

// Re-export core types
pub use komawari_core;

pub use error::{ColorError, ColorResult};

pub use threshold::{
    // Types
    BackgroundPolarity,
    // Constants
    MAX_THRESHOLD,
    MIN_THRESHOLD,
    // Functions
    compute_otsu_threshold,
    estimate_background_luma,
    resolve_background,
};

pub use mask::build_foreground_mask;
