//! Foreground mask construction
//!
//! Marks a sample as foreground when its luma lies beyond a tolerance band
//! around the threshold, on the side opposite the background. Samples inside
//! the band are treated as background, which keeps soft gray tones and
//! screentone from bridging separate panels.

use crate::threshold::BackgroundPolarity;
use komawari_core::BinaryMask;
use komawari_core::sample::SampledImage;

/// Build the foreground mask for a sampled page
///
/// # Arguments
///
/// * `sampled` - Sampled luma grid
/// * `threshold` - Global threshold
/// * `polarity` - Background polarity
/// * `tolerance` - Half-width of the band around the threshold (clamped to 0..=255)
pub fn build_foreground_mask(
    sampled: &SampledImage,
    threshold: u8,
    polarity: BackgroundPolarity,
    tolerance: u32,
) -> BinaryMask {
    let tolerance = tolerance.min(255) as i32;
    let lower = (threshold as i32 - tolerance).max(0);
    let upper = (threshold as i32 + tolerance).min(255);

    sampled.classify(|value| {
        let value = value as i32;
        match polarity {
            BackgroundPolarity::Light => value <= lower,
            BackgroundPolarity::Dark => value >= upper,
        }
    })
}
