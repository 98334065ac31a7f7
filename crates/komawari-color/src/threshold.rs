//! Global threshold selection
//!
//! Provides:
//! - Otsu's method over a 256-bin luma histogram
//! - Background polarity (light paper or dark paper) from a known color or
//!   from the corners of the sample grid

use crate::error::{ColorError, ColorResult};
use komawari_core::sample::SampledImage;
use komawari_core::{LumaHistogram, luma};

/// Lower clamp for the selected threshold
pub const MIN_THRESHOLD: u8 = 32;
/// Upper clamp for the selected threshold
pub const MAX_THRESHOLD: u8 = 223;

/// Threshold reported when no split point improves on the initial guess
const INITIAL_THRESHOLD: u8 = 127;

/// Whether the page background is brighter or darker than the ink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundPolarity {
    /// Light paper, dark ink
    Light,
    /// Dark paper, light ink
    Dark,
}

impl BackgroundPolarity {
    /// Classify a background luma against a threshold
    pub fn from_luma(background_luma: u8, threshold: u8) -> Self {
        if background_luma >= threshold {
            Self::Light
        } else {
            Self::Dark
        }
    }
}

/// Compute Otsu's threshold from a luma histogram
///
/// Scans candidate thresholds once with running weighted sums and keeps the
/// first value with the largest between-class variance. The result is
/// clamped to [`MIN_THRESHOLD`, `MAX_THRESHOLD`] so near-uniform pages are
/// not split into all-ink or all-paper.
pub fn compute_otsu_threshold(histogram: &LumaHistogram) -> u8 {
    let total = histogram.total() as f64;
    let sum = histogram.weighted_sum();

    let mut sum_background = 0.0f64;
    let mut weight_background = 0.0f64;
    let mut max_variance = 0.0f64;
    let mut threshold = INITIAL_THRESHOLD;

    for (i, &count) in histogram.bins().iter().enumerate() {
        let count = count as f64;
        weight_background += count;
        if weight_background == 0.0 {
            continue;
        }
        let weight_foreground = total - weight_background;
        if weight_foreground == 0.0 {
            break;
        }
        sum_background += i as f64 * count;
        let mean_background = sum_background / weight_background;
        let mean_foreground = (sum - sum_background) / weight_foreground;
        let diff = mean_background - mean_foreground;
        let variance_between = weight_background * weight_foreground * diff * diff;
        if variance_between > max_variance {
            max_variance = variance_between;
            threshold = i as u8;
        }
    }

    threshold.clamp(MIN_THRESHOLD, MAX_THRESHOLD)
}

/// Estimate the background luma as the mean of the four grid corners
///
/// # Errors
///
/// Returns [`ColorError::EmptyImage`] for an empty grid.
pub fn estimate_background_luma(sampled: &SampledImage) -> ColorResult<u8> {
    let corners = sampled.corner_lumas().ok_or(ColorError::EmptyImage)?;
    let sum: u32 = corners.iter().map(|&c| c as u32).sum();
    Ok((sum / 4) as u8)
}

/// Decide the background polarity for a page
///
/// A caller-supplied background color takes precedence over the corner
/// estimate.
pub fn resolve_background(
    threshold: u8,
    known_background: Option<u32>,
    sampled: &SampledImage,
) -> ColorResult<BackgroundPolarity> {
    let background_luma = match known_background {
        Some(color) => luma(color),
        None => estimate_background_luma(sampled)?,
    };
    Ok(BackgroundPolarity::from_luma(background_luma, threshold))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram_of(groups: &[(u8, usize)]) -> LumaHistogram {
        let mut hist = LumaHistogram::new();
        for &(value, n) in groups {
            for _ in 0..n {
                hist.add(value);
            }
        }
        hist
    }

    #[test]
    fn test_otsu_bimodal() {
        let hist = histogram_of(&[(60, 50), (200, 50)]);
        assert_eq!(compute_otsu_threshold(&hist), 60);
    }

    #[test]
    fn test_otsu_unbalanced_classes() {
        let hist = histogram_of(&[(40, 10), (80, 10), (220, 80)]);
        assert_eq!(compute_otsu_threshold(&hist), 80);
    }

    #[test]
    fn test_otsu_clamps_low_and_high() {
        let low = histogram_of(&[(5, 50), (10, 50)]);
        assert_eq!(compute_otsu_threshold(&low), MIN_THRESHOLD);
        let high = histogram_of(&[(240, 50), (250, 50)]);
        assert_eq!(compute_otsu_threshold(&high), MAX_THRESHOLD);
    }

    #[test]
    fn test_otsu_uniform_and_empty() {
        assert_eq!(compute_otsu_threshold(&histogram_of(&[(255, 100)])), 127);
        assert_eq!(compute_otsu_threshold(&histogram_of(&[(0, 100)])), 127);
        assert_eq!(compute_otsu_threshold(&LumaHistogram::new()), 127);
    }

    #[test]
    fn test_background_estimate_from_corners() {
        let sampled = SampledImage::from_luma(2, 2, vec![255, 251, 0, 250]).unwrap();
        // (255 + 251 + 0 + 250) / 4
        assert_eq!(estimate_background_luma(&sampled).unwrap(), 189);
    }

    #[test]
    fn test_polarity() {
        let light = SampledImage::from_luma(2, 2, vec![250; 4]).unwrap();
        let dark = SampledImage::from_luma(2, 2, vec![10; 4]).unwrap();
        assert_eq!(
            resolve_background(127, None, &light).unwrap(),
            BackgroundPolarity::Light
        );
        assert_eq!(
            resolve_background(127, None, &dark).unwrap(),
            BackgroundPolarity::Dark
        );
        // a known color overrides the corners
        assert_eq!(
            resolve_background(127, Some(0x000000), &light).unwrap(),
            BackgroundPolarity::Dark
        );
        // ties go to the light side
        assert_eq!(BackgroundPolarity::from_luma(127, 127), BackgroundPolarity::Light);
    }
}
