//! Detector configuration

use crate::error::{LayoutError, LayoutResult};
use komawari_transform::DEFAULT_TARGET_MAX_DIMENSION;

/// Tunables of [`AdaptivePanelDetector`](crate::AdaptivePanelDetector)
///
/// Fixed at construction time; two detectors with different
/// configurations can run side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    /// Upper bound on the longer side of the sample grid
    pub target_max_dimension: u32,
    /// Smallest component (in samples) that can become a panel
    pub min_component_pixels: u32,
    /// Padding added around each component, as a fraction of its extent
    pub panel_padding_fraction: f32,
    /// IoU at or above which two boxes are merged
    pub merge_overlap_threshold: f32,
    /// Maximum number of merges
    pub max_merge_passes: u32,
    /// Slack in pixels when testing whether one box contains another
    pub nested_tolerance: i32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            target_max_dimension: DEFAULT_TARGET_MAX_DIMENSION,
            min_component_pixels: 48,
            panel_padding_fraction: 0.02,
            merge_overlap_threshold: 0.2,
            max_merge_passes: 2,
            nested_tolerance: 6,
        }
    }
}

impl DetectorConfig {
    pub fn with_target_max_dimension(mut self, dimension: u32) -> Self {
        self.target_max_dimension = dimension;
        self
    }

    pub fn with_min_component_pixels(mut self, pixels: u32) -> Self {
        self.min_component_pixels = pixels;
        self
    }

    pub fn with_panel_padding_fraction(mut self, fraction: f32) -> Self {
        self.panel_padding_fraction = fraction;
        self
    }

    pub fn with_merge_overlap_threshold(mut self, threshold: f32) -> Self {
        self.merge_overlap_threshold = threshold;
        self
    }

    pub fn with_max_merge_passes(mut self, passes: u32) -> Self {
        self.max_merge_passes = passes;
        self
    }

    pub fn with_nested_tolerance(mut self, tolerance: i32) -> Self {
        self.nested_tolerance = tolerance;
        self
    }

    /// Check that the configuration is usable
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] for a zero target dimension,
    /// a negative or non-finite padding fraction, or a merge threshold
    /// outside [0, 1].
    pub fn validate(&self) -> LayoutResult<()> {
        if self.target_max_dimension == 0 {
            return Err(LayoutError::InvalidConfig(
                "target_max_dimension must be > 0".to_string(),
            ));
        }
        if !self.panel_padding_fraction.is_finite() || self.panel_padding_fraction < 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "panel_padding_fraction must be finite and >= 0, got {}",
                self.panel_padding_fraction
            )));
        }
        if !(0.0..=1.0).contains(&self.merge_overlap_threshold) {
            return Err(LayoutError::InvalidConfig(format!(
                "merge_overlap_threshold must be within 0..1, got {}",
                self.merge_overlap_threshold
            )));
        }
        Ok(())
    }
}
