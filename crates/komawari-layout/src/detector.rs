//! Adaptive panel detector
//!
//! Runs the detection pipeline for one page:
//!
//! 1. Sample the page into a bounded luma grid
//! 2. Pick an Otsu threshold and the background polarity
//! 3. Build the foreground mask
//! 4. Extract connected components
//! 5. Resolve them into page-space rects
//! 6. Sequence the rects, or fall back to a content-independent layout
//!
//! A pixel source failure does not abort detection: the full page fallback
//! is returned with an error issue attached.

use crate::config::DetectorConfig;
use crate::error::LayoutResult;
use crate::fallback::{full_page, split_fallbacks};
use crate::request::DetectionRequest;
use crate::resolve::resolve_panels;
use crate::result::{DetectionIssue, DetectionResult, DetectionStats, LayoutType, PanelSequence};
use crate::sequence::{build_panels, order_panels};
use komawari_color::{build_foreground_mask, compute_otsu_threshold, resolve_background};
use komawari_core::CancelToken;
use komawari_region::{find_components, min_component_pixels};
use komawari_transform::{TransformError, sample_page, sample_step};
use log::{debug, warn};
use std::sync::Arc;
use std::time::Instant;

/// Message attached when nothing was detected
pub const NO_PANELS_MESSAGE: &str = "No panels detected; fallback layout used";

/// Something that can split a page into panels
pub trait PanelDetector {
    /// Detect the panels of one page
    ///
    /// Never fails: problems are reported as issues on a fallback result.
    fn detect(&self, request: &DetectionRequest<'_>) -> DetectionResult;
}

/// Histogram-threshold and connected-component panel detector
#[derive(Debug, Clone, Default)]
pub struct AdaptivePanelDetector {
    config: DetectorConfig,
}

impl AdaptivePanelDetector {
    /// Create a detector with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`](crate::LayoutError::InvalidConfig) if the configuration is not
    /// usable.
    pub fn new(config: DetectorConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect panels, giving up when `cancel` is triggered
    ///
    /// The token is polled between stages, once per sampled row, every few
    /// thousand cells of the flood fill and once per merge pass.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Cancelled`](crate::LayoutError::Cancelled) if cancellation was observed.
    /// Other stage errors indicate a broken invariant and are returned
    /// as-is.
    pub fn detect_with_cancel(
        &self,
        request: &DetectionRequest<'_>,
        cancel: &CancelToken,
    ) -> LayoutResult<DetectionResult> {
        let start = Instant::now();
        let page = request.page_size();
        cancel.check()?;

        // 1. Sample
        let sampled = match sample_page(
            request.source(),
            self.config.target_max_dimension,
            cancel,
        ) {
            Ok(sampled) => sampled,
            Err(TransformError::Source { x, y, source }) => {
                warn!(
                    "page {}: pixel source failed at ({}, {}): {}",
                    request.page_index(),
                    x,
                    y,
                    source
                );
                let stats = DetectionStats {
                    downscale_factor: sample_step(page, self.config.target_max_dimension) as f32,
                    processed_samples: 0,
                    elapsed: start.elapsed(),
                };
                let issue = DetectionIssue::error(
                    format!("Pixel source failed: {}", source),
                    Some(Arc::from(source)),
                );
                return Ok(fallback_result(request, stats, issue));
            }
            Err(err) => return Err(err.into()),
        };
        debug!(
            "page {}: sampled {}x{} -> {}x{} (step {})",
            request.page_index(),
            page.width,
            page.height,
            sampled.width(),
            sampled.height(),
            sampled.step()
        );
        cancel.check()?;

        // 2. Threshold
        let threshold = compute_otsu_threshold(sampled.histogram());
        let polarity = resolve_background(threshold, request.background_color(), &sampled)?;
        debug!(
            "page {}: threshold {} background {:?}",
            request.page_index(),
            threshold,
            polarity
        );

        // 3. Mask
        let mask =
            build_foreground_mask(&sampled, threshold, polarity, request.effective_tolerance());
        cancel.check()?;

        // 4. Components
        let min_pixels = min_component_pixels(
            self.config.min_component_pixels,
            request.min_panel_area_ratio(),
            page,
            sampled.step(),
        )?;
        let components = find_components(&mask, min_pixels, cancel)?;
        debug!(
            "page {}: {} foreground samples, {} components >= {} samples",
            request.page_index(),
            mask.count_foreground(),
            components.len(),
            min_pixels
        );
        cancel.check()?;

        // 5. Geometry
        let rects = resolve_panels(
            &components,
            sampled.step(),
            page,
            &self.config,
            request.max_panels(),
            cancel,
        )?;
        cancel.check()?;

        let stats = DetectionStats {
            downscale_factor: sampled.step() as f32,
            processed_samples: sampled.sample_count(),
            elapsed: start.elapsed(),
        };

        // 6. Sequence or fall back
        if rects.is_empty() {
            warn!(
                "page {}: no panels detected, using full page fallback",
                request.page_index()
            );
            return Ok(fallback_result(
                request,
                stats,
                DetectionIssue::warning(NO_PANELS_MESSAGE),
            ));
        }

        let mut panels = build_panels(&rects, page);
        order_panels(&mut panels, request.flow());
        debug!(
            "page {}: {} panels in {:?}",
            request.page_index(),
            panels.len(),
            stats.elapsed
        );

        let primary = PanelSequence {
            page_index: request.page_index(),
            page_size: page,
            panels,
            flow: request.flow(),
            layout_type: LayoutType::Detected,
            stats,
        };
        let mut alternatives = vec![full_page(
            request.page_index(),
            page,
            request.flow(),
            stats,
        )];
        alternatives.extend(split_fallbacks(
            request.page_index(),
            page,
            request.flow(),
            stats,
        ));

        Ok(DetectionResult::new(primary, alternatives, Vec::new()))
    }
}

impl PanelDetector for AdaptivePanelDetector {
    fn detect(&self, request: &DetectionRequest<'_>) -> DetectionResult {
        let start = Instant::now();
        match self.detect_with_cancel(request, &CancelToken::new()) {
            Ok(result) => result,
            Err(err) => {
                warn!("page {}: detection failed: {}", request.page_index(), err);
                let stats = DetectionStats {
                    elapsed: start.elapsed(),
                    ..DetectionStats::default()
                };
                let issue =
                    DetectionIssue::error(format!("Detection failed: {}", err), Some(Arc::new(err)));
                fallback_result(request, stats, issue)
            }
        }
    }
}

/// Full page primary with the applicable split as alternative
fn fallback_result(
    request: &DetectionRequest<'_>,
    stats: DetectionStats,
    issue: DetectionIssue,
) -> DetectionResult {
    let page = request.page_size();
    let primary = full_page(request.page_index(), page, request.flow(), stats);
    let alternatives = split_fallbacks(request.page_index(), page, request.flow(), stats);
    DetectionResult::new(primary, alternatives, vec![issue])
}
