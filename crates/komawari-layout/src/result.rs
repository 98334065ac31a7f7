//! Detection output types
//!
//! A detection produces one primary [`PanelSequence`], a set of alternative
//! sequences the caller may offer as manual overrides, and the
//! [`DetectionIssue`]s raised along the way.

use crate::request::PanelFlow;
use komawari_core::{PointF, Rect, Size};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A rectangular region of the page shown to the reader as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Sequence-local identifier
    pub id: usize,
    /// Bounds in page pixel coordinates
    pub bounds: Rect,
    pub centroid: PointF,
    /// Rotation in degrees (always 0 for axis-aligned detection)
    pub rotation: f32,
    /// Relative importance; the panel area unless set otherwise
    pub weight: i64,
    /// Confidence in [0, 1]
    pub confidence: f32,
}

impl Panel {
    /// Create an unrotated panel weighted by its area
    pub fn new(id: usize, bounds: Rect, centroid: PointF, confidence: f32) -> Self {
        Self {
            id,
            bounds,
            centroid,
            rotation: 0.0,
            weight: bounds.area(),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.bounds.area()
    }
}

/// How a panel sequence was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutType {
    /// Found by image analysis
    Detected,
    /// The whole page as a single panel
    FallbackFullPage,
    /// Left and right halves
    FallbackVerticalSplit,
    /// Top and bottom halves
    FallbackHorizontalSplit,
}

impl LayoutType {
    /// Whether this layout was produced without looking at the content
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Self::Detected)
    }
}

/// Cost figures of a detection run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionStats {
    /// Original pixels per sample along each axis
    pub downscale_factor: f32,
    /// Number of samples analysed
    pub processed_samples: usize,
    pub elapsed: Duration,
}

impl Default for DetectionStats {
    fn default() -> Self {
        Self {
            downscale_factor: 1.0,
            processed_samples: 0,
            elapsed: Duration::ZERO,
        }
    }
}

/// Ordered panels of one page
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSequence {
    pub page_index: usize,
    pub page_size: Size,
    /// Panels in reading order
    pub panels: Vec<Panel>,
    pub flow: PanelFlow,
    pub layout_type: LayoutType,
    pub stats: DetectionStats,
}

impl PanelSequence {
    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Sum of panel areas; overlapping panels count twice
    pub fn occupied_area(&self) -> i64 {
        self.panels.iter().map(Panel::area).sum()
    }

    /// First panel in reading order that contains the point
    pub fn panel_at(&self, x: i32, y: i32) -> Option<&Panel> {
        self.panels.iter().find(|p| p.bounds.contains_point(x, y))
    }

    /// Panel bounds in reading order
    pub fn bounds(&self) -> Vec<Rect> {
        self.panels.iter().map(|p| p.bounds).collect()
    }
}

/// A diagnostic attached to a detection result
#[derive(Debug, Clone)]
pub enum DetectionIssue {
    /// Detection succeeded in a degraded way
    Warning { message: String },
    /// Detection failed and a fallback was returned instead
    Error {
        message: String,
        cause: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    },
}

impl DetectionIssue {
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
        }
    }

    pub fn error(
        message: impl Into<String>,
        cause: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        Self::Error {
            message: message.into(),
            cause,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Warning { message } | Self::Error { message, .. } => message,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl fmt::Display for DetectionIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning { message } => write!(f, "warning: {}", message),
            Self::Error {
                message,
                cause: Some(cause),
            } => write!(f, "error: {} ({})", message, cause),
            Self::Error { message, .. } => write!(f, "error: {}", message),
        }
    }
}

/// Outcome of a detection call
#[derive(Debug, Clone)]
pub struct DetectionResult {
    pub primary: PanelSequence,
    /// Other layouts, at most one per layout type, never the primary's type
    pub alternatives: Vec<PanelSequence>,
    pub issues: Vec<DetectionIssue>,
}

impl DetectionResult {
    /// Assemble a result, dropping alternatives whose layout type is
    /// already present
    pub fn new(
        primary: PanelSequence,
        alternatives: Vec<PanelSequence>,
        issues: Vec<DetectionIssue>,
    ) -> Self {
        let mut seen = vec![primary.layout_type];
        let mut distinct = Vec::with_capacity(alternatives.len());
        for alternative in alternatives {
            if !seen.contains(&alternative.layout_type) {
                seen.push(alternative.layout_type);
                distinct.push(alternative);
            }
        }
        Self {
            primary,
            alternatives: distinct,
            issues,
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(DetectionIssue::is_warning)
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(DetectionIssue::is_error)
    }

    /// Whether the primary sequence is a fallback layout
    pub fn used_fallback(&self) -> bool {
        self.primary.layout_type.is_fallback()
    }

    /// The primary or alternative sequence with the given layout type
    pub fn sequence(&self, layout_type: LayoutType) -> Option<&PanelSequence> {
        std::iter::once(&self.primary)
            .chain(self.alternatives.iter())
            .find(|s| s.layout_type == layout_type)
    }

    /// All sequences, primary first
    pub fn sequences(&self) -> impl Iterator<Item = &PanelSequence> {
        std::iter::once(&self.primary).chain(self.alternatives.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(layout_type: LayoutType, rects: &[(i32, i32, i32, i32)]) -> PanelSequence {
        let panels = rects
            .iter()
            .enumerate()
            .map(|(i, &(l, t, r, b))| {
                let bounds = Rect::new(l, t, r, b).unwrap();
                Panel::new(i, bounds, bounds.center(), 1.0)
            })
            .collect();
        PanelSequence {
            page_index: 0,
            page_size: Size::new(100, 100),
            panels,
            flow: PanelFlow::LeftToRight,
            layout_type,
            stats: DetectionStats::default(),
        }
    }

    #[test]
    fn test_panel_defaults() {
        let bounds = Rect::new(0, 0, 10, 20).unwrap();
        let panel = Panel::new(3, bounds, bounds.center(), 1.5);
        assert_eq!(panel.weight, 200);
        assert_eq!(panel.rotation, 0.0);
        assert_eq!(panel.confidence, 1.0);
    }

    #[test]
    fn test_sequence_helpers() {
        let seq = sequence(
            LayoutType::Detected,
            &[(0, 0, 50, 50), (40, 40, 100, 100)],
        );
        assert_eq!(seq.panel_count(), 2);
        assert!(!seq.is_empty());
        assert_eq!(seq.occupied_area(), 2500 + 3600);
        // overlap resolves to the first panel in reading order
        assert_eq!(seq.panel_at(45, 45).map(|p| p.id), Some(0));
        assert_eq!(seq.panel_at(90, 90).map(|p| p.id), Some(1));
        assert!(seq.panel_at(90, 10).is_none());
    }

    #[test]
    fn test_alternatives_are_distinct() {
        let primary = sequence(LayoutType::Detected, &[(0, 0, 10, 10)]);
        let result = DetectionResult::new(
            primary,
            vec![
                sequence(LayoutType::Detected, &[(0, 0, 5, 5)]),
                sequence(LayoutType::FallbackFullPage, &[(0, 0, 100, 100)]),
                sequence(LayoutType::FallbackFullPage, &[(0, 0, 100, 100)]),
                sequence(LayoutType::FallbackVerticalSplit, &[(0, 0, 50, 100)]),
            ],
            Vec::new(),
        );
        let types: Vec<_> = result.alternatives.iter().map(|s| s.layout_type).collect();
        assert_eq!(
            types,
            vec![LayoutType::FallbackFullPage, LayoutType::FallbackVerticalSplit]
        );
        assert!(!result.used_fallback());
        assert_eq!(
            result.sequence(LayoutType::Detected).map(|s| s.panel_count()),
            Some(1)
        );
        assert!(result.sequence(LayoutType::FallbackHorizontalSplit).is_none());
        assert_eq!(result.sequences().count(), 3);
    }

    #[test]
    fn test_issues() {
        let warning = DetectionIssue::warning("fell back");
        assert_eq!(warning.message(), "fell back");
        assert_eq!(warning.to_string(), "warning: fell back");

        let cause: Arc<dyn std::error::Error + Send + Sync> =
            Arc::new(std::io::Error::other("disk gone"));
        let error = DetectionIssue::error("Pixel source failed", Some(cause));
        assert!(error.is_error());
        assert_eq!(error.to_string(), "error: Pixel source failed (disk gone)");

        let result = DetectionResult::new(
            sequence(LayoutType::FallbackFullPage, &[(0, 0, 100, 100)]),
            Vec::new(),
            vec![warning, error],
        );
        assert!(result.has_warnings());
        assert!(result.has_errors());
        assert!(result.used_fallback());
    }
}
