//! Komawari - Adaptive panel detection for comic and manga pages
//!
//! Finds the rectangular panels of a page and orders them for one-at-a-time
//! reading, without any hand-authored metadata.
//!
//! # Overview
//!
//! Detection is deterministic and purely geometric:
//!
//! - Downsampling to a bounded luma grid
//! - Otsu thresholding with background polarity detection
//! - 4-connected component extraction
//! - Box merging, nesting removal and ranking
//! - Reading-order sequencing (left-to-right, right-to-left, top-to-bottom)
//! - Full page and split fallbacks when nothing is found
//!
//! # Example
//!
//! ```
//! use komawari::{AdaptivePanelDetector, DetectionRequest, PackedPixels, PanelDetector};
//!
//! let page = PackedPixels::new(640, 480, 0xffffff).unwrap();
//! let request = DetectionRequest::builder(&page).build().unwrap();
//! let result = AdaptivePanelDetector::default().detect(&request);
//!
//! // a blank page falls back to the whole page
//! assert!(result.used_fallback());
//! assert_eq!(result.primary.panel_count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use komawari_core::*;

// Detection entry points
pub use komawari_layout::{
    AdaptivePanelDetector, DetectionIssue, DetectionRequest, DetectionResult, DetectionStats,
    DetectorConfig, LayoutError, LayoutResult, LayoutType, Panel, PanelDetector, PanelFlow,
    PanelSequence,
};

// Re-export domain crates as modules to avoid name conflicts
pub use komawari_color as color;
pub use komawari_io as io;
pub use komawari_layout as layout;
pub use komawari_region as region;
pub use komawari_transform as transform;
