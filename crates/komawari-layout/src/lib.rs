//! komawari-layout - Panel detection and reading order
//!
//! This crate turns a page into an ordered list of panels:
//!
//! - **Requests** ([`request`]): validated per-page input
//! - **Geometry** ([`resolve`]): back-projection, merging, nesting, ranking
//! - **Sequencing** ([`sequence`]): ids, centroids, reading-flow order
//! - **Fallbacks** ([`fallback`]): full page and split layouts
//! - **Detection** ([`detector`]): the [`AdaptivePanelDetector`] pipeline
//!
//! # Quick Start
//!
//! ```
//! use komawari_core::PackedPixels;
//! use komawari_layout::{AdaptivePanelDetector, DetectionRequest, PanelDetector, PanelFlow};
//!
//! let mut page = PackedPixels::new(400, 300, 0xffffff).unwrap();
//! page.fill_rect(20, 20, 180, 280, 0x000000);
//! page.fill_rect(220, 20, 380, 280, 0x000000);
//!
//! let request = DetectionRequest::builder(&page)
//!     .flow(PanelFlow::RightToLeft)
//!     .build()
//!     .unwrap();
//! let result = AdaptivePanelDetector::default().detect(&request);
//!
//! assert_eq!(result.primary.panel_count(), 2);
//! // the right-hand panel is read first
//! assert!(result.primary.panels[0].bounds.left() > 200);
//! ```

pub mod config;
pub mod detector;
mod error;
pub mod fallback;
pub mod request;
pub mod resolve;
pub mod result;
pub mod sequence;

pub use error::{LayoutError, LayoutResult};

// Re-export commonly used types
pub use config::DetectorConfig;
pub use detector::{AdaptivePanelDetector, NO_PANELS_MESSAGE, PanelDetector};
pub use request::{
    DEFAULT_BACKGROUND_TOLERANCE, DEFAULT_MAX_PANELS, DEFAULT_MIN_PANEL_AREA_RATIO,
    DetectionRequest, DetectionRequestBuilder, PanelFlow,
};
pub use result::{DetectionIssue, DetectionResult, DetectionStats, LayoutType, Panel, PanelSequence};

// Re-export core for convenience
pub use komawari_core;
