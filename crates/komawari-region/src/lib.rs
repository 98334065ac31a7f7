//! komawari-region - Connected component extraction
//!
//! Finds 4-connected foreground regions in a [`BinaryMask`] with an
//! iterative flood fill, so large sample grids never risk stack exhaustion.
//!
//! # Examples
//!
//! ```
//! use komawari_core::{BinaryMask, CancelToken};
//! use komawari_region::find_components;
//!
//! let mut mask = BinaryMask::new(10, 10);
//! mask.set(1, 1, true);
//! mask.set(2, 1, true);
//! mask.set(7, 7, true);
//!
//! let components = find_components(&mask, 1, &CancelToken::new()).unwrap();
//! assert_eq!(components.len(), 2);
//! assert_eq!(components[0].pixel_count, 2);
//! ```
//!
//! [`BinaryMask`]: komawari_core::BinaryMask

pub mod conncomp;
pub mod error;

// Re-export core types
pub use komawari_core;

pub use error::{RegionError, RegionResult};

pub use conncomp::{Component, find_components, min_component_pixels};
