//! komawari-test - Regression test framework for komawari
//!
//! Provides the [`RegParams`] comparison harness used by every crate's
//! `tests/*_reg.rs` files and builders for synthetic pages with known panel
//! layouts.
//!
//! # Usage
//!
//! ```
//! use komawari_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(4.0, 4.0, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;
mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode, format_rect};
pub use synthetic::{BLACK, FailingSource, RowDecodeError, SyntheticPage, WHITE, grid_page};
