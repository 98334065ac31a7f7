//! komawari-io - Decoded image adapters
//!
//! Detection only needs a [`PixelSource`](komawari_core::PixelSource). This
//! crate adapts images decoded by the `image` crate to that trait.
//!
//! # Supported formats
//!
//! Decoding is delegated to `image`; each format is behind a feature flag:
//!
//! | Feature | Default |
//! |---------|---------|
//! | `png` | yes |
//! | `jpeg` | yes |
//! | `gif` | no |
//! | `webp` | no |
//! | `tiff` | no |
//! | `bmp` | no |
//!
//! # Examples
//!
//! ```no_run
//! use komawari_core::PixelSource;
//! use komawari_io::ImagePage;
//!
//! let page = ImagePage::open("page-001.png").unwrap();
//! println!("{}x{}", page.width(), page.height());
//! ```

mod error;
pub mod page;

pub use error::{IoError, IoResult};
pub use page::ImagePage;

// Re-export core for convenience
pub use komawari_core;
