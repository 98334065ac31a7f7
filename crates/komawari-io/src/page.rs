//! Decoded page adapter
//!
//! [`ImagePage`] owns an 8-bit RGB buffer from the `image` crate and exposes
//! it as a [`PixelSource`]. Images with an alpha channel are composited over
//! white paper when loaded, so transparent margins read as background.

use crate::error::{IoError, IoResult};
use image::{DynamicImage, Rgb, RgbImage};
use komawari_core::{PackedPixels, PixelSource, SourceError, compose_rgb};
use std::path::Path;

/// A decoded page image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePage {
    image: RgbImage,
}

impl ImagePage {
    /// Wrap an RGB buffer
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    /// Convert any decoded image, flattening alpha onto white
    pub fn from_dynamic(image: DynamicImage) -> Self {
        if !image.color().has_alpha() {
            return Self::from_rgb(image.into_rgb8());
        }
        let rgba = image.into_rgba8();
        let flat = RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
            let [r, g, b, a] = rgba.get_pixel(x, y).0;
            Rgb([over_white(r, a), over_white(g, a), over_white(b, a)])
        });
        Self::from_rgb(flat)
    }

    /// Decode a page from a file; the format is guessed from the path
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Image`] if the file cannot be read or decoded, or
    /// its format is not enabled.
    pub fn open<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let image = image::open(path)?;
        Ok(Self::from_dynamic(image))
    }

    /// Decode a page from an in-memory encoded image
    pub fn from_memory(bytes: &[u8]) -> IoResult<Self> {
        let image = image::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(image))
    }

    /// The underlying RGB buffer
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_inner(self) -> RgbImage {
        self.image
    }

    /// Copy the page into a packed-color buffer
    pub fn to_packed(&self) -> IoResult<PackedPixels> {
        let data = self
            .image
            .pixels()
            .map(|p| compose_rgb(p[0], p[1], p[2]))
            .collect();
        Ok(PackedPixels::from_vec(
            self.image.width(),
            self.image.height(),
            data,
        )?)
    }
}

impl From<RgbImage> for ImagePage {
    fn from(image: RgbImage) -> Self {
        Self::from_rgb(image)
    }
}

impl From<DynamicImage> for ImagePage {
    fn from(image: DynamicImage) -> Self {
        Self::from_dynamic(image)
    }
}

impl PixelSource for ImagePage {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<u32, SourceError> {
        match self.image.get_pixel_checked(x, y) {
            Some(p) => Ok(compose_rgb(p[0], p[1], p[2])),
            None => Err(Box::new(IoError::OutOfBounds {
                x,
                y,
                width: self.image.width(),
                height: self.image.height(),
            })),
        }
    }
}

#[inline]
fn over_white(channel: u8, alpha: u8) -> u8 {
    let (c, a) = (channel as u32, alpha as u32);
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}
