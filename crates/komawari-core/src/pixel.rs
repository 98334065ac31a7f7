//! Pixel source abstraction
//!
//! Detection never touches a concrete bitmap type. Anything that can report
//! its size and hand out packed colors implements [`PixelSource`]; adapters
//! for decoder-specific buffers live outside the core.
//!
//! # Pixel format
//!
//! Colors are packed as `0xAARRGGBB` with red in bits 16..24, green in
//! bits 8..16 and blue in bits 0..8. The alpha byte is ignored.

use crate::error::{Error, Result};
use crate::geometry::Size;
use std::sync::Arc;

/// Error reported by a pixel source that could not produce a pixel
///
/// Lazily decoded bitmaps may fail halfway through a page; the cause is kept
/// so callers can surface it.
pub type SourceError = std::boxed::Box<dyn std::error::Error + Send + Sync + 'static>;

/// Read access to a page bitmap
///
/// Callers only request coordinates in `[0, width) x [0, height)`.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Packed `0xRRGGBB` color at (x, y)
    fn get_pixel(&self, x: u32, y: u32) -> std::result::Result<u32, SourceError>;

    /// Page size
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> std::result::Result<u32, SourceError> {
        (**self).get_pixel(x, y)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for std::boxed::Box<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> std::result::Result<u32, SourceError> {
        (**self).get_pixel(x, y)
    }
}

impl<T: PixelSource + ?Sized> PixelSource for Arc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> std::result::Result<u32, SourceError> {
        (**self).get_pixel(x, y)
    }
}

/// Extract red component from a packed color.
#[inline]
pub fn red(color: u32) -> u8 {
    ((color >> 16) & 0xff) as u8
}

/// Extract green component from a packed color.
#[inline]
pub fn green(color: u32) -> u8 {
    ((color >> 8) & 0xff) as u8
}

/// Extract blue component from a packed color.
#[inline]
pub fn blue(color: u32) -> u8 {
    (color & 0xff) as u8
}

/// Compose a packed color from RGB components.
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    0xff00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Perceptual brightness of a packed color.
///
/// Rec. 709 weights (0.2126, 0.7152, 0.0722), truncated toward zero.
/// Evaluated in fixed point so that neutral grays map to themselves.
#[inline]
pub fn luma(color: u32) -> u8 {
    let weighted =
        2126 * red(color) as u32 + 7152 * green(color) as u32 + 722 * blue(color) as u32;
    (weighted / 10_000) as u8
}

/// An in-memory page stored as packed colors in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedPixels {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl PackedPixels {
    /// Create a page filled with one color
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero.
    pub fn new(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        })
    }

    /// Wrap an existing row-major buffer
    pub fn from_vec(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get a pixel, or `None` if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Set a pixel
    pub fn set_pixel(&mut self, x: u32, y: u32, color: u32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        let index = y as usize * self.width as usize + x as usize;
        self.data[index] = color;
        Ok(())
    }

    /// Fill `[x0, x1) x [y0, y1)` with a color, clipped to the page
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: u32) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                self.data[row + x as usize] = color;
            }
        }
    }

    /// Raw row-major data
    pub fn data(&self) -> &[u32] {
        &self.data
    }
}

impl PixelSource for PackedPixels {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> std::result::Result<u32, SourceError> {
        self.pixel(x, y).ok_or_else(|| {
            Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let c = compose_rgb(0x12, 0x34, 0x56);
        assert_eq!(red(c), 0x12);
        assert_eq!(green(c), 0x34);
        assert_eq!(blue(c), 0x56);
    }

    #[test]
    fn test_luma_extremes() {
        assert_eq!(luma(0x000000), 0);
        assert_eq!(luma(0xffffff), 255);
        // alpha byte is ignored
        assert_eq!(luma(0xff00_0000), 0);
    }

    #[test]
    fn test_luma_weights_truncate() {
        // 0.2126 * 255 = 54.21
        assert_eq!(luma(0xff0000), 54);
        // 0.7152 * 255 = 182.37
        assert_eq!(luma(0x00ff00), 182);
        // 0.0722 * 255 = 18.41
        assert_eq!(luma(0x0000ff), 18);
    }

    #[test]
    fn test_luma_neutral_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luma(compose_rgb(v, v, v)), v);
        }
    }

    #[test]
    fn test_packed_pixels_bounds() {
        let mut page = PackedPixels::new(4, 3, 0xffffff).unwrap();
        assert_eq!(page.size(), Size::new(4, 3));
        page.set_pixel(3, 2, 0x123456).unwrap();
        assert_eq!(page.get_pixel(3, 2).unwrap(), 0x123456);
        assert!(page.set_pixel(4, 0, 0).is_err());
        assert!(page.get_pixel(0, 3).is_err());
    }

    #[test]
    fn test_packed_pixels_validation() {
        assert!(PackedPixels::new(0, 10, 0).is_err());
        assert!(PackedPixels::from_vec(2, 2, vec![0; 3]).is_err());
        assert!(PackedPixels::from_vec(2, 2, vec![0; 4]).is_ok());
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut page = PackedPixels::new(5, 5, 0xffffff).unwrap();
        page.fill_rect(3, 3, 10, 10, 0);
        assert_eq!(page.pixel(4, 4), Some(0));
        assert_eq!(page.pixel(2, 2), Some(0xffffff));
        assert_eq!(page.data().iter().filter(|&&c| c == 0).count(), 4);
    }

    #[test]
    fn test_blanket_impls() {
        let page = PackedPixels::new(2, 2, 0x010203).unwrap();
        let by_ref: &dyn PixelSource = &page;
        assert_eq!(by_ref.width(), 2);
        let boxed: std::boxed::Box<dyn PixelSource> = std::boxed::Box::new(page.clone());
        assert_eq!(boxed.get_pixel(1, 1).unwrap(), 0x010203);
        let shared = Arc::new(page);
        assert_eq!(shared.height(), 2);
    }
}
