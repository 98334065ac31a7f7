//! SampledImage - Downsampled luma grid
//!
//! The working representation of a page during detection: one luma value
//! per `step x step` cell of the original page, plus the histogram of those
//! values.

use crate::error::{Error, Result};
use crate::geometry::Size;
use crate::histogram::LumaHistogram;
use crate::mask::BinaryMask;

/// Downsampled luma grid of a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledImage {
    width: u32,
    height: u32,
    step: u32,
    luma: Vec<u8>,
    histogram: LumaHistogram,
    original: Size,
}

impl SampledImage {
    /// Assemble a sampled image from its parts
    ///
    /// # Errors
    ///
    /// Returns an error if `luma` does not hold `width * height` values,
    /// the histogram total disagrees with the sample count, or `step` is 0.
    pub fn new(
        width: u32,
        height: u32,
        step: u32,
        luma: Vec<u8>,
        histogram: LumaHistogram,
        original: Size,
    ) -> Result<Self> {
        if step == 0 {
            return Err(Error::InvalidParameter("step must be >= 1".to_string()));
        }
        let expected = width as usize * height as usize;
        if luma.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: luma.len(),
            });
        }
        if histogram.total() != expected as u64 {
            return Err(Error::InvalidParameter(format!(
                "histogram total {} does not match {} samples",
                histogram.total(),
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            step,
            luma,
            histogram,
            original,
        })
    }

    /// Build a 1:1 sampled image directly from luma values
    pub fn from_luma(width: u32, height: u32, luma: Vec<u8>) -> Result<Self> {
        let histogram = LumaHistogram::from_values(&luma);
        Self::new(width, height, 1, luma, histogram, Size::new(width, height))
    }

    /// Sample grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Sample grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Downscale step (original pixels per sample, per axis)
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Row-major luma values
    pub fn luma(&self) -> &[u8] {
        &self.luma
    }

    pub fn histogram(&self) -> &LumaHistogram {
        &self.histogram
    }

    /// Size of the page the grid was sampled from
    #[inline]
    pub fn original_size(&self) -> Size {
        self.original
    }

    /// Number of samples in the grid
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.luma.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.luma.is_empty()
    }

    /// Luma at grid position (x, y)
    pub fn luma_at(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.luma
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Build a mask by applying `is_foreground` to every sample
    pub fn classify<F: Fn(u8) -> bool>(&self, is_foreground: F) -> BinaryMask {
        let mut mask = BinaryMask::new(self.width, self.height);
        for (i, &value) in self.luma.iter().enumerate() {
            if is_foreground(value) {
                mask.set_index(i, true);
            }
        }
        mask
    }

    /// Luma of the four grid corners: top-left, top-right, bottom-left,
    /// bottom-right. `None` for an empty grid.
    pub fn corner_lumas(&self) -> Option<[u8; 4]> {
        if self.is_empty() {
            return None;
        }
        let (w, h) = (self.width - 1, self.height - 1);
        Some([
            self.luma_at(0, 0)?,
            self.luma_at(w, 0)?,
            self.luma_at(0, h)?,
            self.luma_at(w, h)?,
        ])
    }
}
