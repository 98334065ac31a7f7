//! Synthetic page builders
//!
//! Detection tests run on generated pages instead of scanned fixtures, so
//! expected panel bounds are known exactly.

use crate::error::{TestError, TestResult};
use komawari_core::{PackedPixels, PixelSource, SourceError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Paper white
pub const WHITE: u32 = 0xffffff;
/// Ink black
pub const BLACK: u32 = 0x000000;

/// Builder for synthetic comic pages
#[derive(Debug, Clone)]
pub struct SyntheticPage {
    pixels: PackedPixels,
}

impl SyntheticPage {
    /// A white page
    pub fn blank(width: u32, height: u32) -> TestResult<Self> {
        Self::with_background(width, height, WHITE)
    }

    /// A page filled with `color`
    pub fn with_background(width: u32, height: u32, color: u32) -> TestResult<Self> {
        Ok(Self {
            pixels: PackedPixels::new(width, height, color)?,
        })
    }

    fn check_fits(&self, x: u32, y: u32, w: u32, h: u32) -> TestResult<()> {
        let (page_w, page_h) = (self.pixels.width(), self.pixels.height());
        if x.saturating_add(w) > page_w || y.saturating_add(h) > page_h {
            return Err(TestError::ShapeOutOfPage {
                x,
                y,
                w,
                h,
                page_w,
                page_h,
            });
        }
        Ok(())
    }

    /// Fill a solid rectangle
    pub fn fill_rect(mut self, x: u32, y: u32, w: u32, h: u32, color: u32) -> TestResult<Self> {
        self.check_fits(x, y, w, h)?;
        self.pixels.fill_rect(x, y, x + w, y + h, color);
        Ok(self)
    }

    /// Draw a rectangular frame with the given border thickness
    pub fn frame_rect(
        mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        thickness: u32,
        color: u32,
    ) -> TestResult<Self> {
        self.check_fits(x, y, w, h)?;
        let t = thickness.min(w / 2).min(h / 2).max(1);
        let (x1, y1) = (x + w, y + h);
        self.pixels.fill_rect(x, y, x1, y + t, color);
        self.pixels.fill_rect(x, y1 - t, x1, y1, color);
        self.pixels.fill_rect(x, y, x + t, y1, color);
        self.pixels.fill_rect(x1 - t, y, x1, y1, color);
        Ok(self)
    }

    /// Scatter `count` isolated single pixels of `color` using a seeded RNG
    pub fn speckle(mut self, seed: u64, count: usize, color: u32) -> TestResult<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let (w, h) = (self.pixels.width(), self.pixels.height());
        for _ in 0..count {
            let x = rng.random_range(0..w);
            let y = rng.random_range(0..h);
            self.pixels.set_pixel(x, y, color)?;
        }
        Ok(self)
    }

    /// Finish the page
    pub fn build(self) -> PackedPixels {
        self.pixels
    }
}

/// A white page with a `rows x cols` grid of black-framed panels
///
/// Panels are separated by `gutter` pixels and inset by `gutter` from the
/// page edge.
pub fn grid_page(
    width: u32,
    height: u32,
    rows: u32,
    cols: u32,
    gutter: u32,
    thickness: u32,
) -> TestResult<PackedPixels> {
    let panel_w = (width - gutter * (cols + 1)) / cols;
    let panel_h = (height - gutter * (rows + 1)) / rows;
    let mut page = SyntheticPage::blank(width, height)?;
    for row in 0..rows {
        for col in 0..cols {
            let x = gutter + col * (panel_w + gutter);
            let y = gutter + row * (panel_h + gutter);
            page = page.frame_rect(x, y, panel_w, panel_h, thickness, BLACK)?;
        }
    }
    Ok(page.build())
}

/// Error raised by [`FailingSource`]
#[derive(Debug, thiserror::Error)]
#[error("decoder lost row {row}")]
pub struct RowDecodeError {
    pub row: u32,
}

/// A pixel source that fails for every row at or below `fail_from_row`
#[derive(Debug, Clone)]
pub struct FailingSource {
    inner: PackedPixels,
    fail_from_row: u32,
}

impl FailingSource {
    pub fn new(inner: PackedPixels, fail_from_row: u32) -> Self {
        Self {
            inner,
            fail_from_row,
        }
    }
}

impl PixelSource for FailingSource {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Result<u32, SourceError> {
        if y >= self.fail_from_row {
            return Err(Box::new(RowDecodeError { row: y }));
        }
        self.inner.get_pixel(x, y)
    }
}
