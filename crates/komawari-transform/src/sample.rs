//! Area-averaging page sampler
//!
//! Reduces a page to at most about `target x target` luma samples. The
//! downscale factor is an integer `step`; each sample is the mean luma of
//! the `step x step` block of source pixels it covers, with blocks on the
//! right and bottom edges clipped to the page.

use crate::error::{TransformError, TransformResult};
use komawari_core::sample::SampledImage;
use komawari_core::{CancelToken, LumaHistogram, PixelSource, Size, luma};

/// Default upper bound on the sampled grid's longer side
pub const DEFAULT_TARGET_MAX_DIMENSION: u32 = 1024;

/// Luma recorded for a cell that covers no source pixels
const EMPTY_CELL_LUMA: u8 = 255;

/// Integer downscale factor for a page of the given size
///
/// `max(1, max(width, height) / target)`; a zero target is treated as 1.
pub fn sample_step(size: Size, target_max_dimension: u32) -> u32 {
    let target = target_max_dimension.max(1);
    (size.width.max(size.height) / target).max(1)
}

/// Sample grid dimensions for a page and step: `ceil(dim / step)`, at least 1
pub fn sample_grid_size(size: Size, step: u32) -> Size {
    let step = step.max(1);
    Size::new(
        size.width.div_ceil(step).max(1),
        size.height.div_ceil(step).max(1),
    )
}

/// Downsample a page into a luma grid and histogram
///
/// # Arguments
///
/// * `source` - Full-resolution page
/// * `target_max_dimension` - Desired bound on the longer side of the grid
/// * `cancel` - Polled once per sample row
///
/// # Errors
///
/// Returns [`TransformError::Source`] if the pixel source fails, or a core
/// `Cancelled` error if `cancel` is triggered.
pub fn sample_page<S: PixelSource + ?Sized>(
    source: &S,
    target_max_dimension: u32,
    cancel: &CancelToken,
) -> TransformResult<SampledImage> {
    let original = source.size();
    let step = sample_step(original, target_max_dimension);
    let grid = sample_grid_size(original, step);

    let mut luma_values = Vec::with_capacity(grid.width as usize * grid.height as usize);
    let mut histogram = LumaHistogram::new();

    for sy in 0..grid.height {
        cancel.check()?;
        let y_start = sy * step;
        let y_end = original.height.min(y_start + step);
        for sx in 0..grid.width {
            let x_start = sx * step;
            let x_end = original.width.min(x_start + step);

            let mut sum = 0u64;
            let mut count = 0u64;
            for y in y_start..y_end {
                for x in x_start..x_end {
                    let color = source
                        .get_pixel(x, y)
                        .map_err(|err| TransformError::Source { x, y, source: err })?;
                    sum += luma(color) as u64;
                    count += 1;
                }
            }

            let value = if count == 0 {
                EMPTY_CELL_LUMA
            } else {
                (sum / count) as u8
            };
            luma_values.push(value);
            histogram.add(value);
        }
    }

    Ok(SampledImage::new(
        grid.width,
        grid.height,
        step,
        luma_values,
        histogram,
        original,
    )?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use komawari_core::{Error, PackedPixels, compose_rgb};

    #[test]
    fn test_step_and_grid() {
        assert_eq!(sample_step(Size::new(800, 600), 1024), 1);
        assert_eq!(sample_step(Size::new(4096, 3000), 1024), 4);
        assert_eq!(sample_step(Size::new(4100, 10), 1024), 4);
        assert_eq!(sample_step(Size::new(10, 10), 0), 10);
        assert_eq!(sample_grid_size(Size::new(4100, 10), 4), Size::new(1025, 3));
        assert_eq!(sample_grid_size(Size::new(0, 0), 1), Size::new(1, 1));
    }

    #[test]
    fn test_identity_sampling() {
        let mut page = PackedPixels::new(3, 2, 0xffffff).unwrap();
        page.set_pixel(1, 1, compose_rgb(10, 10, 10)).unwrap();
        let sampled = sample_page(&page, 1024, &CancelToken::new()).unwrap();
        assert_eq!(sampled.step(), 1);
        assert_eq!(sampled.width(), 3);
        assert_eq!(sampled.height(), 2);
        assert_eq!(sampled.luma_at(1, 1), Some(10));
        assert_eq!(sampled.histogram().count(255), 5);
        assert_eq!(sampled.histogram().total(), 6);
    }

    #[test]
    fn test_block_average_with_clipped_edges() {
        // 5x5 page, target 2 -> step 2, grid 3x3
        let mut page = PackedPixels::new(5, 5, 0xffffff).unwrap();
        page.set_pixel(0, 0, 0x000000).unwrap();
        page.set_pixel(4, 4, 0x000000).unwrap();
        let sampled = sample_page(&page, 2, &CancelToken::new()).unwrap();
        assert_eq!(sampled.step(), 2);
        assert_eq!((sampled.width(), sampled.height()), (3, 3));
        // (0 + 255 * 3) / 4
        assert_eq!(sampled.luma_at(0, 0), Some(191));
        // bottom-right cell covers a single source pixel
        assert_eq!(sampled.luma_at(2, 2), Some(0));
        assert_eq!(sampled.luma_at(1, 1), Some(255));
        assert_eq!(sampled.original_size(), Size::new(5, 5));
    }

    #[test]
    fn test_cancelled_before_first_row() {
        let page = PackedPixels::new(8, 8, 0).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let err = sample_page(&page, 1024, &token).unwrap_err();
        assert!(matches!(err, TransformError::Core(Error::Cancelled)));
    }
}
