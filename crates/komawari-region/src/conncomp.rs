//! Connected component analysis
//!
//! Breadth-first flood fill over a binary mask with an explicit work queue.
//! Each component records its pixel count and inclusive bounding extent in
//! sample coordinates.

use crate::error::{RegionError, RegionResult};
use komawari_core::{BinaryMask, CancelToken, Size};
use std::collections::VecDeque;

/// Dequeued cells between two cancellation checks
const CANCEL_CHECK_INTERVAL: u32 = 4096;

/// A 4-connected foreground region of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    /// Leftmost column (inclusive)
    pub min_x: u32,
    /// Topmost row (inclusive)
    pub min_y: u32,
    /// Rightmost column (inclusive)
    pub max_x: u32,
    /// Bottommost row (inclusive)
    pub max_y: u32,
    /// Number of cells in the region
    pub pixel_count: u32,
}

impl Component {
    /// Width of the bounding extent in cells
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    /// Height of the bounding extent in cells
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Minimum pixel count a component needs to be considered a panel candidate
///
/// The larger of `config_min` and the page-area floor
/// `min_panel_area_ratio * page_area`, expressed in samples (divided by
/// `step^2`).
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the ratio is outside [0, 1]
/// or `step` is 0.
pub fn min_component_pixels(
    config_min: u32,
    min_panel_area_ratio: f32,
    page: Size,
    step: u32,
) -> RegionResult<u32> {
    if !(0.0..=1.0).contains(&min_panel_area_ratio) {
        return Err(RegionError::InvalidParameters(format!(
            "min_panel_area_ratio must be within 0..1, got {}",
            min_panel_area_ratio
        )));
    }
    if step == 0 {
        return Err(RegionError::InvalidParameters(
            "step must be >= 1".to_string(),
        ));
    }
    let step_area = step as f64 * step as f64;
    let by_area = (min_panel_area_ratio as f64 * page.area() as f64 / step_area) as u32;
    Ok(config_min.max(by_area))
}

/// Find all 4-connected foreground components of a mask
///
/// Cells are scanned in row-major order; each unvisited foreground cell
/// seeds a new component, so the output is ordered by the position of each
/// component's first cell. Components with fewer than `min_pixels` cells
/// are dropped.
///
/// # Errors
///
/// Returns a core `Cancelled` error if `cancel` is triggered mid-scan.
pub fn find_components(
    mask: &BinaryMask,
    min_pixels: u32,
    cancel: &CancelToken,
) -> RegionResult<Vec<Component>> {
    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let bits = mask.bits();

    let mut components = Vec::new();
    let mut visited = vec![false; bits.len()];
    let mut queue = VecDeque::new();
    let mut since_check = 0u32;

    for seed in 0..bits.len() {
        if !bits[seed] || visited[seed] {
            continue;
        }

        visited[seed] = true;
        queue.push_back(seed);

        let mut count = 0u32;
        let mut min_x = width;
        let mut min_y = height;
        let mut max_x = 0usize;
        let mut max_y = 0usize;

        while let Some(current) = queue.pop_front() {
            since_check += 1;
            if since_check >= CANCEL_CHECK_INTERVAL {
                since_check = 0;
                cancel.check()?;
            }

            let x = current % width;
            let y = current / width;
            count += 1;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);

            // 4-way neighbours
            if x > 0 {
                visit(current - 1, bits, &mut visited, &mut queue);
            }
            if x + 1 < width {
                visit(current + 1, bits, &mut visited, &mut queue);
            }
            if y > 0 {
                visit(current - width, bits, &mut visited, &mut queue);
            }
            if y + 1 < height {
                visit(current + width, bits, &mut visited, &mut queue);
            }
        }

        if count >= min_pixels {
            components.push(Component {
                min_x: min_x as u32,
                min_y: min_y as u32,
                max_x: max_x as u32,
                max_y: max_y as u32,
                pixel_count: count,
            });
        }
    }

    Ok(components)
}

#[inline]
fn visit(index: usize, bits: &[bool], visited: &mut [bool], queue: &mut VecDeque<usize>) {
    if bits[index] && !visited[index] {
        visited[index] = true;
        queue.push_back(index);
    }
}
