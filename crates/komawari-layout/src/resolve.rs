//! Geometry resolution
//!
//! Turns sample-space components into page-space panel rectangles:
//!
//! 1. Back-projection with padding ([`component_to_rect`])
//! 2. Pairwise IoU merging ([`merge_overlapping`])
//! 3. Nested box removal ([`remove_nested`])
//! 4. Ranking by area and capping ([`rank_and_cap`])
//!
//! Every rect produced here lies inside the page.

use crate::config::DetectorConfig;
use crate::error::LayoutResult;
use komawari_core::{CancelToken, Rect, Size};
use komawari_region::Component;

/// Map a component back to page coordinates and pad it
///
/// The sample extent is scaled by `step` and clipped to the page, then
/// grown on each side by `max(1, extent * padding_fraction)` pixels per
/// axis and clipped again.
pub fn component_to_rect(
    component: &Component,
    step: u32,
    page: Size,
    padding_fraction: f32,
) -> LayoutResult<Rect> {
    let step = step.max(1) as i64;
    let page_w = page.width as i64;
    let page_h = page.height as i64;

    let left = component.min_x as i64 * step;
    let top = component.min_y as i64 * step;
    let right = page_w.min((component.max_x as i64 + 1) * step);
    let bottom = page_h.min((component.max_y as i64 + 1) * step);

    let pad_x = (((right - left) as f32 * padding_fraction) as i64).max(1);
    let pad_y = (((bottom - top) as f32 * padding_fraction) as i64).max(1);

    let rect = Rect::new(
        (left - pad_x).max(0) as i32,
        (top - pad_y).max(0) as i32,
        (right + pad_x).min(page_w) as i32,
        (bottom + pad_y).min(page_h) as i32,
    )?;
    Ok(rect)
}

/// Merge strongly overlapping rects into their union
///
/// Each pass scans pairs `(i, j)` with `i < j` and stops at the first pair
/// whose IoU is at least `iou_threshold`: `rects[i]` becomes the union and
/// `rects[j]` is removed. At most `max_passes` merges are performed; a scan
/// that finds nothing ends the loop early.
///
/// # Errors
///
/// Returns `Cancelled` if `cancel` is triggered between passes.
pub fn merge_overlapping(
    mut rects: Vec<Rect>,
    iou_threshold: f32,
    max_passes: u32,
    cancel: &CancelToken,
) -> LayoutResult<Vec<Rect>> {
    if rects.len() < 2 {
        return Ok(rects);
    }

    for _ in 0..max_passes {
        cancel.check()?;
        match find_mergeable_pair(&rects, iou_threshold) {
            Some((i, j)) => {
                rects[i] = rects[i].union(&rects[j]);
                rects.remove(j);
            }
            None => break,
        }
    }

    Ok(rects)
}

fn find_mergeable_pair(rects: &[Rect], iou_threshold: f32) -> Option<(usize, usize)> {
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            if rects[i].iou(&rects[j]) >= iou_threshold {
                return Some((i, j));
            }
        }
    }
    None
}

/// Drop every rect that lies inside another one
///
/// Containment allows each edge to stick out by `tolerance` pixels. When
/// two rects contain each other (identical or near-identical boxes), the
/// earlier one is kept rather than dropping both, so a duplicated panel
/// still yields one rect.
pub fn remove_nested(rects: &[Rect], tolerance: i32) -> Vec<Rect> {
    if rects.len() <= 1 {
        return rects.to_vec();
    }

    rects
        .iter()
        .enumerate()
        .filter(|&(i, candidate)| {
            !rects.iter().enumerate().any(|(j, other)| {
                j != i
                    && other.contains_rect(candidate, tolerance)
                    && (j < i || !candidate.contains_rect(other, tolerance))
            })
        })
        .map(|(_, r)| *r)
        .collect()
}

/// Sort by descending area and keep the largest `max_panels`
///
/// The sort is stable, so equal areas keep their relative order.
pub fn rank_and_cap(mut rects: Vec<Rect>, max_panels: usize) -> Vec<Rect> {
    rects.sort_by(|a, b| b.area().cmp(&a.area()));
    rects.truncate(max_panels);
    rects
}

/// Run the full geometry pipeline over extracted components
pub fn resolve_panels(
    components: &[Component],
    step: u32,
    page: Size,
    config: &DetectorConfig,
    max_panels: usize,
    cancel: &CancelToken,
) -> LayoutResult<Vec<Rect>> {
    let rects = components
        .iter()
        .map(|c| component_to_rect(c, step, page, config.panel_padding_fraction))
        .collect::<LayoutResult<Vec<_>>>()?;

    let merged = merge_overlapping(
        rects,
        config.merge_overlap_threshold,
        config.max_merge_passes,
        cancel,
    )?;
    let filtered = remove_nested(&merged, config.nested_tolerance);
    Ok(rank_and_cap(filtered, max_panels))
}
