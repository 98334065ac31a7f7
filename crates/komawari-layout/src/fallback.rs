//! Content-independent fallback layouts
//!
//! Computed from the page size alone, so they are always available: as the
//! primary result when detection finds nothing, and as alternatives the
//! reader can switch to otherwise.
//!
//! Wide and square pages (`width >= height`) get a vertical split, tall
//! pages a horizontal one; a page never gets both.

use crate::request::PanelFlow;
use crate::result::{DetectionStats, LayoutType, Panel, PanelSequence};
use komawari_core::{PointF, Rect, Size};

fn sequence(
    page_index: usize,
    page: Size,
    panels: Vec<Panel>,
    flow: PanelFlow,
    layout_type: LayoutType,
    stats: DetectionStats,
) -> PanelSequence {
    PanelSequence {
        page_index,
        page_size: page,
        panels,
        flow,
        layout_type,
        stats,
    }
}

/// The whole page as one panel
///
/// A page with a zero dimension yields a sequence without panels.
pub fn full_page(
    page_index: usize,
    page: Size,
    flow: PanelFlow,
    stats: DetectionStats,
) -> PanelSequence {
    let centroid = PointF::new(page.width as f32 * 0.5, page.height as f32 * 0.5);
    let panels = page
        .full_rect()
        .map(|bounds| vec![Panel::new(0, bounds, centroid, 1.0)])
        .unwrap_or_default();
    sequence(
        page_index,
        page,
        panels,
        flow,
        LayoutType::FallbackFullPage,
        stats,
    )
}

/// Left and right halves, for pages with `width >= height`
///
/// Returns `None` for tall pages and for pages too narrow to halve.
pub fn vertical_split(
    page_index: usize,
    page: Size,
    flow: PanelFlow,
    stats: DetectionStats,
) -> Option<PanelSequence> {
    if !page.is_landscape() {
        return None;
    }
    let (w, h) = (page.width as i32, page.height as i32);
    let mid = w / 2;
    let left = Rect::new(0, 0, mid, h).ok()?;
    let right = Rect::new(mid, 0, w, h).ok()?;
    let cy = h as f32 * 0.5;
    let panels = vec![
        Panel::new(0, left, PointF::new(left.width() as f32 * 0.5, cy), 1.0),
        Panel::new(
            1,
            right,
            PointF::new(mid as f32 + right.width() as f32 * 0.5, cy),
            1.0,
        ),
    ];
    Some(sequence(
        page_index,
        page,
        panels,
        flow,
        LayoutType::FallbackVerticalSplit,
        stats,
    ))
}

/// Top and bottom halves, for pages with `height > width`
///
/// Returns `None` for wide or square pages and for pages too short to
/// halve.
pub fn horizontal_split(
    page_index: usize,
    page: Size,
    flow: PanelFlow,
    stats: DetectionStats,
) -> Option<PanelSequence> {
    if !page.is_portrait() {
        return None;
    }
    let (w, h) = (page.width as i32, page.height as i32);
    let mid = h / 2;
    let top = Rect::new(0, 0, w, mid).ok()?;
    let bottom = Rect::new(0, mid, w, h).ok()?;
    let cx = w as f32 * 0.5;
    let panels = vec![
        Panel::new(0, top, PointF::new(cx, top.height() as f32 * 0.5), 1.0),
        Panel::new(
            1,
            bottom,
            PointF::new(cx, mid as f32 + bottom.height() as f32 * 0.5),
            1.0,
        ),
    ];
    Some(sequence(
        page_index,
        page,
        panels,
        flow,
        LayoutType::FallbackHorizontalSplit,
        stats,
    ))
}

/// Whichever split applies to the page (none if it cannot be halved)
pub fn split_fallbacks(
    page_index: usize,
    page: Size,
    flow: PanelFlow,
    stats: DetectionStats,
) -> Vec<PanelSequence> {
    vertical_split(page_index, page, flow, stats)
        .into_iter()
        .chain(horizontal_split(page_index, page, flow, stats))
        .collect()
}
