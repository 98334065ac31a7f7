//! Panel sequencing
//!
//! Ranked rects become [`Panel`]s, which are then put in reading order.
//! Rows and columns are not clustered explicitly; the flow comparator
//! orders by the primary coordinate and breaks ties with the secondary
//! one.

use crate::request::PanelFlow;
use crate::result::Panel;
use komawari_core::{PointF, Rect, Size};
use std::cmp::Ordering;

/// Create panels from rects in ranked order
///
/// Ids follow the input order. The centroid is the center of the last
/// covered pixel span, `((l + r - 1) / 2, (t + b - 1) / 2)`, and the
/// confidence is the share of the page the panel covers.
pub fn build_panels(rects: &[Rect], page: Size) -> Vec<Panel> {
    let page_area = page.area().max(1) as f32;
    rects
        .iter()
        .enumerate()
        .map(|(id, &bounds)| {
            let centroid = PointF::new(
                (bounds.left() + bounds.right() - 1) as f32 * 0.5,
                (bounds.top() + bounds.bottom() - 1) as f32 * 0.5,
            );
            Panel::new(id, bounds, centroid, bounds.area() as f32 / page_area)
        })
        .collect()
}

/// Compare two panels under a reading flow
pub fn compare_panels(a: &Panel, b: &Panel, flow: PanelFlow) -> Ordering {
    let (a, b) = (&a.bounds, &b.bounds);
    match flow {
        PanelFlow::LeftToRight => a.top().cmp(&b.top()).then(a.left().cmp(&b.left())),
        PanelFlow::RightToLeft => a.top().cmp(&b.top()).then(b.left().cmp(&a.left())),
        PanelFlow::TopToBottom => a.left().cmp(&b.left()).then(a.top().cmp(&b.top())),
    }
}

/// Stable-sort panels into reading order
pub fn order_panels(panels: &mut [Panel], flow: PanelFlow) {
    panels.sort_by(|a, b| compare_panels(a, b, flow));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quadrants() -> Vec<Panel> {
        // ranked order deliberately scrambled
        let rects = [
            Rect::new(50, 50, 100, 100).unwrap(),
            Rect::new(0, 0, 50, 50).unwrap(),
            Rect::new(50, 0, 100, 50).unwrap(),
            Rect::new(0, 50, 50, 100).unwrap(),
        ];
        build_panels(&rects, Size::new(100, 100))
    }

    fn lefts_tops(panels: &[Panel]) -> Vec<(i32, i32)> {
        panels
            .iter()
            .map(|p| (p.bounds.left(), p.bounds.top()))
            .collect()
    }

    #[test]
    fn test_build_panels() {
        let panels = quadrants();
        assert_eq!(panels.len(), 4);
        assert_eq!(panels[1].id, 1);
        assert_eq!(panels[1].centroid, PointF::new(24.5, 24.5));
        assert_eq!(panels[0].confidence, 0.25);
        assert_eq!(panels[0].weight, 2500);
    }

    #[test]
    fn test_confidence_of_zero_area_page_is_clamped() {
        let rect = Rect::new(0, 0, 10, 10).unwrap();
        let panels = build_panels(&[rect], Size::new(0, 0));
        assert_eq!(panels[0].confidence, 1.0);
    }

    #[test]
    fn test_left_to_right() {
        let mut panels = quadrants();
        order_panels(&mut panels, PanelFlow::LeftToRight);
        assert_eq!(lefts_tops(&panels), vec![(0, 0), (50, 0), (0, 50), (50, 50)]);
        // ids stay attached to their panels
        assert_eq!(panels[0].id, 1);
    }

    #[test]
    fn test_right_to_left() {
        let mut panels = quadrants();
        order_panels(&mut panels, PanelFlow::RightToLeft);
        assert_eq!(lefts_tops(&panels), vec![(50, 0), (0, 0), (50, 50), (0, 50)]);
    }

    #[test]
    fn test_top_to_bottom() {
        let mut panels = quadrants();
        order_panels(&mut panels, PanelFlow::TopToBottom);
        assert_eq!(lefts_tops(&panels), vec![(0, 0), (0, 50), (50, 0), (50, 50)]);
    }

    #[test]
    fn test_offset_rows_are_not_clustered() {
        // A panel starting one pixel lower belongs to a later "row"
        let rects = [
            Rect::new(0, 1, 50, 50).unwrap(),
            Rect::new(60, 0, 100, 50).unwrap(),
        ];
        let mut panels = build_panels(&rects, Size::new(100, 100));
        order_panels(&mut panels, PanelFlow::LeftToRight);
        assert_eq!(panels[0].bounds.left(), 60);
    }
}
