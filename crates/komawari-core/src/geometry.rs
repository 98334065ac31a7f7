//! Rect, Size, PointF - Page geometry
//!
//! `Rect` uses edge coordinates (`right` and `bottom` are exclusive), which
//! matches how panel bounds are handed to a reader for cropping.

use crate::error::{Error, Result};

/// Size of a page in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Check if either dimension is zero
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Wide or square page (`width >= height`)
    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.width >= self.height
    }

    /// Tall page (`height > width`)
    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    /// The rect covering the whole page, if the page is non-empty
    pub fn full_rect(&self) -> Result<Rect> {
        Rect::new(0, 0, self.width as i32, self.height as i32)
    }
}

/// A point with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle region in page pixel coordinates
///
/// Always has positive width and height. This is a simple Copy type since
/// it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Rect {
    /// Create a new rect
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRect`] unless `right > left && bottom > top`.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        if right <= left || bottom <= top {
            return Err(Error::InvalidRect {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Create a rect from an origin and a size
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.top
    }

    /// Right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.right
    }

    /// Bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.bottom
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Geometric center of the covered area
    pub fn center(&self) -> PointF {
        PointF::new(
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }

    /// Check if a point is inside the rect
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if this rect contains another, allowing each edge of `other`
    /// to stick out by up to `tolerance` pixels
    pub fn contains_rect(&self, other: &Rect, tolerance: i32) -> bool {
        other.left >= self.left - tolerance
            && other.top >= self.top - tolerance
            && other.right <= self.right + tolerance
            && other.bottom <= self.bottom + tolerance
    }

    /// Check if this rect overlaps with another
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.top < other.bottom
            && self.bottom > other.top
    }

    /// Compute the intersection of two rects
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        Rect::new(
            self.left.max(other.left),
            self.top.max(other.top),
            self.right.min(other.right),
            self.bottom.min(other.bottom),
        )
        .ok()
    }

    /// Compute the union (bounding rect) of two rects
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Area of the overlap with another rect (0 if disjoint)
    pub fn overlap_area(&self, other: &Rect) -> i64 {
        self.intersect(other).map_or(0, |r| r.area())
    }

    /// Intersection-over-union ratio in [0, 1]
    pub fn iou(&self, other: &Rect) -> f32 {
        let intersection = self.overlap_area(other);
        if intersection == 0 {
            return 0.0;
        }
        let union = self.area() + other.area() - intersection;
        if union == 0 {
            0.0
        } else {
            intersection as f32 / union as f32
        }
    }

    /// Clip the rect to fit within `[0, width) x [0, height)`
    pub fn clip_to(&self, size: Size) -> Option<Rect> {
        Rect::new(
            self.left.max(0),
            self.top.max(0),
            self.right.min(size.width as i32),
            self.bottom.min(size.height as i32),
        )
        .ok()
    }

    /// Check that the rect lies inside a page of the given size
    pub fn is_within(&self, size: Size) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.right <= size.width as i32
            && self.bottom <= size.height as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(l: i32, t: i32, r: i32, b: i32) -> Rect {
        Rect::new(l, t, r, b).unwrap()
    }

    #[test]
    fn test_rect_rejects_degenerate() {
        assert!(Rect::new(0, 0, 0, 10).is_err());
        assert!(Rect::new(0, 0, 10, 0).is_err());
        assert!(Rect::new(5, 5, 4, 10).is_err());
        assert!(Rect::new(0, 0, 1, 1).is_ok());
    }

    #[test]
    fn test_rect_dimensions() {
        let r = rect(10, 20, 40, 60);
        assert_eq!(r.width(), 30);
        assert_eq!(r.height(), 40);
        assert_eq!(r.area(), 1200);
        assert_eq!(r.center(), PointF::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_point_is_half_open() {
        let r = rect(0, 0, 10, 10);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(9, 9));
        assert!(!r.contains_point(10, 5));
        assert!(!r.contains_point(5, 10));
    }

    #[test]
    fn test_contains_rect_with_tolerance() {
        let outer = rect(10, 10, 100, 100);
        let inner = rect(20, 20, 50, 50);
        let poking = rect(5, 20, 50, 50);
        assert!(outer.contains_rect(&inner, 0));
        assert!(!outer.contains_rect(&poking, 0));
        assert!(outer.contains_rect(&poking, 6));
        assert!(!outer.contains_rect(&rect(3, 20, 50, 50), 6));
    }

    #[test]
    fn test_intersect_and_union() {
        let a = rect(0, 0, 10, 10);
        let b = rect(5, 5, 15, 15);
        assert_eq!(a.intersect(&b), Some(rect(5, 5, 10, 10)));
        assert_eq!(a.union(&b), rect(0, 0, 15, 15));

        let c = rect(10, 0, 20, 10);
        assert_eq!(a.intersect(&c), None);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_iou() {
        let a = rect(0, 0, 10, 10);
        assert_eq!(a.iou(&a), 1.0);
        let b = rect(5, 0, 15, 10);
        // 50 / 150
        assert!((a.iou(&b) - 1.0 / 3.0).abs() < 1e-6);
        assert_eq!(a.iou(&rect(20, 20, 30, 30)), 0.0);
    }

    #[test]
    fn test_clip_to() {
        let page = Size::new(100, 50);
        assert_eq!(rect(-5, -5, 20, 20).clip_to(page), Some(rect(0, 0, 20, 20)));
        assert_eq!(rect(90, 40, 120, 80).clip_to(page), Some(rect(90, 40, 100, 50)));
        assert_eq!(rect(100, 0, 120, 10).clip_to(page), None);
        assert!(rect(0, 0, 100, 50).is_within(page));
        assert!(!rect(0, 0, 101, 50).is_within(page));
    }

    #[test]
    fn test_size_orientation() {
        assert!(Size::new(800, 600).is_landscape());
        assert!(!Size::new(800, 600).is_portrait());
        assert!(Size::new(600, 800).is_portrait());
        let square = Size::new(500, 500);
        assert!(square.is_landscape());
        assert!(!square.is_portrait());
        assert_eq!(square.full_rect().unwrap(), rect(0, 0, 500, 500));
        assert!(Size::new(0, 10).full_rect().is_err());
    }
}
