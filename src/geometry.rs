//! Core geometry types: Point, Rect, Thickness.
//!
//! Integer pixel geometry used by styles (padding, texture regions) and the
//! render context (destination and clip rectangles). Conversions to and from
//! [`kurbo`] types are provided for the places that need affine math.

use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to a floating point [`kurbo::Point`].
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x as f64, self.y as f64)
    }

    /// Convert from a [`kurbo::Point`], rounding to the nearest pixel.
    #[inline]
    pub fn from_kurbo(p: kurbo::Point) -> Self {
        Self { x: p.x.round() as i32, y: p.y.round() as i32 }
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in pixels defined by position and size.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// An empty rectangle at the origin.
    pub const EMPTY: Rect = Rect { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y + self.height
    }

    /// The top-left corner.
    #[inline]
    pub const fn origin(self) -> Point {
        Point { x: self.x, y: self.y }
    }

    /// Whether the rectangle has no area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies inside this rectangle.
    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Compute the intersection of two rectangles.
    ///
    /// Returns [`Rect::EMPTY`] if they do not overlap.
    #[inline]
    pub const fn intersection(self, other: Rect) -> Rect {
        let x1 = if self.x > other.x { self.x } else { other.x };
        let y1 = if self.y > other.y { self.y } else { other.y };
        let x2 = if self.right() < other.right() { self.right() } else { other.right() };
        let y2 = if self.bottom() < other.bottom() { self.bottom() } else { other.bottom() };

        if x2 - x1 <= 0 || y2 - y1 <= 0 {
            Rect::EMPTY
        } else {
            Rect { x: x1, y: y1, width: x2 - x1, height: y2 - y1 }
        }
    }

    /// Translate the rectangle by `delta`.
    #[inline]
    pub const fn translate(self, delta: Point) -> Rect {
        Rect { x: self.x + delta.x, y: self.y + delta.y, width: self.width, height: self.height }
    }

    /// Contract the rectangle inward by `t`, clamping size at zero.
    #[inline]
    pub const fn shrink(self, t: Thickness) -> Rect {
        let w = self.width - t.left - t.right;
        let h = self.height - t.top - t.bottom;
        Rect {
            x: self.x + t.left,
            y: self.y + t.top,
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Convert to a floating point [`kurbo::Rect`].
    #[inline]
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.x as f64,
            self.y as f64,
            self.right() as f64,
            self.bottom() as f64,
        )
    }

    /// Convert from a [`kurbo::Rect`], truncating the corners to whole pixels.
    #[inline]
    pub fn from_kurbo(r: kurbo::Rect) -> Self {
        let r = r.abs();
        let x0 = r.x0 as i32;
        let y0 = r.y0 as i32;
        Rect { x: x0, y: y0, width: r.x1 as i32 - x0, height: r.y1 as i32 - y0 }
    }
}

// ---------------------------------------------------------------------------
// Thickness
// ---------------------------------------------------------------------------

/// Per-side spacing, used for padding and borders in styles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Thickness {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Thickness {
    /// Zero on all sides.
    pub const ZERO: Thickness = Thickness { left: 0, top: 0, right: 0, bottom: 0 };

    /// Explicit values for each side.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// The same value on all four sides.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { left: value, top: value, right: value, bottom: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left + self.right
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top + self.bottom
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Point ────────────────────────────────────────────────────────

    #[test]
    fn point_add_sub() {
        let a = Point::new(3, 4);
        let b = Point::new(1, 2);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(a - b, Point::new(2, 2));
    }

    #[test]
    fn point_kurbo_roundtrip_rounds() {
        let p = Point::from_kurbo(kurbo::Point::new(2.6, -1.4));
        assert_eq!(p, Point::new(3, -1));
        assert_eq!(Point::new(5, 7).to_kurbo(), kurbo::Point::new(5.0, 7.0));
    }

    // ── Rect ─────────────────────────────────────────────────────────

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.origin(), Point::new(10, 20));
    }

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(9, 9)));
        assert!(!r.contains(Point::new(10, 5)));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(b), Rect::new(5, 5, 5, 5));
        assert_eq!(a.intersection(Rect::new(10, 0, 5, 5)), Rect::EMPTY);
    }

    #[test]
    fn rect_shrink_clamps() {
        let r = Rect::new(0, 0, 10, 4);
        assert_eq!(r.shrink(Thickness::all(1)), Rect::new(1, 1, 8, 2));
        assert_eq!(r.shrink(Thickness::all(3)), Rect::new(3, 3, 4, 0));
    }

    #[test]
    fn rect_kurbo_conversion() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.to_kurbo(), kurbo::Rect::new(1.0, 2.0, 4.0, 6.0));
        assert_eq!(Rect::from_kurbo(r.to_kurbo()), r);
    }

    #[test]
    fn rect_from_inverted_kurbo_is_normalized() {
        let r = Rect::from_kurbo(kurbo::Rect::new(10.0, 10.0, 0.0, 0.0));
        assert_eq!(r, Rect::new(0, 0, 10, 10));
    }

    // ── Thickness ────────────────────────────────────────────────────

    #[test]
    fn thickness_extents() {
        let t = Thickness::new(1, 2, 3, 4);
        assert_eq!(t.width(), 4);
        assert_eq!(t.height(), 6);
        assert_eq!(Thickness::default(), Thickness::ZERO);
    }
}
