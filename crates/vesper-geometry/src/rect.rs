//! Axis-aligned rectangles.
//!
//! A [`Rect`] stores its four edges as given, so `left > right` or
//! `top > bottom` (an *inverted* rectangle, e.g. from dragging up and left) is
//! representable. Measurements and containment work on the normalized view;
//! the raw edges stay untouched until [`Rect::normalize`] is called.
//!
//! ```
//! use vesper_geometry::{Rect, Size, Vector2D};
//!
//! let mut rect = Rect::from_position_size(Vector2D::new(10.0, 10.0), Size::new(5.0, 5.0));
//! rect.offset(-20.0, -20.0);
//! rect.normalize();
//! assert_eq!(rect, Rect::new(-10.0, -10.0, -5.0, -5.0));
//! ```

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{approx_eq, Point, Size, Vector2D, DEFAULT_EPSILON, LOG_TARGET};

/// A quarter-turn rotation step.
///
/// Clockwise is the positive direction on a y-down screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise90,
    Clockwise180,
    Clockwise270,
    CounterClockwise90,
    CounterClockwise180,
    CounterClockwise270,
}

impl Rotation {
    /// Signed angle in radians.
    pub fn angle(self) -> f64 {
        match self {
            Self::Clockwise90 => FRAC_PI_2,
            Self::Clockwise180 => PI,
            Self::Clockwise270 => 3.0 * FRAC_PI_2,
            Self::CounterClockwise90 => -FRAC_PI_2,
            Self::CounterClockwise180 => -PI,
            Self::CounterClockwise270 => -3.0 * FRAC_PI_2,
        }
    }
}

/// An axis-aligned rectangle given by its edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rect {
    #[inline]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Rectangle spanning from `start` to `end`, keeping the drag direction.
    pub const fn from_points(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    /// Rectangle with its top-left at `position`.
    pub fn from_position_size(position: Vector2D, size: Size) -> Self {
        Self::new(
            position.x,
            position.y,
            position.x + size.width,
            position.y + size.height,
        )
    }

    // -------------------------------------------------------------------------
    // Raw edges
    // -------------------------------------------------------------------------

    #[inline]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn set_left(&mut self, left: f64) {
        self.left = left;
    }

    pub fn set_top(&mut self, top: f64) {
        self.top = top;
    }

    pub fn set_right(&mut self, right: f64) {
        self.right = right;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.bottom = bottom;
    }

    /// Compare raw edges with an explicit tolerance.
    pub fn approx_eq_eps(&self, other: &Rect, epsilon: f64) -> bool {
        approx_eq(self.left, other.left, epsilon)
            && approx_eq(self.top, other.top, epsilon)
            && approx_eq(self.right, other.right, epsilon)
            && approx_eq(self.bottom, other.bottom, epsilon)
    }

    /// Check if either axis runs backwards.
    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// Copy with `left <= right` and `top <= bottom`.
    pub fn normalized(&self) -> Rect {
        Self::new(
            self.left.min(self.right),
            self.top.min(self.bottom),
            self.left.max(self.right),
            self.top.max(self.bottom),
        )
    }

    /// Reorder the edges in place so the rectangle is not inverted.
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    // -------------------------------------------------------------------------
    // Measurements (normalized view)
    // -------------------------------------------------------------------------

    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).abs()
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width() + self.height())
    }

    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    pub fn is_square(&self) -> bool {
        approx_eq(self.width(), self.height(), DEFAULT_EPSILON)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn top_left(&self) -> Point {
        let n = self.normalized();
        Point::new(n.left, n.top)
    }

    pub fn top_right(&self) -> Point {
        let n = self.normalized();
        Point::new(n.right, n.top)
    }

    pub fn bottom_left(&self) -> Point {
        let n = self.normalized();
        Point::new(n.left, n.bottom)
    }

    pub fn bottom_right(&self) -> Point {
        let n = self.normalized();
        Point::new(n.right, n.bottom)
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    // -------------------------------------------------------------------------
    // Containment and overlap
    // -------------------------------------------------------------------------

    /// Check if `point` lies inside or on the border.
    pub fn contains(&self, point: Point) -> bool {
        let n = self.normalized();
        point.x >= n.left && point.x <= n.right && point.y >= n.top && point.y <= n.bottom
    }

    /// Check if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.top_left()) && self.contains(other.bottom_right())
    }

    /// Check if the closed rectangles overlap. Rectangles that only share an
    /// edge or a corner intersect in a zero-area region, matching the
    /// inclusive [`contains`](Self::contains).
    pub fn intersects(&self, other: &Rect) -> bool {
        let a = self.normalized();
        let b = other.normalized();
        a.left <= b.right && b.left <= a.right && a.top <= b.bottom && b.top <= a.bottom
    }

    /// Overlapping region, or `None` if the rectangles do not intersect.
    pub fn try_intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let a = self.normalized();
        let b = other.normalized();
        Some(Self::new(
            a.left.max(b.left),
            a.top.max(b.top),
            a.right.min(b.right),
            a.bottom.min(b.bottom),
        ))
    }

    /// Overlapping region, or the zero rectangle if there is none.
    ///
    /// A genuine intersection can also equal the zero rectangle; use
    /// [`try_intersection`](Self::try_intersection) to tell them apart.
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.try_intersection(other).unwrap_or_else(|| {
            tracing::trace!(target: LOG_TARGET, rect = ?self, other = ?other, "no intersection");
            Rect::default()
        })
    }

    /// Smallest rectangle covering both.
    pub fn unite(&self, other: &Rect) -> Rect {
        let a = self.normalized();
        let b = other.normalized();
        Self::new(
            a.left.min(b.left),
            a.top.min(b.top),
            a.right.max(b.right),
            a.bottom.max(b.bottom),
        )
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Move all four edges.
    pub fn offset(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    /// Copy moved by `delta`.
    pub fn translated(&self, delta: Vector2D) -> Rect {
        let mut moved = *self;
        moved.offset(delta.x, delta.y);
        moved
    }

    /// Resize from the left edge, keeping the horizontal direction.
    pub fn set_width(&mut self, width: f64) {
        self.right = if self.right < self.left {
            self.left - width
        } else {
            self.left + width
        };
    }

    /// Resize from the top edge, keeping the vertical direction.
    pub fn set_height(&mut self, height: f64) {
        self.bottom = if self.bottom < self.top {
            self.top - height
        } else {
            self.top + height
        };
    }

    pub fn set_size(&mut self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }

    /// Grow outward by `dx` on both horizontal sides and `dy` on both
    /// vertical sides. Negative amounts shrink.
    pub fn inflate(&mut self, dx: f64, dy: f64) {
        let sx = if self.right < self.left { -1.0 } else { 1.0 };
        let sy = if self.bottom < self.top { -1.0 } else { 1.0 };
        self.left -= sx * dx;
        self.right += sx * dx;
        self.top -= sy * dy;
        self.bottom += sy * dy;
    }

    /// Swap the left and right edges.
    pub fn flip_horizontally(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    /// Swap the top and bottom edges.
    pub fn flip_vertically(&mut self) {
        std::mem::swap(&mut self.top, &mut self.bottom);
    }

    /// Rotate around the center by `angle` radians and replace the rectangle
    /// with the axis-aligned bounds of the result. The result is normalized.
    pub fn rotate(&mut self, angle: f64) {
        let center = self.center();
        let rotated = self.corners().map(|corner| corner.rotated_around(center, angle));

        let mut bounds = Self::new(rotated[0].x, rotated[0].y, rotated[0].x, rotated[0].y);
        for corner in &rotated[1..] {
            bounds.left = bounds.left.min(corner.x);
            bounds.top = bounds.top.min(corner.y);
            bounds.right = bounds.right.max(corner.x);
            bounds.bottom = bounds.bottom.max(corner.y);
        }
        *self = bounds;
    }

    pub fn rotated(&self, angle: f64) -> Rect {
        let mut copy = *self;
        copy.rotate(angle);
        copy
    }

    /// Rotate by a quarter-turn step around the center.
    pub fn rotate_by(&mut self, rotation: Rotation) {
        self.rotate(rotation.angle());
    }

    pub fn rotated_by(&self, rotation: Rotation) -> Rect {
        self.rotated(rotation.angle())
    }
}

impl PartialEq for Rect {
    /// Compares raw edges, so a rectangle and its inverted twin differ.
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq_eps(other, DEFAULT_EPSILON)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl Add<Vector2D> for Rect {
    type Output = Rect;

    fn add(self, delta: Vector2D) -> Rect {
        self.translated(delta)
    }
}

impl Sub<Vector2D> for Rect {
    type Output = Rect;

    fn sub(self, delta: Vector2D) -> Rect {
        self.translated(-delta)
    }
}

impl AddAssign<Vector2D> for Rect {
    fn add_assign(&mut self, delta: Vector2D) {
        self.offset(delta.x, delta.y);
    }
}

impl SubAssign<Vector2D> for Rect {
    fn sub_assign(&mut self, delta: Vector2D) {
        self.offset(-delta.x, -delta.y);
    }
}

static_assertions::assert_impl_all!(Rect: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_rect_measurements() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(rect.is_inverted());
        assert_eq!(rect.width(), 10.0);
        assert_eq!(rect.height(), 10.0);
        assert_eq!(rect.area(), 100.0);
        assert_eq!(rect.top_left(), Point::new(0.0, 0.0));
        assert_eq!(rect.center(), Point::new(5.0, 5.0));
        // Raw edges are untouched.
        assert_eq!(rect.left(), 10.0);
    }

    #[test]
    fn test_normalize_preserves_measurements() {
        let mut rect = Rect::from_points(Point::new(8.0, 1.0), Point::new(2.0, 5.0));
        let (w, h, c) = (rect.width(), rect.height(), rect.center());
        rect.normalize();
        assert!(!rect.is_inverted());
        assert_eq!(rect, Rect::new(2.0, 1.0, 8.0, 5.0));
        assert_eq!((rect.width(), rect.height(), rect.center()), (w, h, c));
    }

    #[test]
    fn test_derived_measurements() {
        let rect = Rect::new(0.0, 0.0, 3.0, 4.0);
        assert_eq!(rect.perimeter(), 14.0);
        assert_eq!(rect.diagonal(), 5.0);
        assert!(!rect.is_square());
        assert!(Rect::new(0.0, 0.0, 2.0, 2.0).is_square());
        assert_eq!(rect.size(), Size::new(3.0, 4.0));
    }

    #[test]
    fn test_contains() {
        let rect = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert!(rect.contains(Point::new(0.0, 10.0)));
        assert!(rect.contains(Point::new(5.0, 5.0)));
        assert!(!rect.contains(Point::new(10.1, 5.0)));
        assert!(rect.contains_rect(&Rect::new(1.0, 1.0, 9.0, 9.0)));
        assert!(!rect.contains_rect(&Rect::new(1.0, 1.0, 11.0, 9.0)));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(15.0, 15.0, 5.0, 5.0);
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b), Rect::new(5.0, 5.0, 10.0, 10.0));

        // A shared edge is a zero-width overlap.
        let c = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert!(a.intersects(&c));
        assert_eq!(a.try_intersection(&c), Some(Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert_eq!(a.intersection(&c).area(), 0.0);

        let apart = Rect::new(10.5, 0.0, 20.0, 10.0);
        assert!(!a.intersects(&apart));
        assert_eq!(a.try_intersection(&apart), None);
        assert_eq!(a.intersection(&apart), Rect::default());
    }

    #[test]
    fn test_corner_touch_at_origin() {
        let upper_left = Rect::new(-5.0, -5.0, 0.0, 0.0);
        let lower_right = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(upper_left.intersects(&lower_right));
        assert_eq!(upper_left.try_intersection(&lower_right), Some(Rect::default()));
    }

    #[test]
    fn test_unite() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 6.0, 3.0, 2.0);
        assert_eq!(a.unite(&b), Rect::new(0.0, 0.0, 5.0, 6.0));
    }

    #[test]
    fn test_offset_and_operators() {
        let mut rect = Rect::from_position_size(Vector2D::new(10.0, 10.0), Size::new(5.0, 5.0));
        rect.offset(-20.0, -20.0);
        assert_eq!(rect, Rect::new(-10.0, -10.0, -5.0, -5.0));

        let moved = rect + Vector2D::new(1.0, 2.0);
        assert_eq!(moved, Rect::new(-9.0, -8.0, -4.0, -3.0));
        assert_eq!(moved - Vector2D::new(1.0, 2.0), rect);

        rect += Vector2D::new(10.0, 10.0);
        rect -= Vector2D::new(0.0, 5.0);
        assert_eq!(rect, Rect::new(0.0, -5.0, 5.0, 0.0));
    }

    #[test]
    fn test_set_size_keeps_direction() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.set_size(Size::new(4.0, 6.0));
        assert_eq!(rect, Rect::new(0.0, 0.0, 4.0, 6.0));

        let mut inverted = Rect::new(10.0, 0.0, 0.0, 10.0);
        inverted.set_size(Size::new(4.0, 6.0));
        assert_eq!(inverted, Rect::new(10.0, 0.0, 6.0, 6.0));
        assert_eq!(inverted.size(), Size::new(4.0, 6.0));
    }

    #[test]
    fn test_inflate() {
        let mut rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        rect.inflate(1.0, 2.0);
        assert_eq!(rect, Rect::new(-1.0, -2.0, 11.0, 12.0));

        let mut inverted = Rect::new(10.0, 10.0, 0.0, 0.0);
        inverted.inflate(1.0, 1.0);
        assert_eq!(inverted.size(), Size::new(12.0, 12.0));
    }

    #[test]
    fn test_flip() {
        let mut rect = Rect::new(0.0, 1.0, 2.0, 3.0);
        rect.flip_horizontally();
        assert_eq!(rect, Rect::new(2.0, 1.0, 0.0, 3.0));
        rect.flip_vertically();
        assert_eq!(rect, Rect::new(2.0, 3.0, 0.0, 1.0));
        assert_eq!(rect.normalized(), Rect::new(0.0, 1.0, 2.0, 3.0));
        assert_ne!(rect, rect.normalized());
        assert!(rect.approx_eq_eps(&Rect::new(2.01, 3.0, 0.0, 1.0), 0.1));
    }

    #[test]
    fn test_rotation_steps() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);

        let quarter = rect.rotated_by(Rotation::Clockwise90);
        assert_eq!(quarter, Rect::new(1.0, -1.0, 3.0, 3.0));
        assert_eq!(quarter.center(), rect.center());
        assert_eq!(rect.rotated_by(Rotation::CounterClockwise90), quarter);

        assert_eq!(rect.rotated_by(Rotation::Clockwise180), rect);
        assert_eq!(rect.rotated_by(Rotation::CounterClockwise270), quarter);

        let mut in_place = rect;
        in_place.rotate_by(Rotation::Clockwise270);
        assert_eq!(in_place, quarter);
    }

    #[test]
    fn test_rotation_bounding_box() {
        let square = Rect::new(-1.0, -1.0, 1.0, 1.0);
        let diamond = square.rotated(std::f64::consts::FRAC_PI_4);
        let reach = std::f64::consts::SQRT_2;
        assert_eq!(diamond, Rect::new(-reach, -reach, reach, reach));
    }

    #[test]
    fn test_rotation_angles() {
        assert_eq!(Rotation::Clockwise90.angle(), -Rotation::CounterClockwise90.angle());
        assert_eq!(Rotation::Clockwise180.angle(), PI);
    }
}
