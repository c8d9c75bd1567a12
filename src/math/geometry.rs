// Copyright 2025 Ludic Engine contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides simple geometric primitives: points and an axis-aligned
//! rectangle with containment and overlap tests.

use super::{Vec2, Vec3};
use std::fmt;

// --- Point2 ---

/// A position in 2D space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Point2 {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
}

impl Point2 {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns `true` when this point lies within `rect` (boundary
    /// inclusive).
    #[inline]
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        rect.contains_point(*self)
    }
}

impl From<Vec2> for Point2 {
    /// Reinterprets a displacement from the origin as a position.
    #[inline]
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Vec2 {
    /// Reinterprets a position as a displacement from the origin.
    #[inline]
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl fmt::Display for Point2 {
    /// Formats the point with three decimal places per coordinate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}]", self.x, self.y)
    }
}

// --- Point3 ---

/// A position in 3D space.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Point3 {
    /// The x coordinate.
    pub x: f32,
    /// The y coordinate.
    pub y: f32,
    /// The z coordinate.
    pub z: f32,
}

impl Point3 {
    /// The origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a new point at the given coordinates.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for Point3 {
    /// Reinterprets a displacement from the origin as a position.
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    /// Reinterprets a position as a displacement from the origin.
    #[inline]
    fn from(p: Point3) -> Self {
        Self::new(p.x, p.y, p.z)
    }
}

impl fmt::Display for Point3 {
    /// Formats the point with three decimal places per coordinate.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.3}, {:.3}, {:.3}]", self.x, self.y, self.z)
    }
}

// --- Rect ---

/// An axis-aligned rectangle anchored at its lower-left corner.
///
/// `(x, y)` is the minimum corner; `width` extends along +X and `height`
/// along +Y. All tests are boundary-inclusive: a point on an edge is
/// contained, and rectangles touching along an edge intersect.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Rect {
    /// The x coordinate of the left edge.
    pub x: f32,
    /// The y coordinate of the bottom edge.
    pub y: f32,
    /// The extent along +X.
    pub width: f32,
    /// The extent along +Y.
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its minimum corner and extents.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Sets the width; the absolute value is taken.
    #[inline]
    pub fn set_width(&mut self, width: f32) {
        self.width = width.abs();
    }

    /// Sets the height; the absolute value is taken.
    #[inline]
    pub fn set_height(&mut self, height: f32) {
        self.height = height.abs();
    }

    /// Returns the x coordinate of the left edge.
    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Returns the x coordinate of the right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the y coordinate of the bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    /// Returns the y coordinate of the top edge.
    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Returns `true` when `point` lies within this rectangle, boundary
    /// inclusive.
    #[inline]
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.bottom()
            && point.y <= self.top()
    }

    /// Returns `true` when this rectangle and `other` overlap. Rectangles
    /// that only touch at an edge or corner are considered intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() <= other.top()
            && self.top() >= other.bottom()
    }

    /// Moves the rectangle relative to its current position.
    #[inline]
    pub fn shift(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Moves the rectangle rightward relative to its current position.
    #[inline]
    pub fn shift_right(&mut self, dx: f32) {
        self.shift(dx, 0.0);
    }

    /// Moves the rectangle upward relative to its current position.
    #[inline]
    pub fn shift_up(&mut self, dy: f32) {
        self.shift(0.0, dy);
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Returns the perimeter of the rectangle.
    #[inline]
    pub fn perimeter(&self) -> f32 {
        2.0 * self.width + 2.0 * self.height
    }

    /// Returns the aspect ratio (`width / height`). A zero height yields
    /// infinity or NaN per float semantics.
    #[inline]
    pub fn ratio(&self) -> f32 {
        self.width / self.height
    }
}

impl fmt::Display for Rect {
    /// Formats the rectangle's corner and extents with three decimal
    /// places.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x:{:.3}, y:{:.3}, width:{:.3}, height:{:.3}]",
            self.x, self.y, self.width, self.height
        )
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_point_conversions() {
        let p = Point2::new(1.0, 2.0);
        let v: Vec2 = p.into();
        assert_eq!(v, Vec2::new(1.0, 2.0));
        assert_eq!(Point2::from(v), p);

        let p3 = Point3::new(1.0, 2.0, 3.0);
        let v3: Vec3 = p3.into();
        assert_eq!(v3, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Point3::from(v3), p3);
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point2::new(1.0, -2.0).to_string(), "[1.000, -2.000]");
        assert_eq!(
            Point3::new(0.5, 0.25, 0.125).to_string(),
            "[0.500, 0.250, 0.125]"
        );
    }

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.left(), 1.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 2.0);
        assert_eq!(r.top(), 6.0);
    }

    #[test]
    fn test_rect_extent_setters_take_absolute_value() {
        let mut r = Rect::new(0.0, 0.0, 1.0, 1.0);
        r.set_width(-3.0);
        r.set_height(-2.0);
        assert_eq!(r.width, 3.0);
        assert_eq!(r.height, 2.0);
    }

    #[test]
    fn test_rect_contains_point() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);

        // Inside
        assert!(r.contains_point(Point2::new(1.0, 0.5)));

        // On boundary (inclusive)
        assert!(r.contains_point(Point2::new(0.0, 0.0)));
        assert!(r.contains_point(Point2::new(2.0, 1.0)));
        assert!(r.contains_point(Point2::new(2.0, 0.5)));

        // Outside
        assert!(!r.contains_point(Point2::new(2.1, 0.5)));
        assert!(!r.contains_point(Point2::new(-0.1, 0.5)));
        assert!(!r.contains_point(Point2::new(1.0, 1.1)));

        // Delegated form agrees.
        assert!(Point2::new(1.0, 0.5).intersects_rect(&r));
    }

    #[test]
    fn test_rect_intersects() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);

        // Overlapping
        assert!(r.intersects(&Rect::new(1.0, 1.0, 2.0, 2.0)));
        assert!(Rect::new(1.0, 1.0, 2.0, 2.0).intersects(&r));

        // Touching edges intersect.
        assert!(r.intersects(&Rect::new(2.0, 0.0, 1.0, 2.0)));

        // Contained
        assert!(r.intersects(&Rect::new(0.5, 0.5, 1.0, 1.0)));

        // Disjoint on X / on Y
        assert!(!r.intersects(&Rect::new(2.1, 0.0, 1.0, 2.0)));
        assert!(!r.intersects(&Rect::new(0.0, 2.1, 2.0, 1.0)));
    }

    #[test]
    fn test_rect_shift() {
        let mut r = Rect::new(1.0, 1.0, 2.0, 2.0);
        r.shift(0.5, -1.0);
        assert_eq!(r, Rect::new(1.5, 0.0, 2.0, 2.0));
        r.shift_right(0.5);
        r.shift_up(1.0);
        assert_eq!(r, Rect::new(2.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn test_rect_metrics() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert!(approx_eq(r.area(), 8.0));
        assert!(approx_eq(r.perimeter(), 12.0));
        assert!(approx_eq(r.ratio(), 2.0));

        let degenerate = Rect::new(0.0, 0.0, 1.0, 0.0);
        assert!(degenerate.ratio().is_infinite());
    }

    #[test]
    fn test_rect_display() {
        assert_eq!(
            Rect::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "[x:1.000, y:2.000, width:3.000, height:4.000]"
        );
    }
}
