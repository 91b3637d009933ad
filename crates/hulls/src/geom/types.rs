//! Point and turn classification.

use std::fmt;

use nalgebra::{Point2, Vector2};

/// Integer point in the plane.
///
/// The derived ordering is lexicographic on `(x, y)`, the order Andrew's
/// monotone chain sorts by and the tie-break used for Jarvis' start point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Float view for consumers that work in `f64` (centroids, rendering).
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point2<i32>> for Point {
    #[inline]
    fn from(p: Point2<i32>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl From<Point> for Point2<i32> {
    #[inline]
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Turn direction of an ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Classify a raw turn value (see `geom::turn`).
    #[inline]
    pub fn from_turn(val: i128) -> Self {
        match val.signum() {
            0 => Orientation::Collinear,
            1 => Orientation::Clockwise,
            _ => Orientation::CounterClockwise,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Orientation::Collinear => Orientation::Collinear,
            Orientation::Clockwise => Orientation::CounterClockwise,
            Orientation::CounterClockwise => Orientation::Clockwise,
        }
    }
}
