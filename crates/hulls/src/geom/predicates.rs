use std::cmp::Ordering;

use super::types::{Orientation, Point};

/// Raw turn value `(b.y - a.y)(c.x - b.x) - (b.x - a.x)(c.y - b.y)`.
///
/// Exact for all `i32` inputs: differences fit in 33 bits, products in 66.
#[inline]
pub fn turn(a: Point, b: Point, c: Point) -> i128 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    let (cx, cy) = (i128::from(c.x), i128::from(c.y));
    (by - ay) * (cx - bx) - (bx - ax) * (cy - by)
}

/// Orientation of the triple `(a, b, c)`: zero is `Collinear`, positive
/// `Clockwise`, negative `CounterClockwise`.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::from_turn(turn(a, b, c))
}

/// Squared Euclidean distance.
#[inline]
pub fn dist2(a: Point, b: Point) -> i128 {
    let dx = i128::from(b.x) - i128::from(a.x);
    let dy = i128::from(b.y) - i128::from(a.y);
    dx * dx + dy * dy
}

/// Polar-angle order around `pivot`, nearer first on collinear ties.
///
/// `a` sorts before `b` when `(pivot, a, b)` turns counter-clockwise. This is
/// a total order only when every point lies in the closed half-plane above
/// the pivot with same-row points to its right, which Graham's pivot choice
/// (min y, then min x) guarantees. Points equal to the pivot sort first.
#[inline]
pub fn cmp_around(pivot: Point, a: Point, b: Point) -> Ordering {
    match orientation(pivot, a, b) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => dist2(pivot, a).cmp(&dist2(pivot, b)),
    }
}
