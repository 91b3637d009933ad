use super::*;
use std::cmp::Ordering;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

#[test]
fn orientation_sign_convention() {
    // (0,0) -> (4,0) -> (4,4) is a left turn in the y-up sense: the turn value
    // is negative, which maps to CounterClockwise.
    assert_eq!(turn(p(0, 0), p(4, 0), p(4, 4)), -16);
    assert_eq!(
        orientation(p(0, 0), p(4, 0), p(4, 4)),
        Orientation::CounterClockwise
    );
    assert_eq!(
        orientation(p(0, 0), p(4, 4), p(4, 0)),
        Orientation::Clockwise
    );
    assert_eq!(
        orientation(p(0, 0), p(1, 1), p(2, 2)),
        Orientation::Collinear
    );
}

#[test]
fn orientation_swapping_last_two_reverses() {
    let (a, b, c) = (p(-3, 7), p(5, 2), p(1, -9));
    assert_eq!(orientation(a, b, c), orientation(a, c, b).reversed());
}

#[test]
fn turn_is_exact_at_i32_extremes() {
    let a = p(i32::MIN, i32::MIN);
    let b = p(i32::MAX, i32::MIN);
    let c = p(i32::MAX, i32::MAX);
    // (0)(0) - (2^32 - 1)(2^32 - 1)
    let d = (1i128 << 32) - 1;
    assert_eq!(turn(a, b, c), -d * d);
    assert_eq!(orientation(a, b, c), Orientation::CounterClockwise);
    assert_eq!(orientation(a, p(0, 0), c), Orientation::Collinear);
}

#[test]
fn dist2_handles_duplicates_and_extremes() {
    assert_eq!(dist2(p(3, 4), p(3, 4)), 0);
    assert_eq!(dist2(p(0, 0), p(3, 4)), 25);
    let d = (1i128 << 32) - 1;
    assert_eq!(dist2(p(i32::MIN, 0), p(i32::MAX, 0)), d * d);
}

#[test]
fn cmp_around_orders_by_angle_then_distance() {
    let pivot = p(0, 0);
    assert_eq!(cmp_around(pivot, p(4, 0), p(4, 4)), Ordering::Less);
    assert_eq!(cmp_around(pivot, p(0, 4), p(4, 4)), Ordering::Greater);
    assert_eq!(cmp_around(pivot, p(1, 1), p(3, 3)), Ordering::Less);
    assert_eq!(cmp_around(pivot, p(2, 2), p(2, 2)), Ordering::Equal);
    // Duplicates of the pivot come first.
    assert_eq!(cmp_around(pivot, p(0, 0), p(9, 1)), Ordering::Less);
}

#[test]
fn point_ordering_is_lexicographic() {
    let mut pts = vec![p(1, 0), p(0, 5), p(0, -1), p(1, -3)];
    pts.sort();
    assert_eq!(pts, vec![p(0, -1), p(0, 5), p(1, -3), p(1, 0)]);
}

#[test]
fn point_conversions() {
    let q: Point = (3, -2).into();
    assert_eq!(q, p(3, -2));
    let t: (i32, i32) = q.into();
    assert_eq!(t, (3, -2));
    let np: nalgebra::Point2<i32> = q.into();
    assert_eq!(Point::from(np), q);
    assert_eq!(q.to_vec2(), nalgebra::Vector2::new(3.0, -2.0));
    assert_eq!(q.to_string(), "(3, -2)");
}
