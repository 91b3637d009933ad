//! Graham's scan: angular sort around a pivot, then a stack sweep.

use crate::geom::{cmp_around, orientation, Orientation, Point};

use super::{require_min_points, Hull, HullAlgorithm, HullError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrahamScan;

impl GrahamScan {
    pub const NAME: &'static str = "Graham's Scan";
}

impl HullAlgorithm for GrahamScan {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, points: &[Point]) -> Result<Hull, HullError> {
        graham_scan(points)
    }
}

/// Graham's scan. Counter-clockwise hull starting at the pivot
/// (min y, ties by min x).
pub fn graham_scan(points: &[Point]) -> Result<Hull, HullError> {
    graham_scan_with_order(points).map(|(hull, _)| hull)
}

/// Graham's scan, also returning the sweep order: pivot first, then the
/// remaining distinct points by polar angle (nearer first on ties).
pub fn graham_scan_with_order(points: &[Point]) -> Result<(Hull, Vec<Point>), HullError> {
    require_min_points(GrahamScan::NAME, points)?;
    let mut pts = points.to_vec();
    let pivot_idx = (0..pts.len())
        .min_by_key(|&i| (pts[i].y, pts[i].x))
        .unwrap_or(0);
    pts.swap(0, pivot_idx);
    let pivot = pts[0];
    pts[1..].sort_by(|a, b| cmp_around(pivot, *a, *b));
    // Equal coordinates compare equal under `cmp_around`, so they are adjacent.
    pts.dedup();

    let mut stack: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while stack.len() >= 2
            && orientation(stack[stack.len() - 2], stack[stack.len() - 1], p)
                != Orientation::CounterClockwise
        {
            stack.pop();
        }
        stack.push(p);
    }
    Ok((Hull::new(stack), pts))
}
