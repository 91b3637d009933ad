//! Jarvis' march (gift wrapping).

use std::collections::HashSet;

use crate::geom::{dist2, orientation, Orientation, Point};

use super::{require_min_points, Hull, HullAlgorithm, HullError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JarvisMarch;

impl JarvisMarch {
    pub const NAME: &'static str = "Jarvis March";
}

impl HullAlgorithm for JarvisMarch {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, points: &[Point]) -> Result<Hull, HullError> {
        jarvis_march(points)
    }
}

/// Gift wrapping from the lexicographically smallest point. O(n·h).
///
/// From the current vertex the next one is the candidate with no point
/// strictly clockwise of it; among collinear candidates the farthest wins, so
/// interior points of collinear boundary runs are skipped.
pub fn jarvis_march(points: &[Point]) -> Result<Hull, HullError> {
    require_min_points(JarvisMarch::NAME, points)?;
    let mut seen = HashSet::with_capacity(points.len());
    let pts: Vec<Point> = points.iter().copied().filter(|p| seen.insert(*p)).collect();
    if pts.len() == 1 {
        return Ok(Hull::new(pts));
    }
    // The lexicographic minimum is always a strict hull vertex.
    let start = (0..pts.len()).min_by_key(|&i| pts[i]).unwrap_or(0);

    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(pts[p]);
        p = wrap_step(&pts, p);
        if p == start || hull.len() == pts.len() {
            break;
        }
    }
    Ok(Hull::new(hull))
}

fn wrap_step(pts: &[Point], p: usize) -> usize {
    let from = pts[p];
    let mut q = (p + 1) % pts.len();
    for (r, &cand) in pts.iter().enumerate() {
        match orientation(from, pts[q], cand) {
            Orientation::Clockwise => q = r,
            Orientation::Collinear if dist2(from, cand) > dist2(from, pts[q]) => q = r,
            _ => {}
        }
    }
    q
}
