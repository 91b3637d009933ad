//! Andrew's monotone chain.

use crate::geom::{orientation, Orientation, Point};

use super::{require_min_points, Hull, HullAlgorithm, HullError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AndrewsMonotoneChain;

impl AndrewsMonotoneChain {
    pub const NAME: &'static str = "Andrew's Monotone Chain";
}

impl HullAlgorithm for AndrewsMonotoneChain {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn compute(&self, points: &[Point]) -> Result<Hull, HullError> {
        andrews_monotone_chain(points)
    }
}

/// Andrew's monotone chain: lexicographic sort, then a lower and an upper
/// sweep that keep strict clockwise turns only.
pub fn andrews_monotone_chain(points: &[Point]) -> Result<Hull, HullError> {
    require_min_points(AndrewsMonotoneChain::NAME, points)?;
    let mut pts = points.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return Ok(Hull::new(pts));
    }
    let mut lower = half_chain(pts.iter().copied(), pts.len());
    let mut upper = half_chain(pts.iter().rev().copied(), pts.len());
    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Ok(Hull::new(lower))
}

fn half_chain(points: impl Iterator<Item = Point>, cap: usize) -> Vec<Point> {
    let mut chain: Vec<Point> = Vec::with_capacity(cap);
    for p in points {
        while chain.len() >= 2
            && orientation(chain[chain.len() - 2], chain[chain.len() - 1], p)
                != Orientation::Clockwise
        {
            chain.pop();
        }
        chain.push(p);
    }
    chain
}
