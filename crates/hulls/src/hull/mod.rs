//! Convex hull algorithms over integer point sets.
//!
//! Purpose
//! - Three classical constructions behind one `HullAlgorithm` trait so each
//!   can be selected by value and tested on its own.
//! - All algorithms borrow the caller's points and work on an owned copy; the
//!   caller's order is never changed.
//!
//! Shared policy
//! - Fewer than `cfg::MIN_HULL_POINTS` input points: `HullError::InsufficientPoints`
//!   (logged at warn level) for every algorithm.
//! - Duplicate coordinates are accepted and appear at most once in the hull.
//! - Collinear boundary points are dropped; hulls keep strict vertices only.
//! - Degenerate input with enough points (all equal, all collinear) yields an
//!   `Ok` hull with one or two vertices; see `Hull::is_degenerate`.
//!
//! Orientation of results
//! - Graham's scan and Jarvis' march: counter-clockwise (y-up sense), Graham
//!   starting at its pivot, Jarvis at the lexicographically smallest point.
//! - Andrew's monotone chain: lower chain then upper chain, clockwise in the
//!   y-up sense (counter-clockwise on a y-down screen).

mod andrew;
mod graham;
mod jarvis;
mod types;

pub use andrew::{andrews_monotone_chain, AndrewsMonotoneChain};
pub use graham::{graham_scan, graham_scan_with_order, GrahamScan};
pub use jarvis::{jarvis_march, JarvisMarch};
pub use types::{Hull, HullError};

use crate::cfg::MIN_HULL_POINTS;
use crate::geom::Point;

/// A convex hull construction.
pub trait HullAlgorithm {
    /// Human-readable name, used in logs and CLI output.
    fn name(&self) -> &'static str;

    fn compute(&self, points: &[Point]) -> Result<Hull, HullError>;
}

pub(crate) fn require_min_points(
    algorithm: &'static str,
    points: &[Point],
) -> Result<(), HullError> {
    if points.len() < MIN_HULL_POINTS {
        tracing::warn!(
            algorithm,
            found = points.len(),
            "hull requires at least {MIN_HULL_POINTS} points"
        );
        return Err(HullError::InsufficientPoints {
            found: points.len(),
        });
    }
    Ok(())
}
