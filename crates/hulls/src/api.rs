//! Curated surface for front ends (CLI, demos, benches).
//!
//! Prefer these re-exports over reaching into submodules; the module layout
//! behind them may change.

// Primitives
pub use crate::geom::{cmp_around, dist2, orientation, turn, Orientation, Point};
// Algorithms
pub use crate::hull::{
    andrews_monotone_chain, graham_scan, graham_scan_with_order, jarvis_march,
    AndrewsMonotoneChain, GrahamScan, Hull, HullAlgorithm, HullError, JarvisMarch,
};
// Dispatch and collection
pub use crate::select::{compute_hull, AlgorithmChoice, HullSelector, ParseChoiceError};
pub use crate::session::{Push, Session, SessionError};
// Random clouds
pub use crate::rand::{draw_points, CloudCfg, ReplayToken as CloudReplay, Spread};

/// Run every implemented algorithm on `points`, in menu order.
pub fn compute_all(points: &[Point]) -> Vec<(AlgorithmChoice, Result<Hull, HullError>)> {
    AlgorithmChoice::IMPLEMENTED
        .into_iter()
        .map(|choice| (choice, compute_hull(choice, points)))
        .collect()
}

/// Whether every successful result in `results` has the same vertex set.
/// Vacuously true when fewer than two results succeeded.
pub fn vertex_sets_agree(results: &[(AlgorithmChoice, Result<Hull, HullError>)]) -> bool {
    let mut sets = results
        .iter()
        .filter_map(|(_, r)| r.as_ref().ok())
        .map(Hull::vertex_set);
    match sets.next() {
        Some(first) => sets.all(|s| s == first),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compute_all_agrees_on_square() {
        let pts: Vec<Point> = [(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]
            .into_iter()
            .map(Point::from)
            .collect();
        let results = compute_all(&pts);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|(_, r)| r.is_ok()));
        assert!(vertex_sets_agree(&results));
    }

    #[test]
    fn agreement_ignores_failures() {
        let results = compute_all(&[Point::new(1, 1)]);
        assert!(results.iter().all(|(_, r)| r.is_err()));
        assert!(vertex_sets_agree(&results));
    }
}
