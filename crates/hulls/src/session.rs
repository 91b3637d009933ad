//! Headless point-collection session.
//!
//! Purpose
//! - Model the interactive loop around the hull algorithms without any UI:
//!   points arrive one at a time until a target count is reached, then the
//!   selected algorithm runs once on the batch.
//! - Replace process-wide state with one owned value per session.
//!
//! Rules
//! - Points beyond the target are ignored until the session is cleared.
//! - Selecting an algorithm resets points and outcome; `Clear` resets without
//!   changing the selection.
//! - A failed computation is stored as the outcome; the caller decides what
//!   to show (typically nothing).

use std::fmt;

use crate::geom::Point;
use crate::hull::{Hull, HullError};
use crate::select::{compute_hull, AlgorithmChoice};

/// Result of `Session::push`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Push {
    /// Point stored; `remaining` more are needed before the hull runs.
    Accepted { remaining: usize },
    /// Point stored and the batch completed; see `Session::outcome`.
    Completed,
    /// Batch already complete; point dropped.
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    InvalidTarget { target: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTarget { target } => {
                write!(f, "invalid number of points: {target} (must be > 0)")
            }
        }
    }
}

impl std::error::Error for SessionError {}

#[derive(Clone, Debug)]
pub struct Session {
    target: usize,
    selected: AlgorithmChoice,
    points: Vec<Point>,
    outcome: Option<Result<Hull, HullError>>,
}

impl Session {
    /// New session collecting `target` points with Graham's scan selected.
    pub fn new(target: usize) -> Result<Self, SessionError> {
        if target == 0 {
            return Err(SessionError::InvalidTarget { target });
        }
        Ok(Self {
            target,
            selected: AlgorithmChoice::default(),
            points: Vec::with_capacity(target),
            outcome: None,
        })
    }

    pub fn push(&mut self, p: Point) -> Push {
        if self.points.len() >= self.target {
            tracing::debug!(point = %p, "batch complete; point ignored");
            return Push::Ignored;
        }
        self.points.push(p);
        let remaining = self.target - self.points.len();
        if remaining > 0 {
            return Push::Accepted { remaining };
        }
        let outcome = compute_hull(self.selected, &self.points);
        match &outcome {
            Ok(hull) => tracing::info!(
                algorithm = self.selected.key(),
                points = self.points.len(),
                vertices = hull.len(),
                "batch complete"
            ),
            Err(e) => tracing::info!(
                algorithm = self.selected.key(),
                points = self.points.len(),
                error = %e,
                "batch complete without hull"
            ),
        }
        self.outcome = Some(outcome);
        Push::Completed
    }

    /// Menu selection: algorithms replace the selection, every choice resets.
    pub fn select(&mut self, choice: AlgorithmChoice) {
        if choice.is_algorithm() {
            self.selected = choice;
        }
        self.clear();
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.outcome = None;
    }

    #[inline]
    pub fn target(&self) -> usize {
        self.target
    }

    #[inline]
    pub fn selected(&self) -> AlgorithmChoice {
        self.selected
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.target - self.points.len()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.target
    }

    /// `None` until the batch completes.
    #[inline]
    pub fn outcome(&self) -> Option<&Result<Hull, HullError>> {
        self.outcome.as_ref()
    }

    /// The hull to draw, if the batch completed successfully.
    #[inline]
    pub fn hull(&self) -> Option<&Hull> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(s: &mut Session, raw: &[(i32, i32)]) -> Vec<Push> {
        raw.iter().map(|&p| s.push(p.into())).collect()
    }

    #[test]
    fn zero_target_is_rejected() {
        assert_eq!(
            Session::new(0).err(),
            Some(SessionError::InvalidTarget { target: 0 })
        );
    }

    #[test]
    fn hull_runs_when_target_reached() {
        let mut s = Session::new(5).unwrap();
        let pushes = feed(&mut s, &[(0, 0), (4, 0), (4, 4), (0, 4)]);
        assert_eq!(pushes.last(), Some(&Push::Accepted { remaining: 1 }));
        assert!(s.outcome().is_none());
        assert_eq!(s.push(Point::new(2, 2)), Push::Completed);
        assert!(s.is_complete());
        assert_eq!(s.hull().map(|h| h.len()), Some(4));
        assert_eq!(s.push(Point::new(9, 9)), Push::Ignored);
        assert_eq!(s.points().len(), 5);
    }

    #[test]
    fn select_resets_and_switches_algorithm() {
        let mut s = Session::new(3).unwrap();
        feed(&mut s, &[(0, 0), (1, 0), (0, 1)]);
        assert!(s.hull().is_some());
        s.select(AlgorithmChoice::AndrewsMonotoneChain);
        assert_eq!(s.selected(), AlgorithmChoice::AndrewsMonotoneChain);
        assert!(s.points().is_empty());
        assert!(s.outcome().is_none());
        assert_eq!(s.remaining(), 3);

        s.select(AlgorithmChoice::Clear);
        assert_eq!(s.selected(), AlgorithmChoice::AndrewsMonotoneChain);
    }

    #[test]
    fn small_target_stores_error_outcome() {
        let mut s = Session::new(2).unwrap();
        feed(&mut s, &[(0, 0), (1, 1)]);
        assert_eq!(
            s.outcome(),
            Some(&Err(HullError::InsufficientPoints { found: 2 }))
        );
        assert!(s.hull().is_none());
    }

    #[test]
    fn chan_selection_reports_not_implemented() {
        let mut s = Session::new(3).unwrap();
        s.select(AlgorithmChoice::ChansAlgorithm);
        feed(&mut s, &[(0, 0), (1, 0), (0, 1)]);
        assert!(matches!(
            s.outcome(),
            Some(Err(HullError::NotImplemented { .. }))
        ));
    }
}
