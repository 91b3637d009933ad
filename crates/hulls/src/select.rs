//! Algorithm selection and dispatch.
//!
//! `AlgorithmChoice` mirrors the entries of an algorithm menu, including the
//! reserved Chan's algorithm and the `Clear` reset signal. Dispatch goes
//! through `HullAlgorithm` trait objects; the selector itself holds only the
//! choice.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;
use crate::hull::{AndrewsMonotoneChain, GrahamScan, Hull, HullAlgorithm, HullError, JarvisMarch};

/// Menu entry: one of the hull algorithms, or the `Clear` reset signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlgorithmChoice {
    #[default]
    GrahamScan,
    JarvisMarch,
    /// Reserved; selecting it yields `HullError::NotImplemented`.
    ChansAlgorithm,
    AndrewsMonotoneChain,
    Clear,
}

impl AlgorithmChoice {
    pub const ALL: [AlgorithmChoice; 5] = [
        AlgorithmChoice::GrahamScan,
        AlgorithmChoice::JarvisMarch,
        AlgorithmChoice::ChansAlgorithm,
        AlgorithmChoice::AndrewsMonotoneChain,
        AlgorithmChoice::Clear,
    ];

    /// The implemented algorithms, in menu order.
    pub const IMPLEMENTED: [AlgorithmChoice; 3] = [
        AlgorithmChoice::GrahamScan,
        AlgorithmChoice::JarvisMarch,
        AlgorithmChoice::AndrewsMonotoneChain,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AlgorithmChoice::GrahamScan => GrahamScan::NAME,
            AlgorithmChoice::JarvisMarch => JarvisMarch::NAME,
            AlgorithmChoice::ChansAlgorithm => "Chan's Algorithm",
            AlgorithmChoice::AndrewsMonotoneChain => AndrewsMonotoneChain::NAME,
            AlgorithmChoice::Clear => "Clear Screen",
        }
    }

    /// Short identifier accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmChoice::GrahamScan => "graham",
            AlgorithmChoice::JarvisMarch => "jarvis",
            AlgorithmChoice::ChansAlgorithm => "chan",
            AlgorithmChoice::AndrewsMonotoneChain => "andrew",
            AlgorithmChoice::Clear => "clear",
        }
    }

    #[inline]
    pub fn is_algorithm(self) -> bool {
        !matches!(self, AlgorithmChoice::Clear)
    }

    /// Implementation behind this choice.
    pub fn algorithm(self) -> Result<&'static dyn HullAlgorithm, HullError> {
        match self {
            AlgorithmChoice::GrahamScan => Ok(&GrahamScan),
            AlgorithmChoice::JarvisMarch => Ok(&JarvisMarch),
            AlgorithmChoice::AndrewsMonotoneChain => Ok(&AndrewsMonotoneChain),
            AlgorithmChoice::ChansAlgorithm => Err(HullError::NotImplemented {
                algorithm: self.label(),
            }),
            AlgorithmChoice::Clear => Err(HullError::NotAnAlgorithm),
        }
    }
}

impl fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unknown algorithm identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseChoiceError(pub String);

impl fmt::Display for ParseChoiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm '{}' (expected one of: graham, jarvis, chan, andrew, clear)",
            self.0
        )
    }
}

impl std::error::Error for ParseChoiceError {}

impl FromStr for AlgorithmChoice {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', '_', ' ', '\''], "");
        match key.as_str() {
            "graham" | "grahamscan" | "grahamsscan" => Ok(AlgorithmChoice::GrahamScan),
            "jarvis" | "jarvismarch" | "giftwrap" | "giftwrapping" => {
                Ok(AlgorithmChoice::JarvisMarch)
            }
            "chan" | "chans" | "chansalgorithm" => Ok(AlgorithmChoice::ChansAlgorithm),
            "andrew" | "andrews" | "monotonechain" | "andrewsmonotonechain" => {
                Ok(AlgorithmChoice::AndrewsMonotoneChain)
            }
            "clear" | "clearscreen" => Ok(AlgorithmChoice::Clear),
            _ => Err(ParseChoiceError(s.to_string())),
        }
    }
}

/// Stateless dispatcher bound to one choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HullSelector {
    choice: AlgorithmChoice,
}

impl HullSelector {
    #[inline]
    pub fn new(choice: AlgorithmChoice) -> Self {
        Self { choice }
    }

    #[inline]
    pub fn choice(&self) -> AlgorithmChoice {
        self.choice
    }

    pub fn compute(&self, points: &[Point]) -> Result<Hull, HullError> {
        compute_hull(self.choice, points)
    }
}

/// Run the algorithm behind `choice` on `points`.
pub fn compute_hull(choice: AlgorithmChoice, points: &[Point]) -> Result<Hull, HullError> {
    let algo = choice.algorithm().inspect_err(|e| {
        tracing::warn!(choice = choice.key(), error = %e, "no hull algorithm for choice");
    })?;
    let hull = algo.compute(points)?;
    tracing::debug!(
        algorithm = algo.name(),
        points = points.len(),
        vertices = hull.len(),
        "hull computed"
    );
    Ok(hull)
}
