//! Convex hulls of 2D integer point sets.
//!
//! Three classical constructions (Graham's scan, Jarvis' march, Andrew's
//! monotone chain) over one exact orientation predicate, a selector that
//! dispatches on a menu-style `AlgorithmChoice`, and a headless collection
//! session that runs the selected algorithm once a target point count is
//! reached.
//!
//! API Policy
//! - The core never draws and never performs I/O; it borrows points and
//!   returns owned hulls.
//! - Errors are values (`HullError`, `SessionError`); nothing here panics on
//!   user input.

pub mod api;
pub mod cfg;
pub mod geom;
pub mod hull;
pub mod rand;
pub mod select;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{orientation, Orientation, Point};
pub use hull::{Hull, HullAlgorithm, HullError};
pub use select::{compute_hull, AlgorithmChoice, HullSelector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{orientation, Orientation, Point};
    pub use crate::hull::{
        andrews_monotone_chain, graham_scan, jarvis_march, Hull, HullAlgorithm, HullError,
    };
    pub use crate::select::{compute_hull, AlgorithmChoice, HullSelector};
    pub use crate::session::{Push, Session};
}
