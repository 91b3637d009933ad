//! Crate-wide constants.
//!
//! Policy
//! - Fixed values rather than knobs; callers that need other extents pass them
//!   explicitly (e.g. `rand::CloudCfg`).

/// Smallest point count for which a hull is attempted.
pub const MIN_HULL_POINTS: usize = 3;
/// Default canvas width used for random point clouds (screen pixels).
pub const WINDOW_WIDTH: i32 = 800;
/// Default canvas height used for random point clouds (screen pixels).
pub const WINDOW_HEIGHT: i32 = 600;
