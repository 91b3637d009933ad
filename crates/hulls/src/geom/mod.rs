//! Integer 2D primitives shared by every hull algorithm.
//!
//! Purpose
//! - Provide the `Point` value type and the single orientation predicate the
//!   algorithms build on.
//! - Keep arithmetic exact: coordinates are `i32`, every derived term
//!   (cross products, squared distances) is evaluated in `i128`.
//!
//! Conventions
//! - Orientation names use the y-up sense: a negative turn value is a left
//!   turn and is reported as `CounterClockwise`, a positive one as
//!   `Clockwise`. On a y-down screen both appear mirrored. Flipping the sign
//!   inverts the turn decisions of every algorithm in `crate::hull`.
//!
//! Code cross-refs: `hull::{graham, jarvis, andrew}`, `select::HullSelector`.

mod predicates;
mod types;

pub use predicates::{cmp_around, dist2, orientation, turn};
pub use types::{Orientation, Point};

#[cfg(test)]
mod tests;
