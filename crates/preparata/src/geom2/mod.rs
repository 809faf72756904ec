//! Planar primitives for the incremental hull.
//!
//! Purpose
//! - Orientation and angle predicates consumed by the tangent search.
//! - Lexicographic point order used to sort the input and pick the anchor.
//! - Polygon checks and a monotone-chain reference hull for validation.
//! - Seeded point clouds for tests and benches.
//!
//! Conventions
//! - Hulls are listed clockwise, starting at the lexicographically smallest
//!   point. `orient2d > 0` means a counter-clockwise turn.

pub mod predicates;
pub mod rand;
mod types;
mod util;

pub use predicates::{
    first_non_finite, lex_cmp, orient2d, orientation, polar_angle, relative_angle, sort_dedup_lex,
    sort_lex,
};
pub use types::{Orientation, Point2};
pub use util::{contains_point, is_strictly_convex_cw, reference_hull, signed_area};
