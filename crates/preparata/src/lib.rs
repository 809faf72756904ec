//! Online planar convex hull (Preparata's method) over a threaded tree.
//!
//! Points are consumed in lexicographic order. After a seed triangle, each
//! point is spliced into the hull between its two supporting vertices, which
//! are located by a root-to-leaf walk over a balanced threaded binary tree
//! built on the current hull.
//!
//! Layout
//! - `geom2`: predicates, polygon checks, reference hull, seeded clouds.
//! - `threaded`: arena-backed threaded binary tree.
//! - `hull`: vertex classification, tangent search, incremental updater.
//!
//! Logging goes through `tracing` (`debug` per insertion, `trace` per
//! visited node); install a subscriber in the caller to see it.

pub mod api;
pub mod geom2;
pub mod hull;
pub mod threaded;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::Point2;
pub use hull::{preparata_hull, HullCfg, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_cloud, CloudCfg, CloudShape, ReplayToken};
    pub use crate::geom2::{orientation, reference_hull, Orientation, Point2};
    pub use crate::hull::{
        preparata_hull, preparata_hull_with, preparata_trace, DuplicatePolicy, HullCfg,
        HullError, IncrementalHull, InsertionStep, Tangent,
    };
    pub use crate::threaded::{Link, NodeId, ThreadedTree};
    pub use nalgebra::{vector, Vector2 as Vec2};
}
