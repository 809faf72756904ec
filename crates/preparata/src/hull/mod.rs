//! Online convex hull by tangent search over a threaded tree.
//!
//! Purpose
//! - Maintain the hull of a point set processed in lexicographic order. Each
//!   new point is outside the current hull; its two supporting vertices are
//!   found by walking a balanced threaded tree over the hull, and the arc
//!   between them is replaced by the new point.
//!
//! Why this design
//! - The case analysis (`classify.rs`) is a pure function of two angles and
//!   can be tested without any tree.
//! - The walk (`search.rs`) only reads an immutable tree snapshot; the
//!   updater (`update.rs`) owns the hull and rebuilds the tree per insertion.
//!   That costs O(n) per step (O(n² log n) overall) instead of the O(log n)
//!   of an incrementally rebalanced tree, and keeps the tree code trivial.
//! - Every insertion returns an `InsertionStep` record (tree, both paths,
//!   deleted vertices, new hull) for callers that want to inspect or draw it.
//!
//! References
//! - F. P. Preparata, "An optimal real-time algorithm for planar convex
//!   hulls", CACM 22(7), 1979.
//! - F. P. Preparata, M. I. Shamos, "Computational Geometry", §3.3.6.

mod classify;
mod search;
mod types;
mod update;

pub use classify::{classify_angles, classify_vertex, heading, Chain, Heading, VertexClass};
pub use search::supporting_path;
pub use types::{
    DuplicatePolicy, HullCfg, HullError, HullTrace, InsertionStep, SupportingPath, Tangent,
};
pub use update::{
    prepare_points, preparata_hull, preparata_hull_with, preparata_trace, seed_triangle,
    IncrementalHull,
};

#[cfg(test)]
mod tests;
