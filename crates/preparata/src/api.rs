//! Curated surface for callers that want one import path (UNSTABLE).
//!
//! Re-exports only; the modules stay the source of truth and names here may
//! change with them.

// Primitives
pub use crate::geom2::{
    contains_point, is_strictly_convex_cw, lex_cmp, orient2d, orientation, polar_angle,
    reference_hull, relative_angle, signed_area, sort_dedup_lex, sort_lex, Orientation, Point2,
};
// Tree
pub use crate::threaded::{Link, Node, NodeId, ShapeBuilder, ThreadedTree, TreeError};
// Hull
pub use crate::hull::{
    classify_angles, classify_vertex, heading, preparata_hull, preparata_hull_with, preparata_trace,
    supporting_path, DuplicatePolicy, HullCfg, HullError, HullTrace, IncrementalHull,
    InsertionStep, SupportingPath, Tangent, VertexClass,
};
