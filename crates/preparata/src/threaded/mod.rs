//! Threaded binary search tree over an ordered (optionally circular) sequence.
//!
//! Purpose
//! - Give the tangent search a balanced tree over the hull vertices with
//!   neighbour access through threads instead of a separate linked list.
//!
//! Why this design
//! - Arena + `NodeId` links: threads point "backwards" into the tree, so a
//!   reference-based tree would need shared ownership. Indices keep the
//!   ownership a plain `Vec` and make every jump bounds-checked.
//! - The tree is immutable after construction; the hull code rebuilds it.
//!
//! Layout
//! - `types.rs`: `NodeId`, `Link`, `Node`, `ThreadedTree`, `TreeError`.
//! - `build.rs`: balanced construction and `ShapeBuilder`.
//! - `walk.rs`: predecessor/successor, in-order iterator, height, equality.

mod build;
mod types;
mod walk;

pub use build::ShapeBuilder;
pub use types::{Link, Node, NodeId, ThreadedTree, TreeError};
pub use walk::InOrder;
