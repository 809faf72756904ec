//! Configuration, error type and per-step records of the incremental hull.

use std::fmt;

use crate::geom2::Point2;
use crate::threaded::{NodeId, ThreadedTree, TreeError};

/// Which supporting vertex a search looks for, seen from the query point.
///
/// The right tangent precedes the query point in the clockwise hull, the
/// left tangent follows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tangent {
    Left,
    Right,
}

/// What to do with coordinate-equal input points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep one copy, drop the rest.
    #[default]
    Merge,
    /// Fail with [`HullError::DuplicatePoint`].
    Reject,
}

/// Hull driver configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct HullCfg {
    pub duplicates: DuplicatePolicy,
}

/// Errors surfaced by the hull driver and the tangent search.
///
/// None of them leaves a usable partial hull behind.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer than three distinct points.
    InsufficientPoints { distinct: usize },
    /// Every point lies on one line.
    AllCollinear,
    /// Repeated point under [`DuplicatePolicy::Reject`].
    DuplicatePoint { point: Point2 },
    /// NaN or infinite coordinate; `index` is the position in the input
    /// slice (or in the seed array).
    NonFinite { index: usize },
    /// NaN or infinite coordinate handed to [`super::IncrementalHull::insert`].
    NonFiniteInsert { point: Point2 },
    /// The query point sits on a hull vertex or on the line through both
    /// neighbours of a vertex; no tangent is defined.
    DegenerateQuery { point: Point2 },
    /// The point is inside or on the hull, or precedes its first vertex in
    /// lexicographic order, so it cannot be inserted.
    NotOutside { point: Point2 },
    /// The search tree is not circular (or too small to hold a polygon).
    NotCircular,
    /// The tangent walk exceeded its step bound.
    SearchDiverged { steps: usize },
    Tree(TreeError),
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InsufficientPoints { distinct } => {
                write!(f, "need at least 3 distinct points, got {distinct}")
            }
            HullError::AllCollinear => write!(f, "all points are collinear"),
            HullError::DuplicatePoint { point } => {
                write!(f, "duplicate point ({}, {})", point.x, point.y)
            }
            HullError::NonFinite { index } => write!(f, "point {index} has a non-finite coordinate"),
            HullError::NonFiniteInsert { point } => write!(
                f,
                "cannot insert point ({}, {}) with a non-finite coordinate",
                point.x, point.y
            ),
            HullError::DegenerateQuery { point } => write!(
                f,
                "no supporting vertex for query point ({}, {})",
                point.x, point.y
            ),
            HullError::NotOutside { point } => write!(
                f,
                "point ({}, {}) is not strictly outside the hull in insertion order",
                point.x, point.y
            ),
            HullError::NotCircular => write!(f, "tangent search needs a circular tree of at least 3 vertices"),
            HullError::SearchDiverged { steps } => {
                write!(f, "tangent search did not settle after {steps} steps")
            }
            HullError::Tree(e) => write!(f, "tree construction failed: {e}"),
        }
    }
}

impl std::error::Error for HullError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HullError::Tree(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TreeError> for HullError {
    fn from(e: TreeError) -> Self {
        HullError::Tree(e)
    }
}

/// Root-to-tangent chain of one search.
///
/// Only built by [`super::supporting_path`]; never empty, since the walk
/// always visits the root.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportingPath {
    pub(crate) tangent: Tangent,
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) points: Vec<Point2>,
}

impl SupportingPath {
    #[inline]
    pub fn tangent(&self) -> Tangent {
        self.tangent
    }

    /// Visited tree nodes, root first.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Visited hull points, root first.
    #[inline]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The supporting vertex (last visited point).
    #[inline]
    pub fn point(&self) -> Point2 {
        self.points[self.points.len() - 1]
    }

    /// Tree node of the supporting vertex.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Everything one insertion produced.
#[derive(Clone, Debug)]
pub struct InsertionStep {
    /// 1-based insertion count since the seed triangle.
    pub step: usize,
    pub point: Point2,
    /// Tree over the hull before the insertion.
    pub tree: ThreadedTree<Point2>,
    pub left: SupportingPath,
    pub right: SupportingPath,
    /// Vertices strictly between the right and left tangents, clockwise.
    pub deleted: Vec<Point2>,
    /// Hull after the insertion.
    pub hull: Vec<Point2>,
}

/// Seed triangle, every insertion, and the final hull.
#[derive(Clone, Debug)]
pub struct HullTrace {
    pub seed: Vec<Point2>,
    pub steps: Vec<InsertionStep>,
    pub hull: Vec<Point2>,
}
