//! Local angular case analysis at one hull vertex.
//!
//! Angles are measured counter-clockwise from the ray `vertex → q` to the
//! rays towards the vertex's two hull neighbours, in `[0, 2π)`. With
//! `lo <= hi` the two neighbour angles:
//!
//! | class            | condition                                  |
//! |------------------|--------------------------------------------|
//! | convex           | `0 < lo <= π <= hi < 2π` and `hi - lo < π` |
//! | reflex           | `0 < lo <= π <= hi < 2π` and `hi - lo > π` |
//! | left-supporting  | `0 <= lo < hi < π`                         |
//! | right-supporting | `π < lo < hi <= 2π` after `lo == 0 → 2π`   |
//!
//! The rows are tried top to bottom. A neighbour exactly on the query ray
//! (`0`) or exactly opposite (`π`) therefore never makes a vertex reflex:
//! `0` routes to a supporting case, `π` to convex.
//!
//! `classify_angles` evaluates the table on angles. `classify_vertex`, used
//! by the search, evaluates the same rows from exact `orient2d` signs, so
//! nearly collinear neighbours cannot fall between two rows.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::geom2::{orient2d, Point2};

use super::types::Tangent;

/// Configuration of a hull vertex as seen from the query point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexClass {
    /// Neighbours straddle the query line and the vertex faces `q`: it is
    /// strictly between the two tangents and will be deleted.
    Convex,
    /// Neighbours straddle the query line and the vertex faces away from `q`.
    Reflex,
    /// Both neighbours left of the ray towards `q`: this is the left tangent.
    LeftSupporting,
    /// Both neighbours right of the ray towards `q`: this is the right tangent.
    RightSupporting,
}

/// Classify a vertex from its two neighbour angles (order irrelevant).
///
/// `None` if no row applies, which for a strictly convex hull only happens
/// when both neighbours lie on the query line.
pub fn classify_angles(a1: f64, a2: f64) -> Option<VertexClass> {
    let (lo, hi) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };

    let straddles = 0.0 < lo && lo <= PI && PI <= hi && hi < TAU;
    if straddles && hi - lo < PI {
        return Some(VertexClass::Convex);
    }
    if straddles && hi - lo > PI {
        return Some(VertexClass::Reflex);
    }
    if 0.0 <= lo && lo < hi && hi < PI {
        return Some(VertexClass::LeftSupporting);
    }
    // A neighbour on the query ray is read as a full turn here.
    let (lo, hi) = if lo == 0.0 { (hi, TAU) } else { (lo, hi) };
    if PI < lo && lo < hi && hi <= TAU {
        return Some(VertexClass::RightSupporting);
    }
    None
}

/// Where the angle of a neighbour falls, seen from the vertex and measured
/// from the ray towards `q`. Variants are in angle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Sector {
    /// Exactly `0`.
    OnRay,
    /// `(0, π)`.
    Left,
    /// Exactly `π`.
    Opposite,
    /// `(π, 2π)`.
    Right,
}

fn sector(vertex: Point2, q: Point2, x: Point2) -> Sector {
    let o = orient2d(vertex, q, x);
    if o > 0.0 {
        return Sector::Left;
    }
    if o < 0.0 {
        return Sector::Right;
    }
    // Collinear: same ray iff both offsets have the same component signs.
    // The sign of a rounded difference is exact.
    let same = |a: f64, b: f64| a.partial_cmp(&0.0) == b.partial_cmp(&0.0);
    if same(x.x - vertex.x, q.x - vertex.x) && same(x.y - vertex.y, q.y - vertex.y) {
        Sector::OnRay
    } else {
        Sector::Opposite
    }
}

/// Classify `vertex` with neighbours `pred`/`succ` against query point `q`.
///
/// Same rows as [`classify_angles`], decided by exact sign tests only.
pub fn classify_vertex(vertex: Point2, pred: Point2, succ: Point2, q: Point2) -> Option<VertexClass> {
    use Sector::*;

    let (sp, ss) = (sector(vertex, q, pred), sector(vertex, q, succ));
    let ((lo, xlo), (hi, xhi)) = match sp.cmp(&ss) {
        Ordering::Greater => ((ss, succ), (sp, pred)),
        _ => ((sp, pred), (ss, succ)),
    };
    // Turn from the lower-angle ray to the higher one; positive below a half turn.
    let turn = || orient2d(vertex, xlo, xhi);
    match (lo, hi) {
        (Left, Right) => {
            let t = turn();
            if t > 0.0 {
                Some(VertexClass::Convex)
            } else if t < 0.0 {
                Some(VertexClass::Reflex)
            } else {
                None
            }
        }
        (Left | Opposite, Opposite | Right) => Some(VertexClass::Convex),
        (OnRay, Left) => Some(VertexClass::LeftSupporting),
        (OnRay, Right) => Some(VertexClass::RightSupporting),
        (Left, Left) if turn() != 0.0 => Some(VertexClass::LeftSupporting),
        (Right, Right) if turn() != 0.0 => Some(VertexClass::RightSupporting),
        _ => None,
    }
}

/// Where a vertex sits relative to the line from the anchor (first hull
/// vertex) to the query point.
///
/// The anchor is the lexicographically smallest point and the query point
/// the newest one, so both survive the insertion and the line between them
/// splits the kept vertices: those before the right tangent lie above it,
/// those after the left tangent below it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chain {
    Anchor,
    Upper,
    Lower,
}

/// Next move of the tree walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// The vertex is the tangent; the walk stops here.
    Stay,
    /// Towards earlier hull positions (left child or predecessor thread).
    Left,
    /// Towards later hull positions (right child or successor thread).
    Right,
}

/// Decide the move for a classified vertex.
///
/// The anchor never heads left: it is position 0 for the right tangent and
/// stands in for position `n` (after the wrap) for the left tangent.
pub fn heading(class: VertexClass, tangent: Tangent, chain: Chain) -> Heading {
    let h = match (class, tangent) {
        (VertexClass::Convex, Tangent::Left) => Heading::Right,
        (VertexClass::Convex, Tangent::Right) => Heading::Left,
        (VertexClass::Reflex, _) => match chain {
            Chain::Lower => Heading::Left,
            Chain::Upper | Chain::Anchor => Heading::Right,
        },
        (VertexClass::LeftSupporting, Tangent::Left) => Heading::Stay,
        (VertexClass::LeftSupporting, Tangent::Right) => Heading::Left,
        (VertexClass::RightSupporting, Tangent::Right) => Heading::Stay,
        (VertexClass::RightSupporting, Tangent::Left) => Heading::Right,
    };
    match (chain, h) {
        (Chain::Anchor, Heading::Left) => Heading::Right,
        _ => h,
    }
}
