//! Tangent search: walk the threaded tree from the root, one local case
//! analysis per node, until a node selects itself.

use crate::geom2::{orient2d, Point2};
use crate::threaded::{NodeId, ThreadedTree};

use super::classify::{classify_vertex, heading, Chain, Heading};
use super::types::{HullError, SupportingPath, Tangent};

/// Path from the root of `tree` to the `tangent` supporting vertex as seen
/// from `q`.
///
/// `tree` must be the circular tree over a clockwise hull that starts at its
/// lexicographically smallest vertex, and `q` must lie outside the hull. The
/// walk descends by child links; a thread is only taken to wrap from the
/// last vertex back to the first. The path therefore holds at most
/// `tree.height() + 1` nodes.
pub fn supporting_path(
    tree: &ThreadedTree<Point2>,
    q: Point2,
    tangent: Tangent,
) -> Result<SupportingPath, HullError> {
    if !tree.is_circular() || tree.len() < 3 {
        return Err(HullError::NotCircular);
    }
    if tree.nodes().iter().any(|n| n.data == q) {
        return Err(HullError::DegenerateQuery { point: q });
    }

    let limit = tree.len() + 1;
    let mut nodes = Vec::new();
    let mut points = Vec::new();
    let mut cur = tree.root();
    loop {
        nodes.push(cur);
        points.push(*tree.data(cur));
        let next = next_node(tree, cur, q, tangent)?;
        if next == cur {
            break;
        }
        if nodes.len() > limit {
            return Err(HullError::SearchDiverged { steps: nodes.len() });
        }
        cur = next;
    }
    Ok(SupportingPath {
        tangent,
        nodes,
        points,
    })
}

/// One step of the walk; returns `id` itself when `id` is the tangent.
fn next_node(
    tree: &ThreadedTree<Point2>,
    id: NodeId,
    q: Point2,
    tangent: Tangent,
) -> Result<NodeId, HullError> {
    let node = tree.node(id);
    let (pred, succ) = match (tree.predecessor(id), tree.successor(id)) {
        (Some(p), Some(s)) => (*tree.data(p), *tree.data(s)),
        _ => return Err(HullError::NotCircular),
    };
    let class = classify_vertex(node.data, pred, succ, q)
        .ok_or(HullError::DegenerateQuery { point: q })?;
    let chain = if id == tree.first() {
        Chain::Anchor
    } else if orient2d(*tree.data(tree.first()), q, node.data) > 0.0 {
        Chain::Upper
    } else {
        Chain::Lower
    };
    let h = heading(class, tangent, chain);
    tracing::trace!(pos = node.pos, ?class, ?chain, heading = ?h, ?tangent, "visit");
    match h {
        Heading::Stay => Ok(id),
        Heading::Left => node.left.target().ok_or(HullError::NotCircular),
        Heading::Right => node.right.target().ok_or(HullError::NotCircular),
    }
}
