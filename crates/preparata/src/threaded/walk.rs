//! Thread-guided navigation and structural queries.

use super::types::{Link, NodeId, ThreadedTree};

impl<T> ThreadedTree<T> {
    /// In-order successor. A right thread answers directly; otherwise it is
    /// the leftmost node of the right subtree. `None` past the end of a
    /// non-circular tree.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes[id.0].right {
            Link::Thread(t) => Some(t),
            Link::Unset => None,
            Link::Child(c) => Some(self.leftmost(c)),
        }
    }

    /// In-order predecessor (mirror of [`Self::successor`]).
    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        match self.nodes[id.0].left {
            Link::Thread(t) => Some(t),
            Link::Unset => None,
            Link::Child(c) => Some(self.rightmost(c)),
        }
    }

    fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Link::Child(c) = self.nodes[id.0].left {
            id = c;
        }
        id
    }

    fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Link::Child(c) = self.nodes[id.0].right {
            id = c;
        }
        id
    }

    /// Number of levels on the longest root-to-leaf chain of child links.
    pub fn height(&self) -> usize {
        fn levels<T>(t: &ThreadedTree<T>, id: NodeId) -> usize {
            let node = &t.nodes[id.0];
            let l = node.left.child().map_or(0, |c| levels(t, c));
            let r = node.right.child().map_or(0, |c| levels(t, c));
            1 + l.max(r)
        }
        levels(self, self.root)
    }

    /// Node ids in sequence order, walked through successor threads from
    /// `first()`. Yields exactly `len()` ids, also for circular trees.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder {
            tree: self,
            next: Some(self.first),
            remaining: self.nodes.len(),
        }
    }
}

/// Iterator returned by [`ThreadedTree::in_order`].
pub struct InOrder<'a, T> {
    tree: &'a ThreadedTree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<T> Iterator for InOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.next?;
        self.remaining -= 1;
        self.next = self.tree.successor(id);
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Same shape over child links, equal payloads and positions, and threads
/// that land on equal nodes. Arena layout is irrelevant.
impl<T: PartialEq> PartialEq for ThreadedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: PartialEq>(
            a: &ThreadedTree<T>,
            x: NodeId,
            b: &ThreadedTree<T>,
            y: NodeId,
        ) -> bool {
            let (nx, ny) = (&a.nodes[x.0], &b.nodes[y.0]);
            if nx.data != ny.data || nx.pos != ny.pos {
                return false;
            }
            let side = |lx: Link, ly: Link| match (lx, ly) {
                (Link::Child(cx), Link::Child(cy)) => same(a, cx, b, cy),
                (Link::Thread(tx), Link::Thread(ty)) => {
                    let (tx, ty) = (&a.nodes[tx.0], &b.nodes[ty.0]);
                    tx.pos == ty.pos && tx.data == ty.data
                }
                (Link::Unset, Link::Unset) => true,
                _ => false,
            };
            side(nx.left, ny.left) && side(nx.right, ny.right)
        }
        self.circular == other.circular
            && self.nodes.len() == other.nodes.len()
            && same(self, self.root, other, other.root)
    }
}
