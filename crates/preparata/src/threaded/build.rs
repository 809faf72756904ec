//! Tree construction: balanced from a sequence, or hand-shaped then threaded.

use super::types::{Link, Node, NodeId, ThreadedTree, TreeError};

impl<T> ThreadedTree<T> {
    /// Build a balanced threaded tree over `items`.
    ///
    /// The middle element `(lo + hi) / 2` of every inclusive range becomes the
    /// subtree root, so the tree has `⌈log2(n + 1)⌉` levels. Node ids equal
    /// sequence positions. Missing left/right children become threads to the
    /// previous/next element; with `circular` the ends wrap around, otherwise
    /// they stay `Link::Unset`.
    pub fn from_sequence(items: Vec<T>, circular: bool) -> Result<Self, TreeError> {
        let n = items.len();
        if n == 0 {
            return Err(TreeError::Empty);
        }
        let mut nodes: Vec<Node<T>> = items
            .into_iter()
            .enumerate()
            .map(|(pos, data)| Node {
                data,
                pos,
                left: Link::Unset,
                right: Link::Unset,
            })
            .collect();
        let root = split(&mut nodes, 0, n).ok_or(TreeError::Empty)?;
        let order: Vec<NodeId> = (0..n).map(NodeId).collect();
        thread_in_order(&mut nodes, &order, circular);
        Ok(Self {
            nodes,
            root,
            first: NodeId(0),
            last: NodeId(n - 1),
            circular,
        })
    }
}

/// Link the half-open range `[lo, hi)` below its middle element.
fn split<T>(nodes: &mut [Node<T>], lo: usize, hi: usize) -> Option<NodeId> {
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - 1 - lo) / 2;
    if let Some(l) = split(nodes, lo, mid) {
        nodes[mid].left = Link::Child(l);
    }
    if let Some(r) = split(nodes, mid + 1, hi) {
        nodes[mid].right = Link::Child(r);
    }
    Some(NodeId(mid))
}

/// Fill every unset side with a thread to the in-order neighbour and assign
/// positions. `order` lists the node ids in in-order.
fn thread_in_order<T>(nodes: &mut [Node<T>], order: &[NodeId], circular: bool) {
    let n = order.len();
    for (k, id) in order.iter().enumerate() {
        let prev = if k > 0 {
            Some(order[k - 1])
        } else if circular {
            Some(order[n - 1])
        } else {
            None
        };
        let next = if k + 1 < n {
            Some(order[k + 1])
        } else if circular {
            Some(order[0])
        } else {
            None
        };
        let node = &mut nodes[id.0];
        node.pos = k;
        if node.left.child().is_none() {
            node.left = prev.map_or(Link::Unset, Link::Thread);
        }
        if node.right.child().is_none() {
            node.right = next.map_or(Link::Unset, Link::Thread);
        }
    }
}

/// Hand-assembled binary tree, threaded on [`ShapeBuilder::finish`].
///
/// ```
/// use preparata::threaded::ShapeBuilder;
///
/// let mut b = ShapeBuilder::new();
/// let root = b.add('b');
/// let a = b.add('a');
/// b.set_left(root, a).unwrap();
/// let tree = b.finish(root, true).unwrap();
/// let seq: Vec<char> = tree.in_order().map(|id| *tree.data(id)).collect();
/// assert_eq!(seq, vec!['a', 'b']);
/// ```
#[derive(Clone, Debug)]
pub struct ShapeBuilder<T> {
    data: Vec<T>,
    left: Vec<Option<NodeId>>,
    right: Vec<Option<NodeId>>,
    parent: Vec<Option<NodeId>>,
}

impl<T> Default for ShapeBuilder<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            left: Vec::new(),
            right: Vec::new(),
            parent: Vec::new(),
        }
    }
}

impl<T> ShapeBuilder<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node.
    pub fn add(&mut self, data: T) -> NodeId {
        self.data.push(data);
        self.left.push(None);
        self.right.push(None);
        self.parent.push(None);
        NodeId(self.data.len() - 1)
    }

    pub fn set_left(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(parent, child, true)
    }

    pub fn set_right(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.attach(parent, child, false)
    }

    fn attach(&mut self, parent: NodeId, child: NodeId, left: bool) -> Result<(), TreeError> {
        let n = self.data.len();
        for id in [parent, child] {
            if id.0 >= n {
                return Err(TreeError::UnknownNode { node: id });
            }
        }
        if parent == child || self.parent[child.0].is_some() {
            return Err(TreeError::DuplicateParent { node: child });
        }
        let slot = if left {
            &mut self.left[parent.0]
        } else {
            &mut self.right[parent.0]
        };
        if slot.is_some() {
            return Err(TreeError::SlotTaken { parent });
        }
        *slot = Some(child);
        self.parent[child.0] = Some(parent);
        Ok(())
    }

    /// Thread the shape below `root` and hand it over as a tree.
    ///
    /// Every added node must be reachable from `root`.
    pub fn finish(self, root: NodeId, circular: bool) -> Result<ThreadedTree<T>, TreeError> {
        let n = self.data.len();
        if n == 0 {
            return Err(TreeError::Empty);
        }
        if root.0 >= n {
            return Err(TreeError::UnknownNode { node: root });
        }
        if self.parent[root.0].is_some() {
            return Err(TreeError::RootHasParent { root });
        }

        // Iterative in-order over the child links.
        let mut order: Vec<NodeId> = Vec::with_capacity(n);
        let mut stack: Vec<NodeId> = Vec::new();
        let mut cur = Some(root);
        while cur.is_some() || !stack.is_empty() {
            while let Some(id) = cur {
                stack.push(id);
                cur = self.left[id.0];
            }
            if let Some(id) = stack.pop() {
                order.push(id);
                cur = self.right[id.0];
            }
        }
        if order.len() != n {
            let mut seen = vec![false; n];
            for id in &order {
                seen[id.0] = true;
            }
            let missing = seen.iter().position(|s| !s).unwrap_or(0);
            return Err(TreeError::Unreachable {
                node: NodeId(missing),
            });
        }

        let ShapeBuilder {
            data, left, right, ..
        } = self;
        let mut nodes: Vec<Node<T>> = data
            .into_iter()
            .zip(left.into_iter().zip(right))
            .map(|(data, (l, r))| Node {
                data,
                pos: 0,
                left: l.map_or(Link::Unset, Link::Child),
                right: r.map_or(Link::Unset, Link::Child),
            })
            .collect();
        thread_in_order(&mut nodes, &order, circular);
        Ok(ThreadedTree {
            nodes,
            root,
            first: order[0],
            last: order[n - 1],
            circular,
        })
    }
}
