//! Arena types for the threaded tree.
//!
//! Nodes live in one `Vec` and refer to each other by `NodeId`. A link is
//! either an owned child, a thread (non-owning jump to the in-order
//! neighbour) or unset; structural recursion only follows `Link::Child`.

use std::fmt;

/// Index of a node inside its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// One side of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Link {
    /// Real child owned by this node.
    Child(NodeId),
    /// No child on this side: in-order predecessor (left) or successor (right).
    Thread(NodeId),
    /// No child and no neighbour (ends of a non-circular sequence).
    Unset,
}

impl Link {
    /// Node reached through this link, child or thread.
    #[inline]
    pub fn target(self) -> Option<NodeId> {
        match self {
            Link::Child(id) | Link::Thread(id) => Some(id),
            Link::Unset => None,
        }
    }

    #[inline]
    pub fn child(self) -> Option<NodeId> {
        match self {
            Link::Child(id) => Some(id),
            _ => None,
        }
    }

    #[inline]
    pub fn is_thread(self) -> bool {
        matches!(self, Link::Thread(_))
    }
}

/// Tree node: payload, position in the source sequence, and both links.
#[derive(Clone, Debug)]
pub struct Node<T> {
    pub data: T,
    pub pos: usize,
    pub left: Link,
    pub right: Link,
}

/// Balanced (or hand-shaped) binary tree whose missing child links are
/// threads to the in-order neighbours.
///
/// Invariants:
/// - `nodes` is non-empty; `root`, `first`, `last` index into it.
/// - In-order over child links visits positions `0..len()` once each.
/// - A node with `left == Unset` is `first` of a non-circular tree (same for
///   `right` and `last`).
#[derive(Clone, Debug)]
pub struct ThreadedTree<T> {
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: NodeId,
    pub(crate) first: NodeId,
    pub(crate) last: NodeId,
    pub(crate) circular: bool,
}

impl<T> ThreadedTree<T> {
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node holding the first element of the sequence.
    #[inline]
    pub fn first(&self) -> NodeId {
        self.first
    }

    /// Node holding the last element of the sequence.
    #[inline]
    pub fn last(&self) -> NodeId {
        self.last
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.0)
    }

    #[inline]
    pub fn data(&self, id: NodeId) -> &T {
        &self.nodes[id.0].data
    }

    #[inline]
    pub fn nodes(&self) -> &[Node<T>] {
        &self.nodes
    }
}

/// Errors from tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The source sequence (or builder) had no elements.
    Empty,
    /// A node id was not issued by the builder.
    UnknownNode { node: NodeId },
    /// The parent already has a child on the requested side.
    SlotTaken { parent: NodeId },
    /// The child is already attached somewhere else.
    DuplicateParent { node: NodeId },
    /// The designated root is attached below another node.
    RootHasParent { root: NodeId },
    /// A node cannot be reached from the root.
    Unreachable { node: NodeId },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::Empty => write!(f, "cannot build a threaded tree from an empty sequence"),
            TreeError::UnknownNode { node } => write!(f, "node {} does not exist", node.0),
            TreeError::SlotTaken { parent } => {
                write!(f, "node {} already has a child on that side", parent.0)
            }
            TreeError::DuplicateParent { node } => {
                write!(f, "node {} is already attached to a parent", node.0)
            }
            TreeError::RootHasParent { root } => {
                write!(f, "root {} is attached below another node", root.0)
            }
            TreeError::Unreachable { node } => {
                write!(f, "node {} is not reachable from the root", node.0)
            }
        }
    }
}

impl std::error::Error for TreeError {}
