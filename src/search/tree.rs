//! Arena-based search tree.
//!
//! Uses a flat `Vec<SearchNode>` with index-based references, so expanding
//! a node never fights the borrow checker over parent/child pointers.
//! Nodes are never freed individually; the arena is dropped as a whole.

use super::node::{NodeId, SearchNode};
use crate::queue::BattleQueue;

/// Arena of search nodes rooted at node 0.
#[derive(Clone, Debug)]
pub struct SearchTree<Q> {
    /// All nodes in the tree.
    nodes: Vec<SearchNode<Q>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<Q: BattleQueue> SearchTree<Q> {
    /// Create a tree whose root owns `queue`.
    pub fn new(queue: Q) -> Self {
        Self::with_capacity(queue, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(queue: Q, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(SearchNode::new(queue));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<Q> {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode<Q> {
        &mut self.nodes[id.0 as usize]
    }

    /// Allocate a new node owning `queue`, returning its ID.
    pub fn alloc(&mut self, queue: Q) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new(queue));
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; the root exists from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes still holding their position.
    #[must_use]
    pub fn live_positions(&self) -> usize {
        self.nodes.iter().filter(|n| n.queue().is_some()).count()
    }
}
