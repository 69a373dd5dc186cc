//! Search node structures.
//!
//! Nodes live in a [`SearchTree`](super::SearchTree) arena and refer to each
//! other by [`NodeId`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ParticipantId;
use crate::queue::BattleQueue;

/// Index into the search tree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// Child list; a position never has more than two moves.
pub type Children = SmallVec<[NodeId; 2]>;

/// A position in the game tree.
#[derive(Clone, Debug)]
pub struct SearchNode<Q> {
    /// The position. Released once the score is known.
    queue: Option<Q>,

    /// Who is about to act here.
    actor: Option<ParticipantId>,

    /// Score for `actor`; absent until computed.
    score: Option<i64>,

    /// Child positions; absent until expanded.
    children: Option<Children>,
}

impl<Q: BattleQueue> SearchNode<Q> {
    /// Create an unexpanded, unscored node owning `queue`.
    pub fn new(queue: Q) -> Self {
        Self {
            actor: queue.peek(),
            queue: Some(queue),
            score: None,
            children: None,
        }
    }

    /// Position at this node, until it is resolved.
    #[must_use]
    pub fn queue(&self) -> Option<&Q> {
        self.queue.as_ref()
    }

    /// Who was about to act when the node was created.
    #[must_use]
    pub fn actor(&self) -> Option<ParticipantId> {
        self.actor
    }

    /// Score from the actor's side, once resolved.
    #[must_use]
    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Child nodes, once expanded.
    #[must_use]
    pub fn children(&self) -> Option<&Children> {
        self.children.as_ref()
    }

    /// Check if children have been allocated.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.children.is_some()
    }

    /// Mark the node expanded with `children`.
    pub fn set_children(&mut self, children: Children) {
        self.children = Some(children);
    }

    /// Record the score and drop the position.
    pub fn resolve(&mut self, score: i64) {
        self.score = Some(score);
        self.queue = None;
    }
}
