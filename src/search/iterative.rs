//! Explicit-stack evaluator.
//!
//! Each node is visited twice. The first visit expands it: children are
//! allocated in the arena, the node is pushed back, and the children are
//! pushed above it. By the time the node is popped again every child has a
//! score, so the second visit aggregates them exactly like the recursive
//! evaluator does and releases the node's position.
//!
//! Only positions are released. The nodes themselves stay in the arena
//! until the search returns, so memory grows with the size of the whole
//! game tree rather than its depth.

use smallvec::SmallVec;

use super::node::{Children, NodeId};
use super::score::{advance, orient, terminal_score};
use super::stats::SearchStats;
use super::tree::SearchTree;
use crate::error::{DuelError, DuelResult};
use crate::queue::BattleQueue;

/// Same result as [`score_recursive`](super::score_recursive), without
/// recursion.
pub fn score_iterative<Q>(queue: &Q) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    score_with_stats(queue, 1024, &mut SearchStats::new())
}

pub(crate) fn score_with_stats<Q>(
    queue: &Q,
    capacity: usize,
    stats: &mut SearchStats,
) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    let mut tree = SearchTree::with_capacity(queue.clone_state(), capacity);
    let mut stack: Vec<NodeId> = vec![tree.root()];

    while let Some(id) = stack.pop() {
        stats.record_depth(stack.len() + 1);

        if tree.get(id).is_expanded() {
            let score = aggregate(&tree, id)?;
            tree.get_mut(id).resolve(score);
            continue;
        }

        let node = tree.get(id);
        let position = node.queue().ok_or(DuelError::EmptyQueue)?;

        if let Some(score) = terminal_score(position) {
            stats.terminal_nodes += 1;
            tree.get_mut(id).resolve(score);
            continue;
        }
        stats.nodes_expanded += 1;

        let branches: SmallVec<[Q; 2]> = position
            .available_actions()
            .into_iter()
            .map(|action| advance(position, action).map(|(child, _)| child))
            .collect::<DuelResult<_>>()?;

        let children: Children = branches.into_iter().map(|child| tree.alloc(child)).collect();
        stack.push(id);
        stack.extend(children.iter().copied());
        tree.get_mut(id).set_children(children);
    }

    tree.get(tree.root()).score().ok_or(DuelError::EmptyQueue)
}

/// Best oriented child score of an expanded node.
fn aggregate<Q>(tree: &SearchTree<Q>, id: NodeId) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    let node = tree.get(id);
    let actor = node.actor().ok_or(DuelError::EmptyQueue)?;
    let children = node.children().ok_or(DuelError::EmptyQueue)?;

    let mut best: Option<i64> = None;
    for &child in children {
        let child = tree.get(child);
        let score = child.score().ok_or(DuelError::EmptyQueue)?;
        let value = orient(score, child.actor(), actor);
        best = Some(best.map_or(value, |b| b.max(value)));
    }

    best.ok_or(DuelError::EmptyQueue)
}
