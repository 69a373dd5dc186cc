//! Depth-first evaluator on the call stack.

use super::score::{advance, orient, terminal_score};
use super::stats::SearchStats;
use crate::error::{DuelError, DuelResult};
use crate::queue::BattleQueue;

/// Best score the participant about to act in `queue` can guarantee.
///
/// Explores every affordable action. A child's score is kept when the same
/// participant acts next and negated when the turn passes; the maximum over
/// children wins.
pub fn score_recursive<Q>(queue: &Q) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    score_with_stats(queue, &mut SearchStats::new())
}

pub(crate) fn score_with_stats<Q>(queue: &Q, stats: &mut SearchStats) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    visit(&queue.clone_state(), 1, stats)
}

fn visit<Q>(queue: &Q, depth: usize, stats: &mut SearchStats) -> DuelResult<i64>
where
    Q: BattleQueue,
{
    stats.record_depth(depth);

    if let Some(score) = terminal_score(queue) {
        stats.terminal_nodes += 1;
        return Ok(score);
    }
    stats.nodes_expanded += 1;

    let mut best: Option<i64> = None;
    for action in queue.available_actions() {
        let (child, actor) = advance(queue, action)?;
        let value = orient(visit(&child, depth + 1, stats)?, child.peek(), actor);
        best = Some(best.map_or(value, |b| b.max(value)));
    }

    best.ok_or(DuelError::EmptyQueue)
}
