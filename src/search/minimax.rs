//! Optimal-move selection.

use std::time::Instant;

use tracing::debug;

use super::config::{ScoreStrategy, SearchConfig};
use super::score::{advance, orient};
use super::stats::SearchStats;
use super::{iterative, recursive};
use crate::core::ActionKind;
use crate::error::DuelResult;
use crate::queue::BattleQueue;

/// Exhaustive minimax over a duel.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{ActionKind, CharacterClass, Participant, ParticipantId};
/// use rust_duel::queue::{BattleQueue, TurnQueue};
/// use rust_duel::search::{Minimax, SearchConfig};
///
/// let mut queue = TurnQueue::new(
///     Participant::new("r", CharacterClass::Rogue).with_health(40),
///     Participant::new("m", CharacterClass::Mage).with_health(3),
/// );
/// queue.add(ParticipantId::FIRST);
/// queue.add(ParticipantId::SECOND);
///
/// let mut minimax = Minimax::new(SearchConfig::default());
/// assert_eq!(minimax.score(&queue).unwrap(), 40);
/// assert_eq!(minimax.best_action(&queue).unwrap(), Some(ActionKind::Attack));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
    stats: SearchStats,
}

impl Minimax {
    /// Create a new search with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::new(),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best score the participant about to act can guarantee.
    pub fn score<Q>(&mut self, queue: &Q) -> DuelResult<i64>
    where
        Q: BattleQueue,
    {
        let start = Instant::now();
        self.stats.reset();

        let score = self.evaluate(queue)?;

        self.finish(start);
        debug!(
            strategy = %self.config.strategy,
            score,
            nodes = self.stats.total_nodes(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "scored position"
        );
        Ok(score)
    }

    /// The action maximizing the current participant's guaranteed score.
    ///
    /// Ties go to the earlier action, so `Attack` beats `Special` on equal
    /// value. `None` once the duel is over.
    pub fn best_action<Q>(&mut self, queue: &Q) -> DuelResult<Option<ActionKind>>
    where
        Q: BattleQueue,
    {
        let start = Instant::now();
        self.stats.reset();

        if queue.is_over() {
            return Ok(None);
        }

        let mut best: Option<(ActionKind, i64)> = None;
        for action in queue.available_actions() {
            let (child, actor) = advance(queue, action)?;
            let value = orient(self.evaluate(&child)?, child.peek(), actor);

            if best.map_or(true, |(_, b)| value > b) {
                best = Some((action, value));
            }
        }

        self.finish(start);
        debug!(
            strategy = %self.config.strategy,
            action = ?best.map(|(action, _)| action),
            value = ?best.map(|(_, value)| value),
            nodes = self.stats.total_nodes(),
            time_us = self.stats.time_us,
            "selected action"
        );
        Ok(best.map(|(action, _)| action))
    }

    fn evaluate<Q>(&mut self, queue: &Q) -> DuelResult<i64>
    where
        Q: BattleQueue,
    {
        match self.config.strategy {
            ScoreStrategy::Recursive => recursive::score_with_stats(queue, &mut self.stats),
            ScoreStrategy::Iterative => {
                iterative::score_with_stats(queue, self.config.initial_capacity, &mut self.stats)
            }
        }
    }

    fn finish(&mut self, start: Instant) {
        self.stats.time_us = start.elapsed().as_micros() as u64;
    }
}
