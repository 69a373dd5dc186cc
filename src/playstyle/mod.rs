//! Playstyles: how a participant picks its action each turn.
//!
//! - [`Playstyle::Manual`]: whatever the caller passes in
//! - [`Playstyle::Random`]: uniform over affordable actions, drawn from the
//!   session's deterministic RNG
//! - [`Playstyle::Minimax`]: exhaustive search with the given evaluator

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, GameRng};
use crate::error::DuelResult;
use crate::queue::BattleQueue;
use crate::search::{Minimax, ScoreStrategy, SearchConfig};

/// Action selection policy for one participant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Playstyle {
    /// Driven by caller input.
    #[default]
    Manual,
    /// Random affordable action.
    Random,
    /// Optimal action by exhaustive search.
    Minimax(ScoreStrategy),
}

impl Playstyle {
    /// Does this playstyle need caller input?
    #[must_use]
    pub fn is_manual(&self) -> bool {
        matches!(self, Playstyle::Manual)
    }

    /// Pick an action for whoever is about to act in `queue`.
    ///
    /// `None` means no choice could be made: a manual playstyle without
    /// input, or nothing affordable. A manual choice is returned as given;
    /// affordability is checked when it is played.
    pub fn select_action<Q>(
        &self,
        queue: &Q,
        input: Option<ActionKind>,
        rng: &mut GameRng,
        search: &SearchConfig,
    ) -> DuelResult<Option<ActionKind>>
    where
        Q: BattleQueue,
    {
        match self {
            Playstyle::Manual => Ok(input),
            Playstyle::Random => Ok(rng.choose(&queue.available_actions()).copied()),
            Playstyle::Minimax(strategy) => {
                let config = search.clone().with_strategy(*strategy);
                Minimax::new(config).best_action(queue)
            }
        }
    }
}

impl std::fmt::Display for Playstyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Playstyle::Manual => f.write_str("Manual"),
            Playstyle::Random => f.write_str("Random"),
            Playstyle::Minimax(strategy) => write!(f, "Minimax ({strategy})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterClass, Participant, ParticipantId};
    use crate::queue::TurnQueue;

    fn queue(resource: i64) -> TurnQueue {
        let mut queue = TurnQueue::new(
            Participant::new("r", CharacterClass::Rogue).with_resource(resource),
            Participant::new("m", CharacterClass::Mage).with_health(3),
        );
        queue.add(ParticipantId::FIRST);
        queue.add(ParticipantId::SECOND);
        queue
    }

    #[test]
    fn test_manual_echoes_input() {
        let mut rng = GameRng::new(1);
        let config = SearchConfig::default();
        let queue = queue(100);

        let style = Playstyle::Manual;
        assert!(style.is_manual());
        assert_eq!(
            style.select_action(&queue, Some(ActionKind::Special), &mut rng, &config),
            Ok(Some(ActionKind::Special))
        );
        assert_eq!(style.select_action(&queue, None, &mut rng, &config), Ok(None));
    }

    #[test]
    fn test_random_only_picks_affordable() {
        let mut rng = GameRng::new(7);
        let config = SearchConfig::default();
        let queue = queue(5);

        for _ in 0..20 {
            assert_eq!(
                Playstyle::Random.select_action(&queue, None, &mut rng, &config),
                Ok(Some(ActionKind::Attack))
            );
        }
    }

    #[test]
    fn test_random_is_seeded() {
        let config = SearchConfig::default();
        let queue = queue(100);
        let mut rng1 = GameRng::new(3);
        let mut rng2 = GameRng::new(3);

        for _ in 0..20 {
            assert_eq!(
                Playstyle::Random.select_action(&queue, None, &mut rng1, &config),
                Playstyle::Random.select_action(&queue, None, &mut rng2, &config)
            );
        }
    }

    #[test]
    fn test_minimax_ignores_input() {
        let mut rng = GameRng::new(1);
        let config = SearchConfig::default();
        let queue = queue(100);

        for strategy in [ScoreStrategy::Recursive, ScoreStrategy::Iterative] {
            let style = Playstyle::Minimax(strategy);
            assert!(!style.is_manual());
            assert_eq!(
                style.select_action(&queue, Some(ActionKind::Special), &mut rng, &config),
                Ok(Some(ActionKind::Attack))
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Playstyle::Random.to_string(), "Random");
        assert_eq!(
            Playstyle::Minimax(ScoreStrategy::Iterative).to_string(),
            "Minimax (iterative)"
        );
    }
}
