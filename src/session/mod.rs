//! Battle sessions.
//!
//! A [`BattleSession`] owns one queue, a playstyle per participant, the RNG
//! used by random play, and the history of performed turns. Callers drive
//! it one [`step`](BattleSession::step) at a time, feeding input whenever a
//! manual participant is up, or let it run with
//! [`run_to_end`](BattleSession::run_to_end).
//!
//! ```
//! use rust_duel::core::{CharacterClass, Participant, ParticipantId};
//! use rust_duel::playstyle::Playstyle;
//! use rust_duel::queue::{BattleQueue, TurnQueue};
//! use rust_duel::session::{BattleSession, SessionConfig};
//!
//! let mut queue = TurnQueue::new(
//!     Participant::new("r", CharacterClass::Rogue).with_health(30),
//!     Participant::new("v", CharacterClass::Vampire).with_health(30),
//! );
//! queue.add(ParticipantId::FIRST);
//! queue.add(ParticipantId::SECOND);
//!
//! let mut session = BattleSession::new(
//!     queue,
//!     [Playstyle::Random, Playstyle::Random],
//!     SessionConfig::default().with_seed(7),
//! )
//! .unwrap();
//!
//! let result = session.run_to_end(1_000).unwrap();
//! assert!(result.is_some());
//! assert!(session.is_over());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{ActionKind, GameRng, GameRngState, ParticipantId, TurnRecord};
use crate::error::{DuelError, DuelResult};
use crate::playstyle::Playstyle;
use crate::queue::{BattleQueue, GameResult};
use crate::search::SearchConfig;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for random playstyles.
    pub seed: u64,

    /// Search settings shared by minimax playstyles.
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            search: SearchConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Use a different seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use different search settings.
    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}

/// What a call to [`BattleSession::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A turn was played.
    Performed(TurnRecord),
    /// The participant to act is manual and no input was given.
    AwaitingInput(ParticipantId),
    /// Nothing to do; the battle has ended.
    Finished(GameResult),
}

/// A battle in progress.
#[derive(Clone, Debug)]
pub struct BattleSession<Q> {
    queue: Q,
    playstyles: [Playstyle; 2],
    rng: GameRng,
    config: SessionConfig,
    history: Vec<TurnRecord>,
}

impl<Q: BattleQueue> BattleSession<Q> {
    /// Start a session over a queue that already has its opening entries.
    ///
    /// `playstyles` is indexed by [`ParticipantId`].
    pub fn new(queue: Q, playstyles: [Playstyle; 2], config: SessionConfig) -> DuelResult<Self> {
        if queue.primaries().is_none() {
            return Err(DuelError::NoParticipants);
        }

        Ok(Self {
            queue,
            playstyles,
            rng: GameRng::new(config.seed),
            config,
            history: Vec::new(),
        })
    }

    /// Current position.
    #[must_use]
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// How `participant` picks its moves.
    #[must_use]
    pub fn playstyle(&self, participant: ParticipantId) -> Playstyle {
        self.playstyles[participant.index()]
    }

    /// Turns played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Checkpoint of the random playstyle RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current(&self) -> Option<ParticipantId> {
        self.queue.peek()
    }

    /// Check if the battle has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.queue.is_over()
    }

    /// Outcome, once the battle has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.queue.winner()
    }

    /// Advance the battle by one turn.
    ///
    /// `input` is only consulted when the participant to act is manual.
    pub fn step(&mut self, input: Option<ActionKind>) -> DuelResult<StepOutcome> {
        if let Some(result) = self.queue.winner() {
            return Ok(StepOutcome::Finished(result));
        }

        let actor = self.queue.front().ok_or(DuelError::EmptyQueue)?;
        let playstyle = self.playstyles[actor.index()];
        let choice =
            playstyle.select_action(&self.queue, input, &mut self.rng, &self.config.search)?;

        match choice {
            Some(action) => self.play(action).map(StepOutcome::Performed),
            None => Ok(StepOutcome::AwaitingInput(actor)),
        }
    }

    /// Play `action` for whoever is at the front, regardless of playstyle.
    pub fn play(&mut self, action: ActionKind) -> DuelResult<TurnRecord> {
        if self.queue.is_over() {
            return Err(DuelError::BattleOver);
        }

        let actor = self.queue.front().ok_or(DuelError::EmptyQueue)?;
        if !self.queue.participant(actor).can_perform(action) {
            return Err(DuelError::ActionUnavailable {
                participant: actor,
                action,
            });
        }

        self.queue.remove()?;
        self.queue.perform(actor, action)?;

        let record = TurnRecord::new(actor, action, self.history.len() as u32);
        self.history.push(record.clone());

        debug!(
            turn = record.sequence,
            actor = %actor,
            action = %action,
            playstyle = %self.playstyles[actor.index()],
            "turn played"
        );

        if let Some(result) = self.queue.winner() {
            info!(
                turns = self.history.len(),
                winner = ?result.winner(),
                "battle finished"
            );
        }

        Ok(record)
    }

    /// Step until the battle ends, manual input is needed, or `max_steps`
    /// turns were played.
    ///
    /// Returns the outcome if the battle ended.
    pub fn run_to_end(&mut self, max_steps: usize) -> DuelResult<Option<GameResult>> {
        for _ in 0..max_steps {
            match self.step(None)? {
                StepOutcome::Finished(result) => return Ok(Some(result)),
                StepOutcome::AwaitingInput(_) => return Ok(None),
                StepOutcome::Performed(_) => {}
            }
        }
        Ok(self.queue.winner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterClass, Participant};
    use crate::queue::TurnQueue;
    use crate::search::ScoreStrategy;

    const A: ParticipantId = ParticipantId::FIRST;
    const B: ParticipantId = ParticipantId::SECOND;

    fn duel(health: i64, resource: i64) -> TurnQueue {
        let mut queue = TurnQueue::new(
            Participant::new("r", CharacterClass::Rogue)
                .with_health(health)
                .with_resource(resource),
            Participant::new("m", CharacterClass::Mage)
                .with_health(health)
                .with_resource(resource),
        );
        queue.add(A);
        queue.add(B);
        queue
    }

    #[test]
    fn test_new_requires_participants() {
        let queue = TurnQueue::new(
            Participant::new("r", CharacterClass::Rogue),
            Participant::new("m", CharacterClass::Mage),
        );
        let result = BattleSession::new(queue, [Playstyle::Manual; 2], SessionConfig::default());
        assert!(matches!(result, Err(DuelError::NoParticipants)));
    }

    #[test]
    fn test_manual_step_needs_input() {
        let mut session =
            BattleSession::new(duel(100, 100), [Playstyle::Manual; 2], SessionConfig::default())
                .unwrap();

        assert_eq!(session.step(None), Ok(StepOutcome::AwaitingInput(A)));
        assert!(session.history().is_empty());

        let outcome = session.step(Some(ActionKind::Attack)).unwrap();
        assert_eq!(outcome, StepOutcome::Performed(TurnRecord::new(A, ActionKind::Attack, 0)));
        assert_eq!(session.current(), Some(B));
        assert_eq!(session.queue().participant(B).health(), 93);
    }

    #[test]
    fn test_unaffordable_manual_action() {
        let mut session =
            BattleSession::new(duel(100, 5), [Playstyle::Manual; 2], SessionConfig::default())
                .unwrap();

        assert_eq!(
            session.step(Some(ActionKind::Special)),
            Err(DuelError::ActionUnavailable {
                participant: A,
                action: ActionKind::Special,
            })
        );
        assert_eq!(session.queue().entries(), vec![A, B]);
    }

    #[test]
    fn test_finished_session() {
        let mut queue = duel(100, 100);
        queue.participant_mut(B).set_health(0);
        let mut session =
            BattleSession::new(queue, [Playstyle::Manual; 2], SessionConfig::default()).unwrap();

        assert_eq!(
            session.step(Some(ActionKind::Attack)),
            Ok(StepOutcome::Finished(GameResult::Winner(A)))
        );
        assert_eq!(session.play(ActionKind::Attack), Err(DuelError::BattleOver));
    }

    #[test]
    fn test_random_session_is_reproducible() {
        let config = SessionConfig::default().with_seed(11);
        let mut first =
            BattleSession::new(duel(40, 40), [Playstyle::Random; 2], config.clone()).unwrap();
        let mut second =
            BattleSession::new(duel(40, 40), [Playstyle::Random; 2], config).unwrap();

        let result = first.run_to_end(500).unwrap();
        assert!(result.is_some());
        assert_eq!(second.run_to_end(500).unwrap(), result);
        assert_eq!(first.history(), second.history());
        assert_eq!(first.rng_state(), second.rng_state());
    }

    #[test]
    fn test_minimax_session_terminates() {
        let playstyles = [
            Playstyle::Minimax(ScoreStrategy::Recursive),
            Playstyle::Minimax(ScoreStrategy::Iterative),
        ];
        let mut session =
            BattleSession::new(duel(20, 15), playstyles, SessionConfig::default()).unwrap();

        let result = session.run_to_end(100).unwrap();
        assert!(result.is_some());
        assert!(!session.history().is_empty());
    }

    #[test]
    fn test_run_to_end_stops_for_manual() {
        let mut session = BattleSession::new(
            duel(100, 100),
            [Playstyle::Random, Playstyle::Manual],
            SessionConfig::default(),
        )
        .unwrap();

        assert_eq!(session.run_to_end(10), Ok(None));
        assert_eq!(session.current(), Some(B));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_config_serialization() {
        let config = SessionConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
