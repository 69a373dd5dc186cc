//! Error types for the duel engine.

use crate::core::{ActionKind, ParticipantId};

/// Errors that can occur while driving a duel.
///
/// Most of these are precondition violations: the search engine never
/// produces them for a well-formed queue, so they surface as soon as a
/// caller breaks a contract.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    /// `remove` was called on a queue with no actionable entries.
    #[error("cannot remove from an empty turn queue")]
    EmptyQueue,

    /// Two decision nodes in the same tree share a priority.
    #[error("duplicate decision priority {0}")]
    DuplicatePriority(u32),

    /// The participant cannot afford the requested action.
    #[error("{participant} cannot perform {action}")]
    ActionUnavailable {
        /// Who tried to act.
        participant: ParticipantId,
        /// What they tried to do.
        action: ActionKind,
    },

    /// A step was requested after the battle ended.
    #[error("the battle is already over")]
    BattleOver,

    /// The queue was never given a participant.
    #[error("turn queue has no participants")]
    NoParticipants,
}

/// Convenience result type for duel operations.
pub type DuelResult<T> = Result<T, DuelError>;
