//! Core duel types: participants, roster, actions, RNG.
//!
//! These are the value types every other module builds on. A participant
//! never refers to another participant directly; the opponent relation is
//! carried by [`ParticipantId`] and resolved through a [`Roster`].

pub mod action;
pub mod participant;
pub mod rng;
pub mod roster;

pub use action::{ActionKind, ActionSet, TurnRecord};
pub use participant::{CharacterClass, Participant, ParticipantId, DEFAULT_HEALTH, DEFAULT_RESOURCE};
pub use rng::{GameRng, GameRngState};
pub use roster::Roster;
