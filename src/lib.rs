//! # rust-duel
//!
//! Turn-order queues and exhaustive adversarial search for two-participant,
//! turn-based duels.
//!
//! ## Design Principles
//!
//! 1. **The queue is the game state**: Both participants live inside the
//!    queue's roster and entries are plain ids, so cloning a queue yields a
//!    fully independent position.
//!
//! 2. **Turn order is not alternation**: Skills re-insert participants, so
//!    one side may act several times in a row. The search engine only ever
//!    looks at who is at the front.
//!
//! 3. **Closed sets**: Skills, conditions and playstyles are enums, so every
//!    behaviour is visible in one `match`.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Queue entries use `im::Vector`, making
//!   a branch clone O(1) plus two participants.
//!
//! - **Two Evaluators**: A recursive and an explicit-stack evaluator produce
//!   identical scores; the latter keeps its nodes in an arena.
//!
//! ## Modules
//!
//! - `core`: Participant ids, participants, classes, actions, RNG
//! - `skills`: Skill table and effects
//! - `queue`: Turn-order queue and its restricted variant
//! - `decision`: Rule-priority decision trees
//! - `search`: Exhaustive minimax scoring and move selection
//! - `playstyle`: Manual, random and search-driven action selection
//! - `session`: Step-by-step battle driver
//! - `error`: Error types

pub mod core;
pub mod decision;
pub mod error;
pub mod playstyle;
pub mod queue;
pub mod search;
pub mod session;
pub mod skills;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionSet, CharacterClass, GameRng, GameRngState, Participant, ParticipantId,
    Roster, TurnRecord,
};

pub use crate::decision::{Condition, ConditionEvaluator, DecisionNode, DecisionTree};

pub use crate::error::{DuelError, DuelResult};

pub use crate::playstyle::Playstyle;

pub use crate::queue::{BattleQueue, GameResult, QueueSlot, RestrictedTurnQueue, TurnQueue};

pub use crate::search::{
    score_iterative, score_recursive, terminal_score, Minimax, ScoreStrategy, SearchConfig,
    SearchStats,
};

pub use crate::session::{BattleSession, SessionConfig, StepOutcome};

pub use crate::skills::Skill;
