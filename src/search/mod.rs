//! Exhaustive adversarial search.
//!
//! ## Overview
//!
//! A position is a queue. From the point of view of whoever is about to act,
//! a finished position is worth the winner's remaining health (negated if
//! the winner is the other side) or `0` for a draw. An unfinished position
//! is worth the best of its children, where a child's value is kept when
//! the same participant acts again and negated when the turn passes. Skills
//! can grant extra turns, so play does not strictly alternate.
//!
//! Two evaluators compute this and always agree:
//!
//! - [`score_recursive`]: depth-first on the call stack
//! - [`score_iterative`]: explicit LIFO stack over a [`SearchTree`] arena,
//!   releasing each position as soon as its score is known
//!
//! [`Minimax`] wraps both behind a [`SearchConfig`] and picks moves.
//!
//! The search is exhaustive. Keep health and resource small enough for the
//! game tree to be enumerable.
//!
//! ## Usage
//!
//! ```rust
//! use rust_duel::core::{CharacterClass, Participant, ParticipantId};
//! use rust_duel::queue::{BattleQueue, TurnQueue};
//! use rust_duel::search::{score_iterative, score_recursive};
//!
//! let mut queue = TurnQueue::new(
//!     Participant::new("r", CharacterClass::Rogue).with_health(40),
//!     Participant::new("m", CharacterClass::Mage).with_health(3),
//! );
//! queue.add(ParticipantId::SECOND);
//! queue.add(ParticipantId::FIRST);
//!
//! assert_eq!(score_recursive(&queue).unwrap(), -10);
//! assert_eq!(score_iterative(&queue).unwrap(), -10);
//! ```

pub mod config;
pub mod iterative;
pub mod minimax;
pub mod node;
pub mod recursive;
pub mod score;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::{ScoreStrategy, SearchConfig};
pub use iterative::score_iterative;
pub use minimax::Minimax;
pub use node::{Children, NodeId, SearchNode};
pub use recursive::score_recursive;
pub use score::terminal_score;
pub use stats::SearchStats;
pub use tree::SearchTree;
