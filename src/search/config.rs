//! Search configuration.

use serde::{Deserialize, Serialize};

/// Which evaluator scores a position.
///
/// Both produce identical scores; they differ only in how they walk the
/// game tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreStrategy {
    /// Depth-first recursion on the call stack.
    Recursive,
    /// Explicit LIFO stack over an arena of search nodes.
    #[default]
    Iterative,
}

impl std::fmt::Display for ScoreStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreStrategy::Recursive => f.write_str("recursive"),
            ScoreStrategy::Iterative => f.write_str("iterative"),
        }
    }
}

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Evaluator used by [`Minimax`](super::Minimax).
    pub strategy: ScoreStrategy,

    /// Node arena capacity reserved up front by the iterative evaluator.
    pub initial_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: ScoreStrategy::default(),
            initial_capacity: 1024,
        }
    }
}

impl SearchConfig {
    /// Use a different evaluator.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ScoreStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reserve a different arena capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
