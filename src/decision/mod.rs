//! Rule-priority decision trees.
//!
//! Each node pairs a skill with a condition and a unique priority. Walking
//! the tree for a (caster, target) pair yields a list of candidate nodes:
//! a node whose condition fails (or that has no children) is a candidate
//! itself, while a node whose condition holds hands over to its children.
//! The candidate with the lowest priority number wins.
//!
//! ## Key Components
//!
//! - [`Condition`]: Serializable predicate over caster and target
//! - [`ConditionEvaluator`]: Evaluates conditions
//! - [`DecisionNode`]: One rule, possibly with children
//! - [`DecisionTree`]: Validated root with selection helpers

mod condition;
mod tree;

pub use condition::{Condition, ConditionEvaluator};
pub use tree::{DecisionNode, DecisionTree};
