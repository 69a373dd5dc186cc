//! Decision conditions.
//!
//! A condition is a pure predicate over the caster and target. Conditions
//! are plain data, so whole decision trees can be compared and serialized.

use serde::{Deserialize, Serialize};

use crate::core::Participant;

/// A predicate on (caster, target) gating a decision node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    // === Caster Thresholds ===

    /// Caster health strictly above N.
    CasterHealthAbove(i64),

    /// Caster health strictly below N.
    CasterHealthBelow(i64),

    /// Caster resource strictly above N.
    CasterResourceAbove(i64),

    /// Caster resource strictly below N.
    CasterResourceBelow(i64),

    // === Target Thresholds ===

    /// Target health strictly above N.
    TargetHealthAbove(i64),

    /// Target health strictly below N.
    TargetHealthBelow(i64),

    /// Target resource strictly above N.
    TargetResourceAbove(i64),

    /// Target resource strictly below N.
    TargetResourceBelow(i64),

    // === Combinators ===

    /// All conditions must be true.
    All(Vec<Condition>),

    /// At least one condition must be true.
    Any(Vec<Condition>),

    /// Condition must be false.
    Not(Box<Condition>),

    // === Special ===

    /// Always true.
    Always,

    /// Always false.
    Never,
}

impl Condition {
    /// Create an AND condition.
    pub fn all(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::All(conditions.into_iter().collect())
    }

    /// Create an OR condition.
    pub fn any(conditions: impl IntoIterator<Item = Condition>) -> Self {
        Self::Any(conditions.into_iter().collect())
    }

    /// Negate this condition.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Add another condition with AND.
    #[must_use]
    pub fn and(self, other: Condition) -> Self {
        match self {
            Self::All(mut conditions) => {
                conditions.push(other);
                Self::All(conditions)
            }
            _ => Self::All(vec![self, other]),
        }
    }

    /// Add another condition with OR.
    #[must_use]
    pub fn or(self, other: Condition) -> Self {
        match self {
            Self::Any(mut conditions) => {
                conditions.push(other);
                Self::Any(conditions)
            }
            _ => Self::Any(vec![self, other]),
        }
    }
}

/// Evaluator for decision conditions.
pub struct ConditionEvaluator;

impl ConditionEvaluator {
    /// Check if a condition holds for `caster` acting on `target`.
    pub fn evaluate(condition: &Condition, caster: &Participant, target: &Participant) -> bool {
        match condition {
            Condition::CasterHealthAbove(n) => caster.health() > *n,
            Condition::CasterHealthBelow(n) => caster.health() < *n,
            Condition::CasterResourceAbove(n) => caster.resource() > *n,
            Condition::CasterResourceBelow(n) => caster.resource() < *n,

            Condition::TargetHealthAbove(n) => target.health() > *n,
            Condition::TargetHealthBelow(n) => target.health() < *n,
            Condition::TargetResourceAbove(n) => target.resource() > *n,
            Condition::TargetResourceBelow(n) => target.resource() < *n,

            Condition::All(conditions) => conditions
                .iter()
                .all(|c| Self::evaluate(c, caster, target)),

            Condition::Any(conditions) => conditions
                .iter()
                .any(|c| Self::evaluate(c, caster, target)),

            Condition::Not(inner) => !Self::evaluate(inner, caster, target),

            Condition::Always => true,

            Condition::Never => false,
        }
    }
}
