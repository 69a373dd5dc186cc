//! Action representation.
//!
//! A participant chooses between two actions on its turn. What an action
//! actually does is decided by the participant's class (see
//! [`CharacterClass::skill`](super::CharacterClass::skill)); the action
//! itself is just the choice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::participant::ParticipantId;

/// One of the two moves available to a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// The class's regular attack.
    Attack,
    /// The class's special attack.
    Special,
}

impl ActionKind {
    /// Both actions, in selection order.
    pub const ALL: [ActionKind; 2] = [ActionKind::Attack, ActionKind::Special];

    /// Parse a key press (`A` / `S`, case-insensitive).
    ///
    /// ```
    /// use rust_duel::core::ActionKind;
    ///
    /// assert_eq!(ActionKind::from_key('a'), Some(ActionKind::Attack));
    /// assert_eq!(ActionKind::from_key('S'), Some(ActionKind::Special));
    /// assert_eq!(ActionKind::from_key('Q'), None);
    /// ```
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_uppercase() {
            'A' => Some(ActionKind::Attack),
            'S' => Some(ActionKind::Special),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Attack => f.write_str("Attack"),
            ActionKind::Special => f.write_str("Special"),
        }
    }
}

/// Currently affordable actions. Never holds more than two entries.
pub type ActionSet = SmallVec<[ActionKind; 2]>;

/// A performed action, recorded for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who acted.
    pub participant: ParticipantId,

    /// What they did.
    pub action: ActionKind,

    /// Sequence number within the battle (starts at 0).
    pub sequence: u32,
}

impl TurnRecord {
    /// Create a new turn record.
    #[must_use]
    pub fn new(participant: ParticipantId, action: ActionKind, sequence: u32) -> Self {
        Self {
            participant,
            action,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", ActionKind::Attack), "Attack");
        assert_eq!(format!("{}", ActionKind::Special), "Special");
    }

    #[test]
    fn test_action_order() {
        assert_eq!(ActionKind::ALL[0], ActionKind::Attack);
        assert_eq!(ActionKind::ALL[1], ActionKind::Special);
    }

    #[test]
    fn test_turn_record() {
        let record = TurnRecord::new(ParticipantId::SECOND, ActionKind::Special, 4);

        assert_eq!(record.participant, ParticipantId::SECOND);
        assert_eq!(record.action, ActionKind::Special);
        assert_eq!(record.sequence, 4);
    }

    #[test]
    fn test_turn_record_serialization() {
        let record = TurnRecord::new(ParticipantId::FIRST, ActionKind::Attack, 1);
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TurnRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
