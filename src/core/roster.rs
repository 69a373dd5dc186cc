//! The two participants owned by a turn queue.
//!
//! Queue entries are [`ParticipantId`]s that index into this roster, so the
//! opponent relation is just "the other slot" and never forms an ownership
//! cycle. Cloning a roster clones both participants; entries copied along
//! with it automatically resolve to the new copies.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::participant::{Participant, ParticipantId};

/// Storage for the two participants of a duel.
///
/// ```
/// use rust_duel::core::{CharacterClass, Participant, ParticipantId, Roster};
///
/// let roster = Roster::new(
///     Participant::new("r", CharacterClass::Rogue),
///     Participant::new("m", CharacterClass::Mage),
/// );
///
/// let mage = roster.opponent(ParticipantId::FIRST);
/// assert_eq!(roster[mage].name(), "m");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Roster {
    participants: [Participant; 2],
}

impl Roster {
    /// Create a roster; `first` gets id 0 and `second` gets id 1.
    pub fn new(first: Participant, second: Participant) -> Self {
        Self {
            participants: [first, second],
        }
    }

    /// Get a participant.
    #[inline]
    #[must_use]
    pub fn get(&self, id: ParticipantId) -> &Participant {
        &self.participants[id.index()]
    }

    /// Get a participant mutably.
    #[inline]
    pub fn get_mut(&mut self, id: ParticipantId) -> &mut Participant {
        &mut self.participants[id.index()]
    }

    /// The opponent of `id`.
    #[inline]
    #[must_use]
    pub fn opponent(&self, id: ParticipantId) -> ParticipantId {
        id.opponent()
    }

    /// Iterate over (ParticipantId, &Participant) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &Participant)> {
        ParticipantId::both().zip(self.participants.iter())
    }
}

impl Index<ParticipantId> for Roster {
    type Output = Participant;

    fn index(&self, id: ParticipantId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<ParticipantId> for Roster {
    fn index_mut(&mut self, id: ParticipantId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CharacterClass;

    fn roster() -> Roster {
        Roster::new(
            Participant::new("a", CharacterClass::Rogue),
            Participant::new("b", CharacterClass::Vampire),
        )
    }

    #[test]
    fn test_roster_lookup() {
        let roster = roster();

        assert_eq!(roster[ParticipantId::FIRST].name(), "a");
        assert_eq!(roster[ParticipantId::SECOND].name(), "b");
        assert_eq!(roster.opponent(ParticipantId::SECOND), ParticipantId::FIRST);
    }

    #[test]
    fn test_roster_mutation() {
        let mut roster = roster();
        roster[ParticipantId::SECOND].set_health(12);

        assert_eq!(roster[ParticipantId::SECOND].health(), 12);
        assert_eq!(roster[ParticipantId::FIRST].health(), 100);
    }

    #[test]
    fn test_roster_clone_is_independent() {
        let original = roster();
        let mut copy = original.clone();
        copy[ParticipantId::FIRST].reduce_resource(30);

        assert_eq!(original[ParticipantId::FIRST].resource(), 100);
        assert_eq!(copy[ParticipantId::FIRST].resource(), 70);
    }

    #[test]
    fn test_roster_iter() {
        let roster = roster();
        let names: Vec<_> = roster.iter().map(|(id, p)| (id, p.name())).collect();

        assert_eq!(
            names,
            vec![(ParticipantId::FIRST, "a"), (ParticipantId::SECOND, "b")]
        );
    }
}
