//! Plain turn-order queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::{first_actionable, fmt_entries, BattleQueue};
use crate::core::{Participant, ParticipantId, Roster};
use crate::error::{DuelError, DuelResult};

/// FIFO of scheduled turns over a two-participant roster.
///
/// Entries live in an `im::Vector`, so `clone_state` is O(1) for the
/// entries plus a copy of the two participants.
///
/// ## Example
///
/// ```
/// use rust_duel::core::{ActionKind, CharacterClass, Participant, ParticipantId};
/// use rust_duel::queue::{BattleQueue, TurnQueue};
///
/// let mut queue = TurnQueue::new(
///     Participant::new("r", CharacterClass::Rogue),
///     Participant::new("r2", CharacterClass::Rogue),
/// );
/// queue.add(ParticipantId::FIRST);
/// queue.add(ParticipantId::SECOND);
///
/// let mut branch = queue.clone_state();
/// let actor = branch.remove().unwrap();
/// branch.perform(actor, ActionKind::Attack).unwrap();
///
/// assert_eq!(branch.to_string(), "r2 (Rogue): 95/100 -> r (Rogue): 100/97");
/// assert_eq!(queue.to_string(), "r (Rogue): 100/100 -> r2 (Rogue): 100/100");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurnQueue {
    /// Both participants; entries index into this.
    roster: Roster,

    /// Scheduled turns, front first.
    entries: Vector<ParticipantId>,

    /// Fixed by the first add.
    primaries: Option<(ParticipantId, ParticipantId)>,
}

impl TurnQueue {
    /// Create an empty queue over two participants.
    ///
    /// `first` gets [`ParticipantId::FIRST`], `second` gets
    /// [`ParticipantId::SECOND`]; they are each other's opponent.
    pub fn new(first: Participant, second: Participant) -> Self {
        Self::from_roster(Roster::new(first, second))
    }

    /// Create an empty queue over an existing roster.
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            roster,
            entries: Vector::new(),
            primaries: None,
        }
    }

    /// Number of raw entries (before pruning).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop the contiguous run of actionless entries at the front.
    fn prune(&mut self) {
        while let Some(&front) = self.entries.front() {
            if self.roster.get(front).has_actions() {
                break;
            }
            self.entries.pop_front();
        }
    }
}

impl BattleQueue for TurnQueue {
    fn roster(&self) -> &Roster {
        &self.roster
    }

    fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    fn primaries(&self) -> Option<(ParticipantId, ParticipantId)> {
        self.primaries
    }

    fn add(&mut self, participant: ParticipantId) {
        self.entries.push_back(participant);

        if self.primaries.is_none() {
            self.primaries = Some((participant, self.roster.opponent(participant)));
        }
    }

    fn remove(&mut self) -> DuelResult<ParticipantId> {
        self.prune();
        self.entries.pop_front().ok_or(DuelError::EmptyQueue)
    }

    fn front(&self) -> Option<ParticipantId> {
        first_actionable(&self.roster, self.entries.iter().copied())
    }

    fn entries(&self) -> Vec<ParticipantId> {
        self.entries.iter().copied().collect()
    }

    fn clone_state(&self) -> Self {
        self.clone()
    }
}

impl std::fmt::Display for TurnQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_entries(f, &self.roster, self.entries.iter().copied())
    }
}
