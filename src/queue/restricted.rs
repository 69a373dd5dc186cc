//! Turn-order queue with admission control.
//!
//! Every slot carries a `may_enqueue` flag. The participant at the front of
//! the queue is taken to be the one performing any `add`, and the rules are:
//!
//! 1. A participant's first-ever appearance is always privileged.
//! 2. If the front slot is unprivileged, nothing can be added.
//! 3. A participant re-adding itself gets a privileged slot unless it already
//!    holds two privileged slots.
//! 4. A participant added by someone else gets an unprivileged slot.
//!
//! ```text
//! Order:       A -> A -> B          A adds A      A -> A -> B -> A
//! May enqueue: Y    Y    Y          ==========>   Y    Y    Y    N
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{first_actionable, fmt_entries, BattleQueue};
use crate::core::{Participant, ParticipantId, Roster};
use crate::error::{DuelError, DuelResult};

/// Most privileged slots a participant may hold at once.
pub const MAX_PRIVILEGED_SLOTS: usize = 2;

/// A scheduled turn and whether its owner may enqueue others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueueSlot {
    /// Whose turn this is.
    pub participant: ParticipantId,

    /// May this turn's owner add entries while at the front?
    pub may_enqueue: bool,
}

/// Turn-order queue that limits who may schedule extra turns.
///
/// The entry and its privilege flag are stored together in one slot so they
/// are always popped in lockstep.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestrictedTurnQueue {
    /// Both participants; slots index into this.
    roster: Roster,

    /// Scheduled turns, front first.
    slots: Vector<QueueSlot>,

    /// Fixed by the first add.
    primaries: Option<(ParticipantId, ParticipantId)>,

    /// Participants that have had their first (privileged) appearance.
    seen: FxHashSet<ParticipantId>,
}

impl RestrictedTurnQueue {
    /// Create an empty queue over two participants.
    pub fn new(first: Participant, second: Participant) -> Self {
        Self::from_roster(Roster::new(first, second))
    }

    /// Create an empty queue over an existing roster.
    pub fn from_roster(roster: Roster) -> Self {
        Self {
            roster,
            slots: Vector::new(),
            primaries: None,
            seen: FxHashSet::default(),
        }
    }

    /// Forget which participants have already appeared.
    ///
    /// Queue contents are untouched; the next add of each participant is
    /// treated as its first appearance.
    pub fn clear_seen(&mut self) {
        self.seen.clear();
    }

    /// Scheduled slots, front first, including not-yet-pruned ones.
    pub fn slots(&self) -> impl Iterator<Item = &QueueSlot> {
        self.slots.iter()
    }

    /// Number of raw slots (before pruning).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Privileged slots currently held by `participant`.
    #[must_use]
    pub fn privileged_count(&self, participant: ParticipantId) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.participant == participant && slot.may_enqueue)
            .count()
    }

    /// Drop the contiguous run of actionless slots at the front.
    fn prune(&mut self) {
        while let Some(front) = self.slots.front() {
            if self.roster.get(front.participant).has_actions() {
                break;
            }
            self.slots.pop_front();
        }
    }

    fn push(&mut self, participant: ParticipantId, may_enqueue: bool) {
        self.slots.push_back(QueueSlot {
            participant,
            may_enqueue,
        });
    }
}

impl BattleQueue for RestrictedTurnQueue {
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
        if self.primaries.is_none() {
            self.primaries = Some((participant, self.roster.opponent(participant)));
        }

        if self.seen.insert(participant) {
            self.push(participant, true);
            return;
        }

        self.prune();
        let Some(front) = self.slots.front().copied() else {
            self.push(participant, false);
            return;
        };

        if !front.may_enqueue {
            trace!(
                participant = %participant,
                front = %front.participant,
                "unprivileged front refused insertion"
            );
            return;
        }

        if front.participant == participant {
            let privileged = self.privileged_count(participant) < MAX_PRIVILEGED_SLOTS;
            self.push(participant, privileged);
        } else {
            self.push(participant, false);
        }
    }

    fn remove(&mut self) -> DuelResult<ParticipantId> {
        self.prune();
        self.slots
            .pop_front()
            .map(|slot| slot.participant)
            .ok_or(DuelError::EmptyQueue)
    }

    fn front(&self) -> Option<ParticipantId> {
        first_actionable(&self.roster, self.slots.iter().map(|slot| slot.participant))
    }

    fn entries(&self) -> Vec<ParticipantId> {
        self.slots.iter().map(|slot| slot.participant).collect()
    }

    /// Fresh queue over cloned participants with admission state re-derived.
    ///
    /// The primaries carry over, `seen` starts empty, and the original entry
    /// sequence is replayed through `add`. Replaying can assign different
    /// flags than the source held, and can refuse entries the source kept.
    fn clone_state(&self) -> Self {
        let mut copy = Self::from_roster(self.roster.clone());
        copy.primaries = self.primaries;

        for slot in self.slots.iter() {
            copy.add(slot.participant);
        }
        copy
    }
}

impl std::fmt::Display for RestrictedTurnQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt_entries(f, &self.roster, self.slots.iter().map(|slot| slot.participant))
    }
}
