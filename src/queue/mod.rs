//! Turn-order queues.
//!
//! A queue is the whole game state of a duel: the two participants (in a
//! [`Roster`]) plus the ordered list of scheduled turns. Skills mutate the
//! roster and re-insert participants, which is what turns a duel into a
//! branching game tree rather than strict alternation.
//!
//! ## Implementations
//!
//! - [`TurnQueue`]: plain FIFO of scheduled turns.
//! - [`RestrictedTurnQueue`]: adds admission control on who may enqueue.
//!
//! Both implement [`BattleQueue`], which is all the search engine and the
//! skills ever see.
//!
//! ## Lazy pruning
//!
//! Entries whose participant cannot afford any action are skipped when
//! looking at the front, and physically dropped by the next mutation.

pub mod restricted;
pub mod standard;

use crate::core::{ActionKind, ActionSet, Participant, ParticipantId, Roster};
use crate::error::{DuelError, DuelResult};

pub use restricted::{QueueSlot, RestrictedTurnQueue};
pub use standard::TurnQueue;

/// Result of a finished duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// One primary participant is still standing.
    Winner(ParticipantId),
    /// Nobody won: the queue ran dry, or both fell together.
    Draw,
}

impl GameResult {
    /// Check if a participant won.
    #[must_use]
    pub fn is_winner(&self, participant: ParticipantId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == participant)
    }

    /// The winning participant, if any.
    #[must_use]
    pub fn winner(&self) -> Option<ParticipantId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// Turn-order queue contract.
///
/// ## Implementation Notes
///
/// - `primaries`: fixed by the first `add` and never changed afterwards
/// - `front`: first entry whose participant can act, without mutating
/// - `remove`: must prune actionless front entries before popping
/// - `clone_state`: must share nothing mutable with `self`
pub trait BattleQueue {
    /// The participants of this duel.
    fn roster(&self) -> &Roster;

    /// The participants of this duel, mutably.
    fn roster_mut(&mut self) -> &mut Roster;

    /// The primary pair `(first added, its opponent)`, once anything was added.
    fn primaries(&self) -> Option<(ParticipantId, ParticipantId)>;

    /// Schedule a turn for `participant` at the back of the queue.
    fn add(&mut self, participant: ParticipantId);

    /// Prune actionless front entries, then pop and return the front.
    fn remove(&mut self) -> DuelResult<ParticipantId>;

    /// First entry that can act, or `None` if pruning would leave nothing.
    fn front(&self) -> Option<ParticipantId>;

    /// Raw scheduled entries, front first, including not-yet-pruned ones.
    fn entries(&self) -> Vec<ParticipantId>;

    /// Independent copy for exploring a branch.
    fn clone_state(&self) -> Self
    where
        Self: Sized;

    // === Convenience Methods ===

    /// Get a participant.
    fn participant(&self, id: ParticipantId) -> &Participant {
        self.roster().get(id)
    }

    /// Get a participant mutably.
    fn participant_mut(&mut self, id: ParticipantId) -> &mut Participant {
        self.roster_mut().get_mut(id)
    }

    /// True when no scheduled entry can act.
    fn is_empty(&self) -> bool {
        self.front().is_none()
    }

    /// Whose turn it is.
    ///
    /// Falls back to the first primary when the queue is empty, so callers
    /// can always ask who is "about to act". `None` only before the first add.
    fn peek(&self) -> Option<ParticipantId> {
        self.front().or_else(|| self.primaries().map(|(first, _)| first))
    }

    /// The participant whose turn it is.
    fn current(&self) -> Option<&Participant> {
        self.peek().map(|id| self.participant(id))
    }

    /// Actions the current participant can afford.
    fn available_actions(&self) -> ActionSet {
        self.current()
            .map(Participant::available_actions)
            .unwrap_or_default()
    }

    /// Is the duel finished?
    ///
    /// Over when the queue is empty or either primary has no health left.
    fn is_over(&self) -> bool {
        let Some((first, second)) = self.primaries() else {
            return true;
        };

        self.is_empty()
            || !self.participant(first).is_alive()
            || !self.participant(second).is_alive()
    }

    /// Outcome of the duel; `None` while it is still running.
    fn winner(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }

        let Some((first, second)) = self.primaries() else {
            return Some(GameResult::Draw);
        };

        let result = match (
            self.participant(first).is_alive(),
            self.participant(second).is_alive(),
        ) {
            (true, false) => GameResult::Winner(first),
            (false, true) => GameResult::Winner(second),
            _ => GameResult::Draw,
        };
        Some(result)
    }

    /// Make `actor` use `action` on its opponent.
    ///
    /// The caller is responsible for having removed `actor` from the front
    /// first; the skill re-inserts whoever it schedules next.
    fn perform(&mut self, actor: ParticipantId, action: ActionKind) -> DuelResult<()> {
        let participant = self.participant(actor);
        if !participant.can_perform(action) {
            return Err(DuelError::ActionUnavailable {
                participant: actor,
                action,
            });
        }

        let skill = participant.skill(action);
        skill.apply(self, actor, actor.opponent())
    }
}

/// First entry whose participant can act.
pub(crate) fn first_actionable<I>(roster: &Roster, entries: I) -> Option<ParticipantId>
where
    I: IntoIterator<Item = ParticipantId>,
{
    entries
        .into_iter()
        .find(|&id| roster.get(id).has_actions())
}

/// Render entries as `a (Rogue): 100/100 -> b (Mage): 100/100`.
pub(crate) fn fmt_entries<I>(
    f: &mut std::fmt::Formatter<'_>,
    roster: &Roster,
    entries: I,
) -> std::fmt::Result
where
    I: IntoIterator<Item = ParticipantId>,
{
    for (i, id) in entries.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" -> ")?;
        }
        write!(f, "{}", roster.get(id))?;
    }
    Ok(())
}
