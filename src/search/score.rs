//! Scoring primitives shared by both evaluators.

use crate::core::{ActionKind, ParticipantId};
use crate::error::DuelResult;
use crate::queue::{BattleQueue, GameResult};

/// Score of a finished duel from the point of view of whoever would act next.
///
/// The winner's remaining health, negated when the winner is not the one
/// about to act; `0` for a draw. `None` while the duel is still running.
///
/// ```
/// use rust_duel::core::{CharacterClass, Participant, ParticipantId};
/// use rust_duel::queue::{BattleQueue, TurnQueue};
/// use rust_duel::search::terminal_score;
///
/// let mut queue = TurnQueue::new(
///     Participant::new("a", CharacterClass::Rogue).with_health(40),
///     Participant::new("b", CharacterClass::Mage).with_health(0),
/// );
/// queue.add(ParticipantId::FIRST);
/// assert_eq!(terminal_score(&queue), Some(40));
///
/// queue.remove().unwrap();
/// queue.add(ParticipantId::SECOND);
/// assert_eq!(terminal_score(&queue), Some(-40));
/// ```
pub fn terminal_score<Q>(queue: &Q) -> Option<i64>
where
    Q: BattleQueue + ?Sized,
{
    let score = match queue.winner()? {
        GameResult::Winner(winner) => {
            let health = queue.participant(winner).health();
            if queue.peek() == Some(winner) {
                health
            } else {
                -health
            }
        }
        GameResult::Draw => 0,
    };
    Some(score)
}

/// Branch off `queue`: pop whoever is at the front and have them use `action`.
///
/// Returns the new position and who acted.
pub(crate) fn advance<Q>(queue: &Q, action: ActionKind) -> DuelResult<(Q, ParticipantId)>
where
    Q: BattleQueue,
{
    let mut child = queue.clone_state();
    let actor = child.remove()?;
    child.perform(actor, action)?;
    Ok((child, actor))
}

/// Re-express a child's score from `actor`'s point of view.
#[inline]
pub(crate) fn orient(child_score: i64, child_actor: Option<ParticipantId>, actor: ParticipantId) -> i64 {
    if child_actor == Some(actor) {
        child_score
    } else {
        -child_score
    }
}
