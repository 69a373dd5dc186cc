//! Skill definitions and their effect on a queue.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::ParticipantId;
use crate::error::DuelResult;
use crate::queue::BattleQueue;

/// A single ability.
///
/// Closed set: every class has exactly one attack and one special, see
/// [`CharacterClass::skill`](crate::core::CharacterClass::skill).
///
/// | Skill | Cost | Damage | Re-inserts |
/// |---|---|---|---|
/// | `RogueAttack` | 3 | 15 | caster |
/// | `RogueSpecial` | 10 | 20 | caster, caster |
/// | `MageAttack` | 5 | 20 | caster |
/// | `MageSpecial` | 30 | 40 | target, caster |
/// | `VampireAttack` | 15 | 20 (lifesteal) | caster |
/// | `VampireSpecial` | 20 | 30 (lifesteal) | caster, caster, target |
/// | `SorcererAttack` | 15 | via decision tree | whatever the chosen skill does |
/// | `SorcererSpecial` | 20 | 25 | rebuilds the queue, see [`Skill::apply`] |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    RogueAttack,
    RogueSpecial,
    MageAttack,
    MageSpecial,
    VampireAttack,
    VampireSpecial,
    SorcererAttack,
    SorcererSpecial,
}

impl Skill {
    /// Resource spent by the caster.
    #[must_use]
    pub const fn cost(self) -> i64 {
        match self {
            Skill::RogueAttack => 3,
            Skill::RogueSpecial => 10,
            Skill::MageAttack => 5,
            Skill::MageSpecial => 30,
            Skill::VampireAttack => 15,
            Skill::VampireSpecial => 20,
            Skill::SorcererAttack => 15,
            Skill::SorcererSpecial => 20,
        }
    }

    /// Raw damage dealt before the target's defense.
    #[must_use]
    pub const fn damage(self) -> i64 {
        match self {
            Skill::RogueAttack => 15,
            Skill::RogueSpecial => 20,
            Skill::MageAttack => 20,
            Skill::MageSpecial => 40,
            Skill::VampireAttack => 20,
            Skill::VampireSpecial => 30,
            Skill::SorcererAttack => 0,
            Skill::SorcererSpecial => 25,
        }
    }

    /// Make `caster` use this skill on `target`.
    ///
    /// `SorcererSpecial` empties the queue, then schedules the caster if it
    /// was scheduled, the target if it was scheduled, and the caster again.
    ///
    /// `SorcererAttack` asks the caster's decision tree for a skill, applies
    /// that skill in full, and settles the caster's resource so the net cost
    /// is its own. With no tree or no decision it lands as a zero-damage
    /// strike that re-inserts the caster.
    pub fn apply<Q>(self, queue: &mut Q, caster: ParticipantId, target: ParticipantId) -> DuelResult<()>
    where
        Q: BattleQueue + ?Sized,
    {
        match self {
            Skill::RogueAttack | Skill::MageAttack => {
                self.strike(queue, caster, target);
                queue.add(caster);
            }
            Skill::RogueSpecial => {
                self.strike(queue, caster, target);
                queue.add(caster);
                queue.add(caster);
            }
            Skill::MageSpecial => {
                self.strike(queue, caster, target);
                queue.add(target);
                queue.add(caster);
            }
            Skill::VampireAttack => {
                self.drain(queue, caster, target);
                queue.add(caster);
            }
            Skill::VampireSpecial => {
                self.drain(queue, caster, target);
                queue.add(caster);
                queue.add(caster);
                queue.add(target);
            }
            Skill::SorcererAttack => self.delegate(queue, caster, target)?,
            Skill::SorcererSpecial => {
                self.strike(queue, caster, target);

                let mut scheduled: SmallVec<[ParticipantId; 8]> = SmallVec::new();
                while !queue.is_empty() {
                    scheduled.push(queue.remove()?);
                }

                if scheduled.contains(&caster) {
                    queue.add(caster);
                }
                if scheduled.contains(&target) {
                    queue.add(target);
                }
                queue.add(caster);
            }
        }
        Ok(())
    }

    /// Pay the cost and hit the target.
    fn strike<Q>(self, queue: &mut Q, caster: ParticipantId, target: ParticipantId)
    where
        Q: BattleQueue + ?Sized,
    {
        queue.participant_mut(caster).reduce_resource(self.cost());
        queue.participant_mut(target).apply_damage(self.damage());
    }

    /// Strike, healing the caster by the health the target lost.
    fn drain<Q>(self, queue: &mut Q, caster: ParticipantId, target: ParticipantId)
    where
        Q: BattleQueue + ?Sized,
    {
        let before = queue.participant(target).health();
        self.strike(queue, caster, target);
        let stolen = before - queue.participant(target).health();

        let caster = queue.participant_mut(caster);
        caster.set_health(caster.health() + stolen);
    }

    fn delegate<Q>(self, queue: &mut Q, caster: ParticipantId, target: ParticipantId) -> DuelResult<()>
    where
        Q: BattleQueue + ?Sized,
    {
        let picked = queue
            .participant(caster)
            .skill_tree()
            .and_then(|tree| tree.select(queue.participant(caster), queue.participant(target)))
            .filter(|&skill| skill != Skill::SorcererAttack);

        let Some(picked) = picked else {
            trace!(caster = %caster, "no decision, falling back to a plain strike");
            self.strike(queue, caster, target);
            queue.add(caster);
            return Ok(());
        };

        trace!(caster = %caster, skill = %picked, "decision tree picked skill");
        picked.apply(queue, caster, target)?;

        let caster = queue.participant_mut(caster);
        caster.set_resource(caster.resource() + picked.cost() - self.cost());
        Ok(())
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CharacterClass, Participant};
    use crate::queue::TurnQueue;

    const CASTER: ParticipantId = ParticipantId::FIRST;
    const TARGET: ParticipantId = ParticipantId::SECOND;

    fn duel(caster: CharacterClass, target: CharacterClass) -> TurnQueue {
        TurnQueue::new(
            Participant::new("caster", caster),
            Participant::new("target", target),
        )
    }

    #[test]
    fn test_costs_and_damage() {
        assert_eq!(Skill::RogueAttack.cost(), 3);
        assert_eq!(Skill::MageSpecial.damage(), 40);
        assert_eq!(Skill::SorcererAttack.damage(), 0);
        assert_eq!(format!("{}", Skill::VampireSpecial), "VampireSpecial");
    }

    #[test]
    fn test_mage_special() {
        let mut queue = duel(CharacterClass::Mage, CharacterClass::Rogue);
        Skill::MageSpecial.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 70);
        assert_eq!(queue.participant(TARGET).health(), 70);
        assert_eq!(queue.entries(), vec![TARGET, CASTER]);
    }

    #[test]
    fn test_rogue_special() {
        let mut queue = duel(CharacterClass::Rogue, CharacterClass::Mage);
        Skill::RogueSpecial.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 90);
        assert_eq!(queue.participant(TARGET).health(), 88);
        assert_eq!(queue.entries(), vec![CASTER, CASTER]);
    }

    #[test]
    fn test_vampire_attack_steals_health() {
        let mut queue = duel(CharacterClass::Vampire, CharacterClass::Sorcerer);
        Skill::VampireAttack.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 85);
        assert_eq!(queue.participant(TARGET).health(), 90);
        assert_eq!(queue.participant(CASTER).health(), 110);
        assert_eq!(queue.entries(), vec![CASTER]);
    }

    #[test]
    fn test_vampire_special() {
        let mut queue = duel(CharacterClass::Vampire, CharacterClass::Sorcerer);
        Skill::VampireSpecial.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 80);
        assert_eq!(queue.participant(CASTER).health(), 120);
        assert_eq!(queue.entries(), vec![CASTER, CASTER, TARGET]);
    }

    #[test]
    fn test_lifesteal_only_counts_health_lost() {
        let mut queue = duel(CharacterClass::Vampire, CharacterClass::Rogue);
        queue.participant_mut(TARGET).set_health(4);
        queue.participant_mut(CASTER).set_health(50);
        Skill::VampireAttack.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(TARGET).health(), 0);
        assert_eq!(queue.participant(CASTER).health(), 54);
    }

    #[test]
    fn test_sorcerer_attack_uses_decision_tree() {
        let mut queue = duel(CharacterClass::Sorcerer, CharacterClass::Vampire);
        Skill::SorcererAttack.apply(&mut queue, CASTER, TARGET).unwrap();

        // Default tree picks RogueSpecial at full health
        assert_eq!(queue.participant(CASTER).resource(), 85);
        assert_eq!(queue.participant(TARGET).health(), 83);
        assert_eq!(queue.entries(), vec![CASTER, CASTER]);
    }

    #[test]
    fn test_sorcerer_attack_without_tree() {
        let mut queue = TurnQueue::new(
            Participant::new("s", CharacterClass::Mage),
            Participant::new("t", CharacterClass::Vampire),
        );
        Skill::SorcererAttack.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 85);
        assert_eq!(queue.participant(TARGET).health(), 100);
        assert_eq!(queue.entries(), vec![CASTER]);
    }

    #[test]
    fn test_sorcerer_special_rebuilds_queue() {
        let mut queue = duel(CharacterClass::Sorcerer, CharacterClass::Vampire);
        queue.add(TARGET);
        queue.add(CASTER);
        queue.add(TARGET);
        queue.remove().unwrap();

        Skill::SorcererSpecial.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.participant(CASTER).resource(), 80);
        assert_eq!(queue.participant(TARGET).health(), 78);
        assert_eq!(queue.entries(), vec![CASTER, TARGET, CASTER]);
    }

    #[test]
    fn test_sorcerer_special_on_empty_queue() {
        let mut queue = duel(CharacterClass::Sorcerer, CharacterClass::Rogue);
        Skill::SorcererSpecial.apply(&mut queue, CASTER, TARGET).unwrap();

        assert_eq!(queue.entries(), vec![CASTER]);
    }
}
