//! Participants: the two combatants of a duel.
//!
//! ## ParticipantId
//!
//! Index into the owning queue's [`Roster`](super::Roster). A duel always has
//! exactly two participants, so ids are `0` and `1` and the opponent of one is
//! the other. Ids are plain values: they never keep a participant alive and
//! they are re-interpreted against whichever roster they are used with, which
//! is what makes a cloned queue point at its own cloned participants.
//!
//! ## Participant
//!
//! Health, resource (SP), class and name. Everything the core needs from a
//! combatant goes through the methods here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::action::{ActionKind, ActionSet};
use crate::decision::DecisionTree;
use crate::skills::Skill;

/// Default starting health.
pub const DEFAULT_HEALTH: i64 = 100;

/// Default starting resource.
pub const DEFAULT_RESOURCE: i64 = 100;

/// Participant identifier (`0` or `1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticipantId(u8);

impl ParticipantId {
    /// The participant in roster slot 0.
    pub const FIRST: ParticipantId = ParticipantId(0);

    /// The participant in roster slot 1.
    pub const SECOND: ParticipantId = ParticipantId(1);

    /// Create a new participant ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "A duel has exactly two participants");
        Self(id)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other participant of the duel.
    ///
    /// ```
    /// use rust_duel::core::ParticipantId;
    ///
    /// assert_eq!(ParticipantId::FIRST.opponent(), ParticipantId::SECOND);
    /// assert_eq!(ParticipantId::SECOND.opponent(), ParticipantId::FIRST);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both participant IDs.
    pub fn both() -> impl Iterator<Item = ParticipantId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Participant {}", self.0)
    }
}

/// Character class. Decides defense and which skills back each action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    /// Cheap attacks, special grants two extra turns.
    Rogue,
    /// Hard-hitting special that hands the target one turn first.
    Mage,
    /// Lifesteal on every hit.
    Vampire,
    /// Attacks through a decision tree, special rebuilds the queue.
    Sorcerer,
}

impl CharacterClass {
    /// Flat damage reduction applied to every hit taken.
    #[must_use]
    pub const fn defense(self) -> i64 {
        match self {
            CharacterClass::Rogue => 10,
            CharacterClass::Mage => 8,
            CharacterClass::Vampire => 3,
            CharacterClass::Sorcerer => 10,
        }
    }

    /// The skill used for `action`.
    #[must_use]
    pub const fn skill(self, action: ActionKind) -> Skill {
        match (self, action) {
            (CharacterClass::Rogue, ActionKind::Attack) => Skill::RogueAttack,
            (CharacterClass::Rogue, ActionKind::Special) => Skill::RogueSpecial,
            (CharacterClass::Mage, ActionKind::Attack) => Skill::MageAttack,
            (CharacterClass::Mage, ActionKind::Special) => Skill::MageSpecial,
            (CharacterClass::Vampire, ActionKind::Attack) => Skill::VampireAttack,
            (CharacterClass::Vampire, ActionKind::Special) => Skill::VampireSpecial,
            (CharacterClass::Sorcerer, ActionKind::Attack) => Skill::SorcererAttack,
            (CharacterClass::Sorcerer, ActionKind::Special) => Skill::SorcererSpecial,
        }
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Mage => "Mage",
            CharacterClass::Vampire => "Vampire",
            CharacterClass::Sorcerer => "Sorcerer",
        };
        f.write_str(name)
    }
}

/// A combatant.
///
/// Cloning is cheap: the name and decision tree are shared behind `Arc`.
///
/// ```
/// use rust_duel::core::{ActionKind, CharacterClass, Participant};
///
/// let mut rogue = Participant::new("Sophia", CharacterClass::Rogue).with_resource(5);
/// assert_eq!(rogue.available_actions().as_slice(), &[ActionKind::Attack]);
///
/// rogue.apply_damage(25);
/// assert_eq!(rogue.health(), 85); // 25 - 10 defense
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participant {
    name: Arc<str>,
    class: CharacterClass,
    health: i64,
    resource: i64,
    skill_tree: Option<Arc<DecisionTree>>,
}

impl Participant {
    /// Create a participant at full health and resource.
    ///
    /// Sorcerers get the default decision tree; replace it with
    /// [`with_skill_tree`](Self::with_skill_tree).
    pub fn new(name: impl Into<Arc<str>>, class: CharacterClass) -> Self {
        let skill_tree = match class {
            CharacterClass::Sorcerer => Some(Arc::new(DecisionTree::default_tree())),
            _ => None,
        };

        Self {
            name: name.into(),
            class,
            health: DEFAULT_HEALTH,
            resource: DEFAULT_RESOURCE,
            skill_tree,
        }
    }

    /// Set the starting health.
    #[must_use]
    pub fn with_health(mut self, health: i64) -> Self {
        self.health = health.max(0);
        self
    }

    /// Set the starting resource.
    #[must_use]
    pub fn with_resource(mut self, resource: i64) -> Self {
        self.resource = resource;
        self
    }

    /// Use a custom decision tree for tree-driven attacks.
    #[must_use]
    pub fn with_skill_tree(mut self, tree: Arc<DecisionTree>) -> Self {
        self.skill_tree = Some(tree);
        self
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character class.
    #[must_use]
    pub fn class(&self) -> CharacterClass {
        self.class
    }

    /// Current health (never negative).
    #[must_use]
    pub fn health(&self) -> i64 {
        self.health
    }

    /// Current resource.
    #[must_use]
    pub fn resource(&self) -> i64 {
        self.resource
    }

    /// Decision tree used by tree-driven attacks, if any.
    #[must_use]
    pub fn skill_tree(&self) -> Option<&Arc<DecisionTree>> {
        self.skill_tree.as_ref()
    }

    /// Is this participant still standing?
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Take a hit of `amount`, reduced by class defense.
    pub fn apply_damage(&mut self, amount: i64) {
        let taken = (amount - self.class.defense()).max(0);
        self.health = (self.health - taken).max(0);
    }

    /// Spend `amount` resource.
    pub fn reduce_resource(&mut self, amount: i64) {
        self.resource -= amount;
    }

    /// Overwrite health.
    pub fn set_health(&mut self, health: i64) {
        self.health = health.max(0);
    }

    /// Overwrite resource.
    pub fn set_resource(&mut self, resource: i64) {
        self.resource = resource;
    }

    /// The skill backing `action` for this participant.
    #[must_use]
    pub fn skill(&self, action: ActionKind) -> Skill {
        self.class.skill(action)
    }

    /// Can this participant afford `action` right now?
    #[must_use]
    pub fn can_perform(&self, action: ActionKind) -> bool {
        self.resource >= self.skill(action).cost()
    }

    /// Actions this participant can currently afford, attack first.
    #[must_use]
    pub fn available_actions(&self) -> ActionSet {
        ActionKind::ALL
            .into_iter()
            .filter(|&action| self.can_perform(action))
            .collect()
    }

    /// Does this participant have anything to do on its turn?
    #[must_use]
    pub fn has_actions(&self) -> bool {
        ActionKind::ALL.into_iter().any(|action| self.can_perform(action))
    }
}

impl std::fmt::Display for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}/{}", self.name, self.class, self.health, self.resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_ids() {
        assert_eq!(ParticipantId::new(0), ParticipantId::FIRST);
        assert_eq!(ParticipantId::new(1).index(), 1);
        assert_eq!(ParticipantId::FIRST.opponent().opponent(), ParticipantId::FIRST);
        assert_eq!(format!("{}", ParticipantId::SECOND), "Participant 1");

        let both: Vec<_> = ParticipantId::both().collect();
        assert_eq!(both, vec![ParticipantId::FIRST, ParticipantId::SECOND]);
    }

    #[test]
    #[should_panic(expected = "exactly two participants")]
    fn test_participant_id_out_of_range() {
        let _ = ParticipantId::new(2);
    }

    #[test]
    fn test_defaults() {
        let mage = Participant::new("m", CharacterClass::Mage);

        assert_eq!(mage.health(), DEFAULT_HEALTH);
        assert_eq!(mage.resource(), DEFAULT_RESOURCE);
        assert!(mage.skill_tree().is_none());
        assert_eq!(format!("{}", mage), "m (Mage): 100/100");
    }

    #[test]
    fn test_sorcerer_gets_default_tree() {
        let sorcerer = Participant::new("s", CharacterClass::Sorcerer);
        assert!(sorcerer.skill_tree().is_some());
    }

    #[test]
    fn test_damage_respects_defense() {
        let mut vampire = Participant::new("v", CharacterClass::Vampire);
        vampire.apply_damage(25);
        assert_eq!(vampire.health(), 78);

        // Hits below defense do nothing
        let mut rogue = Participant::new("r", CharacterClass::Rogue);
        rogue.apply_damage(5);
        assert_eq!(rogue.health(), 100);
    }

    #[test]
    fn test_health_floors_at_zero() {
        let mut mage = Participant::new("m", CharacterClass::Mage).with_health(3);
        mage.apply_damage(40);
        assert_eq!(mage.health(), 0);
        assert!(!mage.is_alive());
    }

    #[test]
    fn test_available_actions() {
        let mage = Participant::new("m", CharacterClass::Mage);
        assert_eq!(
            mage.available_actions().as_slice(),
            &[ActionKind::Attack, ActionKind::Special]
        );

        let poor = mage.clone().with_resource(29);
        assert_eq!(poor.available_actions().as_slice(), &[ActionKind::Attack]);

        let broke = mage.with_resource(4);
        assert!(broke.available_actions().is_empty());
        assert!(!broke.has_actions());
    }

    #[test]
    fn test_class_skills() {
        assert_eq!(CharacterClass::Rogue.skill(ActionKind::Special), Skill::RogueSpecial);
        assert_eq!(CharacterClass::Sorcerer.skill(ActionKind::Attack), Skill::SorcererAttack);
        assert_eq!(format!("{}", CharacterClass::Vampire), "Vampire");
    }

    #[test]
    fn test_serialization() {
        let rogue = Participant::new("r", CharacterClass::Rogue).with_health(40);
        let json = serde_json::to_string(&rogue).unwrap();
        let deserialized: Participant = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.name(), "r");
        assert_eq!(deserialized.health(), 40);
        assert_eq!(deserialized.class(), CharacterClass::Rogue);
    }
}
