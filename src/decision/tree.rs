//! Rule-priority decision trees.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::condition::{Condition, ConditionEvaluator};
use crate::core::Participant;
use crate::error::{DuelError, DuelResult};
use crate::queue::BattleQueue;
use crate::skills::Skill;

/// One rule: a skill, the condition under which to look deeper, a priority,
/// and the rules to consult when the condition holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    skill: Skill,
    condition: Condition,
    priority: u32,
    children: Vec<DecisionNode>,
}

impl DecisionNode {
    /// Create a leaf rule.
    pub fn new(skill: Skill, condition: Condition, priority: u32) -> Self {
        Self {
            skill,
            condition,
            priority,
            children: Vec::new(),
        }
    }

    /// Append a child rule.
    #[must_use]
    pub fn with_child(mut self, child: DecisionNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child rules, in order.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = DecisionNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Skill this rule casts.
    #[must_use]
    pub fn skill(&self) -> Skill {
        self.skill
    }

    /// Guard that lets selection descend past this rule.
    #[must_use]
    pub fn condition(&self) -> &Condition {
        &self.condition
    }

    /// Lower wins.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Child rules, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[DecisionNode] {
        &self.children
    }

    /// Whether this rule has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Nodes eligible for selection under this node.
    ///
    /// A leaf, or a node whose condition is false, offers only itself. A
    /// node whose condition holds defers entirely to its children, in order.
    pub fn candidates<'a>(&'a self, caster: &Participant, target: &Participant) -> Vec<&'a DecisionNode> {
        let mut out = Vec::new();
        self.collect_candidates(caster, target, &mut out);
        out
    }

    fn collect_candidates<'a>(
        &'a self,
        caster: &Participant,
        target: &Participant,
        out: &mut Vec<&'a DecisionNode>,
    ) {
        if self.is_leaf() || !ConditionEvaluator::evaluate(&self.condition, caster, target) {
            out.push(self);
            return;
        }

        for child in &self.children {
            child.collect_candidates(caster, target, out);
        }
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a DecisionNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }
}

/// A validated decision tree: priorities are unique across all nodes.
///
/// ```
/// use rust_duel::core::{CharacterClass, Participant};
/// use rust_duel::decision::DecisionTree;
/// use rust_duel::skills::Skill;
///
/// let tree = DecisionTree::default_tree();
/// let caster = Participant::new("c", CharacterClass::Sorcerer).with_resource(40);
/// let target = Participant::new("t", CharacterClass::Rogue)
///     .with_health(50)
///     .with_resource(30);
///
/// assert_eq!(tree.select(&caster, &target), Some(Skill::MageSpecial));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DecisionNode", into = "DecisionNode")]
pub struct DecisionTree {
    root: DecisionNode,
}

impl DecisionTree {
    /// Validate and wrap a root node.
    pub fn new(root: DecisionNode) -> DuelResult<Self> {
        let mut seen = FxHashSet::default();
        let mut duplicate = None;
        root.visit(&mut |node| {
            if !seen.insert(node.priority) && duplicate.is_none() {
                duplicate = Some(node.priority);
            }
        });

        match duplicate {
            Some(priority) => Err(DuelError::DuplicatePriority(priority)),
            None => Ok(Self { root }),
        }
    }

    /// Top rule of the tree.
    #[must_use]
    pub fn root(&self) -> &DecisionNode {
        &self.root
    }

    /// Candidate nodes for `caster` acting on `target`, in tree order.
    pub fn candidates<'a>(&'a self, caster: &Participant, target: &Participant) -> Vec<&'a DecisionNode> {
        self.root.candidates(caster, target)
    }

    /// Skill of the lowest-priority candidate.
    #[must_use]
    pub fn select(&self, caster: &Participant, target: &Participant) -> Option<Skill> {
        self.candidates(caster, target)
            .into_iter()
            .min_by_key(|node| node.priority)
            .map(DecisionNode::skill)
    }

    /// Select for whoever is about to act in `queue`, against its opponent.
    pub fn select_next_action<Q>(&self, queue: &Q) -> Option<Skill>
    where
        Q: BattleQueue + ?Sized,
    {
        let actor = queue.peek()?;
        let skill = self.select(queue.participant(actor), queue.participant(actor.opponent()));
        trace!(actor = %actor, skill = ?skill, "decision tree selection");
        skill
    }

    /// The stock eight-rule tree used by sorcerers.
    ///
    /// ```text
    /// 5 MageAttack    (caster HP > 50)
    /// ├── 3 MageAttack    (caster SP > 20)
    /// │   └── 4 RogueSpecial  (target HP < 30)
    /// │       └── 6 RogueAttack
    /// ├── 2 MageSpecial   (target SP > 40)
    /// │   └── 8 RogueAttack
    /// └── 1 RogueAttack   (caster HP > 90)
    ///     └── 7 RogueSpecial
    /// ```
    #[must_use]
    pub fn default_tree() -> Self {
        let p1 = DecisionNode::new(Skill::RogueAttack, Condition::CasterHealthAbove(90), 1)
            .with_child(DecisionNode::new(Skill::RogueSpecial, Condition::Always, 7));
        let p2 = DecisionNode::new(Skill::MageSpecial, Condition::TargetResourceAbove(40), 2)
            .with_child(DecisionNode::new(Skill::RogueAttack, Condition::Always, 8));
        let p4 = DecisionNode::new(Skill::RogueSpecial, Condition::TargetHealthBelow(30), 4)
            .with_child(DecisionNode::new(Skill::RogueAttack, Condition::Always, 6));
        let p3 = DecisionNode::new(Skill::MageAttack, Condition::CasterResourceAbove(20), 3)
            .with_child(p4);

        Self {
            root: DecisionNode::new(Skill::MageAttack, Condition::CasterHealthAbove(50), 5)
                .with_children([p3, p2, p1]),
        }
    }
}

impl TryFrom<DecisionNode> for DecisionTree {
    type Error = DuelError;

    fn try_from(root: DecisionNode) -> DuelResult<Self> {
        Self::new(root)
    }
}

impl From<DecisionTree> for DecisionNode {
    fn from(tree: DecisionTree) -> Self {
        tree.root
    }
}
