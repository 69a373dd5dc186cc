//! Skills: the effects behind every action.
//!
//! A skill deducts its cost from the caster, applies its effect, and then
//! re-inserts zero or more participants into the queue. The re-insertion
//! pattern is what gives each class its turn-order flavour:
//!
//! - caster once: one consecutive extra action later
//! - target then caster: the target acts once more before the caster
//! - caster twice: two additional turns for the caster
//!
//! The search engine never inspects which skill ran; it only looks at the
//! queue that comes out the other side.

mod skill;

pub use skill::Skill;
