//! Skill records as the rule engine sees them.

use crate::ids::{SkillId, SkillTypeId};
use crate::rules::table::RuleSet;

/// Read-only access to skill records and their parsed rule tables.
///
/// Unknown ids in a battler's known-skill list resolve to `None` and simply
/// contribute nothing; content referencing a missing skill is a data
/// problem the engine tolerates, not an error it raises.
pub trait SkillOracle: Send + Sync {
    /// The parsed passive rules of a skill.
    fn rules(&self, id: SkillId) -> Option<&RuleSet>;

    /// The skill's command-menu type.
    fn skill_type(&self, id: SkillId) -> Option<SkillTypeId>;

    /// Whether the skill's note text carries any passive marker at all.
    ///
    /// This drives the display filter only; it is deliberately broader than
    /// "parses to at least one rule" so that even a misspelled passive tag
    /// keeps the skill out of battle lists when passives are hidden.
    fn has_passive_note(&self, id: SkillId) -> bool;

    /// Display name, if the oracle carries one.
    fn name(&self, _id: SkillId) -> Option<&str> {
        None
    }
}
