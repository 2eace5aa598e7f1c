//! Display filtering of passive skills in battle skill lists.
//!
//! A pure presentation concern: hidden skills keep every mechanical effect.
//! The filter keys off the generic note marker rather than parsed rules, so
//! even a skill whose tags all failed to parse stays hidden.

use super::PassiveRuleEngine;
use crate::env::OracleError;
use crate::ids::SkillId;

impl PassiveRuleEngine<'_> {
    /// Resolved visibility of passive skills in battle.
    ///
    /// When a control switch is configured it wins; otherwise the static
    /// default applies.
    pub fn passives_visible(&self) -> Result<bool, OracleError> {
        match self.display().battle_switch {
            Some(switch) => Ok(self.env().switches()?.value(switch)),
            None => Ok(self.display().show_in_battle),
        }
    }

    /// Whether one skill should appear in an in-battle skill list.
    pub fn battle_skill_visible(&self, skill: SkillId) -> Result<bool, OracleError> {
        if self.passives_visible()? {
            return Ok(true);
        }
        Ok(!self.env().skills()?.has_passive_note(skill))
    }

    /// Filters a battle skill list down to the displayable entries.
    pub fn filter_battle_skills(&self, skills: &[SkillId]) -> Result<Vec<SkillId>, OracleError> {
        let mut visible = Vec::with_capacity(skills.len());
        for &skill in skills {
            if self.battle_skill_visible(skill)? {
                visible.push(skill);
            }
        }
        Ok(visible)
    }
}
