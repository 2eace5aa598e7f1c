//! The passive rule engine: a decorator over the host's own stat queries.
//!
//! Every query takes the host battler (view + undecorated base values),
//! walks the parsed rule tables of the battler's known skills, and returns
//! the base value composed with the matching contributions. The engine holds
//! no battler state of its own beyond the skill-type cache.

mod aggregate;
mod cache;
mod filter;
mod party;

use std::collections::BTreeSet;

use cache::SkillTypeCaches;

use crate::config::DisplayConfig;
use crate::env::{EquipType, OracleError, PassiveEnv};
use crate::ids::{ArmorTypeId, BattlerId, SkillTypeId, WeaponTypeId};
use crate::rules::table::PassiveRule;
use crate::stats::flags::BehaviorFlags;
use crate::stats::provider::{BattlerView, HostBattler};

/// Evaluates passive rules against host battlers.
///
/// Construction borrows the oracle environment for the engine's lifetime;
/// the host keeps ownership of all data. One engine serves any number of
/// battlers, with per-battler state keyed by [`BattlerId`].
pub struct PassiveRuleEngine<'a> {
    env: PassiveEnv<'a>,
    display: DisplayConfig,
    skill_types: SkillTypeCaches,
}

impl<'a> PassiveRuleEngine<'a> {
    pub fn new(env: PassiveEnv<'a>) -> Self {
        Self::with_display(env, DisplayConfig::default())
    }

    pub fn with_display(env: PassiveEnv<'a>, display: DisplayConfig) -> Self {
        Self {
            env,
            display,
            skill_types: SkillTypeCaches::new(),
        }
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    pub(crate) fn env(&self) -> &PassiveEnv<'a> {
        &self.env
    }

    /// Invalidates one battler's cached skill types.
    ///
    /// Hosts call this after any change to the battler's learned-skill set
    /// (and as part of any general battler refresh); the cache rebuilds on
    /// the next [`Self::added_skill_types`] read.
    pub fn skills_changed(&self, battler: BattlerId) {
        self.skill_types.mark_stale(battler);
    }

    /// Invalidates every battler's cached skill types, e.g. after the host
    /// reloads its databases.
    pub fn refresh_all(&self) {
        self.skill_types.clear();
    }

    /// Runs `f` over every rule of every skill the battler knows, in skill
    /// order. Skills missing from the oracle contribute nothing.
    pub(crate) fn for_each_rule<V>(
        &self,
        view: &V,
        mut f: impl FnMut(&PassiveRule),
    ) -> Result<(), OracleError>
    where
        V: BattlerView + ?Sized,
    {
        let skills = self.env.skills()?;
        for &skill in view.known_skills() {
            if let Some(rules) = skills.rules(skill) {
                for rule in rules.iter() {
                    f(rule);
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Flag and set-valued queries
    // ========================================================================

    /// Union of behavior flags granted by the battler's known skills.
    ///
    /// Only the grants; the host's own flag determinations are composed by
    /// the individual `is_*` queries.
    pub fn behavior_flags<V>(&self, view: &V) -> Result<BehaviorFlags, OracleError>
    where
        V: BattlerView + ?Sized,
    {
        let mut flags = BehaviorFlags::empty();
        self.for_each_rule(view, |rule| {
            if let PassiveRule::Flag { flag } = rule {
                flags |= *flag;
            }
        })?;
        Ok(flags)
    }

    pub fn is_dual_wield(&self, host: &impl HostBattler) -> Result<bool, OracleError> {
        Ok(host.is_dual_wield()
            || self
                .behavior_flags(host)?
                .contains(BehaviorFlags::DUAL_WIELD))
    }

    pub fn is_auto_battle(&self, host: &impl HostBattler) -> Result<bool, OracleError> {
        Ok(host.is_auto_battle()
            || self
                .behavior_flags(host)?
                .contains(BehaviorFlags::AUTO_BATTLE))
    }

    /// Guard only takes effect while the battler can act.
    pub fn is_guard(&self, host: &impl HostBattler) -> Result<bool, OracleError> {
        Ok(host.is_guard()
            || (host.can_move() && self.behavior_flags(host)?.contains(BehaviorFlags::GUARD)))
    }

    /// Substitute only takes effect while the battler can act.
    pub fn is_substitute(&self, host: &impl HostBattler) -> Result<bool, OracleError> {
        Ok(host.is_substitute()
            || (host.can_move()
                && self
                    .behavior_flags(host)?
                    .contains(BehaviorFlags::SUBSTITUTE)))
    }

    pub fn is_preserve_tp(&self, host: &impl HostBattler) -> Result<bool, OracleError> {
        Ok(host.is_preserve_tp()
            || self
                .behavior_flags(host)?
                .contains(BehaviorFlags::PRESERVE_TP))
    }

    pub fn can_equip_weapon_type(
        &self,
        host: &impl HostBattler,
        wtype: WeaponTypeId,
    ) -> Result<bool, OracleError> {
        if host.can_equip_weapon_type(wtype) {
            return Ok(true);
        }
        let mut granted = false;
        self.for_each_rule(host, |rule| {
            if let PassiveRule::EquipGrant {
                equip: EquipType::Weapon(target),
            } = rule
            {
                granted |= *target == wtype;
            }
        })?;
        Ok(granted)
    }

    pub fn can_equip_armor_type(
        &self,
        host: &impl HostBattler,
        atype: ArmorTypeId,
    ) -> Result<bool, OracleError> {
        if host.can_equip_armor_type(atype) {
            return Ok(true);
        }
        let mut granted = false;
        self.for_each_rule(host, |rule| {
            if let PassiveRule::EquipGrant {
                equip: EquipType::Armor(target),
            } = rule
            {
                granted |= *target == atype;
            }
        })?;
        Ok(granted)
    }

    /// Skill types available to the battler: the host's own grants plus the
    /// cached passive grants, each type listed once.
    pub fn added_skill_types(
        &self,
        host: &impl HostBattler,
    ) -> Result<Vec<SkillTypeId>, OracleError> {
        let mut result = host.added_skill_types();
        let granted = self
            .skill_types
            .get_or_rebuild(host.id(), || self.rebuild_skill_types(host))?;
        for stype in granted {
            if !result.contains(&stype) {
                result.push(stype);
            }
        }
        Ok(result)
    }

    fn rebuild_skill_types<V>(&self, view: &V) -> Result<Vec<SkillTypeId>, OracleError>
    where
        V: BattlerView + ?Sized,
    {
        let count = self.env.tables()?.skill_type_count();
        let mut granted = BTreeSet::new();
        self.for_each_rule(view, |rule| {
            if let PassiveRule::SkillTypeGrant { stype } = rule {
                if stype.0 >= 1 && stype.0 <= count {
                    granted.insert(*stype);
                }
            }
        })?;
        Ok(granted.into_iter().collect())
    }
}
