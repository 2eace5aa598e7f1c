//! Numeric aggregation: parameters, resistances, and attack modifiers.
//!
//! Each query composes the host's undecorated value with the sum (or, for
//! rate scaling, product) of matching rule contributions. Plain, conditional
//! and legacy-gated boosts for the same slot all land in the same additive
//! merge; no precedence between tag styles.

use std::collections::BTreeSet;

use super::PassiveRuleEngine;
use crate::env::OracleError;
use crate::ids::{ElementId, StateId};
use crate::rules::table::PassiveRule;
use crate::stats::params::{BaseParam, ExtraParam, ParamFamily, SpecialParam};
use crate::stats::provider::HostBattler;

impl PassiveRuleEngine<'_> {
    /// Base parameter with boost contributions.
    ///
    /// Percentage boosts scale the host's undecorated base for this slot
    /// (the value before equipment or buffs), so two `+50%` skills yield
    /// exactly twice the one-skill bonus.
    pub fn param_base(
        &self,
        host: &impl HostBattler,
        param: BaseParam,
    ) -> Result<i32, OracleError> {
        let base = host.param_base(param);
        let mut boost = 0;
        self.for_each_rule(host, |rule| {
            if let PassiveRule::ParamBoost {
                param: target,
                value,
                when,
            } = rule
            {
                if *target == param && when.map_or(true, |w| w.is_met(host)) {
                    boost += value.apply_floored(base);
                }
            }
        })?;
        Ok(base + boost)
    }

    /// Flat parameter additions, including equipment mastery and per-type
    /// boosts for every currently equipped item.
    ///
    /// Mastery only applies to items that actually grant the parameter
    /// (`params[slot] > 0`); the fixed per-type boosts apply regardless.
    pub fn param_plus(
        &self,
        host: &impl HostBattler,
        param: BaseParam,
    ) -> Result<i32, OracleError> {
        let base = host.param_plus(param);
        let equips = self.env().equips()?;
        let mut boost = 0;
        for &item in host.equipped() {
            let Some(def) = equips.definition(item) else {
                continue;
            };
            let equip_type = def.equip_type;
            let granted = def.param(param);
            if granted > 0 {
                self.for_each_rule(host, |rule| {
                    if let PassiveRule::Mastery {
                        equip,
                        family: ParamFamily::Base,
                        value,
                    } = rule
                    {
                        if *equip == equip_type {
                            boost += value.apply_floored(granted);
                        }
                    }
                })?;
            }
            self.for_each_rule(host, |rule| {
                if let PassiveRule::EquipParamBoost {
                    equip,
                    param: target,
                    amount,
                } = rule
                {
                    if *equip == equip_type && *target == param {
                        boost += amount;
                    }
                }
            })?;
        }
        Ok(base + boost)
    }

    /// Extra parameter rate with skill boosts and equipment contributions.
    pub fn xparam(&self, host: &impl HostBattler, param: ExtraParam) -> Result<f64, OracleError> {
        let mut result = host.xparam(param);
        self.for_each_rule(host, |rule| {
            if let PassiveRule::ExtraBoost {
                param: target,
                amount,
                when,
            } = rule
            {
                if *target == param && when.map_or(true, |w| w.is_met(host)) {
                    result += amount;
                }
            }
        })?;
        let equips = self.env().equips()?;
        for &item in host.equipped() {
            let Some(def) = equips.definition(item) else {
                continue;
            };
            let equip_type = def.equip_type;
            let trait_sum = def.extra_trait_sum(param);
            if trait_sum > 0.0 {
                self.for_each_rule(host, |rule| {
                    if let PassiveRule::Mastery {
                        equip,
                        family: ParamFamily::Extra,
                        value,
                    } = rule
                    {
                        if *equip == equip_type {
                            result += value.apply_rate(trait_sum);
                        }
                    }
                })?;
            }
            self.for_each_rule(host, |rule| {
                if let PassiveRule::EquipExtraBoost {
                    equip,
                    param: target,
                    amount,
                } = rule
                {
                    if *equip == equip_type && *target == param {
                        result += amount;
                    }
                }
            })?;
        }
        Ok(result)
    }

    /// Special parameter rate with skill boosts and equipment contributions.
    ///
    /// Mastery here scales an item's trait sum relative to the neutral rate
    /// of 1.0, since special parameters multiply.
    pub fn sparam(
        &self,
        host: &impl HostBattler,
        param: SpecialParam,
    ) -> Result<f64, OracleError> {
        let mut result = host.sparam(param);
        self.for_each_rule(host, |rule| {
            if let PassiveRule::SpecialBoost {
                param: target,
                amount,
                when,
            } = rule
            {
                if *target == param && when.map_or(true, |w| w.is_met(host)) {
                    result += amount;
                }
            }
        })?;
        let equips = self.env().equips()?;
        for &item in host.equipped() {
            let Some(def) = equips.definition(item) else {
                continue;
            };
            let equip_type = def.equip_type;
            let trait_sum = def.special_trait_sum(param);
            if trait_sum > 0.0 {
                self.for_each_rule(host, |rule| {
                    if let PassiveRule::Mastery {
                        equip,
                        family: ParamFamily::Special,
                        value,
                    } = rule
                    {
                        if *equip == equip_type {
                            result += value.apply_rate_offset(trait_sum);
                        }
                    }
                })?;
            }
            self.for_each_rule(host, |rule| {
                if let PassiveRule::EquipSpecialBoost {
                    equip,
                    param: target,
                    amount,
                } = rule
                {
                    if *equip == equip_type && *target == param {
                        result += amount;
                    }
                }
            })?;
        }
        Ok(result)
    }

    /// Element effectiveness: multiplicative contributions compose into the
    /// host rate, additive ones are summed on top, and the result never goes
    /// below zero.
    pub fn element_rate(
        &self,
        host: &impl HostBattler,
        element: ElementId,
    ) -> Result<f64, OracleError> {
        let mut rate = host.element_rate(element);
        let mut added = 0.0;
        self.for_each_rule(host, |rule| match rule {
            PassiveRule::ElementScale {
                element: target,
                factor,
            } if *target == element => rate *= factor,
            PassiveRule::ElementOffset {
                element: target,
                delta,
            } if *target == element => added += delta,
            _ => {}
        })?;
        Ok((rate + added).max(0.0))
    }

    /// State susceptibility: same composition and floor as element rates.
    pub fn state_rate(&self, host: &impl HostBattler, state: StateId) -> Result<f64, OracleError> {
        let mut rate = host.state_rate(state);
        let mut added = 0.0;
        self.for_each_rule(host, |rule| match rule {
            PassiveRule::StateScale {
                state: target,
                factor,
            } if *target == state => rate *= factor,
            PassiveRule::StateOffset {
                state: target,
                delta,
            } if *target == state => added += delta,
            _ => {}
        })?;
        Ok((rate + added).max(0.0))
    }

    /// States the battler fully resists: host set plus granted immunities,
    /// each id once, granted ids appended in ascending order.
    pub fn state_resist_set(&self, host: &impl HostBattler) -> Result<Vec<StateId>, OracleError> {
        let mut result = host.state_resist_set();
        let count = self.env().tables()?.state_count();
        let mut granted = BTreeSet::new();
        self.for_each_rule(host, |rule| {
            if let PassiveRule::StateResist { state } = rule {
                if state.0 >= 1 && state.0 <= count {
                    granted.insert(*state);
                }
            }
        })?;
        for state in granted {
            if !result.contains(&state) {
                result.push(state);
            }
        }
        Ok(result)
    }

    /// States the battler's normal attacks can inflict, set-unioned with the
    /// host's own list.
    pub fn attack_states(&self, host: &impl HostBattler) -> Result<Vec<StateId>, OracleError> {
        let mut result = host.attack_states();
        let count = self.env().tables()?.state_count();
        let mut granted = BTreeSet::new();
        self.for_each_rule(host, |rule| {
            if let PassiveRule::AttackState { state, .. } = rule {
                if state.0 >= 1 && state.0 <= count {
                    granted.insert(*state);
                }
            }
        })?;
        for state in granted {
            if !result.contains(&state) {
                result.push(state);
            }
        }
        Ok(result)
    }

    /// Application rate for one attack-inflicted state; contributions from
    /// every skill carrying the tag are summed onto the host rate.
    pub fn attack_states_rate(
        &self,
        host: &impl HostBattler,
        state: StateId,
    ) -> Result<f64, OracleError> {
        let mut rate = host.attack_states_rate(state);
        self.for_each_rule(host, |rule| {
            if let PassiveRule::AttackState {
                state: target,
                rate: bonus,
            } = rule
            {
                if *target == state {
                    rate += bonus;
                }
            }
        })?;
        Ok(rate)
    }

    /// Bonus normal-attack repeats. Duplicate tags sum.
    pub fn attack_times_add(&self, host: &impl HostBattler) -> Result<i32, OracleError> {
        let mut times = host.attack_times_add();
        self.for_each_rule(host, |rule| {
            if let PassiveRule::AttackTimes { count } = rule {
                times += count;
            }
        })?;
        Ok(times)
    }

    /// Extra-action probabilities: every tag appends one entry to the host's
    /// own list, in skill order.
    pub fn action_plus_set(&self, host: &impl HostBattler) -> Result<Vec<f64>, OracleError> {
        let mut result = host.action_plus_set();
        self.for_each_rule(host, |rule| {
            if let PassiveRule::ActionPlus { chance } = rule {
                result.push(*chance);
            }
        })?;
        Ok(result)
    }
}
