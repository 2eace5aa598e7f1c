//! Typed rule table parsed from skill metadata.
//!
//! Each skill's note tags are parsed once into a [`RuleSet`]; aggregation
//! walks these tables and never re-reads raw strings. Parsing is permissive
//! end to end: an unrecognized name, an out-of-range slot, or an
//! uninterpretable payload simply produces no rule.

use crate::env::equips::EquipType;
use crate::ids::{ElementId, SkillTypeId, StateId};
use crate::rules::condition::Activation;
use crate::rules::tag::TagName;
use crate::rules::value::{BoostValue, scan_gated, scan_int, scan_rate, scan_unsigned};
use crate::stats::flags::BehaviorFlags;
use crate::stats::params::{BaseParam, ExtraParam, ParamFamily, SpecialParam};

/// One parsed passive rule.
///
/// The legacy HP-gated boost tags do not get variants of their own: they
/// normalize into the equivalent conditional boost (`hp rate <= threshold`),
/// which keeps the additive merge of old- and new-style tags intact.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassiveRule {
    /// Permits equipping a weapon or armor type.
    EquipGrant { equip: EquipType },
    /// Boosts a base parameter, optionally under a condition.
    ParamBoost {
        param: BaseParam,
        value: BoostValue,
        when: Option<Activation>,
    },
    /// Adds to an extra parameter, optionally under a condition.
    ExtraBoost {
        param: ExtraParam,
        amount: f64,
        when: Option<Activation>,
    },
    /// Adds to a special parameter, optionally under a condition.
    SpecialBoost {
        param: SpecialParam,
        amount: f64,
        when: Option<Activation>,
    },
    /// Multiplies the rate of one element.
    ElementScale { element: ElementId, factor: f64 },
    /// Adds to the rate of one element.
    ElementOffset { element: ElementId, delta: f64 },
    /// Multiplies the susceptibility rate of one state.
    StateScale { state: StateId, factor: f64 },
    /// Adds to the susceptibility rate of one state.
    StateOffset { state: StateId, delta: f64 },
    /// Grants immunity to one state.
    StateResist { state: StateId },
    /// Normal attacks inflict a state at the given additional rate.
    ///
    /// Present even when the payload carried no usable number: the state
    /// still joins the attack-state set, just with a zero rate bonus.
    AttackState { state: StateId, rate: f64 },
    /// Grants a skill type.
    SkillTypeGrant { stype: SkillTypeId },
    /// Scales one parameter family of equipped items of a type.
    Mastery {
        equip: EquipType,
        family: ParamFamily,
        value: BoostValue,
    },
    /// Flat base-parameter boost while an item of the type is equipped.
    EquipParamBoost {
        equip: EquipType,
        param: BaseParam,
        amount: i32,
    },
    /// Extra-parameter boost while an item of the type is equipped.
    EquipExtraBoost {
        equip: EquipType,
        param: ExtraParam,
        amount: f64,
    },
    /// Special-parameter boost while an item of the type is equipped.
    EquipSpecialBoost {
        equip: EquipType,
        param: SpecialParam,
        amount: f64,
    },
    /// Adds normal attack repeats.
    AttackTimes { count: i32 },
    /// Raises the party preemptive-strike rate.
    Preemptive { bonus: f64 },
    /// Scales the party surprised rate down by this fraction.
    AntiSurprise { reduction: f64 },
    /// Adds a chance of one extra action.
    ActionPlus { chance: f64 },
    /// Switches a behavior flag on.
    Flag { flag: BehaviorFlags },
}

impl PassiveRule {
    /// Parses one `(name, payload)` metadata pair into a rule.
    pub fn parse(name: &str, payload: &str) -> Option<Self> {
        let tag = TagName::parse(name)?;
        Some(match tag {
            TagName::EquipWeapon(wtype) => PassiveRule::EquipGrant {
                equip: EquipType::Weapon(wtype),
            },
            TagName::EquipArmor(atype) => PassiveRule::EquipGrant {
                equip: EquipType::Armor(atype),
            },
            TagName::ParamBoost(param) => PassiveRule::ParamBoost {
                param,
                value: BoostValue::scan(payload)?,
                when: None,
            },
            TagName::ParamBoostEx(param) => {
                let (value, when) = conditional(payload, BoostValue::scan)?;
                PassiveRule::ParamBoost {
                    param,
                    value,
                    when: Some(when),
                }
            }
            TagName::ParamIndomitable(param) => {
                let (threshold, value) = scan_gated(payload)?;
                PassiveRule::ParamBoost {
                    param,
                    value,
                    when: Some(Activation::hp_at_most(threshold)),
                }
            }
            TagName::ExtraBoost(param) => PassiveRule::ExtraBoost {
                param,
                amount: scan_rate(payload)?,
                when: None,
            },
            TagName::ExtraBoostEx(param) => {
                let (amount, when) = conditional(payload, scan_rate)?;
                PassiveRule::ExtraBoost {
                    param,
                    amount,
                    when: Some(when),
                }
            }
            TagName::ExtraIndomitable(param) => {
                let (threshold, value) = scan_gated(payload)?;
                PassiveRule::ExtraBoost {
                    param,
                    amount: f64::from(value.raw()) * 0.01,
                    when: Some(Activation::hp_at_most(threshold)),
                }
            }
            TagName::SpecialBoost(param) => PassiveRule::SpecialBoost {
                param,
                amount: scan_rate(payload)?,
                when: None,
            },
            TagName::SpecialBoostEx(param) => {
                let (amount, when) = conditional(payload, scan_rate)?;
                PassiveRule::SpecialBoost {
                    param,
                    amount,
                    when: Some(when),
                }
            }
            TagName::SpecialIndomitable(param) => {
                let (threshold, value) = scan_gated(payload)?;
                PassiveRule::SpecialBoost {
                    param,
                    amount: f64::from(value.raw()) * 0.01,
                    when: Some(Activation::hp_at_most(threshold)),
                }
            }
            TagName::ElementScale(element) => PassiveRule::ElementScale {
                element,
                factor: scan_rate(payload)?,
            },
            TagName::ElementOffset(element) => PassiveRule::ElementOffset {
                element,
                delta: scan_rate(payload)?,
            },
            TagName::StateScale(state) => PassiveRule::StateScale {
                state,
                factor: scan_rate(payload)?,
            },
            TagName::StateOffset(state) => PassiveRule::StateOffset {
                state,
                delta: scan_rate(payload)?,
            },
            TagName::StateResist(state) => PassiveRule::StateResist { state },
            TagName::AttackState(state) => PassiveRule::AttackState {
                state,
                rate: scan_rate(payload).unwrap_or(0.0),
            },
            TagName::SkillTypeGrant(stype) => PassiveRule::SkillTypeGrant { stype },
            TagName::WeaponMastery(wtype) => mastery(EquipType::Weapon(wtype), ParamFamily::Base, payload)?,
            TagName::WeaponMasteryX(wtype) => mastery(EquipType::Weapon(wtype), ParamFamily::Extra, payload)?,
            TagName::WeaponMasteryS(wtype) => mastery(EquipType::Weapon(wtype), ParamFamily::Special, payload)?,
            TagName::ArmorMastery(atype) => mastery(EquipType::Armor(atype), ParamFamily::Base, payload)?,
            TagName::ArmorMasteryX(atype) => mastery(EquipType::Armor(atype), ParamFamily::Extra, payload)?,
            TagName::ArmorMasteryS(atype) => mastery(EquipType::Armor(atype), ParamFamily::Special, payload)?,
            TagName::WeaponParamBoost(wtype, param) => PassiveRule::EquipParamBoost {
                equip: EquipType::Weapon(wtype),
                param,
                amount: scan_int(payload)?,
            },
            TagName::WeaponExtraBoost(wtype, param) => PassiveRule::EquipExtraBoost {
                equip: EquipType::Weapon(wtype),
                param,
                amount: scan_rate(payload)?,
            },
            TagName::WeaponSpecialBoost(wtype, param) => PassiveRule::EquipSpecialBoost {
                equip: EquipType::Weapon(wtype),
                param,
                amount: scan_rate(payload)?,
            },
            TagName::ArmorParamBoost(atype, param) => PassiveRule::EquipParamBoost {
                equip: EquipType::Armor(atype),
                param,
                amount: scan_int(payload)?,
            },
            TagName::ArmorExtraBoost(atype, param) => PassiveRule::EquipExtraBoost {
                equip: EquipType::Armor(atype),
                param,
                amount: scan_rate(payload)?,
            },
            TagName::ArmorSpecialBoost(atype, param) => PassiveRule::EquipSpecialBoost {
                equip: EquipType::Armor(atype),
                param,
                amount: scan_rate(payload)?,
            },
            TagName::AttackTimes => PassiveRule::AttackTimes {
                count: scan_int(payload)?,
            },
            TagName::Preemptive => PassiveRule::Preemptive {
                bonus: scan_rate(payload)?,
            },
            TagName::AntiSurprise => PassiveRule::AntiSurprise {
                reduction: scan_rate(payload)?,
            },
            TagName::ActionPlus => PassiveRule::ActionPlus {
                chance: f64::from(scan_unsigned(payload)?) * 0.01,
            },
            TagName::DualWield => PassiveRule::Flag {
                flag: BehaviorFlags::DUAL_WIELD,
            },
            TagName::AutoBattle => PassiveRule::Flag {
                flag: BehaviorFlags::AUTO_BATTLE,
            },
            TagName::Guard => PassiveRule::Flag {
                flag: BehaviorFlags::GUARD,
            },
            TagName::Substitute => PassiveRule::Flag {
                flag: BehaviorFlags::SUBSTITUTE,
            },
            TagName::PreserveTp => PassiveRule::Flag {
                flag: BehaviorFlags::PRESERVE_TP,
            },
        })
    }
}

/// Splits an `Ex` payload into `value,KEYWORD,threshold`; extra segments are
/// ignored, missing ones drop the rule.
fn conditional<T>(payload: &str, scan: impl Fn(&str) -> Option<T>) -> Option<(T, Activation)> {
    let mut parts = payload.split(',');
    let value = scan(parts.next()?)?;
    let keyword = parts.next()?;
    let threshold = parts.next()?;
    Some((value, Activation::parse(keyword, threshold)?))
}

fn mastery(equip: EquipType, family: ParamFamily, payload: &str) -> Option<PassiveRule> {
    Some(PassiveRule::Mastery {
        equip,
        family,
        value: BoostValue::scan(payload)?,
    })
}

/// The parsed rules of one skill, in note order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    rules: Vec<PassiveRule>,
}

impl RuleSet {
    /// Parses a skill's metadata pairs. Pairs that yield no rule are skipped.
    pub fn parse<'a>(meta: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            rules: meta
                .into_iter()
                .filter_map(|(name, payload)| PassiveRule::parse(name, payload))
                .collect(),
        }
    }

    /// Wraps already-built rules (test fixtures, generated content).
    pub fn from_rules(rules: Vec<PassiveRule>) -> Self {
        Self { rules }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PassiveRule> {
        self.rules.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
