//! Tag-name grammar of the passive mini-language.
//!
//! A tag name is the `passive` prefix, a category mnemonic, and zero or more
//! fixed-width digit fields (`passivePBST3`, `passiveELEM_ADD08`,
//! `passiveWPBST01_2`). Digit widths are exact: parameter slots are one
//! digit, weapon/armor/element/skill types two, state ids four. A name with
//! the wrong width (`passiveELEM8`) is not a recognized tag and is ignored
//! wherever it appears.

use crate::ids::{ArmorTypeId, ElementId, SkillTypeId, StateId, WeaponTypeId};
use crate::stats::params::{BaseParam, ExtraParam, SpecialParam};

/// Leading marker shared by every recognized tag name.
pub const TAG_PREFIX: &str = "passive";

/// A recognized tag name: category plus the slot ids encoded in the name.
///
/// The payload that follows the `:` in the note text is not part of the
/// name; [`crate::rules::table::RuleSet`] interprets it per category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagName {
    /// `passiveEWPN##`: permits equipping a weapon type.
    EquipWeapon(WeaponTypeId),
    /// `passiveEARM##`: permits equipping an armor type.
    EquipArmor(ArmorTypeId),
    /// `passivePBST#`: base parameter boost.
    ParamBoost(BaseParam),
    /// `passivePBSTEX#`: conditional base parameter boost.
    ParamBoostEx(BaseParam),
    /// `passiveINDM#`: legacy low-HP base parameter boost.
    ParamIndomitable(BaseParam),
    /// `passiveXPBST#`: extra parameter boost.
    ExtraBoost(ExtraParam),
    /// `passiveXPBSTEX#`: conditional extra parameter boost.
    ExtraBoostEx(ExtraParam),
    /// `passiveXINDM#`: legacy low-HP extra parameter boost.
    ExtraIndomitable(ExtraParam),
    /// `passiveSPBST#`: special parameter boost.
    SpecialBoost(SpecialParam),
    /// `passiveSPBSTEX#`: conditional special parameter boost.
    SpecialBoostEx(SpecialParam),
    /// `passiveSINDM#`: legacy low-HP special parameter boost.
    SpecialIndomitable(SpecialParam),
    /// `passiveELEM##`: multiplies an element rate.
    ElementScale(ElementId),
    /// `passiveELEM_ADD##`: adds to an element rate.
    ElementOffset(ElementId),
    /// `passiveSTAT####`: multiplies a state rate.
    StateScale(StateId),
    /// `passiveSTAT_ADD####`: adds to a state rate.
    StateOffset(StateId),
    /// `passiveSTREG####`: grants immunity to a state.
    StateResist(StateId),
    /// `passiveATKST####`: normal attacks inflict a state.
    AttackState(StateId),
    /// `passiveAST##`: grants a skill type.
    SkillTypeGrant(SkillTypeId),
    /// `passiveWPNM##`: scales base params granted by weapons of a type.
    WeaponMastery(WeaponTypeId),
    /// `passiveWPNMX##`: scales extra-param traits of weapons of a type.
    WeaponMasteryX(WeaponTypeId),
    /// `passiveWPNMS##`: scales special-param traits of weapons of a type.
    WeaponMasteryS(WeaponTypeId),
    /// `passiveARMM##`: scales base params granted by armor of a type.
    ArmorMastery(ArmorTypeId),
    /// `passiveARMMX##`: scales extra-param traits of armor of a type.
    ArmorMasteryX(ArmorTypeId),
    /// `passiveARMMS##`: scales special-param traits of armor of a type.
    ArmorMasteryS(ArmorTypeId),
    /// `passiveWPBST##_#`: flat base param boost while a weapon type is worn.
    WeaponParamBoost(WeaponTypeId, BaseParam),
    /// `passiveWXPBST##_#`: extra param boost while a weapon type is worn.
    WeaponExtraBoost(WeaponTypeId, ExtraParam),
    /// `passiveWSPBST##_#`: special param boost while a weapon type is worn.
    WeaponSpecialBoost(WeaponTypeId, SpecialParam),
    /// `passiveAPBST##_#`: flat base param boost while an armor type is worn.
    ArmorParamBoost(ArmorTypeId, BaseParam),
    /// `passiveAXPBST##_#`: extra param boost while an armor type is worn.
    ArmorExtraBoost(ArmorTypeId, ExtraParam),
    /// `passiveASPBST##_#`: special param boost while an armor type is worn.
    ArmorSpecialBoost(ArmorTypeId, SpecialParam),
    /// `passiveATADD`: adds normal attack repeats.
    AttackTimes,
    /// `passivePREE`: raises the party's preemptive-strike rate.
    Preemptive,
    /// `passiveASUP`: lowers the party's surprised rate.
    AntiSurprise,
    /// `passiveDUAL`: dual wield.
    DualWield,
    /// `passiveAPLUS`: chance of an extra action.
    ActionPlus,
    /// `passiveAUTO`: auto battle.
    AutoBattle,
    /// `passiveGUARD`: permanent guard.
    Guard,
    /// `passiveSUBS`: substitute.
    Substitute,
    /// `passivePRETP`: preserve TP.
    PreserveTp,
}

impl TagName {
    /// Parses a metadata key into a recognized tag name.
    ///
    /// Returns `None` for keys without the `passive` prefix, with an unknown
    /// mnemonic, with a slot out of range, or with the wrong digit width.
    pub fn parse(name: &str) -> Option<Self> {
        let rest = name.strip_prefix(TAG_PREFIX)?;

        // Longest mnemonic first where one is a prefix of another
        // (PBSTEX/PBST, ELEM_ADD/ELEM, STAT_ADD/STAT, WPNMX/WPNMS/WPNM,
        // ARMMX/ARMMS/ARMM).
        if let Some(s) = rest.strip_prefix("PBSTEX") {
            return base_slot(s).map(TagName::ParamBoostEx);
        }
        if let Some(s) = rest.strip_prefix("PBST") {
            return base_slot(s).map(TagName::ParamBoost);
        }
        if let Some(s) = rest.strip_prefix("XPBSTEX") {
            return extra_slot(s).map(TagName::ExtraBoostEx);
        }
        if let Some(s) = rest.strip_prefix("XPBST") {
            return extra_slot(s).map(TagName::ExtraBoost);
        }
        if let Some(s) = rest.strip_prefix("SPBSTEX") {
            return special_slot(s).map(TagName::SpecialBoostEx);
        }
        if let Some(s) = rest.strip_prefix("SPBST") {
            return special_slot(s).map(TagName::SpecialBoost);
        }
        if let Some(s) = rest.strip_prefix("INDM") {
            return base_slot(s).map(TagName::ParamIndomitable);
        }
        if let Some(s) = rest.strip_prefix("XINDM") {
            return extra_slot(s).map(TagName::ExtraIndomitable);
        }
        if let Some(s) = rest.strip_prefix("SINDM") {
            return special_slot(s).map(TagName::SpecialIndomitable);
        }
        if let Some(s) = rest.strip_prefix("ELEM_ADD") {
            return fixed_digits(s, 2).map(|id| TagName::ElementOffset(ElementId(id)));
        }
        if let Some(s) = rest.strip_prefix("ELEM") {
            return fixed_digits(s, 2).map(|id| TagName::ElementScale(ElementId(id)));
        }
        if let Some(s) = rest.strip_prefix("STAT_ADD") {
            return fixed_digits(s, 4).map(|id| TagName::StateOffset(StateId(id)));
        }
        if let Some(s) = rest.strip_prefix("STAT") {
            return fixed_digits(s, 4).map(|id| TagName::StateScale(StateId(id)));
        }
        if let Some(s) = rest.strip_prefix("STREG") {
            return fixed_digits(s, 4).map(|id| TagName::StateResist(StateId(id)));
        }
        if let Some(s) = rest.strip_prefix("ATKST") {
            return fixed_digits(s, 4).map(|id| TagName::AttackState(StateId(id)));
        }
        if let Some(s) = rest.strip_prefix("AST") {
            return fixed_digits(s, 2).map(|id| TagName::SkillTypeGrant(SkillTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("EWPN") {
            return fixed_digits(s, 2).map(|id| TagName::EquipWeapon(WeaponTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("EARM") {
            return fixed_digits(s, 2).map(|id| TagName::EquipArmor(ArmorTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("WPNMX") {
            return fixed_digits(s, 2).map(|id| TagName::WeaponMasteryX(WeaponTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("WPNMS") {
            return fixed_digits(s, 2).map(|id| TagName::WeaponMasteryS(WeaponTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("WPNM") {
            return fixed_digits(s, 2).map(|id| TagName::WeaponMastery(WeaponTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("ARMMX") {
            return fixed_digits(s, 2).map(|id| TagName::ArmorMasteryX(ArmorTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("ARMMS") {
            return fixed_digits(s, 2).map(|id| TagName::ArmorMasteryS(ArmorTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("ARMM") {
            return fixed_digits(s, 2).map(|id| TagName::ArmorMastery(ArmorTypeId(id)));
        }
        if let Some(s) = rest.strip_prefix("WPBST") {
            return typed_base_slot(s)
                .map(|(id, param)| TagName::WeaponParamBoost(WeaponTypeId(id), param));
        }
        if let Some(s) = rest.strip_prefix("WXPBST") {
            return typed_extra_slot(s)
                .map(|(id, param)| TagName::WeaponExtraBoost(WeaponTypeId(id), param));
        }
        if let Some(s) = rest.strip_prefix("WSPBST") {
            return typed_special_slot(s)
                .map(|(id, param)| TagName::WeaponSpecialBoost(WeaponTypeId(id), param));
        }
        if let Some(s) = rest.strip_prefix("APBST") {
            return typed_base_slot(s)
                .map(|(id, param)| TagName::ArmorParamBoost(ArmorTypeId(id), param));
        }
        if let Some(s) = rest.strip_prefix("AXPBST") {
            return typed_extra_slot(s)
                .map(|(id, param)| TagName::ArmorExtraBoost(ArmorTypeId(id), param));
        }
        if let Some(s) = rest.strip_prefix("ASPBST") {
            return typed_special_slot(s)
                .map(|(id, param)| TagName::ArmorSpecialBoost(ArmorTypeId(id), param));
        }

        match rest {
            "ATADD" => Some(TagName::AttackTimes),
            "PREE" => Some(TagName::Preemptive),
            "ASUP" => Some(TagName::AntiSurprise),
            "DUAL" => Some(TagName::DualWield),
            "APLUS" => Some(TagName::ActionPlus),
            "AUTO" => Some(TagName::AutoBattle),
            "GUARD" => Some(TagName::Guard),
            "SUBS" => Some(TagName::Substitute),
            "PRETP" => Some(TagName::PreserveTp),
            _ => None,
        }
    }
}

/// Exactly `width` ASCII digits and nothing else.
fn fixed_digits(s: &str, width: usize) -> Option<u16> {
    if s.len() != width || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn base_slot(s: &str) -> Option<BaseParam> {
    BaseParam::from_index(fixed_digits(s, 1)? as u8)
}

fn extra_slot(s: &str) -> Option<ExtraParam> {
    ExtraParam::from_index(fixed_digits(s, 1)? as u8)
}

fn special_slot(s: &str) -> Option<SpecialParam> {
    SpecialParam::from_index(fixed_digits(s, 1)? as u8)
}

/// The `##_#` shape: two-digit type id, underscore, one-digit slot.
fn typed_slot(s: &str) -> Option<(u16, u8)> {
    let (type_id, slot) = s.split_once('_')?;
    Some((fixed_digits(type_id, 2)?, fixed_digits(slot, 1)? as u8))
}

fn typed_base_slot(s: &str) -> Option<(u16, BaseParam)> {
    let (id, slot) = typed_slot(s)?;
    Some((id, BaseParam::from_index(slot)?))
}

fn typed_extra_slot(s: &str) -> Option<(u16, ExtraParam)> {
    let (id, slot) = typed_slot(s)?;
    Some((id, ExtraParam::from_index(slot)?))
}

fn typed_special_slot(s: &str) -> Option<(u16, SpecialParam)> {
    let (id, slot) = typed_slot(s)?;
    Some((id, SpecialParam::from_index(slot)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_required() {
        assert_eq!(TagName::parse("PBST2"), None);
        assert_eq!(TagName::parse("passivePBST2"), Some(TagName::ParamBoost(BaseParam::Atk)));
    }

    #[test]
    fn longer_mnemonics_win_over_their_prefixes() {
        assert_eq!(
            TagName::parse("passivePBSTEX2"),
            Some(TagName::ParamBoostEx(BaseParam::Atk))
        );
        assert_eq!(
            TagName::parse("passiveELEM_ADD08"),
            Some(TagName::ElementOffset(ElementId(8)))
        );
        assert_eq!(
            TagName::parse("passiveELEM08"),
            Some(TagName::ElementScale(ElementId(8)))
        );
        assert_eq!(
            TagName::parse("passiveSTAT_ADD0010"),
            Some(TagName::StateOffset(StateId(10)))
        );
        assert_eq!(
            TagName::parse("passiveWPNMS01"),
            Some(TagName::WeaponMasteryS(WeaponTypeId(1)))
        );
        assert_eq!(
            TagName::parse("passiveWPNM01"),
            Some(TagName::WeaponMastery(WeaponTypeId(1)))
        );
    }

    #[test]
    fn digit_widths_are_exact() {
        assert_eq!(TagName::parse("passiveELEM8"), None);
        assert_eq!(TagName::parse("passiveELEM008"), None);
        assert_eq!(TagName::parse("passiveSTAT10"), None);
        assert_eq!(
            TagName::parse("passiveSTAT0010"),
            Some(TagName::StateScale(StateId(10)))
        );
        assert_eq!(TagName::parse("passivePBST"), None);
        assert_eq!(TagName::parse("passivePBST12"), None);
    }

    #[test]
    fn param_slots_must_exist_in_the_family() {
        assert_eq!(TagName::parse("passivePBST7"), Some(TagName::ParamBoost(BaseParam::Luk)));
        assert_eq!(TagName::parse("passivePBST8"), None);
        assert_eq!(
            TagName::parse("passiveXPBST9"),
            Some(TagName::ExtraBoost(ExtraParam::Trg))
        );
        assert_eq!(
            TagName::parse("passiveSPBST9"),
            Some(TagName::SpecialBoost(SpecialParam::Exr))
        );
    }

    #[test]
    fn equip_slot_tags_take_type_and_slot() {
        assert_eq!(
            TagName::parse("passiveWPBST01_2"),
            Some(TagName::WeaponParamBoost(WeaponTypeId(1), BaseParam::Atk))
        );
        assert_eq!(
            TagName::parse("passiveAXPBST03_7"),
            Some(TagName::ArmorExtraBoost(ArmorTypeId(3), ExtraParam::Hrg))
        );
        assert_eq!(TagName::parse("passiveWPBST01_"), None);
        assert_eq!(TagName::parse("passiveWPBST1_2"), None);
        assert_eq!(TagName::parse("passiveWPBST01_23"), None);
    }

    #[test]
    fn presence_tags_carry_no_digits() {
        assert_eq!(TagName::parse("passiveDUAL"), Some(TagName::DualWield));
        assert_eq!(TagName::parse("passivePRETP"), Some(TagName::PreserveTp));
        assert_eq!(TagName::parse("passiveDUAL2"), None);
        assert_eq!(TagName::parse("passiveNOPE"), None);
    }

    #[test]
    fn similar_mnemonics_do_not_collide() {
        assert_eq!(
            TagName::parse("passiveAST08"),
            Some(TagName::SkillTypeGrant(SkillTypeId(8)))
        );
        assert_eq!(TagName::parse("passiveASUP"), Some(TagName::AntiSurprise));
        assert_eq!(
            TagName::parse("passiveASPBST02_0"),
            Some(TagName::ArmorSpecialBoost(ArmorTypeId(2), SpecialParam::Tgr))
        );
        assert_eq!(
            TagName::parse("passiveATKST0004"),
            Some(TagName::AttackState(StateId(4)))
        );
        assert_eq!(TagName::parse("passiveATADD"), Some(TagName::AttackTimes));
    }
}
