//! Equipment mastery, per-type boosts, and equip-permission grants.

mod common;

use common::{Fixture, TestHost};
use passive_core::{
    ArmorTypeId, BaseParam, EquipDefinition, EquipId, EquipType, ExtraParam, SpecialParam,
    WeaponTypeId,
};

#[test]
fn weapon_mastery_scales_the_items_own_grant() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveWPNM01", "50%")]);
    // Sword (type 1) granting +12 ATK; nothing else.
    fx.equips.add_weapon(10, 1, [0, 0, 12, 0, 0, 0, 0, 0]);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(10)];

    // floor(12 × 0.5) = 6 on top of the host's own flat additions.
    assert_eq!(engine.param_plus(&host, BaseParam::Atk).unwrap(), 6);
    // The weapon grants no DEF, so mastery has nothing to scale there.
    assert_eq!(engine.param_plus(&host, BaseParam::Def).unwrap(), 0);
}

#[test]
fn mastery_needs_a_positive_grant_but_typed_boosts_do_not() {
    let mut fx = Fixture::new();
    fx.skills.add(
        1,
        &[("passiveWPNM01", "10"), ("passiveWPBST01_3", "4")],
    );
    // A type-1 weapon granting no parameters at all.
    fx.equips.add_weapon(10, 1, [0; 8]);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(10)];

    // Flat mastery is still gated on the item granting the slot.
    assert_eq!(engine.param_plus(&host, BaseParam::Atk).unwrap(), 0);
    // The fixed per-type boost applies to any equipped item of the type.
    assert_eq!(engine.param_plus(&host, BaseParam::Def).unwrap(), 4);
}

#[test]
fn mastery_only_matches_its_own_equip_type() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveWPNM02", "50%"), ("passiveARMM01", "50%")]);
    fx.equips.add_weapon(10, 1, [0, 0, 12, 0, 0, 0, 0, 0]);
    fx.equips.add_armor(20, 1, [0, 0, 0, 8, 0, 0, 0, 0]);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(10), EquipId(20)];

    // The weapon is type 1, the mastery wants weapon type 2: no effect.
    assert_eq!(engine.param_plus(&host, BaseParam::Atk).unwrap(), 0);
    // Armor type 1 matches: floor(8 × 0.5) = 4.
    assert_eq!(engine.param_plus(&host, BaseParam::Def).unwrap(), 4);
}

#[test]
fn extra_mastery_scales_trait_sums_without_flooring() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveWPNMX01", "50%")]);
    let mut bow = EquipDefinition::new(EquipId(10), EquipType::Weapon(WeaponTypeId(1)));
    bow.extra_traits = vec![(ExtraParam::Hit, 0.25), (ExtraParam::Hit, 0.25)];
    fx.equips.add(bow);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(10)];

    // Trait sum 0.5 × 0.5, no flooring.
    assert!((engine.xparam(&host, ExtraParam::Hit).unwrap() - 0.25).abs() < 1e-12);
    // No traits for EVA: the mastery stays silent.
    assert_eq!(engine.xparam(&host, ExtraParam::Eva).unwrap(), 0.0);
}

#[test]
fn special_mastery_scales_the_deviation_from_neutral() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveARMMS02", "50%")]);
    let mut plate = EquipDefinition::new(EquipId(20), EquipType::Armor(ArmorTypeId(2)));
    plate.special_traits = vec![(SpecialParam::Tgr, 1.25)];
    fx.equips.add(plate);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(20)];

    // 1.0 (host) + (1.25 − 1.0) × 0.5
    assert!((engine.sparam(&host, SpecialParam::Tgr).unwrap() - 1.125).abs() < 1e-12);
}

#[test]
fn typed_extra_and_special_boosts_read_as_fractions() {
    let mut fx = Fixture::new();
    fx.skills.add(
        1,
        &[("passiveWXPBST01_0", "10"), ("passiveASPBST02_0", "-20")],
    );
    fx.equips.add_weapon(10, 1, [0; 8]);
    fx.equips.add_armor(20, 2, [0; 8]);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(10), EquipId(20)];

    assert!((engine.xparam(&host, ExtraParam::Hit).unwrap() - 0.1).abs() < 1e-12);
    assert!((engine.sparam(&host, SpecialParam::Tgr).unwrap() - 0.8).abs() < 1e-12);
}

#[test]
fn unknown_equipment_ids_are_skipped() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveWPNM01", "50%")]);
    let engine = fx.engine();

    let mut host = TestHost::knowing(1, &[1]);
    host.equipped = vec![EquipId(99)];
    assert_eq!(engine.param_plus(&host, BaseParam::Atk).unwrap(), 0);
}

#[test]
fn equip_permission_tags_extend_the_hosts_grants() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveEWPN02", ""), ("passiveEARM03", "")]);
    let engine = fx.engine();

    let host = TestHost::knowing(1, &[1]);
    assert!(engine.can_equip_weapon_type(&host, WeaponTypeId(2)).unwrap());
    assert!(!engine.can_equip_weapon_type(&host, WeaponTypeId(1)).unwrap());
    assert!(engine.can_equip_armor_type(&host, ArmorTypeId(3)).unwrap());
    assert!(!engine.can_equip_armor_type(&host, ArmorTypeId(2)).unwrap());
}
