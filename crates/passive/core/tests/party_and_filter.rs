//! Party-level battle-start rates and the battle-list display filter.

mod common;

use common::{Fixture, TestHost};
use passive_core::{BattlerView, DisplayConfig, PassiveRuleEngine, SkillId, SwitchId};

#[test]
fn preemptive_bonuses_sum_across_members_and_clamp() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passivePREE", "5")]);
    fx.skills.add_plain(2);
    let engine = fx.engine();

    let scout = TestHost::knowing(1, &[1]);
    let porter = TestHost::knowing(2, &[2]);
    let members: Vec<&dyn BattlerView> = vec![&scout, &porter];

    assert!((engine.rate_preemptive(0.05, &members).unwrap() - 0.10).abs() < 1e-12);
    assert_eq!(engine.rate_preemptive(0.99, &members).unwrap(), 1.0);
}

#[test]
fn surprise_reductions_compose_multiplicatively() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveASUP", "50")]);
    fx.skills.add(2, &[("passiveASUP", "50")]);
    let engine = fx.engine();

    let first = TestHost::knowing(1, &[1]);
    let second = TestHost::knowing(2, &[2]);
    let members: Vec<&dyn BattlerView> = vec![&first, &second];

    // 0.8 × 0.5 × 0.5, order-independent.
    assert!((engine.rate_surprise(0.8, &members).unwrap() - 0.2).abs() < 1e-12);
}

#[test]
fn hidden_passives_drop_from_battle_lists_only() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveATADD", "1")]);
    fx.skills.add_plain(2);
    let env = fx.env();
    let engine = PassiveRuleEngine::with_display(
        env,
        DisplayConfig {
            show_in_battle: false,
            battle_switch: None,
        },
    );

    let listed = engine
        .filter_battle_skills(&[SkillId(1), SkillId(2)])
        .unwrap();
    assert_eq!(listed, vec![SkillId(2)]);

    // Hidden, not disabled: the tag still contributes.
    let host = TestHost::knowing(1, &[1]);
    assert_eq!(engine.attack_times_add(&host).unwrap(), 1);
}

#[test]
fn a_misspelled_passive_tag_still_hides_the_skill() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passivePBTS2", "50%")]);
    let env = fx.env();
    let engine = PassiveRuleEngine::with_display(
        env,
        DisplayConfig {
            show_in_battle: false,
            battle_switch: None,
        },
    );

    assert!(engine.filter_battle_skills(&[SkillId(1)]).unwrap().is_empty());
}

#[test]
fn a_configured_switch_overrides_the_default() {
    let mut fx = Fixture::new();
    fx.skills.add(1, &[("passiveATADD", "1")]);
    fx.switches.turn_on(21);

    // Default says hide, but the switch is on: passives show.
    let engine = PassiveRuleEngine::with_display(
        fx.env(),
        DisplayConfig {
            show_in_battle: false,
            battle_switch: Some(SwitchId(21)),
        },
    );
    assert_eq!(
        engine.filter_battle_skills(&[SkillId(1)]).unwrap(),
        vec![SkillId(1)]
    );

    // An off switch hides them even though the default says show.
    let engine = PassiveRuleEngine::with_display(
        fx.env(),
        DisplayConfig {
            show_in_battle: true,
            battle_switch: Some(SwitchId(22)),
        },
    );
    assert!(engine.filter_battle_skills(&[SkillId(1)]).unwrap().is_empty());
}
