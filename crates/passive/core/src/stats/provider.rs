//! Host-side battler surfaces the rule engine decorates.
//!
//! The engine never owns battler state. The host exposes two capabilities:
//! a [`BattlerView`] over live state (resources, known skills, equipment)
//! and a [`BaseStatsProvider`] for the host's own, undecorated derived-value
//! computations. Every engine query composes the provider's value with rule
//! contributions; the provider is wrapped, never replaced.

use crate::ids::{ArmorTypeId, BattlerId, ElementId, EquipId, SkillId, SkillTypeId, StateId, WeaponTypeId};
use crate::stats::params::{BaseParam, ExtraParam, SpecialParam};

/// Read-only view of a battler's live state.
///
/// Resource fractions are in `[0, 1]`. Conditions are evaluated against this
/// view at query time, so the host must answer with current values.
pub trait BattlerView {
    /// Stable identity of this battler, used to key the skill-type cache.
    fn id(&self) -> BattlerId;

    /// Skills the battler currently knows, in learn order.
    fn known_skills(&self) -> &[SkillId];

    /// Items currently equipped, empty slots omitted.
    fn equipped(&self) -> &[EquipId];

    /// Current HP as a fraction of maximum.
    fn hp_rate(&self) -> f64;

    /// Current MP as a fraction of maximum.
    fn mp_rate(&self) -> f64;

    /// Current TP as a fraction of maximum.
    fn tp_rate(&self) -> f64;

    /// Whether the battler is currently affected by the given state.
    fn is_state_affected(&self, state: StateId) -> bool;

    /// Whether the battler can currently act (gates guard/substitute flags).
    fn can_move(&self) -> bool;
}

/// The host's own derived-value computations, before passive contributions.
///
/// Defaults are the neutral element of each category, so a minimal host only
/// implements what it actually stores: 0 for additive integer and extra-rate
/// categories, 1.0 for multiplicative rates, empty sets, `false` flags.
pub trait BaseStatsProvider {
    /// Stored base value of an integer parameter (class curve, growth).
    fn param_base(&self, param: BaseParam) -> i32;

    /// Flat additions to an integer parameter (equipment stats).
    fn param_plus(&self, _param: BaseParam) -> i32 {
        0
    }

    /// Extra-parameter rate from the host's own trait sources.
    fn xparam(&self, _param: ExtraParam) -> f64 {
        0.0
    }

    /// Special-parameter rate from the host's own trait sources.
    fn sparam(&self, _param: SpecialParam) -> f64 {
        1.0
    }

    /// Element effectiveness rate from the host's own trait sources.
    fn element_rate(&self, _element: ElementId) -> f64 {
        1.0
    }

    /// State susceptibility rate from the host's own trait sources.
    fn state_rate(&self, _state: StateId) -> f64 {
        1.0
    }

    /// States the host already marks as fully resisted.
    fn state_resist_set(&self) -> Vec<StateId> {
        Vec::new()
    }

    /// States the host's normal attacks already inflict.
    fn attack_states(&self) -> Vec<StateId> {
        Vec::new()
    }

    /// Host-side application rate for an attack-inflicted state.
    fn attack_states_rate(&self, _state: StateId) -> f64 {
        0.0
    }

    /// Host-side bonus attack count.
    fn attack_times_add(&self) -> i32 {
        0
    }

    /// Skill types the host already grants (class traits, equipment).
    fn added_skill_types(&self) -> Vec<SkillTypeId> {
        Vec::new()
    }

    /// Host-side extra-action probabilities.
    fn action_plus_set(&self) -> Vec<f64> {
        Vec::new()
    }

    fn is_dual_wield(&self) -> bool {
        false
    }

    fn is_auto_battle(&self) -> bool {
        false
    }

    fn is_guard(&self) -> bool {
        false
    }

    fn is_substitute(&self) -> bool {
        false
    }

    fn is_preserve_tp(&self) -> bool {
        false
    }

    /// Whether the host already permits equipping the given weapon type.
    fn can_equip_weapon_type(&self, _wtype: WeaponTypeId) -> bool {
        false
    }

    /// Whether the host already permits equipping the given armor type.
    fn can_equip_armor_type(&self, _atype: ArmorTypeId) -> bool {
        false
    }
}

/// The full battler surface the engine decorates: live view plus base stats.
pub trait HostBattler: BattlerView + BaseStatsProvider {}

impl<T: BattlerView + BaseStatsProvider> HostBattler for T {}
