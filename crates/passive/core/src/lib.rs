//! Deterministic passive-skill rule engine.
//!
//! Skills carry declarative tags in their note metadata (`<passivePBST2:50%>`,
//! `<passiveDUAL>`, ...). This crate parses those tags into typed rule tables
//! and evaluates them against live battler state, decorating the host's own
//! derived-value queries: base/extra/special parameters, element and state
//! rates, immunity and attack-state sets, skill-type grants, and behavior
//! flags. The host supplies all data through the oracle traits in [`env`] and
//! the battler surfaces in [`stats`]; the engine holds nothing but a
//! per-battler skill-type cache.
pub mod config;
pub mod engine;
pub mod env;
pub mod ids;
pub mod rules;
pub mod stats;

pub use config::{DisplayConfig, PASSIVE_NOTE_MARKER};
pub use engine::PassiveRuleEngine;
pub use env::{
    EquipDefinition, EquipOracle, EquipType, Env, OracleError, PassiveEnv, SkillOracle,
    SwitchOracle, TablesOracle,
};
pub use ids::{
    ArmorTypeId, BattlerId, ElementId, EquipId, SkillId, SkillTypeId, StateId, SwitchId,
    WeaponTypeId,
};
pub use rules::{Activation, BoostValue, ConditionKind, PassiveRule, RuleSet, TAG_PREFIX, TagName};
pub use stats::{
    BaseParam, BaseStatsProvider, BattlerView, BehaviorFlags, ExtraParam, HostBattler,
    ParamFamily, SpecialParam,
};
