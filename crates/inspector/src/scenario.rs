//! Battler scenario files.
//!
//! A scenario pins down everything the engine would normally read from a
//! live battler: known skills, equipment, current resources, states, and the
//! host-side base values. Stored as RON next to the data directory.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use passive_core::{
    BaseParam, BaseStatsProvider, BattlerId, BattlerView, EquipId, ExtraParam, SkillId,
    SpecialParam, StateId,
};
use passive_content::SwitchBoard;

/// Raw scenario file shape.
///
/// Example:
/// ```ron
/// (
///     battler: (
///         id: 1,
///         known_skills: [101, 102],
///         equipped: [7],
///         base_params: [450, 120, 20, 16, 18, 14, 22, 10],
///         hp_rate: 0.42,
///     ),
///     switches_on: [21],
/// )
/// ```
#[derive(Debug, Deserialize)]
pub struct ScenarioSpec {
    pub battler: BattlerSpec,
    #[serde(default)]
    pub switches_on: Vec<u16>,
}

#[derive(Debug, Deserialize)]
pub struct BattlerSpec {
    pub id: u32,
    #[serde(default)]
    pub known_skills: Vec<u16>,
    #[serde(default)]
    pub equipped: Vec<u16>,
    pub base_params: [i32; 8],
    #[serde(default)]
    pub plus_params: [i32; 8],
    #[serde(default)]
    pub xparams: [f64; 10],
    #[serde(default = "neutral_sparams")]
    pub sparams: [f64; 10],
    #[serde(default = "full")]
    pub hp_rate: f64,
    #[serde(default = "full")]
    pub mp_rate: f64,
    #[serde(default)]
    pub tp_rate: f64,
    #[serde(default)]
    pub states: Vec<u16>,
    #[serde(default = "yes")]
    pub can_move: bool,
}

fn full() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

fn neutral_sparams() -> [f64; 10] {
    [1.0; 10]
}

/// A scenario battler: implements the host surfaces from stored values.
pub struct ScenarioBattler {
    id: BattlerId,
    known_skills: Vec<SkillId>,
    equipped: Vec<EquipId>,
    spec: BattlerSpec,
    states: Vec<StateId>,
}

impl ScenarioBattler {
    fn new(spec: BattlerSpec) -> Self {
        Self {
            id: BattlerId(spec.id),
            known_skills: spec.known_skills.iter().map(|&id| SkillId(id)).collect(),
            equipped: spec.equipped.iter().map(|&id| EquipId(id)).collect(),
            states: spec.states.iter().map(|&id| StateId(id)).collect(),
            spec,
        }
    }
}

impl BattlerView for ScenarioBattler {
    fn id(&self) -> BattlerId {
        self.id
    }

    fn known_skills(&self) -> &[SkillId] {
        &self.known_skills
    }

    fn equipped(&self) -> &[EquipId] {
        &self.equipped
    }

    fn hp_rate(&self) -> f64 {
        self.spec.hp_rate
    }

    fn mp_rate(&self) -> f64 {
        self.spec.mp_rate
    }

    fn tp_rate(&self) -> f64 {
        self.spec.tp_rate
    }

    fn is_state_affected(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    fn can_move(&self) -> bool {
        self.spec.can_move
    }
}

impl BaseStatsProvider for ScenarioBattler {
    fn param_base(&self, param: BaseParam) -> i32 {
        self.spec.base_params[param.index()]
    }

    fn param_plus(&self, param: BaseParam) -> i32 {
        self.spec.plus_params[param.index()]
    }

    fn xparam(&self, param: ExtraParam) -> f64 {
        self.spec.xparams[param.index()]
    }

    fn sparam(&self, param: SpecialParam) -> f64 {
        self.spec.sparams[param.index()]
    }
}

/// Loads a scenario file into a battler and its switch state.
pub fn load_scenario(path: &Path) -> Result<(ScenarioBattler, SwitchBoard)> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    let spec: ScenarioSpec = ron::from_str(&content)
        .with_context(|| format!("Failed to parse scenario RON at {}", path.display()))?;
    let switches = SwitchBoard::from_on_ids(spec.switches_on.iter().copied());
    Ok((ScenarioBattler::new(spec.battler), switches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scenario_fills_in_defaults() {
        let spec: ScenarioSpec = ron::from_str(
            "(battler: (id: 1, base_params: [100, 50, 20, 16, 18, 14, 22, 10]))",
        )
        .unwrap();
        let battler = ScenarioBattler::new(spec.battler);
        assert_eq!(battler.hp_rate(), 1.0);
        assert_eq!(battler.tp_rate(), 0.0);
        assert!(battler.can_move());
        assert_eq!(battler.sparam(SpecialParam::Tgr), 1.0);
        assert_eq!(battler.param_base(BaseParam::MaxHp), 100);
    }
}
