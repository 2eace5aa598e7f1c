//! In-memory oracles and a scriptable host battler for engine tests.
#![allow(dead_code)] // not every test binary uses every helper

use std::collections::{BTreeSet, HashMap};

use passive_core::{
    ArmorTypeId, BaseParam, BaseStatsProvider, BattlerId, BattlerView, BehaviorFlags,
    EquipDefinition, EquipId, EquipOracle, EquipType, Env, ExtraParam, PassiveEnv,
    PassiveRuleEngine, RuleSet, SkillId, SkillOracle, SkillTypeId, SpecialParam, StateId,
    SwitchId, SwitchOracle, TablesOracle, WeaponTypeId,
};

/// Skill records keyed by id, built from raw tag pairs like real content.
#[derive(Default)]
pub struct SkillBook {
    entries: HashMap<SkillId, (RuleSet, bool)>,
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a skill whose note carried the given `(name, payload)` tags.
    pub fn add(&mut self, id: u16, tags: &[(&str, &str)]) {
        let has_marker = tags.iter().any(|(name, _)| name.starts_with("passive"));
        let rules = RuleSet::parse(tags.iter().copied());
        self.entries.insert(SkillId(id), (rules, has_marker));
    }

    /// Adds a skill with no tags at all.
    pub fn add_plain(&mut self, id: u16) {
        self.add(id, &[]);
    }
}

impl SkillOracle for SkillBook {
    fn rules(&self, id: SkillId) -> Option<&RuleSet> {
        self.entries.get(&id).map(|(rules, _)| rules)
    }

    fn skill_type(&self, _id: SkillId) -> Option<SkillTypeId> {
        None
    }

    fn has_passive_note(&self, id: SkillId) -> bool {
        self.entries.get(&id).is_some_and(|(_, marker)| *marker)
    }
}

/// Equipment definitions keyed by id.
#[derive(Default)]
pub struct EquipShelf {
    entries: HashMap<EquipId, EquipDefinition>,
}

impl EquipShelf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: EquipDefinition) {
        self.entries.insert(def.id, def);
    }

    pub fn add_weapon(&mut self, id: u16, wtype: u16, params: [i32; 8]) {
        let mut def = EquipDefinition::new(EquipId(id), EquipType::Weapon(WeaponTypeId(wtype)));
        def.params = params;
        self.add(def);
    }

    pub fn add_armor(&mut self, id: u16, atype: u16, params: [i32; 8]) {
        let mut def = EquipDefinition::new(EquipId(id), EquipType::Armor(ArmorTypeId(atype)));
        def.params = params;
        self.add(def);
    }
}

impl EquipOracle for EquipShelf {
    fn definition(&self, id: EquipId) -> Option<&EquipDefinition> {
        self.entries.get(&id)
    }
}

/// Domain sizes for set-valued scans.
pub struct Tables {
    pub states: u16,
    pub skill_types: u16,
    pub elements: u16,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            states: 20,
            skill_types: 4,
            elements: 10,
        }
    }
}

impl TablesOracle for Tables {
    fn state_count(&self) -> u16 {
        self.states
    }

    fn skill_type_count(&self) -> u16 {
        self.skill_types
    }

    fn element_count(&self) -> u16 {
        self.elements
    }
}

/// Game switches, off unless listed.
#[derive(Default)]
pub struct Switches {
    on: BTreeSet<SwitchId>,
}

impl Switches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&mut self, id: u16) {
        self.on.insert(SwitchId(id));
    }
}

impl SwitchOracle for Switches {
    fn value(&self, id: SwitchId) -> bool {
        self.on.contains(&id)
    }
}

/// All oracles bundled, plus engine construction.
#[derive(Default)]
pub struct Fixture {
    pub skills: SkillBook,
    pub equips: EquipShelf,
    pub tables: Tables,
    pub switches: Switches,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn env(&self) -> PassiveEnv<'_> {
        Env::with_all(&self.skills, &self.equips, &self.tables, &self.switches).as_passive_env()
    }

    pub fn engine(&self) -> PassiveRuleEngine<'_> {
        PassiveRuleEngine::new(self.env())
    }
}

/// Host battler with scriptable state and base values.
pub struct TestHost {
    pub id: BattlerId,
    pub skills: Vec<SkillId>,
    pub equipped: Vec<EquipId>,
    pub hp: f64,
    pub mp: f64,
    pub tp: f64,
    pub states: Vec<StateId>,
    pub mobile: bool,
    pub base_params: [i32; 8],
    pub host_flags: BehaviorFlags,
}

impl TestHost {
    pub fn new(id: u32) -> Self {
        Self {
            id: BattlerId(id),
            skills: Vec::new(),
            equipped: Vec::new(),
            hp: 1.0,
            mp: 1.0,
            tp: 0.0,
            states: Vec::new(),
            mobile: true,
            base_params: [100, 50, 20, 16, 18, 14, 22, 10],
            host_flags: BehaviorFlags::empty(),
        }
    }

    pub fn knowing(id: u32, skills: &[u16]) -> Self {
        let mut host = Self::new(id);
        host.skills = skills.iter().map(|&s| SkillId(s)).collect();
        host
    }
}

impl BattlerView for TestHost {
    fn id(&self) -> BattlerId {
        self.id
    }

    fn known_skills(&self) -> &[SkillId] {
        &self.skills
    }

    fn equipped(&self) -> &[EquipId] {
        &self.equipped
    }

    fn hp_rate(&self) -> f64 {
        self.hp
    }

    fn mp_rate(&self) -> f64 {
        self.mp
    }

    fn tp_rate(&self) -> f64 {
        self.tp
    }

    fn is_state_affected(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    fn can_move(&self) -> bool {
        self.mobile
    }
}

impl BaseStatsProvider for TestHost {
    fn param_base(&self, param: BaseParam) -> i32 {
        self.base_params[param.index()]
    }

    fn xparam(&self, _param: ExtraParam) -> f64 {
        0.0
    }

    fn sparam(&self, _param: SpecialParam) -> f64 {
        1.0
    }

    fn is_dual_wield(&self) -> bool {
        self.host_flags.contains(BehaviorFlags::DUAL_WIELD)
    }

    fn is_guard(&self) -> bool {
        self.host_flags.contains(BehaviorFlags::GUARD)
    }
}
