//! Loaded databases and the oracle implementations they back.
//!
//! Spec structs are the raw serde shapes of the data files; records are the
//! resolved forms with note tags already parsed into rule tables. Parsing
//! happens once at load, so queries never touch note text again.

use std::collections::{BTreeMap, BTreeSet};

use passive_core::{
    ArmorTypeId, DisplayConfig, EquipDefinition, EquipId, EquipOracle, EquipType, ExtraParam,
    PASSIVE_NOTE_MARKER, RuleSet, SkillId, SkillOracle, SkillTypeId, SpecialParam, SwitchId,
    SwitchOracle, TablesOracle, WeaponTypeId,
};

use crate::note::extract_note_tags;

// ============================================================================
// Skills
// ============================================================================

/// Raw skill entry as written in the data file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSpec {
    pub id: u16,
    pub name: String,
    pub skill_type: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

/// A skill with its note parsed into a rule table.
#[derive(Clone, Debug)]
pub struct SkillRecord {
    pub id: SkillId,
    pub name: String,
    pub skill_type: SkillTypeId,
    pub note: String,
    rules: RuleSet,
    has_passive_note: bool,
}

impl SkillRecord {
    pub fn from_spec(spec: SkillSpec) -> Self {
        let tags = extract_note_tags(&spec.note);
        let rules = RuleSet::parse(tags.iter().map(|(name, payload)| (name.as_str(), payload.as_str())));
        let has_passive_note = spec.note.contains(PASSIVE_NOTE_MARKER);
        Self {
            id: SkillId(spec.id),
            name: spec.name,
            skill_type: SkillTypeId(spec.skill_type),
            note: spec.note,
            rules,
            has_passive_note,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn has_passive_note(&self) -> bool {
        self.has_passive_note
    }

    /// The raw note tags, re-extracted for diagnostics.
    pub fn note_tags(&self) -> Vec<(String, String)> {
        extract_note_tags(&self.note)
    }
}

/// All loaded skills, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct SkillDatabase {
    records: BTreeMap<SkillId, SkillRecord>,
}

impl SkillDatabase {
    pub fn from_specs(specs: Vec<SkillSpec>) -> Self {
        Self {
            records: specs
                .into_iter()
                .map(SkillRecord::from_spec)
                .map(|record| (record.id, record))
                .collect(),
        }
    }

    pub fn get(&self, id: SkillId) -> Option<&SkillRecord> {
        self.records.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SkillOracle for SkillDatabase {
    fn rules(&self, id: SkillId) -> Option<&RuleSet> {
        self.get(id).map(SkillRecord::rules)
    }

    fn skill_type(&self, id: SkillId) -> Option<SkillTypeId> {
        self.get(id).map(|record| record.skill_type)
    }

    fn has_passive_note(&self, id: SkillId) -> bool {
        self.get(id).is_some_and(SkillRecord::has_passive_note)
    }

    fn name(&self, id: SkillId) -> Option<&str> {
        self.get(id).map(|record| record.name.as_str())
    }
}

// ============================================================================
// Equipment
// ============================================================================

/// Raw equipment entry as written in the data file.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipSpec {
    pub id: u16,
    pub name: String,
    pub kind: EquipKindSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub params: [i32; 8],
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_traits: Vec<(ExtraParam, f64)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub special_traits: Vec<(SpecialParam, f64)>,
}

/// Equipment category in the data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipKindSpec {
    Weapon { wtype: u16 },
    Armor { atype: u16 },
}

/// A loaded equipment item: core definition plus display name.
#[derive(Clone, Debug)]
pub struct EquipRecord {
    pub name: String,
    pub definition: EquipDefinition,
}

impl EquipRecord {
    pub fn from_spec(spec: EquipSpec) -> Self {
        let equip_type = match spec.kind {
            EquipKindSpec::Weapon { wtype } => EquipType::Weapon(WeaponTypeId(wtype)),
            EquipKindSpec::Armor { atype } => EquipType::Armor(ArmorTypeId(atype)),
        };
        let mut definition = EquipDefinition::new(EquipId(spec.id), equip_type);
        definition.params = spec.params;
        definition.extra_traits = spec.extra_traits;
        definition.special_traits = spec.special_traits;
        Self {
            name: spec.name,
            definition,
        }
    }
}

/// All loaded equipment, keyed by id.
#[derive(Clone, Debug, Default)]
pub struct EquipDatabase {
    records: BTreeMap<EquipId, EquipRecord>,
}

impl EquipDatabase {
    pub fn from_specs(specs: Vec<EquipSpec>) -> Self {
        Self {
            records: specs
                .into_iter()
                .map(EquipRecord::from_spec)
                .map(|record| (record.definition.id, record))
                .collect(),
        }
    }

    pub fn get(&self, id: EquipId) -> Option<&EquipRecord> {
        self.records.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquipRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EquipOracle for EquipDatabase {
    fn definition(&self, id: EquipId) -> Option<&EquipDefinition> {
        self.get(id).map(|record| &record.definition)
    }

    fn name(&self, id: EquipId) -> Option<&str> {
        self.get(id).map(|record| record.name.as_str())
    }
}

// ============================================================================
// System tables
// ============================================================================

/// Domain sizes and display settings from the system file.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemTables {
    pub elements: u16,
    pub states: u16,
    pub skill_types: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub display: DisplayConfig,
}

impl Default for SystemTables {
    fn default() -> Self {
        Self {
            elements: 0,
            states: 0,
            skill_types: 0,
            display: DisplayConfig::default(),
        }
    }
}

impl TablesOracle for SystemTables {
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

// ============================================================================
// Switches
// ============================================================================

/// A plain switch store for hosts that track switches as a set of on-ids.
#[derive(Clone, Debug, Default)]
pub struct SwitchBoard {
    on: BTreeSet<SwitchId>,
}

impl SwitchBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_on_ids(ids: impl IntoIterator<Item = u16>) -> Self {
        Self {
            on: ids.into_iter().map(SwitchId).collect(),
        }
    }

    pub fn set(&mut self, id: SwitchId, value: bool) {
        if value {
            self.on.insert(id);
        } else {
            self.on.remove(&id);
        }
    }
}

impl SwitchOracle for SwitchBoard {
    fn value(&self, id: SwitchId) -> bool {
        self.on.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passive_core::{BaseParam, BoostValue, PassiveRule};

    #[test]
    fn skill_records_parse_their_notes_once() {
        let db = SkillDatabase::from_specs(vec![SkillSpec {
            id: 101,
            name: "Iron Wall".to_string(),
            skill_type: 1,
            note: "Raises DEF while learned.\n<passivePBST3:25%>".to_string(),
        }]);

        let record = db.get(SkillId(101)).unwrap();
        assert!(record.has_passive_note());
        assert_eq!(
            record.rules().iter().collect::<Vec<_>>(),
            vec![&PassiveRule::ParamBoost {
                param: BaseParam::Def,
                value: BoostValue::Percent(25),
                when: None,
            }]
        );
        assert_eq!(SkillOracle::name(&db, SkillId(101)), Some("Iron Wall"));
    }

    #[test]
    fn notes_without_tags_stay_inert() {
        let db = SkillDatabase::from_specs(vec![SkillSpec {
            id: 1,
            name: "Slash".to_string(),
            skill_type: 1,
            note: String::new(),
        }]);
        let record = db.get(SkillId(1)).unwrap();
        assert!(!record.has_passive_note());
        assert!(record.rules().is_empty());
    }

    #[test]
    fn equip_records_resolve_their_type() {
        let db = EquipDatabase::from_specs(vec![EquipSpec {
            id: 7,
            name: "Longsword".to_string(),
            kind: EquipKindSpec::Weapon { wtype: 1 },
            params: [0, 0, 12, 0, 0, 0, 0, 0],
            extra_traits: vec![(ExtraParam::Hit, 0.05)],
            special_traits: Vec::new(),
        }]);

        let def = db.definition(EquipId(7)).unwrap();
        assert_eq!(def.equip_type, EquipType::Weapon(WeaponTypeId(1)));
        assert_eq!(def.param(BaseParam::Atk), 12);
        assert_eq!(EquipOracle::name(&db, EquipId(7)), Some("Longsword"));
    }

    #[test]
    fn switchboard_reads_unset_switches_as_off() {
        let mut switches = SwitchBoard::from_on_ids([21]);
        assert!(switches.value(SwitchId(21)));
        assert!(!switches.value(SwitchId(22)));
        switches.set(SwitchId(21), false);
        assert!(!switches.value(SwitchId(21)));
    }
}
