//! Equipment definitions and the oracle that serves them.

use crate::ids::{ArmorTypeId, EquipId, WeaponTypeId};
use crate::stats::params::{BaseParam, ExtraParam, SpecialParam};

/// Which equipment category an item belongs to, with its type id.
///
/// Mastery and per-type boost rules key on this: a rule for weapon type 1
/// applies to every equipped item whose `EquipType` is `Weapon(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipType {
    Weapon(WeaponTypeId),
    Armor(ArmorTypeId),
}

/// Definition of one equippable item.
///
/// `params` are the item's flat base-parameter grants. The trait tables hold
/// the item's extra/special-parameter rates; mastery rules scale their
/// per-slot sums, so the same slot may appear more than once.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipDefinition {
    pub id: EquipId,
    pub equip_type: EquipType,
    pub params: [i32; 8],
    pub extra_traits: Vec<(ExtraParam, f64)>,
    pub special_traits: Vec<(SpecialParam, f64)>,
}

impl EquipDefinition {
    pub fn new(id: EquipId, equip_type: EquipType) -> Self {
        Self {
            id,
            equip_type,
            params: [0; 8],
            extra_traits: Vec::new(),
            special_traits: Vec::new(),
        }
    }

    /// The item's flat grant for one base parameter.
    pub fn param(&self, param: BaseParam) -> i32 {
        self.params[param.index()]
    }

    /// Sum of the item's extra-parameter traits for one slot.
    pub fn extra_trait_sum(&self, param: ExtraParam) -> f64 {
        self.extra_traits
            .iter()
            .filter(|(p, _)| *p == param)
            .map(|(_, value)| value)
            .sum()
    }

    /// Sum of the item's special-parameter traits for one slot.
    pub fn special_trait_sum(&self, param: SpecialParam) -> f64 {
        self.special_traits
            .iter()
            .filter(|(p, _)| *p == param)
            .map(|(_, value)| value)
            .sum()
    }
}

/// Read-only access to equipment definitions.
pub trait EquipOracle: Send + Sync {
    /// Looks up an item definition. Unknown ids are skipped by the engine.
    fn definition(&self, id: EquipId) -> Option<&EquipDefinition>;

    /// Display name, if the oracle carries one.
    fn name(&self, _id: EquipId) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_sums_accumulate_duplicate_slots() {
        let mut def = EquipDefinition::new(EquipId(1), EquipType::Weapon(WeaponTypeId(1)));
        def.extra_traits = vec![(ExtraParam::Hit, 0.25), (ExtraParam::Hit, 0.5)];
        def.special_traits = vec![(SpecialParam::Tgr, 1.25)];
        assert_eq!(def.extra_trait_sum(ExtraParam::Hit), 0.75);
        assert_eq!(def.extra_trait_sum(ExtraParam::Eva), 0.0);
        assert_eq!(def.special_trait_sum(SpecialParam::Tgr), 1.25);
    }
}
