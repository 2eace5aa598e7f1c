//! Equipment database loader.

use std::path::Path;

use crate::database::{EquipDatabase, EquipSpec};
use crate::loaders::{LoadResult, read_file};

/// Loads an equipment database from a RON file.
///
/// File format: a RON list of weapon and armor entries. Params are in base
/// parameter slot order; trait tables pair a parameter with its rate.
///
/// Example:
/// ```ron
/// [
///     (
///         id: 7,
///         name: "Longsword",
///         kind: Weapon(wtype: 1),
///         params: [0, 0, 12, 0, 0, 0, 0, 0],
///         extra_traits: [(Hit, 0.05)],
///     ),
///     (
///         id: 21,
///         name: "Tower Shield",
///         kind: Armor(atype: 2),
///         params: [0, 0, 0, 8, 0, 0, 0, 0],
///         special_traits: [(Tgr, 1.25)],
///     ),
/// ]
/// ```
pub fn load_equips(path: &Path) -> LoadResult<EquipDatabase> {
    let content = read_file(path)?;
    let specs: Vec<EquipSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse equipment RON at {:?}: {}", path, e))?;
    Ok(EquipDatabase::from_specs(specs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use passive_core::{BaseParam, EquipId, EquipOracle, EquipType, WeaponTypeId};
    use std::io::Write;

    #[test]
    fn loads_equipment_from_a_ron_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                (
                    id: 7,
                    name: "Longsword",
                    kind: Weapon(wtype: 1),
                    params: [0, 0, 12, 0, 0, 0, 0, 0],
                    extra_traits: [(Hit, 0.05)],
                ),
                (id: 21, name: "Buckler", kind: Armor(atype: 2)),
            ]"#
        )
        .unwrap();

        let db = load_equips(file.path()).unwrap();
        assert_eq!(db.len(), 2);
        let sword = db.definition(EquipId(7)).unwrap();
        assert_eq!(sword.equip_type, EquipType::Weapon(WeaponTypeId(1)));
        assert_eq!(sword.param(BaseParam::Atk), 12);
        let buckler = db.definition(EquipId(21)).unwrap();
        assert_eq!(buckler.params, [0; 8]);
    }
}
