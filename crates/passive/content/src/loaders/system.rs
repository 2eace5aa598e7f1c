//! System tables loader.

use std::path::Path;

use crate::database::SystemTables;
use crate::loaders::{LoadResult, read_file};

/// Loads domain sizes and display settings from a TOML file.
///
/// Example:
/// ```toml
/// elements = 10
/// states = 20
/// skill_types = 4
///
/// [display]
/// show_in_battle = false
/// battle_switch = 21
/// ```
pub fn load_system(path: &Path) -> LoadResult<SystemTables> {
    let content = read_file(path)?;
    let tables: SystemTables = toml::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse system TOML at {:?}: {}", path, e))?;
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use passive_core::SwitchId;
    use std::io::Write;

    #[test]
    fn loads_tables_and_display_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "elements = 10\nstates = 20\nskill_types = 4\n\n[display]\nshow_in_battle = false\nbattle_switch = 21\n"
        )
        .unwrap();

        let tables = load_system(file.path()).unwrap();
        assert_eq!(tables.states, 20);
        assert!(!tables.display.show_in_battle);
        assert_eq!(tables.display.battle_switch, Some(SwitchId(21)));
    }

    #[test]
    fn display_section_is_optional() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "elements = 10\nstates = 20\nskill_types = 4\n").unwrap();

        let tables = load_system(file.path()).unwrap();
        assert!(tables.display.show_in_battle);
        assert_eq!(tables.display.battle_switch, None);
    }
}
