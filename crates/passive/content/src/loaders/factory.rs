//! Factory for loading a complete data directory.

use std::path::{Path, PathBuf};

use passive_core::{
    EquipOracle, Env, PassiveEnv, PassiveRuleEngine, SkillOracle, SwitchOracle, TablesOracle,
};

use crate::database::{EquipDatabase, SkillDatabase, SystemTables};
use crate::loaders::{LoadResult, equips, skills, system};

/// Builds databases from the content files in one data directory.
///
/// Expected directory structure:
/// ```text
/// data/
///   ├── skills.ron
///   ├── equips.ron
///   └── system.toml
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn skills_path(&self) -> PathBuf {
        self.data_dir.join("skills.ron")
    }

    pub fn equips_path(&self) -> PathBuf {
        self.data_dir.join("equips.ron")
    }

    pub fn system_path(&self) -> PathBuf {
        self.data_dir.join("system.toml")
    }

    pub fn load_skills(&self) -> LoadResult<SkillDatabase> {
        skills::load_skills(&self.skills_path())
    }

    pub fn load_equips(&self) -> LoadResult<EquipDatabase> {
        equips::load_equips(&self.equips_path())
    }

    pub fn load_system(&self) -> LoadResult<SystemTables> {
        system::load_system(&self.system_path())
    }

    /// Loads every database in the directory.
    pub fn load_all(&self) -> LoadResult<ContentBundle> {
        Ok(ContentBundle {
            skills: self.load_skills()?,
            equips: self.load_equips()?,
            system: self.load_system()?,
        })
    }
}

/// All databases of one data directory, ready to back an engine.
#[derive(Clone, Debug)]
pub struct ContentBundle {
    pub skills: SkillDatabase,
    pub equips: EquipDatabase,
    pub system: SystemTables,
}

impl ContentBundle {
    /// Bundles the databases into an oracle environment. Switches stay
    /// host-owned, so they are borrowed separately.
    pub fn env<'a>(&'a self, switches: &'a dyn SwitchOracle) -> PassiveEnv<'a> {
        Env::new(
            Some(&self.skills as &dyn SkillOracle),
            Some(&self.equips as &dyn EquipOracle),
            Some(&self.system as &dyn TablesOracle),
            Some(switches),
        )
    }

    /// Builds a rule engine over these databases, applying the display
    /// settings from the system file.
    pub fn engine<'a>(&'a self, switches: &'a dyn SwitchOracle) -> PassiveRuleEngine<'a> {
        PassiveRuleEngine::with_display(self.env(switches), self.system.display)
    }
}
