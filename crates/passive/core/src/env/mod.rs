//! Traits describing read-only host data.
//!
//! Oracles expose skill records, equipment definitions, domain-size tables,
//! and game switches. The [`Env`] aggregate bundles them so the engine can
//! access everything it needs without hard coupling to concrete
//! implementations.

mod error;
pub mod equips;
pub mod skills;
pub mod tables;

pub use equips::{EquipDefinition, EquipOracle, EquipType};
pub use error::OracleError;
pub use skills::SkillOracle;
pub use tables::{SwitchOracle, TablesOracle};

/// Aggregates the read-only oracles required by the engine's queries.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, S, E, T, W>
where
    S: SkillOracle + ?Sized,
    E: EquipOracle + ?Sized,
    T: TablesOracle + ?Sized,
    W: SwitchOracle + ?Sized,
{
    skills: Option<&'a S>,
    equips: Option<&'a E>,
    tables: Option<&'a T>,
    switches: Option<&'a W>,
}

/// Trait-object form used by the engine itself.
pub type PassiveEnv<'a> = Env<
    'a,
    dyn SkillOracle + 'a,
    dyn EquipOracle + 'a,
    dyn TablesOracle + 'a,
    dyn SwitchOracle + 'a,
>;

impl<'a, S, E, T, W> Env<'a, S, E, T, W>
where
    S: SkillOracle + ?Sized,
    E: EquipOracle + ?Sized,
    T: TablesOracle + ?Sized,
    W: SwitchOracle + ?Sized,
{
    pub fn new(
        skills: Option<&'a S>,
        equips: Option<&'a E>,
        tables: Option<&'a T>,
        switches: Option<&'a W>,
    ) -> Self {
        Self {
            skills,
            equips,
            tables,
            switches,
        }
    }

    pub fn with_all(skills: &'a S, equips: &'a E, tables: &'a T, switches: &'a W) -> Self {
        Self::new(Some(skills), Some(equips), Some(tables), Some(switches))
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            equips: None,
            tables: None,
            switches: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a S, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the EquipOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::EquipsNotAvailable` if no equipment oracle was provided.
    pub fn equips(&self) -> Result<&'a E, OracleError> {
        self.equips.ok_or(OracleError::EquipsNotAvailable)
    }

    /// Returns the TablesOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TablesNotAvailable` if no tables oracle was provided.
    pub fn tables(&self) -> Result<&'a T, OracleError> {
        self.tables.ok_or(OracleError::TablesNotAvailable)
    }

    /// Returns the SwitchOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SwitchesNotAvailable` if no switch oracle was provided.
    pub fn switches(&self) -> Result<&'a W, OracleError> {
        self.switches.ok_or(OracleError::SwitchesNotAvailable)
    }
}

impl<'a, S, E, T, W> Env<'a, S, E, T, W>
where
    S: SkillOracle + 'a,
    E: EquipOracle + 'a,
    T: TablesOracle + 'a,
    W: SwitchOracle + 'a,
{
    /// Converts this environment into the trait-object based [`PassiveEnv`].
    pub fn as_passive_env(&self) -> PassiveEnv<'a> {
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let equips: Option<&'a dyn EquipOracle> = self.equips.map(|equips| equips as _);
        let tables: Option<&'a dyn TablesOracle> = self.tables.map(|tables| tables as _);
        let switches: Option<&'a dyn SwitchOracle> = self.switches.map(|switches| switches as _);
        Env::new(skills, equips, tables, switches)
    }
}
