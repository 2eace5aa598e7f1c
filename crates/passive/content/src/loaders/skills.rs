//! Skill database loader.

use std::path::Path;

use crate::database::{SkillDatabase, SkillSpec};
use crate::loaders::{LoadResult, read_file};

/// Loads a skill database from a RON file.
///
/// File format: a RON list of skill entries.
///
/// Example:
/// ```ron
/// [
///     (
///         id: 101,
///         name: "Iron Wall",
///         skill_type: 2,
///         note: "<passivePBST3:25%>",
///     ),
/// ]
/// ```
pub fn load_skills(path: &Path) -> LoadResult<SkillDatabase> {
    let content = read_file(path)?;
    let specs: Vec<SkillSpec> = ron::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse skill RON at {:?}: {}", path, e))?;
    Ok(SkillDatabase::from_specs(specs))
}
