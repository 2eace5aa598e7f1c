//! Data-driven content for the passive rule engine.
//!
//! This crate turns authored data files into the oracles the engine queries:
//! - Skill databases (RON) with passive tags embedded in free-text notes
//! - Equipment databases (RON) with params and trait tables
//! - System tables (TOML) with domain sizes and display settings
//!
//! Notes are parsed into rule tables once at load time; the engine never
//! re-reads raw text.

pub mod database;
pub mod note;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use database::{
    EquipDatabase, EquipKindSpec, EquipRecord, EquipSpec, SkillDatabase, SkillRecord, SkillSpec,
    SwitchBoard, SystemTables,
};
pub use note::extract_note_tags;

#[cfg(feature = "loaders")]
pub use loaders::{ContentBundle, ContentFactory, load_equips, load_skills, load_system};
