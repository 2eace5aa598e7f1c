//! Content loaders for reading game databases from files.
//!
//! Loaders convert RON/TOML files into the database types in
//! [`crate::database`], which in turn implement the core oracle traits.

pub mod equips;
pub mod factory;
pub mod skills;
pub mod system;

pub use equips::load_equips;
pub use factory::{ContentBundle, ContentFactory};
pub use skills::load_skills;
pub use system::load_system;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
