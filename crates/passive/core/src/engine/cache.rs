//! Per-battler cache of granted skill types.
//!
//! Skill-type grants are the one category queried on every menu redraw, so
//! they are not recomputed per query. Each battler's entry is either fresh
//! (holding the sorted granted set) or stale; a stale entry rebuilds on the
//! next read. Interior mutability is safe here: the engine cooperates with a
//! single-threaded host loop and is not `Sync`.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::env::OracleError;
use crate::ids::{BattlerId, SkillTypeId};

#[derive(Clone, Debug)]
enum CacheEntry {
    /// Rebuild on next read.
    Stale,
    /// Sorted set of granted skill types.
    Fresh(Vec<SkillTypeId>),
}

/// Engine-owned cache, keyed by battler identity.
#[derive(Debug, Default)]
pub(crate) struct SkillTypeCaches {
    entries: RefCell<HashMap<BattlerId, CacheEntry>>,
}

impl SkillTypeCaches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one battler's entry stale. A battler never seen before is
    /// already (implicitly) stale, so this is always safe to call.
    pub fn mark_stale(&self, battler: BattlerId) {
        self.entries.borrow_mut().insert(battler, CacheEntry::Stale);
    }

    /// Drops every entry, forcing rebuilds across all battlers.
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    /// Returns the fresh set for a battler, rebuilding it if needed.
    pub fn get_or_rebuild<F>(
        &self,
        battler: BattlerId,
        rebuild: F,
    ) -> Result<Vec<SkillTypeId>, OracleError>
    where
        F: FnOnce() -> Result<Vec<SkillTypeId>, OracleError>,
    {
        if let Some(CacheEntry::Fresh(types)) = self.entries.borrow().get(&battler) {
            return Ok(types.clone());
        }
        let types = rebuild()?;
        self.entries
            .borrow_mut()
            .insert(battler, CacheEntry::Fresh(types.clone()));
        Ok(types)
    }
}
