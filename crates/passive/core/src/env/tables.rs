//! Domain-size tables and game switches.

use crate::ids::SwitchId;

/// Sizes of the host database's id domains.
///
/// Set-valued queries scan ids `1..=count`, mirroring how the host bounds
/// its own scans by database length: a rule referencing an id outside the
/// domain never reaches a result set.
pub trait TablesOracle: Send + Sync {
    /// Highest valid state id.
    fn state_count(&self) -> u16;

    /// Highest valid skill type id.
    fn skill_type_count(&self) -> u16;

    /// Highest valid element id.
    fn element_count(&self) -> u16;
}

/// Boolean game switches owned by the host.
pub trait SwitchOracle: Send + Sync {
    /// Current value of a switch; unset switches read as `false`.
    fn value(&self, id: SwitchId) -> bool;
}
