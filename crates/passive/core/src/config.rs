//! Engine configuration constants and display tunables.

use crate::ids::SwitchId;

/// Marker that identifies a skill note as carrying at least one passive tag.
///
/// Used only by the display filter; the aggregation queries work off the
/// parsed rule tables and never look at note text.
pub const PASSIVE_NOTE_MARKER: &str = "<passive";

/// Controls whether passive skills appear in in-battle skill lists.
///
/// Purely cosmetic: hidden skills keep contributing to every derived value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisplayConfig {
    /// Default visibility when no switch override is configured.
    pub show_in_battle: bool,

    /// Optional game switch that overrides `show_in_battle` when set.
    pub battle_switch: Option<SwitchId>,
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self {
            show_in_battle: true,
            battle_switch: None,
        }
    }

    pub fn with_switch(switch: SwitchId) -> Self {
        Self {
            show_in_battle: true,
            battle_switch: Some(switch),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::new()
    }
}
