//! Parameter families, behavior flags, and the host battler surfaces.

pub mod flags;
pub mod params;
pub mod provider;

pub use flags::BehaviorFlags;
pub use params::{BaseParam, ExtraParam, ParamFamily, SpecialParam};
pub use provider::{BaseStatsProvider, BattlerView, HostBattler};
