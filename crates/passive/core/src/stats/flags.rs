//! Behavior flags granted by presence-only passive tags.

use bitflags::bitflags;

bitflags! {
    /// Boolean battler behaviors a passive skill can switch on.
    ///
    /// Flags are set-unioned across all known skills; a flag is active if any
    /// one skill grants it. The engine never clears a flag the host already
    /// reports on its own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct BehaviorFlags: u8 {
        /// Wield a weapon in each hand instead of weapon + shield.
        const DUAL_WIELD = 1 << 0;
        /// Act automatically in battle.
        const AUTO_BATTLE = 1 << 1;
        /// Permanently guarding (requires the battler to be able to move).
        const GUARD = 1 << 2;
        /// Takes allies' hits in their stead (requires the battler to be able to move).
        const SUBSTITUTE = 1 << 3;
        /// TP carries over between battles.
        const PRESERVE_TP = 1 << 4;
    }
}
