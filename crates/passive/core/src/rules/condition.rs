//! Activation conditions for conditional boost rules.
//!
//! A condition pairs a keyword with a numeric threshold and is checked
//! against the live battler view on every query; battler resources change
//! between queries, so results are never cached.

use core::str::FromStr;

use crate::ids::StateId;
use crate::stats::provider::BattlerView;

/// Condition keywords recognized in `Ex` boost payloads.
///
/// Keywords are matched exactly as written by the content author; anything
/// else fails to parse and the rule carrying it contributes nothing.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum ConditionKind {
    /// HP fraction at or above the threshold percentage.
    HpUp,
    /// HP fraction at or below the threshold percentage.
    HpLw,
    /// MP fraction at or above the threshold percentage.
    MpUp,
    /// MP fraction at or below the threshold percentage.
    MpLw,
    /// TP fraction at or above the threshold percentage.
    TpUp,
    /// TP fraction at or below the threshold percentage.
    TpLw,
    /// Currently affected by the state whose id equals the threshold.
    Stat,
}

/// A parsed condition clause: keyword plus threshold.
///
/// For resource keywords the threshold is a percentage (0–100); for
/// [`ConditionKind::Stat`] it is a state id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activation {
    pub kind: ConditionKind,
    pub threshold: i32,
}

impl Activation {
    /// Parses the two trailing segments of an `Ex` payload.
    ///
    /// The keyword must match exactly (no trimming, case-sensitive); the
    /// threshold tolerates surrounding whitespace.
    pub fn parse(keyword: &str, threshold: &str) -> Option<Self> {
        let kind = ConditionKind::from_str(keyword).ok()?;
        let threshold = threshold.trim().parse().ok()?;
        Some(Self { kind, threshold })
    }

    /// Evaluates the clause against live battler state.
    ///
    /// Resource comparisons are inclusive at the boundary on both the `UP`
    /// and `LW` sides: a battler at exactly the threshold satisfies either.
    pub fn is_met(&self, view: &impl BattlerView) -> bool {
        let fraction = f64::from(self.threshold) * 0.01;
        match self.kind {
            ConditionKind::HpUp => view.hp_rate() >= fraction,
            ConditionKind::HpLw => view.hp_rate() <= fraction,
            ConditionKind::MpUp => view.mp_rate() >= fraction,
            ConditionKind::MpLw => view.mp_rate() <= fraction,
            ConditionKind::TpUp => view.tp_rate() >= fraction,
            ConditionKind::TpLw => view.tp_rate() <= fraction,
            ConditionKind::Stat => u16::try_from(self.threshold)
                .is_ok_and(|id| view.is_state_affected(StateId(id))),
        }
    }

    /// The clause equivalent to the legacy HP-gated boost forms.
    pub fn hp_at_most(threshold: i32) -> Self {
        Self {
            kind: ConditionKind::HpLw,
            threshold,
        }
    }
}
