//! Party-level battle-start rates.
//!
//! Preemptive and surprise rates belong to the party, not one battler; the
//! host computes its own base rate from troop agility and passes it in with
//! the battle members.

use super::PassiveRuleEngine;
use crate::env::OracleError;
use crate::rules::table::PassiveRule;
use crate::stats::provider::BattlerView;

impl PassiveRuleEngine<'_> {
    /// Preemptive-strike rate: every member's bonuses add onto the host's
    /// base rate, clamped into `[0, 1]`.
    pub fn rate_preemptive(
        &self,
        base: f64,
        members: &[&dyn BattlerView],
    ) -> Result<f64, OracleError> {
        let mut rate = base;
        for member in members {
            self.for_each_rule(*member, |rule| {
                if let PassiveRule::Preemptive { bonus } = rule {
                    rate += bonus;
                }
            })?;
        }
        Ok(rate.clamp(0.0, 1.0))
    }

    /// Surprised rate: each tag scales the remaining rate down by its
    /// fraction, so two 50% reductions leave a quarter of the base rate.
    /// Clamped into `[0, 1]`.
    pub fn rate_surprise(
        &self,
        base: f64,
        members: &[&dyn BattlerView],
    ) -> Result<f64, OracleError> {
        let mut rate = base;
        for member in members {
            self.for_each_rule(*member, |rule| {
                if let PassiveRule::AntiSurprise { reduction } = rule {
                    rate -= reduction * rate;
                }
            })?;
        }
        Ok(rate.clamp(0.0, 1.0))
    }
}
