//! Compute and print a battler's decorated stats.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use passive_core::{
    BaseParam, BaseStatsProvider, BattlerView, ElementId, ExtraParam, SpecialParam, StateId,
};
use passive_content::ContentFactory;

use crate::scenario::load_scenario;

/// Compute a battler's decorated stats from a scenario file
#[derive(Parser)]
pub struct Stats {
    /// Data directory containing skills.ron, equips.ron, system.toml
    #[arg(short, long, value_name = "DIR")]
    data: PathBuf,

    /// Battler scenario file (RON)
    #[arg(short, long, value_name = "FILE")]
    scenario: PathBuf,
}

impl Stats {
    pub fn execute(self) -> Result<()> {
        let bundle = ContentFactory::new(&self.data).load_all()?;
        tracing::info!(
            skills = bundle.skills.len(),
            equips = bundle.equips.len(),
            "databases loaded"
        );

        let (battler, switches) = load_scenario(&self.scenario)?;
        let engine = bundle.engine(&switches);

        println!(
            "{}",
            style(format!("Battler {}", battler.id().0)).bold().underlined()
        );
        println!(
            "  hp {:>4.0}%   mp {:>4.0}%   tp {:>4.0}%",
            battler.hp_rate() * 100.0,
            battler.mp_rate() * 100.0,
            battler.tp_rate() * 100.0
        );
        for &skill in battler.known_skills() {
            let name = passive_core::SkillOracle::name(&bundle.skills, skill).unwrap_or("?");
            println!("  knows {:>4}  {}", skill.0, name);
        }

        println!("\n{}", style("Base parameters").bold());
        for param in BaseParam::ALL {
            let base = battler.param_base(param) + battler.param_plus(param);
            let decorated =
                engine.param_base(&battler, param)? + engine.param_plus(&battler, param)?;
            print_row(&param.to_string(), base as f64, decorated as f64, 0);
        }

        println!("\n{}", style("Extra parameters").bold());
        for param in ExtraParam::ALL {
            let base = battler.xparam(param);
            let decorated = engine.xparam(&battler, param)?;
            print_row(&param.to_string(), base, decorated, 3);
        }

        println!("\n{}", style("Special parameters").bold());
        for param in SpecialParam::ALL {
            let base = battler.sparam(param);
            let decorated = engine.sparam(&battler, param)?;
            print_row(&param.to_string(), base, decorated, 3);
        }

        println!("\n{}", style("Element rates").bold());
        for id in 1..=bundle.system.elements {
            let element = ElementId(id);
            let base = battler.element_rate(element);
            let decorated = engine.element_rate(&battler, element)?;
            print_row(&format!("element {id:02}"), base, decorated, 3);
        }

        println!("\n{}", style("States").bold());
        for id in 1..=bundle.system.states {
            let state = StateId(id);
            let base = battler.state_rate(state);
            let decorated = engine.state_rate(&battler, state)?;
            if decorated != base {
                print_row(&format!("state {id:04} rate"), base, decorated, 3);
            }
        }
        let resists = engine.state_resist_set(&battler)?;
        if !resists.is_empty() {
            println!(
                "  immune to: {}",
                resists
                    .iter()
                    .map(|s| s.0.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        let attack_states = engine.attack_states(&battler)?;
        for state in attack_states {
            println!(
                "  attacks inflict {:04} at {:.0}%",
                state.0,
                engine.attack_states_rate(&battler, state)? * 100.0
            );
        }

        println!("\n{}", style("Battle behavior").bold());
        println!("  attack times add : {}", engine.attack_times_add(&battler)?);
        let action_plus = engine.action_plus_set(&battler)?;
        if !action_plus.is_empty() {
            println!(
                "  extra actions    : {}",
                action_plus
                    .iter()
                    .map(|c| format!("{:.0}%", c * 100.0))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        let skill_types = engine.added_skill_types(&battler)?;
        if !skill_types.is_empty() {
            println!(
                "  skill types      : {}",
                skill_types
                    .iter()
                    .map(|t| t.0.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        for (label, on) in [
            ("dual wield", engine.is_dual_wield(&battler)?),
            ("auto battle", engine.is_auto_battle(&battler)?),
            ("guard", engine.is_guard(&battler)?),
            ("substitute", engine.is_substitute(&battler)?),
            ("preserve tp", engine.is_preserve_tp(&battler)?),
        ] {
            if on {
                println!("  {label}");
            }
        }

        Ok(())
    }
}

fn print_row(label: &str, base: f64, decorated: f64, precision: usize) {
    let delta = decorated - base;
    let line = format!(
        "  {label:<14} {base:>9.precision$} -> {decorated:>9.precision$}",
        precision = precision
    );
    if delta.abs() > f64::EPSILON {
        println!("{}", style(line).green());
    } else {
        println!("{line}");
    }
}
