//! Lint content databases for tag problems.
//!
//! Rule parsing is deliberately silent about typos at runtime (a bad tag
//! just contributes nothing), so this command is where authors find out
//! about them.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use passive_core::{PassiveRule, TAG_PREFIX};
use passive_content::{ContentFactory, SkillRecord, SystemTables};

/// Lint databases for unrecognized or out-of-domain passive tags
#[derive(Parser)]
pub struct Check {
    /// Data directory containing skills.ron, equips.ron, system.toml
    #[arg(short, long, value_name = "DIR")]
    data: PathBuf,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let bundle = ContentFactory::new(&self.data).load_all()?;
        tracing::info!(skills = bundle.skills.len(), "checking skill notes");

        let mut issues = 0;
        for record in bundle.skills.iter() {
            issues += check_record(record, &bundle.system);
        }

        if issues > 0 {
            anyhow::bail!("{issues} tag issue(s) found");
        }
        println!("{}", style("all passive tags look good").green());
        Ok(())
    }
}

fn check_record(record: &SkillRecord, system: &SystemTables) -> usize {
    let mut issues = 0;
    for (name, payload) in record.note_tags() {
        if !name.starts_with(TAG_PREFIX) {
            continue;
        }
        match PassiveRule::parse(&name, &payload) {
            None => {
                issues += 1;
                warn(record, &format!("unrecognized or malformed tag <{name}:{payload}>"));
            }
            Some(rule) => {
                if let Some(problem) = domain_issue(&rule, system) {
                    issues += 1;
                    warn(record, &format!("<{name}> {problem}"));
                }
            }
        }
    }
    issues
}

/// A recognized rule pointing at an id the database does not define.
fn domain_issue(rule: &PassiveRule, system: &SystemTables) -> Option<String> {
    match rule {
        PassiveRule::StateScale { state, .. }
        | PassiveRule::StateOffset { state, .. }
        | PassiveRule::StateResist { state }
        | PassiveRule::AttackState { state, .. }
            if state.0 == 0 || state.0 > system.states =>
        {
            Some(format!(
                "references state {} outside 1..={}",
                state.0, system.states
            ))
        }
        PassiveRule::SkillTypeGrant { stype } if stype.0 == 0 || stype.0 > system.skill_types => {
            Some(format!(
                "references skill type {} outside 1..={}",
                stype.0, system.skill_types
            ))
        }
        PassiveRule::ElementScale { element, .. } | PassiveRule::ElementOffset { element, .. }
            if element.0 == 0 || element.0 > system.elements =>
        {
            Some(format!(
                "references element {} outside 1..={}",
                element.0, system.elements
            ))
        }
        _ => None,
    }
}

fn warn(record: &SkillRecord, message: &str) {
    println!(
        "{} skill {:>4} {:<20} {}",
        style("warning:").yellow().bold(),
        record.id.0,
        record.name,
        message
    );
}
