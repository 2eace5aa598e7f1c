//! Offline inspection tools for passive-skill content.
//!
//! Loads the same data files the game ships and answers two questions
//! authors keep asking: "what do this battler's stats come out to?" and
//! "did I typo a tag?".

mod commands;
mod scenario;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Stats};

/// Inspection tools for passive-skill content
#[derive(Parser)]
#[command(name = "inspector")]
#[command(about = "Inspection tools for passive-skill content", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compute a battler's decorated stats from a scenario file
    Stats(Stats),

    /// Lint databases for unrecognized or out-of-domain passive tags
    Check(Check),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Stats(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}
