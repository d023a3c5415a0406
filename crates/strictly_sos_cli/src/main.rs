//! Strictly SOS - scripted match driver
//!
//! Replays an event script through the SOS engine and prints the state
//! after each event. Logs go to stderr; stdout carries only snapshots.

#![warn(missing_docs)]

mod cli;
mod replay;
mod script;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, OutputFormat};
use replay::Step;
use script::Script;
use strictly_sos::{MatchConfig, Snapshot};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(cli)
}

/// Loads inputs and replays the script.
#[instrument(skip(cli), fields(script = %cli.script.display(), format = %cli.format))]
fn run(cli: Cli) -> Result<()> {
    let script = Script::from_file(&cli.script)?;
    let config = cli.config.as_ref().map(MatchConfig::from_file).transpose()?;

    info!("Replaying script");
    let last = replay::run(&script, config, |step, snapshot| {
        if cli.quiet {
            Ok(())
        } else {
            print_snapshot(cli.format, step, snapshot)
        }
    })?;

    if cli.quiet {
        print_final(cli.format, &last)?;
    }
    Ok(())
}

fn print_snapshot(format: OutputFormat, step: &Step, snapshot: &Snapshot) -> Result<()> {
    match format {
        OutputFormat::Text => {
            match step {
                Step::Applied { event, effect } => println!("> {}: {:?}", event, effect),
                Step::Refused { event, error } => println!("> {}: refused ({})", event, error),
            }
            println!("{}\n", snapshot.display());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
    }
    Ok(())
}

fn print_final(format: OutputFormat, snapshot: &Snapshot) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", snapshot.display()),
        OutputFormat::Json => println!("{}", serde_json::to_string(snapshot)?),
    }
    Ok(())
}
