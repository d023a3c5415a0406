//! Command-line interface for strictly_sos.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Strictly SOS - replay a scripted SOS match through the rule engine
#[derive(Parser, Debug)]
#[command(name = "strictly_sos")]
#[command(about = "Replay scripted SOS matches and print the engine state", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML script with an optional [match] table and [[event]] entries
    #[arg(short, long)]
    pub script: PathBuf,

    /// Match configuration file; overrides the script's [match] table
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How snapshots are printed
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print only the final snapshot
    #[arg(short, long)]
    pub quiet: bool,
}

/// Snapshot output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Status line, grid and scores.
    Text,
    /// One JSON object per line.
    Json,
}
