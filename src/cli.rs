use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Surface-crossing tally filter tools.
#[derive(Parser)]
#[command(
    name = "surftally",
    version,
    about = "Surface-crossing tally filters for Monte Carlo transport models"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Load the model and initialize every filter.
    Check(CheckArgs),
    /// Print the bin labels of one or all filters.
    Labels(LabelsArgs),
    /// Show the bins and weights produced by surface-crossing indicators.
    Match(MatchArgs),
    /// Write filter checkpoint records to a netCDF statepoint file.
    Statepoint(StatepointArgs),
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "surftally.toml")]
    pub config: PathBuf,
}

/// Arguments for the `labels` subcommand.
#[derive(clap::Args)]
pub struct LabelsArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "surftally.toml")]
    pub config: PathBuf,

    /// Only print labels for this filter ID.
    #[arg(short, long)]
    pub filter: Option<u32>,
}

/// Arguments for the `match` subcommand.
#[derive(clap::Args)]
pub struct MatchArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "surftally.toml")]
    pub config: PathBuf,

    /// Filter ID to match against.
    #[arg(short, long)]
    pub filter: u32,

    /// Signed crossing indicators: surface index + 1, negative for the
    /// negative direction, 0 for no crossing.
    #[arg(required = true, allow_negative_numbers = true)]
    pub indicators: Vec<i32>,
}

/// Arguments for the `statepoint` subcommand.
#[derive(clap::Args)]
pub struct StatepointArgs {
    /// Path to TOML model file.
    #[arg(short, long, default_value = "surftally.toml")]
    pub config: PathBuf,

    /// Override output path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace the output file if it exists.
    #[arg(long)]
    pub overwrite: bool,
}
