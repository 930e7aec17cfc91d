mod check_cmd;
mod cli;
mod config;
mod convert;
mod labels_cmd;
mod logging;
mod match_cmd;
mod model;
mod statepoint_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check_cmd::run(args),
        Command::Labels(args) => labels_cmd::run(args),
        Command::Match(args) => match_cmd::run(args),
        Command::Statepoint(args) => statepoint_cmd::run(args),
    }
}
