// twofa/src/main.rs
//! twofa CLI entry point.
//!
//! Parses the command line, configures logging, and dispatches to the
//! command handlers.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn init_logger(quiet: bool, debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    } else if quiet {
        builder.filter_level(LevelFilter::Error);
    } else {
        builder.filter_level(LevelFilter::Warn);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.quiet, args.debug);

    match &args.command {
        Commands::Generate(cmd) => commands::generate::run(cmd),
        Commands::CheckConfig(cmd) => commands::check_config::run(cmd),
        Commands::Demo(cmd) => commands::demo::run(cmd),
    }
}
