// twofa/src/cli.rs
//! This file defines the command-line interface (CLI) for the twofa
//! application, including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "twofa",
    author = "twofa contributors",
    version = env!("CARGO_PKG_VERSION"),
    about = "Verification-code tooling for two-factor setups",
    long_about = "twofa is a command-line companion for the twofa verification-code toolkit. It generates codes from a regex-like pattern, lints issuance configuration files, and runs an in-memory demonstration of the full issue-and-verify flow.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational messages.
    #[arg(long, short = 'q', global = true, help = "Suppress all informational messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for this run).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `twofa` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generates one or more codes from a pattern.
    #[command(about = "Generates one or more codes from a regex-like pattern.")]
    Generate(GenerateCommand),

    /// Loads and validates an issuance configuration file.
    #[command(name = "check-config", about = "Loads and validates an issuance configuration file.")]
    CheckConfig(CheckConfigCommand),

    /// Runs an in-memory issue-and-verify demonstration.
    #[command(about = "Runs an in-memory issue-and-verify demonstration.")]
    Demo(DemoCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateCommand {
    /// Pattern to generate from (takes precedence over --config).
    #[arg(long, short = 'p', value_name = "PATTERN", help = "Pattern to generate from, e.g. '[0-9]{6}'.")]
    pub pattern: Option<String>,

    /// Read the pattern from a configuration file instead.
    #[arg(long = "config", value_name = "FILE", help = "Read the pattern from a YAML configuration file.")]
    pub config: Option<PathBuf>,

    /// Number of codes to generate.
    #[arg(long, short = 'n', default_value_t = 1, help = "Number of codes to generate.")]
    pub count: u32,

    /// Seed the generator for reproducible output.
    #[arg(long, value_name = "SEED", help = "Seed the generator for reproducible output.")]
    pub seed: Option<u64>,
}

/// Arguments for the `check-config` command.
#[derive(Parser, Debug)]
pub struct CheckConfigCommand {
    /// Path to the configuration file to check.
    #[arg(value_name = "FILE", help = "Path to the YAML configuration file to check.")]
    pub config: PathBuf,
}

/// Arguments for the `demo` command.
#[derive(Parser, Debug)]
pub struct DemoCommand {
    /// Optional configuration file (embedded defaults otherwise).
    #[arg(long = "config", value_name = "FILE", help = "Optional configuration file; embedded defaults otherwise.")]
    pub config: Option<PathBuf>,
}
