// twofa/src/commands/generate.rs
//! Handler for the `generate` command.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use twofa_core::TwoFactorConfig;

use crate::cli::GenerateCommand;

pub fn run(cmd: &GenerateCommand) -> Result<()> {
    let pattern = resolve_pattern(cmd)?;
    debug!("Generating {} code(s) from pattern {:?}.", cmd.count, pattern);

    // Parse once, generate many.
    let tree = twofa_patgen::parse(&pattern)
        .with_context(|| format!("Invalid pattern {pattern:?}"))?;

    match cmd.seed {
        Some(seed) => emit(&tree, &mut StdRng::seed_from_u64(seed), cmd.count),
        None => emit(&tree, &mut rand::rng(), cmd.count),
    }
    Ok(())
}

fn emit<R: Rng>(tree: &twofa_patgen::Sequence, rng: &mut R, count: u32) {
    for _ in 0..count {
        println!("{}", tree.generate(rng));
    }
}

/// Pattern resolution order: explicit flag, configuration file, embedded
/// defaults.
fn resolve_pattern(cmd: &GenerateCommand) -> Result<String> {
    if let Some(pattern) = &cmd.pattern {
        return Ok(pattern.clone());
    }
    let config = match &cmd.config {
        Some(path) => TwoFactorConfig::load_from_file(path)?,
        None => TwoFactorConfig::load_defaults()?,
    };
    Ok(config.pattern)
}
