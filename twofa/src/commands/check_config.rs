// twofa/src/commands/check_config.rs
//! Handler for the `check-config` command.
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use twofa_core::TwoFactorConfig;

use crate::cli::CheckConfigCommand;

pub fn run(cmd: &CheckConfigCommand) -> Result<()> {
    let config = TwoFactorConfig::load_from_file(&cmd.config)
        .with_context(|| format!("Configuration check failed for {}", cmd.config.display()))?;

    // A sample proves the pattern not only parses but generates.
    let sample = twofa_patgen::generate(&config.pattern)?;

    println!("Configuration OK: {}", cmd.config.display());
    println!("  pattern:          {}", config.pattern);
    println!("  sample code:      {sample}");
    println!("  expire_minutes:   {}", config.expire_minutes);
    println!("  throttle_seconds: {}", config.throttle_seconds);
    println!("  default_channel:  {}", config.default_channel);
    Ok(())
}
