//! Configuration management for `twofa-core`.
//!
//! This module defines the settings that drive code issuance: the code
//! pattern, the expiry and throttle windows, and the default delivery
//! channel. It handles YAML serialization/deserialization and validates a
//! configuration once at load time, so that a malformed pattern surfaces at
//! startup rather than on the first authentication attempt.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::TwoFactorError;
use crate::providers::TwoFactorChannel;

/// Pattern used when no configuration is provided: a six-digit code.
pub const DEFAULT_CODE_PATTERN: &str = "[0-9]{6}";

/// Top-level configuration for verification-code issuance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TwoFactorConfig {
    /// Pattern of generated verification codes (e.g. `"[0-9]{6}"`).
    pub pattern: String,
    /// Code lifetime in minutes.
    pub expire_minutes: i64,
    /// Seconds a user must wait before requesting another code.
    /// A value of 0 disables throttling.
    pub throttle_seconds: i64,
    /// Channel used when the caller does not name one.
    pub default_channel: TwoFactorChannel,
}

impl Default for TwoFactorConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_CODE_PATTERN.to_string(),
            expire_minutes: 5,
            throttle_seconds: 30,
            default_channel: TwoFactorChannel::Email,
        }
    }
}

impl TwoFactorConfig {
    /// Loads and validates a configuration from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading two-factor configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: TwoFactorConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;
        info!(
            "Loaded configuration: pattern {:?}, expiry {}m, throttle {}s.",
            config.pattern, config.expire_minutes, config.throttle_seconds
        );
        Ok(config)
    }

    /// Loads the embedded default configuration.
    pub fn load_defaults() -> Result<Self> {
        debug!("Loading default configuration from embedded string...");
        let default_yaml = include_str!("../config/default.yaml");
        let config: TwoFactorConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Checks configuration integrity.
    ///
    /// The configured pattern is parsed here, once, so that issuance code
    /// never sees a malformed pattern at request time.
    pub fn validate(&self) -> Result<(), TwoFactorError> {
        twofa_patgen::parse(&self.pattern)?;

        if self.expire_minutes <= 0 {
            return Err(TwoFactorError::Config(format!(
                "expire_minutes must be positive, got {}",
                self.expire_minutes
            )));
        }
        if self.throttle_seconds < 0 {
            return Err(TwoFactorError::Config(format!(
                "throttle_seconds must not be negative, got {}",
                self.throttle_seconds
            )));
        }
        Ok(())
    }
}
