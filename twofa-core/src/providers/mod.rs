// twofa-core/src/providers/mod.rs
//! Delivery-channel providers for verification codes.
//!
//! A `ChannelProvider` carries a freshly issued code to the user over one
//! channel. The registry maps a `TwoFactorChannel` to its provider so the
//! broker can stay transport-agnostic. `Sms` is declared as a channel but
//! ships without a provider; registering one is the host's job.
//!
//! License: MIT OR Apache-2.0

pub mod email;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::TwoFactorError;
use crate::users::TwoFactorUser;

/// The delivery channels a user can enroll for two-factor verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TwoFactorChannel {
    Email,
    Sms,
}

impl fmt::Display for TwoFactorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwoFactorChannel::Email => write!(f, "email"),
            TwoFactorChannel::Sms => write!(f, "sms"),
        }
    }
}

impl FromStr for TwoFactorChannel {
    type Err = TwoFactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(TwoFactorChannel::Email),
            "sms" => Ok(TwoFactorChannel::Sms),
            other => Err(TwoFactorError::InvalidChannel(other.to_string())),
        }
    }
}

/// A trait for delivering a freshly issued verification code to a user over
/// one channel.
pub trait ChannelProvider: Send + Sync {
    /// Delivers `code` to `user`. The provider must not persist the
    /// plaintext code.
    fn deliver(&self, user: &dyn TwoFactorUser, code: &str) -> Result<(), TwoFactorError>;
}

/// Maps channels to their providers.
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<TwoFactorChannel, Box<dyn ChannelProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` for `channel`, replacing any previous one.
    pub fn register(&mut self, channel: TwoFactorChannel, provider: Box<dyn ChannelProvider>) {
        self.providers.insert(channel, provider);
    }

    /// Returns the provider for `channel`, or `InvalidChannel` when none is
    /// registered.
    pub fn provider(&self, channel: TwoFactorChannel) -> Result<&dyn ChannelProvider, TwoFactorError> {
        self.providers
            .get(&channel)
            .map(|p| p.as_ref())
            .ok_or_else(|| TwoFactorError::InvalidChannel(channel.to_string()))
    }
}
