//! users.rs - User-side contracts for two-factor issuance.
//!
//! The library never owns user records. Host applications implement
//! `TwoFactorUser` on their user type and `UserLookup` on whatever resolves
//! login credentials; everything else in this crate works against those two
//! traits.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashMap;

use crate::providers::TwoFactorChannel;

/// Login credentials as supplied by an authentication attempt, e.g.
/// `{"email": "...", "password": "..."}`. The library treats them as
/// opaque; only the host's `UserLookup` interprets them.
pub type Credentials = HashMap<String, String>;

/// Contract a user type must fulfil to take part in two-factor flows.
pub trait TwoFactorUser {
    /// Stable identifier used to key stored verification codes.
    fn auth_identifier(&self) -> String;

    /// Address that receives email verification codes.
    fn email_for_verification(&self) -> String;

    /// Channels this user has enrolled for two-factor verification.
    fn enrolled_channels(&self) -> Vec<TwoFactorChannel>;

    /// The user's preferred channel, if any. Defaults to the first
    /// enrolled channel.
    fn default_channel(&self) -> Option<TwoFactorChannel> {
        self.enrolled_channels().first().copied()
    }

    /// Whether the user has two-factor enrolled at all (`None`), or for a
    /// specific channel (`Some`).
    fn has_two_factor(&self, channel: Option<TwoFactorChannel>) -> bool {
        match channel {
            None => !self.enrolled_channels().is_empty(),
            Some(ch) => self.enrolled_channels().contains(&ch),
        }
    }
}

/// Resolves login credentials to a user.
pub trait UserLookup: Send + Sync {
    type User: TwoFactorUser;

    /// Returns the user matching `credentials`, or `None` when the
    /// credentials do not identify one.
    fn retrieve_by_credentials(&self, credentials: &Credentials) -> Option<Self::User>;
}
