//! broker.rs - Orchestration of the two-factor verification flow.
//!
//! The broker ties the pieces together: credential resolution through the
//! host's `UserLookup`, throttle enforcement and code issuance through the
//! repository, and delivery through the channel providers. It holds no
//! state of its own.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};

use crate::errors::TwoFactorError;
use crate::providers::{ProviderRegistry, TwoFactorChannel};
use crate::repository::VerificationCodeRepository;
use crate::users::{Credentials, TwoFactorUser, UserLookup};

/// Who a verification code is for: an already-resolved user, or the
/// credentials to resolve one from.
pub enum SendTarget<U> {
    User(U),
    Credentials(Credentials),
}

/// Orchestrates issuing, delivering and validating verification codes.
pub struct TwoFactorBroker<L: UserLookup> {
    codes: VerificationCodeRepository,
    users: L,
    providers: ProviderRegistry,
    default_channel: TwoFactorChannel,
}

impl<L: UserLookup> TwoFactorBroker<L> {
    pub fn new(
        codes: VerificationCodeRepository,
        users: L,
        providers: ProviderRegistry,
        default_channel: TwoFactorChannel,
    ) -> Self {
        Self {
            codes,
            users,
            providers,
            default_channel,
        }
    }

    /// Issues a verification code for the target user and delivers it over
    /// `channel` (or the resolved default channel when `None`).
    ///
    /// Fails with `InvalidCredentials` when credentials resolve to no user,
    /// `ChannelNotEnrolled` when the user lacks the requested channel,
    /// `Throttled` inside the throttle window, and `InvalidChannel` when no
    /// provider is registered for the resolved channel.
    pub fn send_verification_code(
        &self,
        target: SendTarget<L::User>,
        channel: Option<TwoFactorChannel>,
    ) -> Result<(), TwoFactorError> {
        let user = self.resolve_target(target)?;

        if let Some(requested) = channel {
            if !user.has_two_factor(Some(requested)) {
                return Err(TwoFactorError::ChannelNotEnrolled);
            }
        }

        if self.codes.recently_created(&user) {
            return Err(TwoFactorError::Throttled);
        }

        let code = self.codes.create(&user)?;
        self.notify_user(&user, &code, channel)
    }

    /// Like [`send_verification_code`](Self::send_verification_code), but
    /// hands the plaintext code to `callback` instead of dispatching a
    /// provider. Useful when the host owns delivery end to end.
    pub fn send_verification_code_with<F>(
        &self,
        target: SendTarget<L::User>,
        callback: F,
    ) -> Result<(), TwoFactorError>
    where
        F: FnOnce(&L::User, &str),
    {
        let user = self.resolve_target(target)?;

        if self.codes.recently_created(&user) {
            return Err(TwoFactorError::Throttled);
        }

        let code = self.codes.create(&user)?;
        callback(&user, &code);
        Ok(())
    }

    /// Resolves credentials to a user.
    pub fn get_user(&self, credentials: &Credentials) -> Result<L::User, TwoFactorError> {
        self.users
            .retrieve_by_credentials(credentials)
            .ok_or(TwoFactorError::InvalidCredentials)
    }

    /// Issues a code for an already-resolved user without delivering it.
    pub fn create_verification_code(&self, user: &L::User) -> Result<String, TwoFactorError> {
        self.codes.create(user)
    }

    /// Deletes any stored code for the user.
    pub fn delete_verification_code(&self, user: &L::User) -> bool {
        self.codes.delete(user)
    }

    /// Checks a code for an already-resolved user.
    pub fn verification_code_exists(&self, user: &L::User, code: &str) -> bool {
        self.codes.exists(user, code)
    }

    /// Validates a full verification request: resolves the credentials,
    /// then checks the submitted code. Returns the user on success.
    pub fn validate_verification_request(
        &self,
        credentials: &Credentials,
        code: &str,
    ) -> Result<L::User, TwoFactorError> {
        let user = self.get_user(credentials)?;

        if !self.codes.exists(&user, code) {
            return Err(TwoFactorError::InvalidVerificationCode);
        }

        info!(
            "Verification code accepted for user {}.",
            user.auth_identifier()
        );
        Ok(user)
    }

    fn resolve_target(&self, target: SendTarget<L::User>) -> Result<L::User, TwoFactorError> {
        match target {
            SendTarget::User(user) => Ok(user),
            SendTarget::Credentials(credentials) => self.get_user(&credentials),
        }
    }

    fn notify_user(
        &self,
        user: &L::User,
        code: &str,
        requested: Option<TwoFactorChannel>,
    ) -> Result<(), TwoFactorError> {
        let channel = self.resolve_channel(user, requested)?;
        debug!(
            "Dispatching verification code for user {} via {}.",
            user.auth_identifier(),
            channel
        );
        self.providers.provider(channel)?.deliver(user, code)
    }

    /// Channel resolution order: the explicit request, then the configured
    /// default if the user enrolled it, then the user's own default.
    fn resolve_channel(
        &self,
        user: &L::User,
        requested: Option<TwoFactorChannel>,
    ) -> Result<TwoFactorChannel, TwoFactorError> {
        if let Some(channel) = requested {
            return Ok(channel);
        }
        if user.has_two_factor(Some(self.default_channel)) {
            return Ok(self.default_channel);
        }
        user.default_channel()
            .ok_or(TwoFactorError::ChannelNotEnrolled)
    }
}
