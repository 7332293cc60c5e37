// twofa-core/src/lib.rs
//! # twofa Core Library
//!
//! `twofa-core` provides the verification-code issuance workflow built on
//! top of the [`twofa_patgen`] pattern engine: code generation from a
//! configured pattern, hashed storage with expiry and throttle bookkeeping,
//! channel-based delivery, and the broker that orchestrates a full
//! two-factor flow. It owns no user records and no transport; hosts plug in
//! both through small traits.
//!
//! ## Modules
//!
//! * `config`: issuance settings (pattern, expiry, throttle, default channel).
//! * `pattern`: the shared cache of parsed code patterns.
//! * `hasher`: hashing of stored codes (`CodeHasher`, Argon2 by default).
//! * `store`: storage of code records (`CodeStore`, in-memory by default).
//! * `repository`: the code lifecycle (create, check, expire, throttle, delete).
//! * `users`: contracts the host's user model implements.
//! * `providers`: delivery channels and the provider registry.
//! * `broker`: the orchestration layer over all of the above.
//!
//! ## Usage Example
//!
//! ```rust
//! use twofa_core::{
//!     SendTarget, TwoFactorBroker, TwoFactorChannel, TwoFactorConfig,
//!     VerificationCodeRepository,
//! };
//! use twofa_core::providers::{email::EmailProvider, ProviderRegistry};
//! # use twofa_core::providers::email::{MailMessage, Mailer};
//! # use twofa_core::errors::TwoFactorError;
//! # use twofa_core::users::{Credentials, TwoFactorUser, UserLookup};
//! # use std::sync::Arc;
//! # #[derive(Clone)]
//! # struct DemoUser;
//! # impl TwoFactorUser for DemoUser {
//! #     fn auth_identifier(&self) -> String { "1".into() }
//! #     fn email_for_verification(&self) -> String { "user@example.com".into() }
//! #     fn enrolled_channels(&self) -> Vec<TwoFactorChannel> { vec![TwoFactorChannel::Email] }
//! # }
//! # struct Directory;
//! # impl UserLookup for Directory {
//! #     type User = DemoUser;
//! #     fn retrieve_by_credentials(&self, _: &Credentials) -> Option<DemoUser> { Some(DemoUser) }
//! # }
//! # struct NullMailer;
//! # impl Mailer for NullMailer {
//! #     fn queue(&self, _: MailMessage) -> Result<(), TwoFactorError> { Ok(()) }
//! # }
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TwoFactorConfig::load_defaults()?;
//!
//!     let codes = VerificationCodeRepository::in_memory(&config)?;
//!     let mut providers = ProviderRegistry::new();
//!     providers.register(
//!         TwoFactorChannel::Email,
//!         Box::new(EmailProvider::new(Arc::new(NullMailer))),
//!     );
//!
//!     let broker = TwoFactorBroker::new(codes, Directory, providers, config.default_channel);
//!     broker.send_verification_code(SendTarget::User(DemoUser), None)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Design Principles
//!
//! * **Pluggable seams:** storage, hashing, user lookup and delivery are
//!   all traits; the crate ships working defaults for the first two.
//! * **No plaintext at rest:** a code is returned to the caller once and
//!   stored only as an Argon2 hash.
//! * **Validate early:** a configured pattern is parsed at construction
//!   time, never at request time.
//!
//! License: MIT OR Apache-2.0

pub mod broker;
pub mod config;
pub mod errors;
pub mod hasher;
pub mod pattern;
pub mod providers;
pub mod repository;
pub mod store;
pub mod users;

/// Re-exports the configuration types for code issuance.
pub use config::{TwoFactorConfig, DEFAULT_CODE_PATTERN};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TwoFactorError;

/// Re-exports the code lifecycle types.
pub use repository::VerificationCodeRepository;
pub use store::{CodeRecord, CodeStore, InMemoryCodeStore};

/// Re-exports the hashing seam.
pub use hasher::{Argon2Hasher, CodeHasher};

/// Re-exports the orchestration layer.
pub use broker::{SendTarget, TwoFactorBroker};

/// Re-exports the channel types most hosts need at the top level.
pub use providers::{ChannelProvider, ProviderRegistry, TwoFactorChannel};

/// Re-exports the user-side contracts.
pub use users::{Credentials, TwoFactorUser, UserLookup};
