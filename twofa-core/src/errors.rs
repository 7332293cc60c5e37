//! errors.rs - Custom error types for the twofa-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `twofa-core`
/// library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TwoFactorError {
    #[error("Invalid user credentials")]
    InvalidCredentials,

    #[error("Too many verification code requests")]
    Throttled,

    #[error("Verification code invalid")]
    InvalidVerificationCode,

    #[error("Two-factor channel '{0}' is not supported")]
    InvalidChannel(String),

    #[error("User has no two-factor channel enrolled for this request")]
    ChannelNotEnrolled,

    #[error("Configured code pattern is invalid: {0}")]
    Pattern(#[from] twofa_patgen::ParseError),

    #[error("Failed to hash or verify a verification code: {0}")]
    Hash(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to deliver a verification code: {0}")]
    Delivery(String),
}
