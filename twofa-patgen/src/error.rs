//! error.rs - The error type of the pattern core.
//!
//! A malformed pattern is a configuration defect, not a transient condition:
//! every failure here is fatal and non-retryable, and no best-effort fallback
//! string is ever produced.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// The single error kind of this crate: a pattern fell outside the supported
/// grammar subset.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions without a breaking change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("unterminated character class")]
    UnterminatedClass,

    #[error("unterminated group")]
    UnterminatedGroup,

    #[error("nested group unsupported")]
    NestedGroup,

    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(String),

    #[error("invalid quantifier bounds {{{min},{max}}}: min exceeds max")]
    InvalidQuantifierBounds { min: u32, max: u32 },

    #[error("invalid quantifier count: {0}")]
    InvalidQuantifierCount(String),

    #[error("empty character class")]
    EmptyClass,
}
