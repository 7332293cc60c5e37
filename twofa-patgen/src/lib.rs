// twofa-patgen/src/lib.rs
//! # twofa-patgen
//!
//! `twofa-patgen` turns a small regex-like pattern (e.g. `[0-9]{6}`) into a
//! random string guaranteed to satisfy that pattern. It interprets a
//! deliberate subset of regular-expression syntax (anchors, character
//! classes with ranges, alternation groups, quantifiers, common escapes)
//! without a regex engine: one recursive-descent parse builds an explicit
//! tree, then one bottom-up pass generates from it. The result is
//! ordering-stable semantics, unlike generators built from cascading
//! whole-string rewrites.
//!
//! The crate is a leaf with a pure function boundary: a pattern string goes
//! in, a generated string (or a [`ParseError`]) comes out. Credential
//! storage, expiry bookkeeping and delivery live with the callers.
//!
//! ## Supported grammar
//!
//! * anchors/delimiters: one leading `/` and `^`, one trailing `$` and `/`
//!   (stripped; interior anchors pass through as literals)
//! * `[...]` classes with `a-z` ranges and in-class escapes
//! * `(a|b|c)` alternation (one level; nested groups are rejected)
//! * quantifiers `{n}`, `{n,m}`, `?`, `*`, `+` (`*`/`+` are capped at a
//!   small bound drawn fresh per generation)
//! * escapes `\d`, `\D`, `\w`, `\W`; any other `\x` is the literal `x`
//! * `.` for printable ASCII
//!
//! Everything else (lookaround, backreferences, named groups, negated
//! classes) fails with a [`ParseError`]. Note the intentional narrowing:
//! `\D` and `\w` generate lowercase letters only. Downstream code-format
//! contracts depend on that; it is preserved behavior, not an oversight.
//!
//! ## Usage
//!
//! ```rust
//! use twofa_patgen::generate;
//!
//! let code = generate("[0-9]{6}")?;
//! assert_eq!(code.len(), 6);
//! assert!(code.chars().all(|c| c.is_ascii_digit()));
//! # Ok::<(), twofa_patgen::ParseError>(())
//! ```
//!
//! Randomness is an explicit, injectable source; pass a seeded rng through
//! [`generate_with`] for deterministic output:
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use twofa_patgen::generate_with;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let a = generate_with("[a-f0-9]{8}", &mut rng)?;
//! let mut rng = StdRng::seed_from_u64(42);
//! let b = generate_with("[a-f0-9]{8}", &mut rng)?;
//! assert_eq!(a, b);
//! # Ok::<(), twofa_patgen::ParseError>(())
//! ```
//!
//! The core is stateless: each [`generate`] call parses the pattern anew.
//! Callers generating many values from one configured pattern can [`parse`]
//! once and reuse the [`Sequence`].
//!
//! License: MIT OR Apache-2.0

mod classes;
mod error;
mod generator;
mod node;
mod parser;

pub use error::ParseError;
pub use generator::generate_sequence;
pub use node::{Node, Sequence};
pub use parser::parse;

use rand::Rng;

/// Generates one random string matching `pattern`, using the thread-local
/// rng.
///
/// Fails only when the pattern falls outside the supported subset; there is
/// no partial success and no fallback value.
pub fn generate(pattern: &str) -> Result<String, ParseError> {
    generate_with(pattern, &mut rand::rng())
}

/// Generates one random string matching `pattern`, drawing all randomness
/// from `rng`.
///
/// Deterministic for a fixed rng stream, which makes seeded tests possible.
pub fn generate_with<R: Rng + ?Sized>(pattern: &str, rng: &mut R) -> Result<String, ParseError> {
    let tree = parse(pattern)?;
    Ok(generator::generate_sequence(&tree, rng))
}
