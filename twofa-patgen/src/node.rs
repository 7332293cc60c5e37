// twofa-patgen/src/node.rs
//! The parsed representation of a pattern.
//!
//! A pattern string is parsed once into a [`Sequence`] of [`Node`]s; the
//! generator then walks that tree bottom-up. Node variants are acyclic and
//! modeled as a plain sum type.
//!
//! License: MIT OR Apache-2.0

/// One unit of parsed grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An exact character.
    Literal(char),
    /// `.` outside a character class: any printable ASCII character.
    AnyChar,
    /// `\d`: a decimal digit.
    Digit,
    /// `\D`: deliberately narrowed to a lowercase letter (see crate docs).
    NarrowNonDigit,
    /// `\w`: deliberately narrowed to a lowercase letter (see crate docs).
    NarrowWord,
    /// `\W`: one character from a fixed punctuation/symbol set.
    NonWord,
    /// The resolved contents of a `[...]` bracket expression: ranges
    /// expanded, duplicates removed. Stored sorted so that structurally
    /// equal classes compare equal regardless of how they were written.
    CharClass(Vec<char>),
    /// The alternation branches of `(a|b|c)`. Exactly one branch is chosen
    /// per generation; branches are never mixed.
    Group(Vec<Sequence>),
    /// A repetition constraint wrapping another node.
    ///
    /// `max` of `None` marks an unbounded quantifier (`*` or `+`); the cap
    /// is drawn fresh each time the node is generated, not at parse time.
    /// Invariant: when `max` is `Some(m)`, `min <= m`.
    Quantifier {
        node: Box<Node>,
        min: u32,
        max: Option<u32>,
    },
}

/// An ordered run of nodes, representing pattern concatenation.
///
/// Parsing the same pattern twice yields structurally identical sequences;
/// there is no hidden state in the parse.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    pub nodes: Vec<Node>,
}

impl Sequence {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Generates one string matching this sequence, drawing all randomness
    /// from `rng`.
    pub fn generate<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> String {
        crate::generator::generate_sequence(self, rng)
    }
}
