// twofa-patgen/src/parser.rs
//! Recursive-descent parser for the supported pattern subset.
//!
//! Parsing happens in two steps: anchor stripping (at most one leading `/`
//! and `^`, at most one trailing `$` and `/`), then a single descent over
//! the remaining text that builds the [`Sequence`] tree. Quantifier
//! shorthand (`?`, `*`, `+`, `{n}`) is normalized while the tree is built;
//! unbounded quantifiers stay unbounded in the tree and are capped at
//! generation time.
//!
//! Interior anchors are not special-cased: a `^` or `$` in the middle of a
//! pattern passes through as a literal. This mirrors a narrow, documented
//! limitation of the grammar, not an oversight.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::error::ParseError;
use crate::node::{Node, Sequence};

/// Parses a pattern string into a tree of grammar nodes.
///
/// The parse is stateless: the same pattern always yields a structurally
/// identical tree. Anything outside the supported subset fails with a
/// [`ParseError`]; there is no partial success.
pub fn parse(pattern: &str) -> Result<Sequence, ParseError> {
    let body = strip_anchors(pattern);
    let sequence = Parser::new(body).parse_sequence()?;
    debug!(
        "parsed pattern {:?} into {} top-level node(s)",
        pattern,
        sequence.nodes.len()
    );
    Ok(sequence)
}

/// Removes the optional delimiters around a pattern: one leading `/`, one
/// leading `^`, one trailing `/`, one trailing `$` (outermost first).
fn strip_anchors(pattern: &str) -> &str {
    let mut s = pattern;
    s = s.strip_prefix('/').unwrap_or(s);
    s = s.strip_prefix('^').unwrap_or(s);
    s = s.strip_suffix('/').unwrap_or(s);
    s = s.strip_suffix('$').unwrap_or(s);
    s
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn parse_sequence(&mut self) -> Result<Sequence, ParseError> {
        let mut nodes = Vec::new();
        while let Some(c) = self.peek() {
            match c {
                '?' | '*' | '+' => {
                    return Err(ParseError::UnsupportedConstruct(format!(
                        "quantifier `{c}` with nothing to repeat"
                    )));
                }
                '{' => {
                    // A brace body that reads as a repeat count has nothing
                    // to attach to here; anything else is a literal brace.
                    if self.try_parse_braces()?.is_some() {
                        return Err(ParseError::UnsupportedConstruct(
                            "quantifier with nothing to repeat".to_string(),
                        ));
                    }
                    self.pos += 1;
                    nodes.push(Node::Literal('{'));
                }
                _ => {
                    let node = self.parse_node()?;
                    nodes.push(self.apply_quantifier(node)?);
                }
            }
        }
        Ok(Sequence::new(nodes))
    }

    /// Parses one atom: class, group, escape, `.`, or a literal character.
    fn parse_node(&mut self) -> Result<Node, ParseError> {
        match self.bump() {
            Some('[') => self.parse_class(),
            Some('(') => self.parse_group(),
            Some('\\') => self.parse_escape(),
            Some('.') => Ok(Node::AnyChar),
            Some(other) => Ok(Node::Literal(other)),
            None => Err(ParseError::UnsupportedConstruct(
                "empty input at atom position".to_string(),
            )),
        }
    }

    /// `[...]` with the opening bracket already consumed.
    fn parse_class(&mut self) -> Result<Node, ParseError> {
        if self.peek() == Some('^') {
            return Err(ParseError::UnsupportedConstruct(
                "negated character class `[^...]`".to_string(),
            ));
        }
        let mut body = String::new();
        loop {
            match self.bump() {
                Some(']') => break,
                Some('\\') => {
                    body.push('\\');
                    match self.bump() {
                        Some(escaped) => body.push(escaped),
                        None => return Err(ParseError::UnterminatedClass),
                    }
                }
                Some(c) => body.push(c),
                None => return Err(ParseError::UnterminatedClass),
            }
        }
        crate::classes::resolve_class_body(&body).map(Node::CharClass)
    }

    /// `(...|...)` with the opening paren already consumed.
    ///
    /// Branches are split on `|` at the group's own depth and each branch is
    /// parsed as a full sequence. Nested groups are not part of the subset.
    fn parse_group(&mut self) -> Result<Node, ParseError> {
        if self.peek() == Some('?') {
            return Err(ParseError::UnsupportedConstruct(
                "`(?...)` group extension".to_string(),
            ));
        }
        let mut branches = Vec::new();
        let mut branch = String::new();
        loop {
            match self.bump() {
                Some(')') => {
                    branches.push(branch);
                    break;
                }
                Some('|') => {
                    branches.push(std::mem::take(&mut branch));
                }
                Some('(') => return Err(ParseError::NestedGroup),
                Some('\\') => {
                    branch.push('\\');
                    match self.bump() {
                        Some(escaped) => branch.push(escaped),
                        None => return Err(ParseError::UnterminatedGroup),
                    }
                }
                Some(c) => branch.push(c),
                None => return Err(ParseError::UnterminatedGroup),
            }
        }
        let parsed = branches
            .iter()
            .map(|b| Parser::new(b).parse_sequence())
            .collect::<Result<Vec<Sequence>, ParseError>>()?;
        Ok(Node::Group(parsed))
    }

    /// `\x` with the backslash already consumed.
    fn parse_escape(&mut self) -> Result<Node, ParseError> {
        match self.bump() {
            Some('d') => Ok(Node::Digit),
            Some('D') => Ok(Node::NarrowNonDigit),
            Some('w') => Ok(Node::NarrowWord),
            Some('W') => Ok(Node::NonWord),
            Some(c) if c.is_ascii_digit() => Err(ParseError::UnsupportedConstruct(format!(
                "backreference `\\{c}`"
            ))),
            Some(c) => Ok(Node::Literal(c)),
            None => Err(ParseError::UnsupportedConstruct(
                "dangling escape at end of pattern".to_string(),
            )),
        }
    }

    /// Wraps `node` in a quantifier if one immediately follows it.
    fn apply_quantifier(&mut self, node: Node) -> Result<Node, ParseError> {
        let (min, max) = match self.peek() {
            Some('?') => {
                self.pos += 1;
                (0, Some(1))
            }
            Some('*') => {
                self.pos += 1;
                (0, None)
            }
            Some('+') => {
                self.pos += 1;
                (1, None)
            }
            Some('{') => match self.try_parse_braces()? {
                Some((min, max)) => (min, Some(max)),
                None => return Ok(node),
            },
            _ => return Ok(node),
        };
        Ok(Node::Quantifier {
            node: Box::new(node),
            min,
            max,
        })
    }

    /// Attempts to read a `{n}` or `{n,m}` count at the current position.
    ///
    /// Returns `Ok(None)` without consuming anything when the brace body is
    /// not a repeat count at all; the brace then stays a literal. A body
    /// that *reads* as a count but is invalid (signs, `min > max`,
    /// unbounded `{n,}`) is a hard error.
    fn try_parse_braces(&mut self) -> Result<Option<(u32, u32)>, ParseError> {
        debug_assert_eq!(self.peek(), Some('{'));
        let rel_close = self.chars[self.pos + 1..].iter().position(|&c| c == '}');
        let Some(body_len) = rel_close else {
            return Ok(None);
        };
        let body: String = self.chars[self.pos + 1..self.pos + 1 + body_len]
            .iter()
            .collect();
        let count_like = !body.is_empty()
            && body
                .chars()
                .all(|c| c.is_ascii_digit() || c == ',' || c == '+' || c == '-');
        if !count_like {
            return Ok(None);
        }

        let (min_s, max_s) = match body.split_once(',') {
            Some((lo, hi)) => (lo, Some(hi)),
            None => (body.as_str(), None),
        };
        let min = parse_count(min_s, &body)?;
        let max = match max_s {
            Some(hi) => parse_count(hi, &body)?,
            None => min,
        };
        if min > max {
            return Err(ParseError::InvalidQuantifierBounds { min, max });
        }
        self.pos += body_len + 2;
        Ok(Some((min, max)))
    }
}

fn parse_count(text: &str, body: &str) -> Result<u32, ParseError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidQuantifierCount(format!("{{{body}}}")));
    }
    text.parse::<u32>()
        .map_err(|_| ParseError::InvalidQuantifierCount(format!("{{{body}}}")))
}
