// twofa-patgen/src/generator.rs
//! Bottom-up generation pass over a parsed pattern tree.
//!
//! Every variable point in the tree draws from the injected [`Rng`], so the
//! output is fully determined by the rng stream. Generated characters are
//! final output: a drawn `\` or `.` is emitted as-is and never re-read as a
//! meta-character, because nothing re-parses the produced text.
//!
//! License: MIT OR Apache-2.0

use rand::Rng;

use crate::classes::{NON_WORD_CHARS, PRINTABLE_MAX, PRINTABLE_MIN};
use crate::node::{Node, Sequence};

/// Cap for `*` and `+`: a fresh bound in `1..=9` is drawn each time an
/// unbounded quantifier is generated, keeping output short and generation
/// terminating.
const UNBOUNDED_REPEAT_CAP: u32 = 9;

/// Generates one string matching `sequence`, drawing all randomness from
/// `rng`.
pub fn generate_sequence<R: Rng + ?Sized>(sequence: &Sequence, rng: &mut R) -> String {
    let mut out = String::new();
    for node in &sequence.nodes {
        generate_node(node, rng, &mut out);
    }
    out
}

fn generate_node<R: Rng + ?Sized>(node: &Node, rng: &mut R, out: &mut String) {
    match node {
        Node::Literal(c) => out.push(*c),
        Node::AnyChar => out.push(rng.random_range(PRINTABLE_MIN..=PRINTABLE_MAX) as char),
        Node::Digit => out.push(rng.random_range(b'0'..=b'9') as char),
        // `\D` and `\w` are deliberately narrowed to lowercase letters.
        Node::NarrowNonDigit | Node::NarrowWord => {
            out.push(rng.random_range(b'a'..=b'z') as char)
        }
        Node::NonWord => out.push(NON_WORD_CHARS[rng.random_range(0..NON_WORD_CHARS.len())]),
        Node::CharClass(set) => out.push(set[rng.random_range(0..set.len())]),
        Node::Group(branches) => {
            let branch = &branches[rng.random_range(0..branches.len())];
            for node in &branch.nodes {
                generate_node(node, rng, out);
            }
        }
        Node::Quantifier { node, min, max } => {
            let upper = match max {
                Some(m) => *m,
                // Fresh cap per generation, never below min.
                None => rng.random_range(1..=UNBOUNDED_REPEAT_CAP).max(*min),
            };
            let count = rng.random_range(*min..=upper);
            for _ in 0..count {
                generate_node(node, rng, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deterministic_for_a_fixed_seed() {
        let tree = parse(r"[a-z]{4}-\d{2}").unwrap();
        let a = generate_sequence(&tree, &mut StdRng::seed_from_u64(7));
        let b = generate_sequence(&tree, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn literal_sequence_is_emitted_verbatim() {
        let tree = parse("user-42").unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_sequence(&tree, &mut rng), "user-42");
    }

    #[test]
    fn quantifier_repetitions_reroll_inner_randomness() {
        // [12]{1,2} legal outputs: 1, 2, 11, 12, 21, 22.
        let tree = parse("[12]{1,2}").unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let legal = ["1", "2", "11", "12", "21", "22"];
        let mut seen_mixed = false;
        for _ in 0..500 {
            let s = generate_sequence(&tree, &mut rng);
            assert!(legal.contains(&s.as_str()), "illegal output {s:?}");
            if s == "12" || s == "21" {
                seen_mixed = true;
            }
        }
        assert!(seen_mixed, "repetitions never produced distinct draws");
    }

    #[test]
    fn unbounded_quantifier_stays_within_the_cap() {
        let tree = parse("a+").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let s = generate_sequence(&tree, &mut rng);
            assert!(!s.is_empty() && s.len() <= UNBOUNDED_REPEAT_CAP as usize);
            assert!(s.chars().all(|c| c == 'a'));
        }
    }

    #[test]
    fn star_can_produce_empty_output() {
        let tree = parse("a*").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_empty = false;
        let mut saw_some = false;
        for _ in 0..500 {
            let s = generate_sequence(&tree, &mut rng);
            saw_empty |= s.is_empty();
            saw_some |= !s.is_empty();
        }
        assert!(saw_empty && saw_some);
    }

    #[test]
    fn any_char_stays_printable_ascii() {
        let tree = parse(".{20}").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            for c in generate_sequence(&tree, &mut rng).chars() {
                assert!((33..=126).contains(&(c as u32)), "non-printable {c:?}");
            }
        }
    }

    #[test]
    fn group_picks_exactly_one_branch() {
        let tree = parse("(cat|dog)").unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..200 {
            let s = generate_sequence(&tree, &mut rng);
            assert!(s == "cat" || s == "dog", "mixed branches: {s:?}");
        }
    }

    #[test]
    fn non_word_draws_from_the_curated_set() {
        let tree = parse(r"\W{10}").unwrap();
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..100 {
            for c in generate_sequence(&tree, &mut rng).chars() {
                assert!(NON_WORD_CHARS.contains(&c), "{c:?} not in \\W set");
            }
        }
    }
}
