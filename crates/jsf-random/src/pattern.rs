//! # Regex-Driven Strings
//!
//! Produces strings matching a regular expression. The pattern is parsed
//! with `regex-syntax` and expanded by proptest's regex strategy, driven by
//! a test runner seeded from the caller's random source.
//!
//! - A leading `^` and an unescaped trailing `$` are stripped before
//!   parsing. Any other look-around assertion is rejected.
//! - `\d` and `\w` (and their negations) mean their ASCII classes, as in
//!   ECMA-262 regexes.

use jsf_core::PatternError;
use proptest::strategy::{Strategy, ValueTree};
use proptest::string::string_regex_parsed;
use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};
use rand::Rng;
use regex_syntax::hir::Hir;
use regex_syntax::ParserBuilder;

/// A parsed pattern, reusable across many generations.
#[derive(Clone, Debug)]
pub struct Pattern {
    source: String,
    hir: Hir,
}

impl Pattern {
    /// Parse `pattern`.
    ///
    /// # Errors
    ///
    /// Returns `PatternError` when the regex does not parse or uses a
    /// construct strings cannot be generated for.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let normalized = ascii_shorthands(strip_anchors(pattern));
        let hir = ParserBuilder::new()
            .build()
            .parse(&normalized)
            .map_err(|e| PatternError::new(pattern, e))?;
        string_regex_parsed(&hir).map_err(|e| PatternError::new(pattern, e))?;
        Ok(Self {
            source: pattern.to_string(),
            hir,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// One random string matching the pattern.
    ///
    /// # Errors
    ///
    /// Returns `PatternError` when the strategy cannot produce a value.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<String, PatternError> {
        let strategy = string_regex_parsed(&self.hir).map_err(|e| PatternError::new(&self.source, e))?;
        let mut runner = seeded_runner(rng);
        strategy
            .new_tree(&mut runner)
            .map(|tree| tree.current())
            .map_err(|reason| PatternError::new(&self.source, reason))
    }
}

/// Parse `pattern` and produce one matching string.
pub fn generate<R: Rng>(rng: &mut R, pattern: &str) -> Result<String, PatternError> {
    Pattern::parse(pattern)?.generate(rng)
}

fn seeded_runner<R: Rng>(rng: &mut R) -> TestRunner {
    let config = Config {
        rng_algorithm: RngAlgorithm::ChaCha,
        ..Config::default()
    };
    let mut seed = [0u8; 32];
    rng.fill(&mut seed);
    let test_rng = TestRng::from_seed(config.rng_algorithm, &seed);
    TestRunner::new_with_rng(config, test_rng)
}

fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    match pattern.strip_suffix('$') {
        Some(rest) if !is_escaped(rest) => rest,
        _ => pattern,
    }
}

/// Whether a character appended to `prefix` would be escaped.
fn is_escaped(prefix: &str) -> bool {
    prefix.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

/// Rewrites `\d`, `\D`, `\w` and `\W` as ASCII classes. Nested classes
/// keep the rewrite valid inside `[...]`.
fn ascii_shorthands(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('d') => out.push_str("[0-9]"),
            Some('D') => out.push_str("[^0-9]"),
            Some('w') => out.push_str("[0-9A-Za-z_]"),
            Some('W') => out.push_str("[^0-9A-Za-z_]"),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use regex::Regex;

    fn assert_generates_matches(pattern: &str) {
        let re = Regex::new(pattern).unwrap();
        let compiled = Pattern::parse(pattern).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let s = compiled.generate(&mut rng).unwrap();
            assert!(re.is_match(&s), "{s:?} does not match {pattern:?}");
        }
    }

    #[test]
    fn test_literal_and_classes() {
        assert_generates_matches("^abc$");
        assert_generates_matches("^[a-z]{3}-\\d{2,4}$");
        assert_generates_matches("^[^a-z]+$");
    }

    #[test]
    fn test_alternation_and_groups() {
        assert_generates_matches("^(foo|bar)+_(?:x|y)?$");
    }

    #[test]
    fn test_unbounded_repetition_matches() {
        assert_generates_matches("^a*b+$");
        assert_generates_matches("^x{2,}$");
    }

    #[test]
    fn test_digit_class_is_ascii() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let s = generate(&mut rng, "^\\d{5}$").unwrap();
            assert_eq!(s.len(), 5);
            assert!(s.bytes().all(|b| b.is_ascii_digit()), "{s:?}");
            let w = generate(&mut rng, "^[\\w-]{4}$").unwrap();
            assert!(w.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'), "{w:?}");
        }
    }

    #[test]
    fn test_unanchored_pattern() {
        assert_generates_matches("x[0-9]");
        assert_generates_matches(".+@.+");
    }

    #[test]
    fn test_same_seed_same_string() {
        let compiled = Pattern::parse("^[a-z]{4,12}$").unwrap();
        let a = compiled.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        let b = compiled.generate(&mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_anchor_stripping() {
        assert_eq!(strip_anchors("^ab$"), "ab");
        assert_eq!(strip_anchors("ab\\$"), "ab\\$");
        assert_eq!(strip_anchors("ab\\\\$"), "ab\\\\");
        assert_eq!(ascii_shorthands("[\\d.]\\\\d"), "[[0-9].]\\\\d");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Pattern::parse("(unclosed").unwrap_err();
        assert_eq!(err.pattern, "(unclosed");
        assert!(!err.reason.is_empty());
    }
}
