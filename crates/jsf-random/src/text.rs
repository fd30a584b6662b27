//! # Lorem Text
//!
//! Word and free-text synthesis backed by the `fake` lorem corpus.

use fake::faker::lorem::en::{Sentence, Word};
use fake::Fake;
use rand::Rng;

/// Below this many characters, text is assembled from single words
/// instead of sentences.
const SENTENCE_THRESHOLD: usize = 25;

/// One lorem word.
pub fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// Lorem text of at most `max_chars` characters.
///
/// Whole words (or sentences, for longer limits) are appended while they
/// fit. The first chunk is always taken, truncated if it alone is too long,
/// so the result is empty only when `max_chars` is zero.
pub fn text<R: Rng>(rng: &mut R, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut len = 0;
    loop {
        let chunk: String = if max_chars < SENTENCE_THRESHOLD {
            word(rng)
        } else {
            Sentence(3..10).fake_with_rng(rng)
        };
        let chunk_len = chunk.chars().count();
        if len == 0 {
            out = chunk;
            len = chunk_len;
        } else if len + 1 + chunk_len <= max_chars {
            out.push(' ');
            out.push_str(&chunk);
            len += 1 + chunk_len;
        } else {
            break;
        }
        if len >= max_chars || chunk_len == 0 {
            break;
        }
    }
    truncate_chars(&out, max_chars)
}

/// The first `max_chars` characters of `s`.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-codepoint.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_word_is_not_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert!(!word(&mut rng).is_empty());
        }
    }

    #[test]
    fn test_text_respects_limit() {
        let mut rng = StdRng::seed_from_u64(2);
        for max in [1usize, 3, 5, 24, 25, 80, 400] {
            let s = text(&mut rng, max);
            let len = s.chars().count();
            assert!(len >= 1 && len <= max, "len {len} for max {max}: {s:?}");
        }
    }

    #[test]
    fn test_text_zero_is_empty() {
        assert_eq!(text(&mut StdRng::seed_from_u64(3), 0), "");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("ab", 5), "ab");
    }
}
