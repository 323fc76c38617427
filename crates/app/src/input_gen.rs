//! Sample text generation for zero-argument runs.
//!
//! When no input file is specified we generate English-looking text with
//! an interesting token distribution: a small lexicon sampled with a
//! heavy skew (so frequent words get short Huffman codes), mixed with
//! punctuation, hyphenated and apostrophe words, and paragraph breaks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Skewed lexicon: earlier words are sampled far more often.
const LEXICON: &[&str] = &[
    "the", "of", "and", "a", "to", "in", "is", "it", "was", "that",
    "he", "she", "for", "on", "are", "as", "with", "his", "her", "they",
    "at", "be", "this", "have", "from", "or", "one", "had", "by", "word",
    "don't", "it's", "well-known", "stop-gap", "o'clock", "self-evident",
    "compression", "frequency", "probing", "histogram", "huffman",
];

/// Generate approximately `size_bytes` of sample text.
///
/// Deterministic for a given seed; output is pure ASCII so truncation to
/// the exact size is always on a character boundary.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_bytes + 16);
    let mut words_in_sentence = 0usize;

    while text.len() < size_bytes {
        // Squaring the index biases sampling toward the front of the
        // lexicon, giving a skewed frequency distribution.
        let r: f64 = rng.gen();
        let idx = ((r * r) * LEXICON.len() as f64) as usize;
        text.push_str(LEXICON[idx.min(LEXICON.len() - 1)]);
        words_in_sentence += 1;

        if words_in_sentence >= rng.gen_range(6..=14) {
            words_in_sentence = 0;
            match rng.gen_range(0..10) {
                0..=5 => text.push_str(". "),
                6..=7 => text.push_str("!\n"),
                8 => text.push_str("?\n\n"),
                _ => text.push_str("; "),
            }
        } else if rng.gen_range(0..12) == 0 {
            text.push_str(", ");
        } else {
            text.push(' ');
        }
    }

    text.truncate(size_bytes);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use hufftext_core::tokenizer::tokenize;

    #[test]
    fn test_size() {
        let text = generate_sample_text(42, 1000);
        assert_eq!(text.len(), 1000);
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            generate_sample_text(12345, 5000),
            generate_sample_text(12345, 5000)
        );
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(generate_sample_text(1, 1000), generate_sample_text(2, 1000));
    }

    #[test]
    fn test_tokenizer_round_trips_sample() {
        let text = generate_sample_text(7, 2000);
        assert_eq!(tokenize(&text).concat(), text);
    }

    #[test]
    fn test_various_sizes() {
        for size in [0, 1, 100, 1000, 10000] {
            assert_eq!(generate_sample_text(999, size).len(), size);
        }
    }
}
