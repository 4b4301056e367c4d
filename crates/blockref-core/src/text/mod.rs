//! Text processing utilities for block tokenization

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Tokens shorter than this many characters are dropped
pub const MIN_TOKEN_LEN: usize = 3;

/// Common English function words filtered out during tokenization
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "and", "are", "but", "for", "from", "had", "has", "have", "into", "its", "not",
            "our", "that", "the", "their", "then", "there", "these", "they", "this", "was",
            "were", "what", "when", "which", "who", "will", "with", "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Term -> occurrence count for one block
pub type TermFrequencies = HashMap<String, usize>;

/// Normalize and split text into tokens.
///
/// Lowercases, turns every character that is not a letter, digit or
/// whitespace into a space, splits on whitespace, then drops short tokens
/// and stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let stop_words = get_stop_words();
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|s| s.chars().count() >= MIN_TOKEN_LEN)
        .filter(|s| !stop_words.contains(s))
        .map(|s| s.to_string())
        .collect()
}

/// Tokenize text into a term -> count mapping
pub fn term_frequencies(text: &str) -> TermFrequencies {
    let mut freqs = TermFrequencies::new();
    for token in tokenize(text) {
        *freqs.entry(token).or_insert(0) += 1;
    }
    freqs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello world! This is a test.");
        // "this" is a stop word, "is" and "a" are too short
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("graph-based note_taking (systems)");
        assert_eq!(tokens, vec!["graph", "based", "note", "taking", "systems"]);
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("an ox ate hay");
        assert_eq!(tokens, vec!["ate", "hay"]);
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        let tokens = tokenize("rfc 2119 and rfc8174");
        assert_eq!(tokens, vec!["rfc", "2119", "rfc8174"]);
    }

    #[test]
    fn test_term_frequencies_counts_repeats() {
        let freqs = term_frequencies("Rust rust RUST, cargo");
        assert_eq!(freqs.get("rust"), Some(&3));
        assert_eq!(freqs.get("cargo"), Some(&1));
        assert_eq!(freqs.len(), 2);
    }

    #[test]
    fn test_term_frequencies_empty_for_stop_words_only() {
        assert!(term_frequencies("the and with").is_empty());
        assert!(term_frequencies("").is_empty());
    }

    #[test]
    fn test_tokenize_unicode_letters() {
        let tokens = tokenize("Café über naïve");
        assert_eq!(tokens, vec!["café", "über", "naïve"]);
    }
}
