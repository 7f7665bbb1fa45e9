//! Alphabetic tokenization and rejoining
//!
//! Token-domain transforms never see raw text: the executor tokenizes the
//! intermediate string first and glues the tokens back together afterwards.
//! A token is a maximal run of ASCII letters; digits, punctuation, whitespace
//! and non-ASCII characters all separate tokens and are dropped.

use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]+").unwrap());

/// Splits text into alphabetic tokens and joins them back
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Minimum token length to keep
    min_token_length: usize,
}

impl Tokenizer {
    /// Create a new tokenizer with default settings
    pub fn new() -> Self {
        Self {
            min_token_length: 1,
        }
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Tokenize text into alphabetic tokens, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        ALPHA_RUN
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|word| word.len() >= self.min_token_length)
            .map(str::to_owned)
            .collect()
    }

    /// Join tokens with single spaces and trim the result.
    ///
    /// An empty token list yields an empty string.
    pub fn rejoin(&self, tokens: &[String]) -> String {
        tokens.join(" ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("Hello world. This is a test.");
        assert_eq!(tokens, vec!["Hello", "world", "This", "is", "a", "test"]);
    }

    #[test]
    fn test_digits_and_punctuation_split() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("abc123def $$processing don't");
        assert_eq!(tokens, vec!["abc", "def", "processing", "don", "t"]);
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("café résumé");
        assert_eq!(tokens, vec!["caf", "r", "sum"]);
    }

    #[test]
    fn test_min_length() {
        let tokenizer = Tokenizer::new().with_min_length(3);
        let tokens = tokenizer.tokenize("a bb ccc dddd");
        assert_eq!(tokens, vec!["ccc", "dddd"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! ... 42").is_empty());
    }

    #[test]
    fn test_rejoin() {
        let tokenizer = Tokenizer::new();
        let tokens = tokenizer.tokenize("  Just a bit   more   processing  ");
        assert_eq!(tokenizer.rejoin(&tokens), "Just a bit more processing");
        assert_eq!(tokenizer.rejoin(&[]), "");
    }
}
