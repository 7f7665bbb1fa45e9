//! English contraction expansion
//!
//! Words are matched case-insensitively after normalizing typographic
//! apostrophes. The expansion keeps the casing style of the original word:
//! all-caps stays all-caps, a capitalized word gets a capitalized expansion.
//! Punctuation glued to either end of a word is preserved.

use rustc_hash::FxHashMap;

const ENGLISH_CONTRACTIONS: &[(&str, &str)] = &[
    ("ain't", "are not"),
    ("aren't", "are not"),
    ("can't", "cannot"),
    ("can't've", "cannot have"),
    ("could've", "could have"),
    ("couldn't", "could not"),
    ("couldn't've", "could not have"),
    ("didn't", "did not"),
    ("doesn't", "does not"),
    ("don't", "do not"),
    ("hadn't", "had not"),
    ("hasn't", "has not"),
    ("haven't", "have not"),
    ("he'd", "he would"),
    ("he'll", "he will"),
    ("he's", "he is"),
    ("how'd", "how did"),
    ("how'll", "how will"),
    ("how's", "how is"),
    ("i'd", "I would"),
    ("i'll", "I will"),
    ("i'm", "I am"),
    ("i've", "I have"),
    ("isn't", "is not"),
    ("it'd", "it would"),
    ("it'll", "it will"),
    ("it's", "it is"),
    ("let's", "let us"),
    ("ma'am", "madam"),
    ("mightn't", "might not"),
    ("might've", "might have"),
    ("mustn't", "must not"),
    ("must've", "must have"),
    ("needn't", "need not"),
    ("o'clock", "of the clock"),
    ("shan't", "shall not"),
    ("she'd", "she would"),
    ("she'll", "she will"),
    ("she's", "she is"),
    ("should've", "should have"),
    ("shouldn't", "should not"),
    ("that'd", "that would"),
    ("that's", "that is"),
    ("there'd", "there would"),
    ("there's", "there is"),
    ("they'd", "they would"),
    ("they'll", "they will"),
    ("they're", "they are"),
    ("they've", "they have"),
    ("wasn't", "was not"),
    ("we'd", "we would"),
    ("we'll", "we will"),
    ("we're", "we are"),
    ("we've", "we have"),
    ("weren't", "were not"),
    ("what'll", "what will"),
    ("what're", "what are"),
    ("what's", "what is"),
    ("what've", "what have"),
    ("when's", "when is"),
    ("where'd", "where did"),
    ("where's", "where is"),
    ("who'll", "who will"),
    ("who's", "who is"),
    ("who've", "who have"),
    ("why's", "why is"),
    ("won't", "will not"),
    ("would've", "would have"),
    ("wouldn't", "would not"),
    ("y'all", "you all"),
    ("you'd", "you would"),
    ("you'll", "you will"),
    ("you're", "you are"),
    ("you've", "you have"),
    // Apostrophe-less slang
    ("gonna", "going to"),
    ("gotta", "got to"),
    ("wanna", "want to"),
    ("dunno", "do not know"),
];

/// Expands contractions word by word
#[derive(Debug, Clone)]
pub struct ContractionExpander {
    table: FxHashMap<&'static str, &'static str>,
}

impl ContractionExpander {
    /// Create an expander with the built-in English table
    pub fn new() -> Self {
        Self {
            table: ENGLISH_CONTRACTIONS.iter().copied().collect(),
        }
    }

    /// Expand every contraction in `text`.
    ///
    /// The text is split on whitespace and rejoined with single spaces, so
    /// runs of whitespace collapse as a side effect.
    pub fn expand(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.expand_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Expand a single whitespace-free word, or return it unchanged.
    pub fn expand_word(&self, word: &str) -> String {
        let is_edge_punct = |c: char| !c.is_alphanumeric() && c != '\'' && c != '\u{2019}';
        let core = word.trim_matches(is_edge_punct);
        if core.is_empty() {
            return word.to_string();
        }

        let key = core.replace('\u{2019}', "'").to_lowercase();
        let Some(expansion) = self.table.get(key.as_str()) else {
            return word.to_string();
        };

        // `core` is a substring of `word`, so its byte offset is exact.
        let start = word.len() - word.trim_start_matches(is_edge_punct).len();
        let end = start + core.len();
        format!(
            "{}{}{}",
            &word[..start],
            match_case(core, expansion),
            &word[end..]
        )
    }
}

impl Default for ContractionExpander {
    fn default() -> Self {
        Self::new()
    }
}

fn match_case(original: &str, expansion: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    let all_upper = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    if all_upper {
        return expansion.to_uppercase();
    }

    let first_upper = letters.first().is_some_and(|c| c.is_uppercase());
    if first_upper {
        let mut chars = expansion.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    } else {
        expansion.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_sentence() {
        let expander = ContractionExpander::new();
        assert_eq!(
            expander.expand("Don't is the same as do not"),
            "Do not is the same as do not"
        );
    }

    #[test]
    fn test_case_styles() {
        let expander = ContractionExpander::new();
        assert_eq!(expander.expand_word("don't"), "do not");
        assert_eq!(expander.expand_word("Don't"), "Do not");
        assert_eq!(expander.expand_word("DON'T"), "DO NOT");
        assert_eq!(expander.expand_word("i'm"), "I am");
    }

    #[test]
    fn test_typographic_apostrophe() {
        let expander = ContractionExpander::new();
        assert_eq!(expander.expand_word("can\u{2019}t"), "cannot");
    }

    #[test]
    fn test_edge_punctuation_preserved() {
        let expander = ContractionExpander::new();
        assert_eq!(expander.expand_word("\"won't!\""), "\"will not!\"");
        assert_eq!(expander.expand_word("(they're)"), "(they are)");
    }

    #[test]
    fn test_unknown_words_untouched() {
        let expander = ContractionExpander::new();
        assert_eq!(expander.expand_word("great!"), "great!");
        assert_eq!(expander.expand_word("!!!"), "!!!");
        assert_eq!(expander.expand("  spaced   out  "), "spaced out");
    }
}
