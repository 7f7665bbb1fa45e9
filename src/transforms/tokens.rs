//! Built-in token-domain transforms.
//!
//! These run between the pipeline's implicit tokenize and rejoin steps and
//! take their language data from the injected [`NlpResources`].

use super::Transform;
use crate::nlp::{NlpResources, PartOfSpeech};

/// Drop English stop words (case-sensitive)
pub fn remove_english_stop_words(tokens: Vec<String>, res: &NlpResources) -> Vec<String> {
    res.stopwords.filter(tokens)
}

/// Lemmatize every token for the given part of speech
pub fn lemmatize(tokens: Vec<String>, res: &NlpResources, pos: PartOfSpeech) -> Vec<String> {
    res.lemmatizer.lemmatize_all(tokens, pos)
}

pub(crate) fn builtin() -> Vec<Transform> {
    vec![
        Transform::tokens("remove_english_stop_words", remove_english_stop_words),
        Transform::tokens("lemmatize", |t, res| lemmatize(t, res, PartOfSpeech::Noun)),
        Transform::tokens("lemmatize_verb", |t, res| {
            lemmatize(t, res, PartOfSpeech::Verb)
        }),
        Transform::tokens("lemmatize_noun", |t, res| {
            lemmatize(t, res, PartOfSpeech::Noun)
        }),
        Transform::tokens("lemmatize_adjective", |t, res| {
            lemmatize(t, res, PartOfSpeech::Adjective)
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        NlpResources::english().tokenizer.tokenize(text)
    }

    #[test]
    fn test_remove_english_stop_words() {
        let res = NlpResources::english();
        let out = remove_english_stop_words(
            tokens("Test this text to see which are stop words."),
            &res,
        );
        assert_eq!(out, vec!["Test", "text", "see", "stop", "words"]);
    }

    #[test]
    fn test_lemmatize_nouns() {
        let res = NlpResources::english();
        let out = lemmatize(
            tokens("apples, bananas and pears are common fruits that are eaten by humans."),
            &res,
            PartOfSpeech::Noun,
        );
        assert_eq!(
            res.tokenizer.rejoin(&out),
            "apple banana and pear are common fruit that are eaten by human"
        );
    }

    #[test]
    fn test_lemmatize_verbs() {
        let res = NlpResources::english();
        let out = lemmatize(tokens("he was running and ate"), &res, PartOfSpeech::Verb);
        assert_eq!(out, vec!["he", "be", "run", "and", "eat"]);
    }

    #[test]
    fn test_empty_token_list() {
        let res = NlpResources::english();
        assert!(remove_english_stop_words(Vec::new(), &res).is_empty());
        assert!(lemmatize(Vec::new(), &res, PartOfSpeech::Adjective).is_empty());
    }
}
