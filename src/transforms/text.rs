//! Built-in string-domain transforms.
//!
//! Each function is a pure `&str -> String` rewrite. The regex-based ones
//! delete (or blank out) their match and leave surrounding whitespace alone,
//! so they compose with [`remove_extra_spaces`] at the end of a pipeline.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::Transform;
use crate::nlp::ContractionExpander;

static URL_SCHEME: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?\S+").unwrap());
static URL_WWW: Lazy<Regex> = Lazy::new(|| Regex::new(r"www\S+").unwrap());
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\S*").unwrap());
static HASHTAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\S*").unwrap());
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z]").unwrap());
static NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\n|\r\n|\n|\r").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Unicode-aware lowercasing
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// NFKD-decompose, then drop every non-ASCII code point.
///
/// Accented letters lose their combining marks (`é` → `e`); characters with
/// no ASCII decomposition disappear entirely.
pub fn standardize_accented_chars(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Delete `http(s)` and `www` URLs
pub fn remove_url(text: &str) -> String {
    let text = URL_SCHEME.replace_all(text, "");
    URL_WWW.replace_all(&text, "").into_owned()
}

/// Expand English contractions ("don't" → "do not")
pub fn expand_contractions(text: &str, expander: &ContractionExpander) -> String {
    expander.expand(text)
}

/// Delete `@mentions`
pub fn remove_mentions(text: &str) -> String {
    MENTION.replace_all(text, "").into_owned()
}

/// Delete `#hashtags`
pub fn remove_hashtags(text: &str) -> String {
    HASHTAG.replace_all(text, "").into_owned()
}

/// Replace every character outside `[a-zA-Z]` with a space
pub fn keep_only_alphabet(text: &str) -> String {
    NON_ALPHA.replace_all(text, " ").into_owned()
}

/// Replace literal `\n` escape sequences and real line breaks with a space
pub fn remove_new_lines(text: &str) -> String {
    NEW_LINE.replace_all(text, " ").into_owned()
}

/// Collapse whitespace runs to a single space and trim both ends
pub fn remove_extra_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace HTML/XML tags with a space
pub fn remove_html_tags(text: &str) -> String {
    HTML_TAG.replace_all(text, " ").into_owned()
}

pub(crate) fn builtin() -> Vec<Transform> {
    vec![
        Transform::text("to_lowercase", |s, _| to_lowercase(s)),
        Transform::text("standardize_accented_chars", |s, _| {
            standardize_accented_chars(s)
        }),
        Transform::text("remove_url", |s, _| remove_url(s)),
        Transform::text("expand_contractions", |s, res| {
            expand_contractions(s, &res.contractions)
        }),
        Transform::text("remove_mentions", |s, _| remove_mentions(s)),
        Transform::text("remove_hashtags", |s, _| remove_hashtags(s)),
        Transform::text("keep_only_alphabet", |s, _| keep_only_alphabet(s)),
        Transform::text("remove_new_lines", |s, _| remove_new_lines(s)),
        Transform::text("remove_extra_spaces", |s, _| remove_extra_spaces(s)),
        Transform::text("remove_html_tags", |s, _| remove_html_tags(s)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_lowercase() {
        assert_eq!(
            to_lowercase("IN CHINESE WE CALL CAPITALIZATION AS BIG WRITTING, IN GERMAN AS WELL."),
            "in chinese we call capitalization as big writting, in german as well."
        );
    }

    #[test]
    fn test_standardize_accented_chars() {
        assert_eq!(
            standardize_accented_chars(
                "sómě words such as résumé, café, prótest, divorcé, coördinate, exposé, latté."
            ),
            "some words such as resume, cafe, protest, divorce, coordinate, expose, latte."
        );
    }

    #[test]
    fn test_remove_url() {
        assert_eq!(
            remove_url("using https://www.google.com/ as an example"),
            "using  as an example"
        );
        assert_eq!(remove_url("see www.example.org now"), "see  now");
    }

    #[test]
    fn test_expand_contractions() {
        let expander = ContractionExpander::new();
        assert_eq!(
            expand_contractions("Don't is the same as do not", &expander),
            "Do not is the same as do not"
        );
    }

    #[test]
    fn test_remove_mentions() {
        assert_eq!(
            remove_mentions("Some random @abc and #def"),
            "Some random  and #def"
        );
    }

    #[test]
    fn test_remove_hashtags() {
        assert_eq!(
            remove_hashtags("Some random @abc and #def"),
            "Some random @abc and "
        );
    }

    #[test]
    fn test_keep_only_alphabet() {
        assert_eq!(
            keep_only_alphabet("Just a bit more $$processing required.Just a bit!!!"),
            "Just a bit more   processing required Just a bit   "
        );
    }

    #[test]
    fn test_remove_extra_spaces() {
        assert_eq!(
            remove_extra_spaces(" Too                    much spaces   in  between!           "),
            "Too much spaces in between!"
        );
    }

    #[test]
    fn test_remove_new_lines() {
        assert_eq!(remove_new_lines("One,\\nTwo"), "One, Two");
        assert_eq!(remove_new_lines("One,\nTwo\r\nThree"), "One, Two Three");
    }

    #[test]
    fn test_remove_html_tags() {
        assert_eq!(
            remove_html_tags("<p>Hello <b>world</b></p>"),
            " Hello  world  "
        );
    }

    #[test]
    fn test_idempotent_normalizers() {
        let s = "  Ünïcödé   TEXT\twith  spaces ";
        assert_eq!(to_lowercase(&to_lowercase(s)), to_lowercase(s));
        assert_eq!(
            remove_extra_spaces(&remove_extra_spaces(s)),
            remove_extra_spaces(s)
        );
        assert_eq!(
            standardize_accented_chars(&standardize_accented_chars(s)),
            standardize_accented_chars(s)
        );
    }
}
