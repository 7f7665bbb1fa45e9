//! Named document transforms.
//!
//! A [`Transform`] pairs a stable name with a function and an explicit
//! [`TransformDomain`] tag. String-domain transforms rewrite the whole
//! document; token-domain transforms rewrite the token list produced by the
//! pipeline's implicit tokenize step.
//!
//! - [`text`] — built-in string-domain transforms
//! - [`tokens`] — built-in token-domain transforms

pub mod text;
pub mod tokens;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::nlp::NlpResources;

/// Outcome of a single transform call; the error is a human-readable message.
pub type TransformResult<T> = std::result::Result<T, String>;

/// Signature of a string-domain transform.
pub type TextFn = Arc<dyn Fn(&str, &NlpResources) -> TransformResult<String> + Send + Sync>;

/// Signature of a token-domain transform.
pub type TokensFn =
    Arc<dyn Fn(Vec<String>, &NlpResources) -> TransformResult<Vec<String>> + Send + Sync>;

/// Which representation of a document a transform operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformDomain {
    /// Whole-string rewrite (`&str -> String`).
    Text,
    /// Token-list rewrite (`Vec<String> -> Vec<String>`).
    Tokens,
}

impl TransformDomain {
    /// Infer the domain from the historical naming convention: names
    /// starting with `lemmatize` or containing `stop_words` need tokens.
    ///
    /// Every built-in transform's explicit tag agrees with this convention.
    pub fn from_name(name: &str) -> Self {
        if name.starts_with("lemmatize") || name.contains("stop_words") {
            Self::Tokens
        } else {
            Self::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tokens => "tokens",
        }
    }
}

/// The function behind a transform, typed by domain.
#[derive(Clone)]
pub enum TransformFn {
    Text(TextFn),
    Tokens(TokensFn),
}

impl TransformFn {
    pub fn domain(&self) -> TransformDomain {
        match self {
            Self::Text(_) => TransformDomain::Text,
            Self::Tokens(_) => TransformDomain::Tokens,
        }
    }
}

/// A named transform with its domain tag.
#[derive(Clone)]
pub struct Transform {
    name: String,
    func: TransformFn,
}

impl Transform {
    /// Wrap an infallible string-domain function.
    pub fn text<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &NlpResources) -> String + Send + Sync + 'static,
    {
        Self::try_text(name, move |s, res| Ok(f(s, res)))
    }

    /// Wrap a fallible string-domain function.
    pub fn try_text<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, &NlpResources) -> TransformResult<String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: TransformFn::Text(Arc::new(f)),
        }
    }

    /// Wrap an infallible token-domain function.
    pub fn tokens<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<String>, &NlpResources) -> Vec<String> + Send + Sync + 'static,
    {
        Self::try_tokens(name, move |t, res| Ok(f(t, res)))
    }

    /// Wrap a fallible token-domain function.
    pub fn try_tokens<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(Vec<String>, &NlpResources) -> TransformResult<Vec<String>> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: TransformFn::Tokens(Arc::new(f)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> TransformDomain {
        self.func.domain()
    }

    pub fn func(&self) -> &TransformFn {
        &self.func
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .field("domain", &self.domain())
            .finish()
    }
}

/// Every built-in transform, in registration order.
pub fn builtin_transforms() -> Vec<Transform> {
    let mut all = text::builtin();
    all.extend(tokens::builtin());
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_name() {
        assert_eq!(TransformDomain::from_name("lemmatize"), TransformDomain::Tokens);
        assert_eq!(TransformDomain::from_name("lemmatize_verb"), TransformDomain::Tokens);
        assert_eq!(
            TransformDomain::from_name("remove_english_stop_words"),
            TransformDomain::Tokens
        );
        assert_eq!(TransformDomain::from_name("to_lowercase"), TransformDomain::Text);
        assert_eq!(TransformDomain::from_name("my_lemmatize"), TransformDomain::Text);
    }

    #[test]
    fn test_builtin_tags_follow_naming_convention() {
        for transform in builtin_transforms() {
            assert_eq!(
                transform.domain(),
                TransformDomain::from_name(transform.name()),
                "{}",
                transform.name()
            );
        }
    }

    #[test]
    fn test_builtin_names_unique() {
        let all = builtin_transforms();
        let names: std::collections::BTreeSet<_> = all.iter().map(|t| t.name()).collect();
        assert_eq!(names.len(), all.len());
        assert_eq!(all.len(), 15);
    }

    #[test]
    fn test_debug_format() {
        let t = Transform::text("upper", |s, _| s.to_uppercase());
        let dbg = format!("{t:?}");
        assert!(dbg.contains("upper"));
        assert!(dbg.contains("Text"));
    }
}
