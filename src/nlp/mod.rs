//! Natural-language resources used by the transforms.
//!
//! Everything a transform needs beyond its input lives in [`NlpResources`],
//! which the executor receives by reference. There are no module-level
//! singletons: build one bundle, share it across the worker pool.

pub mod contractions;
pub mod lemmatizer;
pub mod stopwords;
pub mod tokenizer;

pub use contractions::ContractionExpander;
pub use lemmatizer::{Lemmatizer, PartOfSpeech};
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;

/// Immutable bundle of language resources shared by every worker.
#[derive(Debug, Clone, Default)]
pub struct NlpResources {
    pub tokenizer: Tokenizer,
    pub stopwords: StopwordFilter,
    pub lemmatizer: Lemmatizer,
    pub contractions: ContractionExpander,
}

impl NlpResources {
    /// English resources with default settings
    pub fn english() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            stopwords: StopwordFilter::new("en"),
            lemmatizer: Lemmatizer::new(),
            contractions: ContractionExpander::new(),
        }
    }

    /// Replace the stop-word filter
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the tokenizer
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }
}
