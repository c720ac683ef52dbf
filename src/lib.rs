//! Extractive text summarization with sentence-level TF-IDF.
//!
//! Every sentence is treated as a pseudo-document. Sentences are scored by
//! the mean TF-IDF weight of their non-stopword tokens and the best ones are
//! returned verbatim, in their original order.
//!
//! ```
//! let summary = tfidf_summarizer::summarize(
//!     "The cat sat. Dogs bark loudly at night. The cat sat on the mat again.",
//!     1,
//! );
//! assert_eq!(summary, "Dogs bark loudly at night.");
//! ```
pub mod config;
pub mod error;
pub mod input;
pub mod nlp;

use once_cell::sync::Lazy;
use std::sync::Arc;

pub use config::Config;
pub use error::SummarizeError;
pub use nlp::{Stopwords, Summarizer, Summary};

static DEFAULT_SUMMARIZER: Lazy<Summarizer> =
    Lazy::new(|| Summarizer::new(Arc::new(Stopwords::english())));

/// Summarize `text` to at most `sentence_count` sentences using the built-in
/// English stopword list.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    DEFAULT_SUMMARIZER.summarize(text, sentence_count)
}
