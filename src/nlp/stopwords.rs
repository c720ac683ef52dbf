// Stopword sets used to filter filler words out of sentence tokens.
// The built-in English list is the NLTK English corpus list, embedded so it
// cannot fail to load at runtime.
use crate::error::{Result, SummarizeError};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// A read-only set of lower-cased stopwords.
///
/// Build it once, then share it (by reference or `Arc`) across every
/// summarization call. There is no way to mutate a set after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Built-in list for a language name. Only English ships with the crate;
    /// any other language is a configuration error rather than an empty set.
    pub fn for_language(language: &str) -> Result<Self> {
        match language.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::english()),
            other => Err(SummarizeError::ConfigurationMissing(format!(
                "no stopword list available for language '{}'",
                other
            ))),
        }
    }

    /// Build a set from arbitrary words. Entries are trimmed and lower-cased;
    /// blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Load a list with one word per line. Lines starting with `#` are comments.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SummarizeError::ConfigurationMissing(format!("{}: {}", path.display(), e))
        })?;
        let set = Self::from_words(
            content
                .lines()
                .filter(|line| !line.trim_start().starts_with('#')),
        );
        if set.is_empty() {
            return Err(SummarizeError::ConfigurationMissing(format!(
                "{}: stopword list is empty",
                path.display()
            )));
        }
        debug!(path = %path.display(), words = set.len(), "loaded stopword list");
        Ok(set)
    }

    /// Consume the set and return it with `extra` words added.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(
            extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );
        self
    }

    /// `word` must already be lower-cased.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
