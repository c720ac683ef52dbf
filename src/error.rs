use thiserror::Error;

/// Failures the summarizer reports to its caller.
///
/// Empty or whitespace-only text is not an error: it summarizes to an empty
/// string.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The input could not be read as text.
    #[error("input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),

    /// The stopword set (or another language resource) could not be loaded.
    #[error("stopword configuration unavailable: {0}")]
    ConfigurationMissing(String),
}

pub type Result<T> = std::result::Result<T, SummarizeError>;
