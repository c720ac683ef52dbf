use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SummarizeError;
use crate::nlp::{Stopwords, Summarizer};

/// Environment variable naming a stopword file; overrides the config file.
pub const STOPWORDS_ENV: &str = "TFSUM_STOPWORDS";

/// Settings read from a JSON file.
///
/// ```json
/// { "language": "english", "stopwords_file": null, "extra_stopwords": [], "sentences": 3 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language of the built-in stopword list.
    pub language: String,

    /// One-word-per-line stopword list used instead of the built-in one.
    pub stopwords_file: Option<PathBuf>,

    /// Words added on top of whichever list is loaded.
    pub extra_stopwords: Vec<String>,

    /// Default number of summary sentences.
    pub sentences: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "english".to_string(),
            stopwords_file: None,
            extra_stopwords: Vec::new(),
            sentences: 3,
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open config file {}", path.display()))?;
        let config: Config = serde_json::from_reader(file)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        ensure!(
            config.sentences >= 1,
            "invalid config file {}: \"sentences\" must be at least 1",
            path.display()
        );
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Apply `TFSUM_STOPWORDS` if it is set.
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var_os(STOPWORDS_ENV).map(PathBuf::from);
        self.with_stopwords_file(value)
    }

    /// Replace the stopword file when `path` is `Some`.
    pub fn with_stopwords_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.stopwords_file = Some(p);
        }
        self
    }

    /// Load the configured stopword set. Failure here is fatal: there is no
    /// fallback to an empty set.
    pub fn load_stopwords(&self) -> std::result::Result<Stopwords, SummarizeError> {
        let base = match &self.stopwords_file {
            Some(path) => Stopwords::from_file(path)?,
            None => Stopwords::for_language(&self.language)?,
        };
        let stopwords = base.with_extra(&self.extra_stopwords);
        info!(words = stopwords.len(), "stopwords ready");
        Ok(stopwords)
    }

    pub fn summarizer(&self) -> std::result::Result<Summarizer, SummarizeError> {
        Ok(Summarizer::new(Arc::new(self.load_stopwords()?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.language, "english");
        assert_eq!(config.sentences, 3);
        assert!(config.stopwords_file.is_none());
    }

    #[test]
    fn test_load_partial_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("tfsum.json");
        let mut file = File::create(&path)?;
        writeln!(file, r#"{{ "sentences": 5, "extra_stopwords": ["lorem"] }}"#)?;

        let config = Config::load(&path)?;
        assert_eq!(config.sentences, 5);
        assert_eq!(config.language, "english");
        assert_eq!(config.extra_stopwords, vec!["lorem".to_string()]);
        Ok(())
    }

    #[test]
    fn test_load_invalid_config() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.json");
        let mut file = File::create(&path)?;
        writeln!(file, "not json")?;
        assert!(Config::load(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_rejects_zero_sentences() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("zero.json");
        let mut file = File::create(&path)?;
        writeln!(file, r#"{{ "sentences": 0 }}"#)?;

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        Ok(())
    }

    #[test]
    fn test_load_missing_config() {
        assert!(Config::load(Path::new("/nonexistent/tfsum.json")).is_err());
    }

    #[test]
    fn test_load_stopwords_with_extra() -> Result<()> {
        let config = Config {
            extra_stopwords: vec!["Lorem".to_string()],
            ..Config::default()
        };
        let sw = config.load_stopwords()?;
        assert!(sw.contains("lorem"));
        assert!(sw.contains("the"));
        Ok(())
    }

    #[test]
    fn test_load_stopwords_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("stop.txt");
        let mut file = File::create(&path)?;
        writeln!(file, "cat\nsat")?;

        let config = Config::default().with_stopwords_file(Some(path));
        let sw = config.load_stopwords()?;
        assert_eq!(sw.len(), 2);
        assert!(!sw.contains("the"));
        Ok(())
    }

    #[test]
    fn test_unsupported_language_is_fatal() {
        let config = Config {
            language: "esperanto".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            config.load_stopwords(),
            Err(SummarizeError::ConfigurationMissing(_))
        ));
    }

    #[test]
    fn test_missing_stopword_file_is_fatal() {
        let config = Config::default()
            .with_stopwords_file(Some(PathBuf::from("/nonexistent/stop.txt")));
        assert!(matches!(
            config.summarizer(),
            Err(SummarizeError::ConfigurationMissing(_))
        ));
    }

    #[test]
    fn test_stopwords_override_none_keeps_config() {
        let config = Config::default().with_stopwords_file(None);
        assert!(config.stopwords_file.is_none());
    }
}
