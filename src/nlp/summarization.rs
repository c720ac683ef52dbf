// Extractive summarization: score every sentence by its mean TF-IDF weight
// (each sentence is a pseudo-document) and keep the best ones verbatim.
use super::frequency::FrequencyStats;
use super::scoring::score_sentences;
use super::selector::select_top;
use super::sentences::split_sentences;
use super::stopwords::Stopwords;
use super::tokenizer::tokenize;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// A summary together with the data used to pick it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces, in document order.
    pub summary: String,
    /// Indices of the selected sentences, ascending.
    pub selected: Vec<usize>,
    /// Score of every sentence, aligned by index.
    pub scores: Vec<f64>,
    pub sentence_count: usize,
}

/// Sentence-selecting summarizer bound to one stopword set.
///
/// Holds no per-call state; a single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct Summarizer {
    stopwords: Arc<Stopwords>,
}

impl Summarizer {
    pub fn new(stopwords: Arc<Stopwords>) -> Self {
        Self { stopwords }
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// The `sentence_count` highest-scoring sentences of `text`, in their
    /// original order. Empty text gives an empty string.
    pub fn summarize(&self, text: &str, sentence_count: usize) -> String {
        self.summarize_detailed(text, sentence_count).summary
    }

    /// Like [`Summarizer::summarize`] for raw bytes, which must be UTF-8.
    pub fn summarize_bytes(&self, bytes: &[u8], sentence_count: usize) -> Result<String> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.summarize(text, sentence_count))
    }

    pub fn summarize_detailed(&self, text: &str, sentence_count: usize) -> Summary {
        let sentences = split_sentences(text);
        let token_lists: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| tokenize(s.text, &self.stopwords))
            .collect();

        let stats = FrequencyStats::build(&token_lists);
        let scores = score_sentences(&stats);
        let selected = select_top(&scores, sentence_count);
        debug!(
            sentences = sentences.len(),
            vocabulary = stats.document_frequency.len(),
            requested = sentence_count,
            ?selected,
            "selected summary sentences"
        );

        let summary = selected
            .iter()
            .map(|&i| sentences[i].text)
            .collect::<Vec<_>>()
            .join(" ");

        Summary {
            summary,
            selected,
            scores,
            sentence_count: sentences.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SummarizeError;

    fn english() -> Summarizer {
        Summarizer::new(Arc::new(Stopwords::english()))
    }

    #[test]
    fn test_summarize_picks_rarest_sentence() {
        let text = "The cat sat. Dogs bark loudly at night. The cat sat on the mat again.";
        assert_eq!(english().summarize(text, 1), "Dogs bark loudly at night.");
    }

    #[test]
    fn test_summarize_keeps_document_order() {
        let text = "The cat sat. Dogs bark loudly at night. The cat sat on the mat again.";
        assert_eq!(
            english().summarize(text, 2),
            "Dogs bark loudly at night. The cat sat on the mat again."
        );
    }

    #[test]
    fn test_summarize_empty_text() {
        assert_eq!(english().summarize("", 3), "");
        assert_eq!(english().summarize("  \n ", 3), "");
    }

    #[test]
    fn test_summarize_short_text() {
        assert_eq!(english().summarize("Only one sentence here.", 5), "Only one sentence here.");
    }

    #[test]
    fn test_summarize_all_sentences() {
        let text = "First point here.  Second point there!\nThird point, finally?";
        assert_eq!(
            english().summarize(text, 3),
            "First point here. Second point there! Third point, finally?"
        );
    }

    #[test]
    fn test_summarize_zero_sentences() {
        assert_eq!(english().summarize("Something. Else.", 0), "");
    }

    #[test]
    fn test_summarize_detailed() {
        let text = "The cat sat. Dogs bark loudly at night. The cat sat on the mat again.";
        let summary = english().summarize_detailed(text, 2);
        assert_eq!(summary.sentence_count, 3);
        assert_eq!(summary.selected, vec![1, 2]);
        assert_eq!(summary.scores.len(), 3);
        assert_eq!(summary.scores[0], 0.0);
    }

    #[test]
    fn test_summarize_bytes_rejects_invalid_utf8() {
        let err = english().summarize_bytes(&[0x66, 0xff, 0xfe], 1).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidInput(_)));
    }

    #[test]
    fn test_summarize_bytes() -> anyhow::Result<()> {
        let out = english().summarize_bytes("Only one sentence here.".as_bytes(), 1)?;
        assert_eq!(out, "Only one sentence here.");
        Ok(())
    }

    #[test]
    fn test_summarize_with_custom_stopwords() {
        let summarizer = Summarizer::new(Arc::new(Stopwords::from_words(["apples"])));
        let text = "Apples apples apples. Pears are green. Pears are ripe.";
        // with "apples" ignored the first sentence has no tokens and scores 0,
        // "are" is shared, "green"/"ripe" are rare
        let summary = summarizer.summarize_detailed(text, 1);
        assert_eq!(summary.scores[0], 0.0);
        assert_eq!(summary.selected, vec![1]);
    }
}
