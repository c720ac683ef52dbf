use super::frequency::{FrequencyStats, InverseDocumentFrequency, TermFrequency};

/// Mean TF-IDF weight over the sentence's distinct tokens.
///
/// Averaging instead of summing keeps long sentences from winning on length
/// alone. A sentence without tokens scores exactly 0.
pub fn score_sentence(tf: &TermFrequency, idf: &InverseDocumentFrequency) -> f64 {
    if tf.is_empty() {
        return 0.0;
    }
    let total: f64 = tf.iter().map(|(token, weight)| weight * idf.get(token)).sum();
    total / tf.len() as f64
}

/// One score per sentence, aligned by sentence index.
pub fn score_sentences(stats: &FrequencyStats) -> Vec<f64> {
    stats
        .term_frequencies
        .iter()
        .map(|tf| score_sentence(tf, &stats.inverse_document_frequency))
        .collect()
}
