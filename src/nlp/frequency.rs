// Term statistics over sentences treated as pseudo-documents.
use std::collections::{BTreeMap, HashMap, HashSet};

/// Relative frequency of each distinct token within one sentence.
///
/// Keys are kept sorted so that anything summed over them is reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    weights: BTreeMap<String, f64>,
}

impl TermFrequency {
    /// `count(token) / tokens.len()` for every distinct token. Empty input
    /// gives an empty mapping.
    pub fn from_tokens(tokens: &[String]) -> Self {
        if tokens.is_empty() {
            return Self::default();
        }
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for t in tokens {
            *counts.entry(t.as_str()).or_insert(0) += 1;
        }
        let total = tokens.len() as f64;
        let weights = counts
            .into_iter()
            .map(|(t, c)| (t.to_string(), c as f64 / total))
            .collect();
        Self { weights }
    }

    /// 0.0 for tokens not in the sentence.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Number of sentences containing each token at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequency {
    counts: HashMap<String, usize>,
}

impl DocumentFrequency {
    pub fn from_sentences(token_lists: &[Vec<String>]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for tokens in token_lists {
            let distinct: HashSet<&String> = tokens.iter().collect();
            for t in distinct {
                *counts.entry(t.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// 0 for tokens that never occur.
    pub fn get(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// Number of distinct tokens across all sentences.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// `ln(sentence_count / (1 + df))` per token.
///
/// Tokens present in most sentences get a negative weight; that is kept as
/// is, not floored at zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InverseDocumentFrequency {
    weights: HashMap<String, f64>,
}

impl InverseDocumentFrequency {
    pub fn new(df: &DocumentFrequency, sentence_count: usize) -> Self {
        let total = sentence_count as f64;
        let weights = df
            .iter()
            .map(|(t, c)| (t.to_string(), (total / (1.0 + c as f64)).ln()))
            .collect();
        Self { weights }
    }

    /// 0.0 for tokens outside the vocabulary.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// All statistics for one document, built in a single pass over its
/// tokenized sentences.
#[derive(Debug, Clone)]
pub struct FrequencyStats {
    /// One entry per sentence, aligned by index.
    pub term_frequencies: Vec<TermFrequency>,
    pub document_frequency: DocumentFrequency,
    pub inverse_document_frequency: InverseDocumentFrequency,
}

impl FrequencyStats {
    pub fn build(token_lists: &[Vec<String>]) -> Self {
        let document_frequency = DocumentFrequency::from_sentences(token_lists);
        let inverse_document_frequency =
            InverseDocumentFrequency::new(&document_frequency, token_lists.len());
        let term_frequencies = token_lists
            .iter()
            .map(|tokens| TermFrequency::from_tokens(tokens))
            .collect();
        Self {
            term_frequencies,
            document_frequency,
            inverse_document_frequency,
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.term_frequencies.len()
    }
}
