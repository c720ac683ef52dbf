// NLP pipeline for TF-IDF sentence extraction
pub mod frequency;
pub mod scoring;
pub mod selector;
pub mod sentences;
pub mod stopwords;
pub mod summarization;
pub mod tokenizer;

pub use sentences::{split_sentences, Sentence};
pub use stopwords::Stopwords;
pub use summarization::{Summarizer, Summary};
