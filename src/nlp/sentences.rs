// Rule-based sentence segmentation.
// A boundary is terminal punctuation (plus any closing quotes or brackets)
// followed by whitespace or the end of the text. A lone period is ignored
// after common abbreviations and before a word that starts in lower case.
// After a single letter it only ends a sentence when a common sentence
// starter follows ("plan B. Then ..." but not "J. Smith").
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static BOUNDARY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?…]+["'”’)\]]*(?:\s+|$)"#).unwrap()
});

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ave", "rd",
        "vs", "etc", "inc", "ltd", "co", "corp", "dept", "est", "fig", "approx",
        "gen", "gov", "sen", "rep", "capt", "col", "lt", "sgt",
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
    ]
    .iter()
    .copied()
    .collect()
});

static SENTENCE_STARTERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "After", "All", "An", "And", "As", "At", "But", "For", "He", "Her", "His",
        "However", "If", "In", "It", "Its", "My", "No", "Now", "On", "Our", "She",
        "So", "That", "The", "Their", "Then", "There", "These", "They", "This", "Those",
        "We", "What", "When", "Yes", "You",
    ]
    .iter()
    .copied()
    .collect()
});

/// One sentence of a document, borrowed from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Zero-based position in the document.
    pub index: usize,
    /// Trimmed text exactly as it appears in the document.
    pub text: &'a str,
}

/// Split `text` into sentences in reading order.
///
/// Empty or whitespace-only input yields no sentences; input without any
/// terminal punctuation yields the whole trimmed text as one sentence.
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in BOUNDARY_PATTERN.find_iter(text) {
        if m.end() < text.len() && !ends_sentence(text, m.start(), m.as_str(), m.end()) {
            continue;
        }
        push_sentence(&mut sentences, &text[start..m.end()]);
        start = m.end();
    }
    if start < text.len() {
        push_sentence(&mut sentences, &text[start..]);
    }

    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, slice: &'a str) {
    let trimmed = slice.trim();
    if !trimmed.is_empty() {
        sentences.push(Sentence {
            index: sentences.len(),
            text: trimmed,
        });
    }
}

fn ends_sentence(text: &str, punct_start: usize, matched: &str, next_start: usize) -> bool {
    let terminal: String = matched
        .trim_end()
        .chars()
        .filter(|&c| matches!(c, '.' | '!' | '?' | '…'))
        .collect();
    if terminal != "." {
        return true;
    }

    let word = text[..punct_start]
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    let next = &text[next_start..];
    if is_initial(word) {
        let next_word = next.split(|c: char| !c.is_alphanumeric()).next().unwrap_or("");
        return SENTENCE_STARTERS.contains(next_word);
    }
    if is_abbreviation(word) {
        return false;
    }

    match next.chars().next() {
        Some(c) => !c.is_lowercase(),
        None => true,
    }
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

fn is_abbreviation(word: &str) -> bool {
    if word.contains('.') {
        // dotted forms such as "e.g" or "U.S"
        return word
            .split('.')
            .all(|part| (1..=2).contains(&part.chars().count()) && part.chars().all(char::is_alphabetic));
    }
    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}
