use super::stopwords::Stopwords;
use once_cell::sync::Lazy;
use regex::Regex;

// Letters/digits joined by inner hyphens, apostrophes or periods, plus
// digit groups after a comma ("1,000").
static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:[-'’.][\p{L}\p{N}]+|,\p{N}+)*").unwrap()
});

const CLITICS: &[&str] = &["'s", "'re", "'ll", "'ve", "'d", "'m"];

/// Strip a trailing English clitic, keeping the stem: "google's" -> "google",
/// "can't" -> "ca". Hyphenated words and other apostrophe forms ("o'neill")
/// are returned whole.
fn stem(word: &str) -> &str {
    if word.contains('-') {
        return word;
    }
    let Some(cut) = word.rfind(['\'', '’']) else {
        return word;
    };
    let (head, tail) = word.split_at(cut);
    let clitic = tail.replacen('’', "'", 1);
    if clitic == "'t" && head.len() > 1 && head.ends_with('n') {
        return &head[..head.len() - 1];
    }
    if !head.is_empty() && CLITICS.contains(&clitic.as_str()) {
        return head;
    }
    word
}

/// Lower-case `sentence`, split it into words and keep only purely
/// alphanumeric words that are not stopwords. Order is preserved and
/// duplicates are kept.
///
/// Hyphenated compounds stay one unit (and are dropped as non-alphanumeric);
/// possessive and contraction endings are split off their stem.
pub fn tokenize(sentence: &str, stopwords: &Stopwords) -> Vec<String> {
    let lower = sentence.to_lowercase();
    WORD_PATTERN
        .find_iter(&lower)
        .map(|m| stem(m.as_str()))
        .filter(|w| !w.is_empty() && w.chars().all(char::is_alphanumeric))
        .filter(|w| !stopwords.contains(w))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello, World! This is a test.", &Stopwords::english());
        assert_eq!(tokens, vec!["hello", "world", "test"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates_and_order() {
        let sw = Stopwords::from_words(["the"]);
        let tokens = tokenize("The dog chased the dog", &sw);
        assert_eq!(tokens, vec!["dog", "chased", "dog"]);
    }

    #[test]
    fn test_tokenize_drops_non_alphanumeric_units() {
        let sw = Stopwords::from_words(["x"]);
        let tokens = tokenize("It's 3.14 or U.S. 1,000 test123 -- ok", &sw);
        assert_eq!(tokens, vec!["it", "or", "test123", "ok"]);
    }

    #[test]
    fn test_tokenize_possessive() {
        let tokens = tokenize("Google's model beat OpenAI’s model.", &Stopwords::english());
        assert_eq!(tokens, vec!["google", "model", "beat", "openai", "model"]);
    }

    #[test]
    fn test_tokenize_hyphenated() {
        let tokens = tokenize("A state-of-the-art well-known system.", &Stopwords::english());
        assert_eq!(tokens, vec!["system"]);
    }

    #[test]
    fn test_tokenize_contractions() {
        let sw = Stopwords::english();
        assert_eq!(tokenize("They can't stop.", &sw), vec!["ca", "stop"]);
        assert_eq!(tokenize("We won’t go, we'll stay.", &sw), vec!["wo", "go", "stay"]);
        assert_eq!(tokenize("O'Neill spoke.", &sw), vec!["spoke"]);
    }

    #[test]
    fn test_tokenize_unicode() {
        let sw = Stopwords::from_words(["et"]);
        let tokens = tokenize("Café ET Résumé", &sw);
        assert_eq!(tokens, vec!["café", "résumé"]);
    }

    #[test]
    fn test_tokenize_only_stopwords() {
        assert!(tokenize("It is what it is!", &Stopwords::english()).is_empty());
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("", &Stopwords::english()).is_empty());
    }
}
