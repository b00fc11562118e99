//! Text cleanup helpers: stop-word removal and punctuation stripping.
//!
//! Both transforms are pure string functions. The word and symbol sets are
//! injectable so callers can localize them or narrow them for tests; the
//! defaults cover common English stop words and ASCII punctuation.
//!
//! ```
//! use dotnest::text::{self, StopWords};
//!
//! let stop = StopWords::english();
//! let kept = text::remove_stop_words_joined("Some stopwords can be removed", &stop);
//! assert_eq!(kept, "stopwords removed");
//! ```

use std::collections::{BTreeMap, HashSet};

use once_cell::sync::Lazy;

static ENGLISH_STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down",
        "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
        "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
        "its", "itself", "me", "more", "most", "my", "no", "nor", "not", "of", "off", "on",
        "once", "only", "or", "other", "ought", "our", "ours", "out", "over", "own", "same",
        "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
        "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

const ASCII_PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A case-insensitive stop-word set.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English stop-word set.
    pub fn english() -> Self {
        Self {
            words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Builds a set from arbitrary words (stored lowercased).
    pub fn new(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words
                .into_iter()
                .map(|word| word.into().to_lowercase())
                .collect(),
        }
    }

    /// Checks membership, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

/// A punctuation symbol set.
#[derive(Debug, Clone)]
pub struct Punctuation {
    symbols: HashSet<char>,
}

impl Punctuation {
    /// The built-in ASCII punctuation set.
    pub fn ascii() -> Self {
        Self {
            symbols: ASCII_PUNCTUATION.chars().collect(),
        }
    }

    /// Builds a set from arbitrary symbols.
    pub fn new(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Checks membership.
    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Punctuation {
    fn default() -> Self {
        Self::ascii()
    }
}

/// Removes stop words, keeping survivors under their original token index.
///
/// The text splits on whitespace; each surviving token is keyed by its
/// position in the original token sequence, so callers can tell `"stopwords"`
/// was the second word:
///
/// ```
/// # use dotnest::text::{self, StopWords};
/// let kept = text::remove_stop_words("Some stopwords can be removed", &StopWords::english());
/// assert_eq!(kept.get(&1).map(String::as_str), Some("stopwords"));
/// assert_eq!(kept.get(&4).map(String::as_str), Some("removed"));
/// assert_eq!(kept.len(), 2);
/// ```
pub fn remove_stop_words(text: &str, stop_words: &StopWords) -> BTreeMap<usize, String> {
    text.split_whitespace()
        .enumerate()
        .filter(|(_, token)| !stop_words.contains(token))
        .map(|(index, token)| (index, token.to_string()))
        .collect()
}

/// Removes stop words and joins the survivors with single spaces.
pub fn remove_stop_words_joined(text: &str, stop_words: &StopWords) -> String {
    text.split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips punctuation symbols and collapses the remaining whitespace.
pub fn remove_punctuation(text: &str, punctuation: &Punctuation) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !punctuation.contains(*c))
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
