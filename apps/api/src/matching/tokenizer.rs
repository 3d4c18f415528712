//! Tokenizer — turns raw document text into a normalized stream of terms.
//!
//! Normalization: lowercase, then every non-alphanumeric character acts as a
//! separator. Terms found in the injected stopword set are dropped.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// A normalized token. Equality is exact string equality after normalization.
pub type Term = String;

/// Function words plus single letters and digits. Content words such as
/// "go", "web" or "research" are deliberately absent.
const ENGLISH_FUNCTION_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing",
    "during", "each", "few", "for", "from", "further", "get", "got", "has", "had", "he",
    "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
    "its", "itself", "like", "make", "many", "me", "might", "more", "most", "much", "must",
    "my", "myself", "never", "now", "of", "on", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "said", "same", "see", "should", "since", "so",
    "some", "still", "such", "take", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "way", "we", "well", "were", "what", "where",
    "when", "which", "while", "who", "whom", "with", "would", "why", "you", "your", "yours",
    "yourself", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o",
    "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "0", "1", "2", "3", "4", "5", "6",
    "7", "8", "9",
];

/// Set of terms excluded from the token stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords(HashSet<Term>);

impl Stopwords {
    /// Empty set: nothing is filtered.
    pub fn none() -> Self {
        Self::default()
    }

    /// Short English function-word list; the service default.
    pub fn english() -> Self {
        ENGLISH_FUNCTION_WORDS.iter().collect()
    }

    /// The full English list from the `stop-words` crate. Much broader: it
    /// also drops content words like "computer", "research" and "go".
    pub fn extended() -> Self {
        get(LANGUAGE::English).into_iter().collect()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    /// Stopwords go through the same normalization as document text, so a
    /// stopword like "Don't" filters both "don" and "t".
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .flat_map(|word| normalize(word.as_ref()).collect::<Vec<_>>())
                .collect(),
        )
    }
}

/// Stateless apart from its stopword set; cheap to share across requests.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: Stopwords,
}

impl Tokenizer {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    /// Returns terms in document order. Empty or whitespace-only input yields
    /// an empty vector.
    pub fn tokenize(&self, text: &str) -> Vec<Term> {
        normalize(text)
            .filter(|term| !self.stopwords.contains(term))
            .collect()
    }
}

fn normalize(text: &str) -> impl Iterator<Item = Term> + '_ {
    text.split_whitespace().flat_map(|chunk| {
        chunk
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    })
}
