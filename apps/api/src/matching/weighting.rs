//! Term Weighting Index — per-document `tf * idf` weights.
//!
//! Without a reference corpus every `idf` is 1 and the weight is the raw term
//! frequency. With a corpus, `idf(t) = ln(N / df(t))` where the target document
//! is counted both in `N` and in `df(t)`, so `df(t) >= 1` and `idf(t) >= 0`.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use super::tokenizer::{Term, Tokenizer};
use super::KeywordError;

/// A caller-owned document. The core never persists it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: Uuid,
    pub text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

/// Whether an empty document is an error. `Allow` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    #[default]
    Allow,
    Reject,
}

/// Term counts for exactly one document. Entries keep first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequencyTable {
    entries: Vec<(Term, u32)>,
    index: HashMap<Term, usize>,
}

impl TermFrequencyTable {
    pub fn from_terms(terms: &[Term]) -> Self {
        let mut table = Self::default();
        for term in terms {
            match table.index.get(term) {
                Some(&i) => table.entries[i].1 += 1,
                None => {
                    table.index.insert(term.clone(), table.entries.len());
                    table.entries.push((term.clone(), 1));
                }
            }
        }
        table
    }

    #[cfg(test)]
    pub fn count(&self, term: &str) -> u32 {
        self.index.get(term).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// Sum of all counts; equals the number of tokens the table was built from.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(term, count)| (term.as_str(), *count))
    }
}

/// Non-negative weight per distinct term, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights {
    entries: Vec<(Term, f64)>,
}

impl TermWeights {
    #[cfg(test)]
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, weight)| *weight)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(term, weight)| (term.as_str(), *weight))
    }
}

impl FromIterator<(Term, f64)> for TermWeights {
    fn from_iter<I: IntoIterator<Item = (Term, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Document frequencies over a reference corpus, target document included.
struct DocumentFrequencies {
    total_docs: usize,
    corpus_sets: Vec<HashSet<Term>>,
}

impl DocumentFrequencies {
    fn new(corpus: &[Document], tokenizer: &Tokenizer) -> Self {
        let corpus_sets = corpus
            .iter()
            .map(|doc| tokenizer.tokenize(&doc.text).into_iter().collect())
            .collect::<Vec<HashSet<Term>>>();
        Self {
            total_docs: corpus_sets.len() + 1,
            corpus_sets,
        }
    }

    fn idf(&self, term: &str) -> f64 {
        let containing = 1 + self
            .corpus_sets
            .iter()
            .filter(|set| set.contains(term))
            .count();
        (self.total_docs as f64 / containing as f64).ln()
    }
}

/// Builds `tf * idf` weights for `doc`.
///
/// `reference_corpus` of `None` or an empty slice means single-document
/// scoring (`idf = 1`).
pub fn build_weights(
    doc: &Document,
    reference_corpus: Option<&[Document]>,
    tokenizer: &Tokenizer,
    empty_policy: EmptyPolicy,
) -> Result<TermWeights, KeywordError> {
    let terms = tokenizer.tokenize(&doc.text);
    if terms.is_empty() && empty_policy == EmptyPolicy::Reject {
        return Err(KeywordError::EmptyDocument);
    }

    let table = TermFrequencyTable::from_terms(&terms);
    let frequencies = reference_corpus
        .filter(|corpus| !corpus.is_empty())
        .map(|corpus| DocumentFrequencies::new(corpus, tokenizer));

    tracing::debug!(
        document_id = %doc.id,
        tokens = table.total(),
        distinct_terms = table.len(),
        corpus_docs = frequencies.as_ref().map(|f| f.total_docs - 1).unwrap_or(0),
        "Built term weights"
    );

    Ok(table
        .iter()
        .map(|(term, tf)| {
            let idf = frequencies.as_ref().map(|f| f.idf(term)).unwrap_or(1.0);
            (term.to_string(), f64::from(tf) * idf)
        })
        .collect())
}
