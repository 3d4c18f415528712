//! Keyword Extractor — top-N terms by weight.

use super::tokenizer::Term;
use super::weighting::TermWeights;
use super::KeywordError;

/// Returns at most `top_n` terms ordered by descending weight.
///
/// Equal weights keep first-appearance order: `TermWeights` iterates in
/// token-stream order and `sort_by` is stable.
pub fn select_top_terms(weights: &TermWeights, top_n: usize) -> Result<Vec<Term>, KeywordError> {
    if top_n == 0 {
        return Err(KeywordError::InvalidArgument(
            "topN must be greater than 0".to_string(),
        ));
    }
    if weights.is_empty() {
        return Ok(Vec::new());
    }

    let mut ranked: Vec<(&str, f64)> = weights.iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    tracing::debug!(candidates = weights.len(), top_n, "Ranked terms");

    Ok(ranked
        .into_iter()
        .take(top_n)
        .map(|(term, _)| term.to_string())
        .collect())
}
