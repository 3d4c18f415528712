//! Keyword matching core: tokenize → weight → select top-N → compare.
//!
//! Every operation here is a synchronous pure function over its inputs. No
//! state is retained between calls, so handlers may invoke them concurrently.

pub mod comparison;
pub mod handlers;
pub mod keywords;
pub mod tokenizer;
pub mod weighting;

use thiserror::Error;

pub use comparison::{compare, ComparisonResult};
pub use keywords::select_top_terms;
pub use tokenizer::{Stopwords, Tokenizer};
pub use weighting::{build_weights, Document, EmptyPolicy};

/// Caller-misuse errors raised by the core. Degenerate data (empty text,
/// empty keyword lists, empty corpus) is never an error.
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Document contains no terms")]
    EmptyDocument,
}

/// Options for [`extract_keywords`].
#[derive(Debug, Clone, Default)]
pub struct KeywordOptions {
    pub stopwords: Stopwords,
    /// Other documents used for inverse-document-frequency dampening.
    /// `None` scores the text on its own.
    pub reference_corpus: Option<Vec<String>>,
    pub empty_policy: EmptyPolicy,
}

/// Extracts the `top_n` highest-weighted terms of `text`.
pub fn extract_keywords(
    text: &str,
    top_n: usize,
    options: &KeywordOptions,
) -> Result<Vec<String>, KeywordError> {
    if top_n == 0 {
        return Err(KeywordError::InvalidArgument(
            "topN must be greater than 0".to_string(),
        ));
    }

    let tokenizer = Tokenizer::new(options.stopwords.clone());
    let corpus: Option<Vec<Document>> = options
        .reference_corpus
        .as_ref()
        .map(|texts| texts.iter().map(Document::new).collect());

    let weights = build_weights(
        &Document::new(text),
        corpus.as_deref(),
        &tokenizer,
        options.empty_policy,
    )?;

    select_top_terms(&weights, top_n)
}

/// Compares resume keywords against job-description keywords.
pub fn compare_keywords(resume_keywords: &[String], job_keywords: &[String]) -> ComparisonResult {
    compare(resume_keywords, job_keywords)
}

#[cfg(test)]
mod tests {
    use super::comparison::ComparisonOutcome;
    use super::*;

    #[test]
    fn test_end_to_end_partial_match() {
        let options = KeywordOptions::default();
        let resume = extract_keywords("Java Python SQL", 10, &options).unwrap();
        let job = extract_keywords("Python SQL AWS", 10, &options).unwrap();

        assert_eq!(resume, vec!["java", "python", "sql"]);
        assert_eq!(job, vec!["python", "sql", "aws"]);

        let result = compare_keywords(&resume, &job);
        assert_eq!(result.matched_keywords, vec!["python", "sql"]);
        assert_eq!(result.missing_keywords, vec!["aws"]);
        assert!((result.match_percentage - 66.67).abs() < 0.01);
    }

    #[test]
    fn test_end_to_end_empty_texts() {
        let options = KeywordOptions::default();
        let resume = extract_keywords("", 10, &options).unwrap();
        let job = extract_keywords("", 10, &options).unwrap();
        assert!(resume.is_empty());
        assert!(job.is_empty());

        let result = compare_keywords(&resume, &job);
        assert_eq!(result.match_percentage, 0.0);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.outcome, ComparisonOutcome::EmptyJobDescription);
    }

    #[test]
    fn test_default_stopwords_keep_single_word_skills() {
        let options = KeywordOptions {
            stopwords: Stopwords::english(),
            ..Default::default()
        };
        let keywords = extract_keywords(
            "C R Go Computer Research Information Systems Python",
            10,
            &options,
        )
        .unwrap();
        assert_eq!(
            keywords,
            vec!["go", "computer", "research", "information", "systems", "python"]
        );
    }

    #[test]
    fn test_english_stopwords_leave_skill_terms() {
        let options = KeywordOptions {
            stopwords: Stopwords::english(),
            ..Default::default()
        };
        let resume = extract_keywords("Java Python SQL", 10, &options).unwrap();
        assert_eq!(resume, vec!["java", "python", "sql"]);
    }

    #[test]
    fn test_result_never_exceeds_top_n_and_has_no_duplicates() {
        let text = "rust rust go go go sql aws aws kafka redis rust postgres";
        let options = KeywordOptions::default();
        for n in 1..=10 {
            let keywords = extract_keywords(text, n, &options).unwrap();
            assert!(keywords.len() <= n);
            let mut deduped = keywords.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), keywords.len());
        }
    }

    #[test]
    fn test_frequency_drives_ranking() {
        let keywords =
            extract_keywords("aws rust go rust go rust", 2, &KeywordOptions::default()).unwrap();
        assert_eq!(keywords, vec!["rust", "go"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let text = "delta alpha charlie bravo alpha delta echo";
        let options = KeywordOptions::default();
        let first = extract_keywords(text, 4, &options).unwrap();
        let second = extract_keywords(text, 4, &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["delta", "alpha", "charlie", "bravo"]);
    }

    #[test]
    fn test_reference_corpus_reorders_keywords() {
        let text = "python python python kubernetes kubernetes";
        let plain = extract_keywords(text, 2, &KeywordOptions::default()).unwrap();
        assert_eq!(plain, vec!["python", "kubernetes"]);

        let options = KeywordOptions {
            reference_corpus: Some(vec![
                "python developer".to_string(),
                "python analyst".to_string(),
                "python tester".to_string(),
            ]),
            ..Default::default()
        };
        let dampened = extract_keywords(text, 2, &options).unwrap();
        assert_eq!(dampened, vec!["kubernetes", "python"]);
    }

    #[test]
    fn test_zero_top_n_rejected_even_for_empty_text() {
        let result = extract_keywords("", 0, &KeywordOptions::default());
        assert!(matches!(result, Err(KeywordError::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_text_rejected_when_policy_requires_terms() {
        let options = KeywordOptions {
            empty_policy: EmptyPolicy::Reject,
            ..Default::default()
        };
        let result = extract_keywords("  ", 5, &options);
        assert!(matches!(result, Err(KeywordError::EmptyDocument)));
    }

    #[test]
    fn test_core_is_callable_from_many_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    let options = KeywordOptions::default();
                    let resume = extract_keywords("Java Python SQL", 10, &options).unwrap();
                    let job = extract_keywords("Python SQL AWS", 10, &options).unwrap();
                    compare_keywords(&resume, &job).match_percentage
                })
            })
            .collect();
        for handle in handles {
            let score = handle.join().unwrap();
            assert!((score - 200.0 / 3.0).abs() < 1e-9);
        }
    }
}
