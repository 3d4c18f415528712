//! Comparison Engine — set overlap between resume and job-description keywords.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::tokenizer::Term;

/// Distinguishes a real score from the empty job-description boundary case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonOutcome {
    Scored,
    /// No job-description keywords: score is 0 and both lists are empty.
    EmptyJobDescription,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// 0.0 – 100.0
    pub match_percentage: f64,
    pub matched_keywords: Vec<Term>,
    pub missing_keywords: Vec<Term>,
    pub outcome: ComparisonOutcome,
}

impl ComparisonResult {
    fn empty_job_description() -> Self {
        Self {
            match_percentage: 0.0,
            matched_keywords: vec![],
            missing_keywords: vec![],
            outcome: ComparisonOutcome::EmptyJobDescription,
        }
    }
}

/// Compares two keyword lists by set membership.
///
/// Duplicates collapse, so the denominator is the number of distinct
/// job-description keywords. Output lists follow job-description order.
pub fn compare(resume_keywords: &[Term], job_keywords: &[Term]) -> ComparisonResult {
    let resume: HashSet<&str> = resume_keywords.iter().map(String::as_str).collect();

    let mut seen = HashSet::new();
    let job: Vec<&str> = job_keywords
        .iter()
        .map(String::as_str)
        .filter(|kw| seen.insert(*kw))
        .collect();

    if job.is_empty() {
        return ComparisonResult::empty_job_description();
    }

    let total = job.len();
    let (matched, missing): (Vec<&str>, Vec<&str>) =
        job.into_iter().partition(|kw| resume.contains(kw));

    let match_percentage = 100.0 * matched.len() as f64 / total as f64;

    ComparisonResult {
        match_percentage,
        matched_keywords: matched.into_iter().map(str::to_string).collect(),
        missing_keywords: missing.into_iter().map(str::to_string).collect(),
        outcome: ComparisonOutcome::Scored,
    }
}
