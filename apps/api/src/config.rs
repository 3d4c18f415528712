use anyhow::{bail, Context, Result};

use crate::matching::Stopwords;

/// What `/upload` does with a file whose format no extractor recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedFormatPolicy {
    /// Treat the file as empty text and score it anyway.
    TreatAsEmpty,
    /// Fail the request with 415.
    Reject,
}

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub keyword_top_n: usize,
    pub stopwords: Stopwords,
    pub max_upload_bytes: usize,
    pub unsupported_format_policy: UnsupportedFormatPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            rust_log: "info".to_string(),
            keyword_top_n: 50,
            stopwords: Stopwords::english(),
            max_upload_bytes: 10 * 1024 * 1024,
            unsupported_format_policy: UnsupportedFormatPolicy::TreatAsEmpty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let keyword_top_n = match lookup("KEYWORD_TOP_N") {
            Some(v) => v
                .parse::<usize>()
                .context("KEYWORD_TOP_N must be a positive integer")?,
            None => defaults.keyword_top_n,
        };
        if keyword_top_n == 0 {
            bail!("KEYWORD_TOP_N must be greater than 0");
        }

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            keyword_top_n,
            stopwords: lookup("STOPWORDS")
                .map(|v| parse_stopwords(&v))
                .unwrap_or(defaults.stopwords),
            max_upload_bytes: match lookup("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                None => defaults.max_upload_bytes,
            },
            unsupported_format_policy: match lookup("UNSUPPORTED_FORMAT_POLICY") {
                Some(v) => parse_format_policy(&v)?,
                None => defaults.unsupported_format_policy,
            },
        })
    }
}

/// `english`, `extended`, `none`, or a comma-separated custom list.
pub fn parse_stopwords(value: &str) -> Stopwords {
    match value.trim().to_ascii_lowercase().as_str() {
        "english" => Stopwords::english(),
        "extended" => Stopwords::extended(),
        "none" | "" => Stopwords::none(),
        _ => value
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect(),
    }
}

fn parse_format_policy(value: &str) -> Result<UnsupportedFormatPolicy> {
    match value.trim().to_ascii_lowercase().as_str() {
        "empty" => Ok(UnsupportedFormatPolicy::TreatAsEmpty),
        "reject" => Ok(UnsupportedFormatPolicy::Reject),
        other => bail!("UNSUPPORTED_FORMAT_POLICY must be 'empty' or 'reject', got '{other}'"),
    }
}
