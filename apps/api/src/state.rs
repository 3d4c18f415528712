use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ExtractorRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; requests share no mutable data.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Format-dispatched text extractors. Default: PDF, DOCX, plain text.
    pub extractors: Arc<ExtractorRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            extractors: Arc::new(ExtractorRegistry::default()),
        }
    }
}
