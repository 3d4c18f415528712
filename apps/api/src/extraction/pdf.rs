use std::fmt::Display;

use async_trait::async_trait;
use tokio::task::JoinError;

use super::{DocumentFormat, ExtractionError, TextExtractor, UploadedFile};

/// PDF text via `pdf-extract`. Parsing is CPU-bound, so it runs on the
/// blocking pool instead of an async worker.
pub struct PdfExtractor;

#[async_trait]
impl TextExtractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    async fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let data = file.data.clone();
        let outcome =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;
        into_extraction_result(outcome)
    }
}

/// `pdf-extract` panics on some malformed files. A panic is a bad upload,
/// not a server fault, so it maps to `Failed` like any other parse error.
fn into_extraction_result<E: Display>(
    outcome: Result<Result<String, E>, JoinError>,
) -> Result<String, ExtractionError> {
    match outcome {
        Ok(parsed) => parsed.map_err(|e| ExtractionError::Failed {
            format: DocumentFormat::Pdf,
            message: e.to_string(),
        }),
        Err(e) if e.is_panic() => {
            tracing::warn!("PDF parser panicked on malformed input");
            Err(ExtractionError::Failed {
                format: DocumentFormat::Pdf,
                message: "PDF parser panicked on malformed input".to_string(),
            })
        }
        Err(e) => Err(ExtractionError::Join(e)),
    }
}
