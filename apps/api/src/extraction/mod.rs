//! Document text extraction — turns uploaded files into plain text for matching.
//!
//! Dispatch is by `DocumentFormat`, resolved once from the upload's MIME type
//! (falling back to its file extension). Each format has one `TextExtractor`
//! registered in `ExtractorRegistry`, which `AppState` carries as an `Arc`.

pub mod docx;
pub mod pdf;
pub mod plain;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use plain::PlainTextExtractor;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract text from {format} document: {message}")]
    Failed {
        format: DocumentFormat,
        message: String,
    },

    #[error("Extraction task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Closed set of formats the service can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
            DocumentFormat::PlainText => "plain text",
        };
        f.write_str(name)
    }
}

impl DocumentFormat {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Drop parameters such as "; charset=utf-8"
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            PDF_MIME => Some(DocumentFormat::Pdf),
            DOCX_MIME => Some(DocumentFormat::Docx),
            TEXT_MIME => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::PlainText),
            _ => None,
        }
    }
}

/// An uploaded file held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn format(&self) -> Result<DocumentFormat, ExtractionError> {
        self.content_type
            .as_deref()
            .and_then(DocumentFormat::from_mime)
            .or_else(|| {
                self.file_name
                    .as_deref()
                    .and_then(DocumentFormat::from_file_name)
            })
            .ok_or_else(|| {
                ExtractionError::UnsupportedFormat(
                    self.content_type
                        .clone()
                        .or_else(|| self.file_name.clone())
                        .unwrap_or_else(|| "unknown".to_string()),
                )
            })
    }
}

/// One extractor per format. Implementations must not retry.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    fn format(&self) -> DocumentFormat;

    async fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractionError>;
}

/// Maps each `DocumentFormat` to its extractor.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: HashMap<DocumentFormat, Arc<dyn TextExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::empty()
            .with(Arc::new(PdfExtractor))
            .with(Arc::new(DocxExtractor))
            .with(Arc::new(PlainTextExtractor))
    }
}

impl ExtractorRegistry {
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Registers `extractor`, replacing any previous one for the same format.
    pub fn with(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.extractors.insert(extractor.format(), extractor);
        self
    }

    /// Resolves the file's format and returns its trimmed text.
    pub async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        let format = file.format()?;
        let extractor = self
            .extractors
            .get(&format)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(format.to_string()))?;

        let text = extractor.extract_text(file).await?;
        tracing::debug!(
            %format,
            bytes = file.data.len(),
            chars = text.len(),
            "Extracted document text"
        );
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(file_name: Option<&str>, content_type: Option<&str>, data: &'static [u8]) -> UploadedFile {
        UploadedFile {
            file_name: file_name.map(String::from),
            content_type: content_type.map(String::from),
            data: Bytes::from_static(data),
        }
    }

    #[test]
    fn test_format_from_mime() {
        assert_eq!(DocumentFormat::from_mime(PDF_MIME), Some(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_mime(DOCX_MIME), Some(DocumentFormat::Docx));
        assert_eq!(
            DocumentFormat::from_mime("text/plain; charset=utf-8"),
            Some(DocumentFormat::PlainText)
        );
        assert_eq!(DocumentFormat::from_mime("image/png"), None);
    }

    #[test]
    fn test_format_falls_back_to_extension() {
        let file = upload(Some("resume.PDF"), Some("application/octet-stream"), b"");
        assert_eq!(file.format().unwrap(), DocumentFormat::Pdf);

        let file = upload(Some("notes.txt"), None, b"");
        assert_eq!(file.format().unwrap(), DocumentFormat::PlainText);
    }

    #[test]
    fn test_unknown_format_is_unsupported() {
        let file = upload(Some("photo.png"), Some("image/png"), b"");
        match file.format() {
            Err(ExtractionError::UnsupportedFormat(what)) => assert_eq!(what, "image/png"),
            other => panic!("expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_registry_dispatches_plain_text() {
        let registry = ExtractorRegistry::default();
        let file = upload(Some("jd.txt"), Some(TEXT_MIME), b"  Python SQL AWS \n");
        assert_eq!(registry.extract(&file).await.unwrap(), "Python SQL AWS");
    }

    #[tokio::test]
    async fn test_registry_dispatches_docx() {
        let registry = ExtractorRegistry::default();
        let file = upload(Some("cv.docx"), Some(DOCX_MIME), b"PK");
        let text = registry.extract(&file).await.unwrap();
        assert_eq!(text, docx::DOCX_PLACEHOLDER_TEXT);
    }

    #[tokio::test]
    async fn test_empty_registry_rejects_known_format() {
        let registry = ExtractorRegistry::empty();
        let file = upload(Some("jd.txt"), Some(TEXT_MIME), b"text");
        assert!(matches!(
            registry.extract(&file).await,
            Err(ExtractionError::UnsupportedFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_extractor_replaces_default() {
        struct Shouting;

        #[async_trait]
        impl TextExtractor for Shouting {
            fn format(&self) -> DocumentFormat {
                DocumentFormat::PlainText
            }

            async fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
                Ok(String::from_utf8_lossy(&file.data).to_uppercase())
            }
        }

        let registry = ExtractorRegistry::default().with(Arc::new(Shouting));
        let file = upload(None, Some(TEXT_MIME), b"rust");
        assert_eq!(registry.extract(&file).await.unwrap(), "RUST");
    }
}
