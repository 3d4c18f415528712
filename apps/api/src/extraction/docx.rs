use async_trait::async_trait;

use super::{DocumentFormat, ExtractionError, TextExtractor, UploadedFile};

/// Text returned for every DOCX upload until a real parser is wired in.
pub const DOCX_PLACEHOLDER_TEXT: &str = "Extracted DOCX content";

/// DOCX stand-in. Honors the extractor contract (bytes in, text out) so the
/// matching pipeline is exercised end-to-end for word-processor uploads.
pub struct DocxExtractor;

#[async_trait]
impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    async fn extract_text(&self, _file: &UploadedFile) -> Result<String, ExtractionError> {
        // TODO: parse the text runs in word/document.xml instead of returning the placeholder.
        Ok(DOCX_PLACEHOLDER_TEXT.to_string())
    }
}
