use async_trait::async_trait;

use super::{DocumentFormat, ExtractionError, TextExtractor, UploadedFile};

/// `text/plain` uploads. Invalid UTF-8 sequences become U+FFFD.
pub struct PlainTextExtractor;

#[async_trait]
impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    async fn extract_text(&self, file: &UploadedFile) -> Result<String, ExtractionError> {
        Ok(String::from_utf8_lossy(&file.data).into_owned())
    }
}
