//! Text Extractor — turns an uploaded resume PDF into one plain-text string.
//!
//! Page text is concatenated in page order with no layout reconstruction.
//! Image-only pages simply contribute nothing.

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded file is empty")]
    Empty,

    #[error("not a parseable PDF: {0}")]
    Pdf(#[from] pdf_extract::OutputError),

    #[error("PDF extraction aborted: {0}")]
    Aborted(String),
}

/// Returns true if the upload looks like a PDF by name, declared content type, or magic bytes.
pub fn looks_like_pdf(filename: Option<&str>, content_type: Option<&str>, head: &[u8]) -> bool {
    let by_name = filename
        .map(|f| f.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let by_type = content_type
        .map(|ct| ct.to_ascii_lowercase().contains("application/pdf"))
        .unwrap_or(false);
    by_name || by_type || head.starts_with(PDF_MAGIC)
}

/// Extracts the concatenated text of every page.
pub fn extract_text(pdf: &[u8]) -> Result<String, ExtractionError> {
    if pdf.is_empty() {
        return Err(ExtractionError::Empty);
    }
    let text = pdf_extract::extract_text_from_mem(pdf)?;
    debug!("Extracted {} chars from {} byte PDF", text.len(), pdf.len());
    Ok(text)
}

/// Runs [`extract_text`] on the blocking pool.
/// A panic inside the PDF library surfaces as [`ExtractionError::Aborted`].
pub async fn extract_text_blocking(pdf: Bytes) -> Result<String, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text(&pdf))
        .await
        .map_err(|e| ExtractionError::Aborted(e.to_string()))?
}


#[cfg(test)]
mod tests {
    use super::fixtures::pdf_with_pages;
    use super::*;

    #[test]
    fn test_looks_like_pdf_by_name_type_or_magic() {
        assert!(looks_like_pdf(Some("Resume.PDF"), None, b""));
        assert!(looks_like_pdf(None, Some("application/pdf"), b""));
        assert!(looks_like_pdf(None, None, b"%PDF-1.7\n"));
        assert!(!looks_like_pdf(Some("resume.docx"), Some("text/plain"), b"PK\x03\x04"));
    }

    #[test]
    fn test_empty_upload_is_rejected() {
        assert!(matches!(extract_text(b""), Err(ExtractionError::Empty)));
    }

    #[test]
    fn test_garbage_bytes_fail_to_parse() {
        let result = extract_text(b"this is plainly not a PDF document");
        assert!(result.is_err());
    }

    #[test]
    fn test_single_page_text_is_extracted() {
        let pdf = pdf_with_pages(&["Jane Rustacean"]);
        let text = extract_text(&pdf).unwrap();
        assert!(text.contains("Jane Rustacean"), "got: {text:?}");
    }

    #[test]
    fn test_pages_are_concatenated_in_order() {
        let pdf = pdf_with_pages(&["FirstPageMarker", "SecondPageMarker"]);
        let text = extract_text(&pdf).unwrap();
        let first = text.find("FirstPageMarker").expect("first page text");
        let second = text.find("SecondPageMarker").expect("second page text");
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_blocking_wrapper_propagates_errors() {
        let result = extract_text_blocking(Bytes::from_static(b"%PDF-1.4 truncated")).await;
        assert!(result.is_err());
    }
}
