//! Résumé text extraction from uploaded PDF bytes.

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts plain text from a PDF document held in memory.
///
/// Rejects payloads without the PDF header and documents with no extractable text
/// (scanned images, empty pages). CPU-bound; call from a blocking task.
pub fn extract_resume_text(bytes: &[u8]) -> Result<String, AppError> {
    if !is_pdf(bytes) {
        return Err(AppError::UnsupportedMedia(
            "Please upload a PDF file".to_string(),
        ));
    }

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::PdfExtraction(e.to_string()))?;

    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No text could be extracted from the PDF".to_string(),
        ));
    }
    Ok(text.to_string())
}

pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Upload check on the declared content type or, failing that, the file name.
pub fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    match content_type {
        Some(ct) if ct.eq_ignore_ascii_case("application/pdf") => true,
        Some(ct) if ct != "application/octet-stream" => false,
        _ => file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        let err = extract_resume_text(b"plain text resume").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedMedia(_)));
    }

    #[test]
    fn test_magic_header_check() {
        assert!(is_pdf(b"%PDF-1.7\n"));
        assert!(!is_pdf(b"PK\x03\x04"));
        assert!(!is_pdf(b""));
    }

    #[test]
    fn test_is_pdf_upload() {
        assert!(is_pdf_upload(Some("application/pdf"), None));
        assert!(is_pdf_upload(Some("Application/PDF"), Some("cv.txt")));
        assert!(is_pdf_upload(Some("application/octet-stream"), Some("CV.PDF")));
        assert!(is_pdf_upload(None, Some("resume.pdf")));
        assert!(!is_pdf_upload(Some("text/plain"), Some("resume.pdf")));
        assert!(!is_pdf_upload(None, Some("resume.docx")));
        assert!(!is_pdf_upload(None, None));
    }
}
