/*!
 * Document content extraction.
 *
 * Converts a document path into raw text, dispatching on the detected format.
 * PDF files are parsed with the pdf-extract crate; everything else is read as
 * UTF-8 text.
 */

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::errors::ExtractionError;

/// Supported document formats, selected once by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// PDF document, extracted page by page
    Pdf,
    /// Anything else is treated as plain text
    PlainText,
}

impl DocumentFormat {
    /// Determine the format from the file extension, case-insensitively
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension() {
            Some(ext) if ext.to_string_lossy().eq_ignore_ascii_case("pdf") => Self::Pdf,
            _ => Self::PlainText,
        }
    }
}

/// Extract the text content of a document.
///
/// Fails with `NotFound` if the path does not exist, and with `ContentRead`
/// if the document is a corrupt PDF or cannot be decoded as text.
pub fn extract_content<P: AsRef<Path>>(path: P) -> Result<String, ExtractionError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExtractionError::NotFound(path.to_path_buf()));
    }

    match DocumentFormat::from_path(path) {
        DocumentFormat::Pdf => extract_pdf(path),
        DocumentFormat::PlainText => extract_text(path),
    }
}

fn extract_pdf(path: &Path) -> Result<String, ExtractionError> {
    // pdf-extract can panic on certain embedded fonts, so isolate the call
    let path = path.to_path_buf();
    let result = std::panic::catch_unwind(move || pdf_extract::extract_text(&path));

    match result {
        Ok(Ok(content)) => Ok(content),
        Ok(Err(e)) => Err(ExtractionError::ContentRead(format!(
            "Failed to read PDF file: {}",
            e
        ))),
        Err(_) => Err(ExtractionError::ContentRead(
            "Failed to read PDF file: parser panicked".to_string(),
        )),
    }
}

fn extract_text(path: &Path) -> Result<String, ExtractionError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => {
            ExtractionError::ContentRead("File is not a valid text file or PDF.".to_string())
        }
        _ => ExtractionError::ContentRead(format!("Failed to read file: {}", e)),
    })
}
