pub mod chunker;
pub mod clean;
mod pdf;
mod txt;

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A page of raw extracted text.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number (for PDFs). For plain text, always 1.
    pub page_number: usize,
    /// The extracted text, untouched by the normalizer.
    pub text: String,
}

/// Result of extracting text from a document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// Original filename.
    pub filename: String,
    /// File type: "pdf" or "txt".
    pub file_type: String,
    /// Extracted pages in document order.
    pub pages: Vec<PageContent>,
}

impl ExtractedDocument {
    /// Get all raw text concatenated.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Total raw character count across all pages.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }
}

/// File extensions the extraction layer accepts. Markdown is read as plain
/// text — chunking here is page-based, not heading-based.
const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "txt", "text", "md", "markdown"];

/// Whether `path` carries a supported document extension.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Extract text from file bytes based on file type.
pub fn extract_text(bytes: &[u8], filename: &str) -> Result<ExtractedDocument, ExtractionError> {
    let ext = filename.rsplit('.').next().unwrap_or("").to_lowercase();

    let (file_type, pages) = match ext.as_str() {
        "pdf" => ("pdf", pdf::extract_pdf(bytes)?),
        "txt" | "text" | "md" | "markdown" => ("txt", txt::extract_txt(bytes)?),
        other => return Err(ExtractionError::UnsupportedType(other.to_string())),
    };

    Ok(ExtractedDocument {
        filename: filename.to_string(),
        file_type: file_type.to_string(),
        pages,
    })
}

/// Read a file and extract its pages based on the filename extension.
pub fn extract_file(path: &Path) -> Result<ExtractedDocument, ExtractionError> {
    let bytes = fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    extract_text(&bytes, &filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_txt_extension() {
        let doc = extract_text(b"plain text body", "notes.txt").unwrap();
        assert_eq!(doc.file_type, "txt");
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn markdown_is_read_as_plain_text() {
        let doc = extract_text(b"# Heading\n\nBody.", "notes.md").unwrap();
        assert_eq!(doc.file_type, "txt");
        assert_eq!(doc.pages[0].text, "# Heading\n\nBody.");
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = extract_text(b"...", "table.xlsx").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType(ref e) if e == "xlsx"));
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert!(is_supported(Path::new("Report.PDF")));
        assert!(is_supported(Path::new("notes.Md")));
        assert!(!is_supported(Path::new("archive.zip")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[test]
    fn full_text_joins_pages() {
        let doc = ExtractedDocument {
            filename: "two.pdf".to_string(),
            file_type: "pdf".to_string(),
            pages: vec![
                PageContent {
                    page_number: 1,
                    text: "one".to_string(),
                },
                PageContent {
                    page_number: 2,
                    text: "two".to_string(),
                },
            ],
        };
        assert_eq!(doc.full_text(), "one\n\ntwo");
        assert_eq!(doc.total_chars(), 6);
    }
}
