use super::{ExtractionError, PageContent};

/// Extract per-page text from PDF bytes.
///
/// A document the library cannot open or parse at all fails here; that is the
/// only document-level failure mode. Malformed content inside a single page
/// surfaces as garbled or empty text for that page and is left to the
/// chunker's per-page handling.
pub fn extract_pdf(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    Ok(split_pages(&text))
}

/// pdf-extract returns all text as one string with form feed characters
/// (`\x0C`) separating pages. Split on those, keeping blank pages so page
/// numbers stay positional, and dropping only the empty remainder a trailing
/// form feed leaves behind.
fn split_pages(text: &str) -> Vec<PageContent> {
    if !text.contains('\x0C') {
        // No page breaks found — treat as single page.
        return vec![PageContent {
            page_number: 1,
            text: text.to_string(),
        }];
    }

    let mut parts: Vec<&str> = text.split('\x0C').collect();
    if parts.len() > 1 && parts.last().map(|p| p.trim().is_empty()).unwrap_or(false) {
        parts.pop();
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            text: page_text.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_form_feed() {
        let pages = split_pages("first page\x0Csecond page");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].page_number, 1);
        assert_eq!(pages[0].text, "first page");
        assert_eq!(pages[1].page_number, 2);
        assert_eq!(pages[1].text, "second page");
    }

    #[test]
    fn no_form_feed_is_a_single_page() {
        let pages = split_pages("all one page");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);
    }

    #[test]
    fn trailing_form_feed_leaves_no_phantom_page() {
        let pages = split_pages("first\x0Csecond\x0C");
        assert_eq!(pages.len(), 2);
    }

    #[test]
    fn blank_middle_page_keeps_positional_numbering() {
        let pages = split_pages("first\x0C\x0Cthird");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[1].text, "");
        assert_eq!(pages[2].page_number, 3);
        assert_eq!(pages[2].text, "third");
    }

    #[test]
    fn garbage_bytes_fail_as_document_error() {
        let err = extract_pdf(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::PdfError(_)));
    }
}
