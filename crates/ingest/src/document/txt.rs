use super::{ExtractionError, PageContent};

/// Plain-text files are a single page; cleanup is the normalizer's job, so
/// the text is passed through untouched.
pub fn extract_txt(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    // Try UTF-8 first, fall back to lossy conversion
    let text = String::from_utf8(bytes.to_vec())
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned());

    Ok(vec![PageContent {
        page_number: 1,
        text,
    }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_simple_text() {
        let pages = extract_txt(b"Hello, world!\nThis is a test file.").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page_number, 1);
        assert!(pages[0].text.contains("Hello, world!"));
    }

    #[test]
    fn invalid_utf8_falls_back_to_lossy() {
        let pages = extract_txt(&[0x48, 0x69, 0xFF, 0x21]).unwrap();
        assert!(pages[0].text.starts_with("Hi"));
        assert!(pages[0].text.contains('\u{FFFD}'));
    }

    #[test]
    fn extract_empty_text() {
        let pages = extract_txt(b"").unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].text, "");
    }

    #[test]
    fn raw_whitespace_is_preserved() {
        let pages = extract_txt(b"  \n  Hello  \n  ").unwrap();
        assert_eq!(pages[0].text, "  \n  Hello  \n  ");
    }
}
