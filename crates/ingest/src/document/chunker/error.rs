//! Error types and per-page result structures for the chunking engine.

use std::path::PathBuf;

use crate::document::ExtractionError;

/// Errors that abort a processor or a whole document.
#[derive(Debug, thiserror::Error)]
pub enum ChunkerError {
    /// Configuration the window math cannot satisfy. Raised at construction,
    /// never silently corrected.
    #[error("invalid chunking configuration: {0}")]
    InvalidConfiguration(String),

    /// The source document could not be opened or parsed at all. Nothing
    /// partial is returned.
    #[error("failed to read document {}: {source}", path.display())]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: ExtractionError,
    },
}

/// Page-scoped failures. Recovered by skipping the page, never propagated to
/// the document level.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// Window arithmetic left the page's character bounds.
    #[error("chunk window start {offset} beyond page length {len}")]
    WindowOutOfBounds { offset: usize, len: usize },
}

/// Outcome of processing a single page.
#[derive(Debug)]
pub struct PageResult {
    /// 1-based page number.
    pub page: usize,
    /// What happened to the page.
    pub status: PageStatus,
}

/// Status of a single page.
#[derive(Debug)]
pub enum PageStatus {
    /// Page produced chunks.
    Chunked { count: usize },
    /// Page was skipped (cleaned text below the content threshold).
    Skipped { reason: String },
    /// Page-scoped failure, recorded and recovered.
    Failed { error: String },
}
