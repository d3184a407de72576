//! Per-document processor: clean pages, skip near-empty ones, window the rest.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, warn};

use pagemill_core::chunk::{Chunk, ChunkMetadata, CHUNK_METHOD_SLIDING_WINDOW};

use crate::document::{self, clean::clean_text, ExtractedDocument, PageContent};

use super::error::{ChunkerError, PageError, PageResult, PageStatus};
use super::helpers::char_windows;
use super::types::ChunkConfig;

/// Cleans and chunks one document at a time.
///
/// Holds only immutable configuration, so a single processor can be shared
/// by reference across threads — one worker per document needs no locking.
#[derive(Debug, Clone)]
pub struct DocumentProcessor {
    config: ChunkConfig,
}

impl DocumentProcessor {
    /// Create a processor, rejecting unsatisfiable configurations before any
    /// document is touched.
    pub fn new(config: ChunkConfig) -> Result<Self, ChunkerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }

    /// Extract, clean, and chunk one document.
    ///
    /// A document-level extraction failure aborts with
    /// [`ChunkerError::DocumentUnreadable`] and returns nothing partial.
    /// Page-scoped problems only skip the affected page.
    pub fn process(&self, path: &Path) -> Result<Vec<Chunk>, ChunkerError> {
        self.process_with_report(path).map(|(chunks, _)| chunks)
    }

    /// Like [`process`](Self::process), additionally returning the per-page
    /// outcomes so callers can record skips and failures.
    pub fn process_with_report(
        &self,
        path: &Path,
    ) -> Result<(Vec<Chunk>, Vec<PageResult>), ChunkerError> {
        let doc = document::extract_file(path).map_err(|source| {
            ChunkerError::DocumentUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let source = path.display().to_string();
        Ok(self.process_extracted(&source, &doc))
    }

    /// Chunk an already-extracted document.
    ///
    /// Infallible: every page either contributes chunks, is skipped below the
    /// content threshold, or has its failure recorded. Chunks come back in
    /// page order, then chunk-index order.
    pub fn process_extracted(
        &self,
        source: &str,
        doc: &ExtractedDocument,
    ) -> (Vec<Chunk>, Vec<PageResult>) {
        let total_pages = doc.pages.len();
        let mut chunks = Vec::new();
        let mut report = Vec::with_capacity(total_pages);

        for page in &doc.pages {
            match self.chunk_page(source, total_pages, page) {
                Ok(Some(page_chunks)) => {
                    report.push(PageResult {
                        page: page.page_number,
                        status: PageStatus::Chunked {
                            count: page_chunks.len(),
                        },
                    });
                    chunks.extend(page_chunks);
                }
                Ok(None) => {
                    debug!(
                        source = %source,
                        page = page.page_number,
                        "page below content threshold, skipped"
                    );
                    report.push(PageResult {
                        page: page.page_number,
                        status: PageStatus::Skipped {
                            reason: format!(
                                "cleaned text below {} chars",
                                self.config.min_page_chars
                            ),
                        },
                    });
                }
                Err(e) => {
                    warn!(
                        source = %source,
                        page = page.page_number,
                        error = %e,
                        "page failed, skipped"
                    );
                    report.push(PageResult {
                        page: page.page_number,
                        status: PageStatus::Failed {
                            error: e.to_string(),
                        },
                    });
                }
            }
        }

        (chunks, report)
    }

    /// Clean and window a single page. `Ok(None)` means the page is below the
    /// content threshold.
    fn chunk_page(
        &self,
        source: &str,
        total_pages: usize,
        page: &PageContent,
    ) -> Result<Option<Vec<Chunk>>, PageError> {
        let cleaned = clean_text(&page.text);
        if cleaned.chars().count() < self.config.min_page_chars {
            return Ok(None);
        }

        let windows = char_windows(&cleaned, self.config.chunk_size, self.config.stride())?;
        let created_at = Utc::now();

        let chunks = windows
            .into_iter()
            .enumerate()
            .map(|(chunk_index, window)| {
                let char_count = window.content.chars().count();
                Chunk::new(
                    window.content,
                    ChunkMetadata {
                        source: source.to_string(),
                        page: page.page_number,
                        total_pages,
                        chunk_index,
                        char_count,
                        char_offset: window.char_offset,
                        chunk_method: CHUNK_METHOD_SLIDING_WINDOW.to_string(),
                        created_at,
                    },
                )
            })
            .collect();

        Ok(Some(chunks))
    }
}
