//! Batch driver: scan a directory, process documents in parallel, write
//! JSON Lines.
//!
//! Each document is independent of every other, so the batch maps over files
//! with one rayon task per document; a document that fails to read never
//! aborts the rest of the run.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, warn};

use pagemill_core::chunk::Chunk;
use pagemill_core::error::PagemillError;

use crate::document;
use crate::document::chunker::{DocumentProcessor, PageStatus};

/// Outcome of processing a single document in a batch.
#[derive(Debug)]
pub struct DocumentResult {
    /// Path to the document that was processed.
    pub path: PathBuf,
    /// Status of the processing attempt.
    pub status: DocumentStatus,
}

/// Status of a single document.
#[derive(Debug)]
pub enum DocumentStatus {
    /// Document produced chunks (possibly zero, if every page was skipped).
    Processed {
        chunks: Vec<Chunk>,
        pages_skipped: usize,
        pages_failed: usize,
    },
    /// Document-level failure, recorded without touching the rest of the batch.
    Failed { error: String },
}

/// Recursively collect supported documents under `dir`.
///
/// Dotfiles and unsupported extensions are skipped; an unreadable
/// subdirectory is logged and skipped. Paths come back sorted so batch
/// output order is deterministic.
pub fn collect_documents(dir: &Path) -> Result<Vec<PathBuf>, PagemillError> {
    let mut paths = Vec::new();
    scan_dir_recursive(dir, &mut paths)?;
    paths.sort();
    Ok(paths)
}

fn scan_dir_recursive(dir: &Path, paths: &mut Vec<PathBuf>) -> Result<(), PagemillError> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "failed to read directory");
            return Ok(());
        }
    };

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        // Skip dotfiles/dotdirs
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            scan_dir_recursive(&path, paths)?;
            continue;
        }

        if document::is_supported(&path) {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "skipping unsupported file");
        }
    }

    Ok(())
}

/// Process every document with `processor`, one rayon task per document.
///
/// Results come back in input order regardless of completion order.
pub fn process_batch(processor: &DocumentProcessor, paths: &[PathBuf]) -> Vec<DocumentResult> {
    paths
        .par_iter()
        .map(|path| {
            let status = match processor.process_with_report(path) {
                Ok((chunks, report)) => {
                    let pages_skipped = report
                        .iter()
                        .filter(|r| matches!(r.status, PageStatus::Skipped { .. }))
                        .count();
                    let pages_failed = report
                        .iter()
                        .filter(|r| matches!(r.status, PageStatus::Failed { .. }))
                        .count();
                    info!(
                        path = %path.display(),
                        chunks = chunks.len(),
                        pages_skipped,
                        "document processed"
                    );
                    DocumentStatus::Processed {
                        chunks,
                        pages_skipped,
                        pages_failed,
                    }
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to process document");
                    DocumentStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            DocumentResult {
                path: path.clone(),
                status,
            }
        })
        .collect()
}

/// Serialize chunks as JSON Lines, one chunk object per line.
pub fn write_jsonl<W: Write>(chunks: &[Chunk], writer: &mut W) -> Result<(), PagemillError> {
    for chunk in chunks {
        let line = serde_json::to_string(chunk)
            .map_err(|e| PagemillError::Serialize(e.to_string()))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
