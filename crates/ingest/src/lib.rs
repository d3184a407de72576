//! Document ingestion: extraction, cleaning, and chunking.
//!
//! Pipeline: source file → per-page raw text (`document`) → artifact-repaired
//! text (`document::clean`) → overlapping character windows with page
//! provenance (`document::chunker`). `batch` drives whole directories in
//! parallel and serializes the result as JSON Lines.

pub mod batch;
pub mod document;
