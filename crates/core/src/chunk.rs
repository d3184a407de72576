use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique chunk identifier.
pub type ChunkId = Uuid;

/// Marker recorded in chunk metadata identifying the chunking strategy.
pub const CHUNK_METHOD_SLIDING_WINDOW: &str = "sliding_window";

/// A bounded text window cut from one page of a source document.
///
/// Chunks are immutable once produced; the processor hands ownership of the
/// full sequence to its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    /// The chunk text content.
    pub content: String,
    pub metadata: ChunkMetadata,
}

/// Provenance metadata attached to every chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Source document identifier (path as given to the processor).
    pub source: String,
    /// 1-based page the chunk was cut from. Chunks never span pages.
    pub page: usize,
    /// Total number of pages in the source document.
    pub total_pages: usize,
    /// 0-based index within the page, restarting at 0 on every page.
    pub chunk_index: usize,
    /// Character count of `content`.
    pub char_count: usize,
    /// Character offset of the window within the cleaned page text.
    pub char_offset: usize,
    /// Chunking strategy marker, e.g. [`CHUNK_METHOD_SLIDING_WINDOW`].
    pub chunk_method: String,
    /// Creation timestamp. Excluded from equality — two runs over the same
    /// input compare equal even though they were produced at different times.
    pub created_at: DateTime<Utc>,
}

impl PartialEq for ChunkMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.page == other.page
            && self.total_pages == other.total_pages
            && self.chunk_index == other.chunk_index
            && self.char_count == other.char_count
            && self.char_offset == other.char_offset
            && self.chunk_method == other.chunk_method
    }
}

impl Eq for ChunkMetadata {}

impl Chunk {
    /// Build a chunk with a fresh id and a current-time creation marker.
    pub fn new(content: String, metadata: ChunkMetadata) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(created_at: DateTime<Utc>) -> ChunkMetadata {
        ChunkMetadata {
            source: "report.pdf".to_string(),
            page: 3,
            total_pages: 7,
            chunk_index: 1,
            char_count: 42,
            char_offset: 900,
            chunk_method: CHUNK_METHOD_SLIDING_WINDOW.to_string(),
            created_at,
        }
    }

    #[test]
    fn metadata_equality_ignores_creation_marker() {
        let a = meta(Utc::now());
        let b = meta(Utc::now() + chrono::Duration::hours(1));
        assert_eq!(a, b);
    }

    #[test]
    fn metadata_equality_respects_page_fields() {
        let a = meta(Utc::now());
        let mut b = meta(a.created_at);
        b.page = 4;
        assert_ne!(a, b);
    }

    #[test]
    fn chunk_serializes_required_fields() {
        let chunk = Chunk::new("hello world".to_string(), meta(Utc::now()));
        let json = serde_json::to_value(&chunk).unwrap();
        assert_eq!(json["content"], "hello world");
        assert_eq!(json["metadata"]["source"], "report.pdf");
        assert_eq!(json["metadata"]["page"], 3);
        assert_eq!(json["metadata"]["chunk_index"], 1);
    }
}
