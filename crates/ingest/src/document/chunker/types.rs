//! Chunking configuration.

use pagemill_core::config::ChunkingConfig;

use super::error::ChunkerError;

/// Configuration for the chunking engine. All sizes are characters, not
/// bytes, and are fixed for the lifetime of a processor.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Maximum characters per chunk (default: 1000).
    pub chunk_size: usize,
    /// Characters shared between adjacent chunks of a page (default: 100).
    pub chunk_overlap: usize,
    /// Pages with fewer cleaned characters are skipped (default: 50).
    pub min_page_chars: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 100,
            min_page_chars: 50,
        }
    }
}

impl ChunkConfig {
    /// Reject configurations the sliding window cannot satisfy.
    pub fn validate(&self) -> Result<(), ChunkerError> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::InvalidConfiguration(
                "chunk_size must be positive".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkerError::InvalidConfiguration(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    /// Characters the window advances per step.
    pub(crate) fn stride(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

impl From<ChunkingConfig> for ChunkConfig {
    fn from(cfg: ChunkingConfig) -> Self {
        Self {
            chunk_size: cfg.chunk_size,
            chunk_overlap: cfg.chunk_overlap,
            min_page_chars: cfg.min_page_chars,
        }
    }
}
