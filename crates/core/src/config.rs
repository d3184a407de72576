use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_usize(key: &str, default: usize) -> usize {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub chunking: ChunkingConfig,
    pub ingest: IngestConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            chunking: ChunkingConfig::from_env(),
            ingest: IngestConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  chunking:  size={}, overlap={}, min_page_chars={}",
            self.chunking.chunk_size,
            self.chunking.chunk_overlap,
            self.chunking.min_page_chars
        );
        tracing::info!(
            "  ingest:    data_dir={}, output={}",
            self.ingest.data_dir.display(),
            self.ingest
                .output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(stdout)".to_string())
        );
    }
}

// ── Chunking ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Target maximum characters per chunk.
    pub chunk_size: usize,
    /// Characters shared between adjacent chunks of the same page.
    pub chunk_overlap: usize,
    /// Pages whose cleaned text is shorter than this are skipped.
    pub min_page_chars: usize,
}

impl ChunkingConfig {
    fn from_env() -> Self {
        Self {
            chunk_size: env_usize("PAGEMILL_CHUNK_SIZE", 1000),
            chunk_overlap: env_usize("PAGEMILL_CHUNK_OVERLAP", 100),
            min_page_chars: env_usize("PAGEMILL_MIN_PAGE_CHARS", 50),
        }
    }
}

// ── Ingest ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Default directory scanned when the CLI is given no input path.
    pub data_dir: PathBuf,
    /// Default JSONL output file. None writes to stdout.
    pub output_path: Option<PathBuf>,
}

impl IngestConfig {
    fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("PAGEMILL_DATA_DIR", "data")),
            output_path: env_opt("PAGEMILL_OUTPUT").map(PathBuf::from),
        }
    }
}
