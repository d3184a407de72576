//! pagemill — clean and chunk documents into JSON Lines.
//!
//! Walks a file or directory, extracts per-page text, repairs extraction
//! artifacts, cuts overlapping character windows, and writes one chunk per
//! line for a downstream indexing or embedding stage.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use pagemill_core::config::{self, Config};
use pagemill_ingest::batch::{self, DocumentStatus};
use pagemill_ingest::document::chunker::{ChunkConfig, DocumentProcessor};

// ── CLI ─────────────────────────────────────────────────────────────

/// Document cleaning and chunking pipeline.
#[derive(Parser, Debug)]
#[command(name = "pagemill", version, about)]
struct Cli {
    /// File or directory to process. Defaults to PAGEMILL_DATA_DIR.
    input: Option<PathBuf>,

    /// Maximum characters per chunk.
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Characters of overlap between adjacent chunks.
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Minimum cleaned characters for a page to be chunked.
    #[arg(long)]
    min_page_chars: Option<usize>,

    /// JSONL output path. Defaults to PAGEMILL_OUTPUT, then stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

// ── main ────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    config::load_dotenv();
    let cli = Cli::parse();
    let cfg = Config::from_env();
    cfg.log_summary();

    let mut chunking = cfg.chunking.clone();
    if let Some(size) = cli.chunk_size {
        chunking.chunk_size = size;
    }
    if let Some(overlap) = cli.chunk_overlap {
        chunking.chunk_overlap = overlap;
    }
    if let Some(min) = cli.min_page_chars {
        chunking.min_page_chars = min;
    }
    let processor = DocumentProcessor::new(ChunkConfig::from(chunking))
        .context("invalid chunking configuration")?;

    let input = cli.input.unwrap_or_else(|| cfg.ingest.data_dir.clone());
    anyhow::ensure!(
        input.exists(),
        "input path {} does not exist",
        input.display()
    );

    let paths = if input.is_dir() {
        batch::collect_documents(&input)?
    } else {
        vec![input.clone()]
    };
    anyhow::ensure!(
        !paths.is_empty(),
        "no supported documents under {}",
        input.display()
    );

    info!(documents = paths.len(), "processing batch");
    let results = batch::process_batch(&processor, &paths);

    let mut all_chunks = Vec::new();
    let mut failed_documents = 0usize;
    let mut pages_skipped = 0usize;
    let mut pages_failed = 0usize;
    for result in results {
        match result.status {
            DocumentStatus::Processed {
                chunks,
                pages_skipped: skipped,
                pages_failed: failed,
            } => {
                pages_skipped += skipped;
                pages_failed += failed;
                all_chunks.extend(chunks);
            }
            DocumentStatus::Failed { error } => {
                warn!(path = %result.path.display(), error = %error, "skipping unreadable document");
                failed_documents += 1;
            }
        }
    }

    let output = cli.output.or(cfg.ingest.output_path);
    match &output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            batch::write_jsonl(&all_chunks, &mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            batch::write_jsonl(&all_chunks, &mut writer)?;
        }
    }

    let total_chars: usize = all_chunks.iter().map(|c| c.metadata.char_count).sum();
    info!(
        documents = paths.len() - failed_documents,
        failed_documents,
        chunks = all_chunks.len(),
        pages_skipped,
        pages_failed,
        total_chars,
        output = %output
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string()),
        "ingest complete"
    );
    Ok(())
}
