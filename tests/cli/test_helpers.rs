//! CLI test helpers
//!
//! Provides utilities for testing CLI commands including:
//! - Arc<Services> wrappers matching CLI execute() signatures
//! - Default chunk arguments
//! - Reading back JSON Lines output

use crate::common::{test_config, WordCounter};
use sonictrace::cli::commands::ChunkArgs;
use sonictrace::core::chunker::TokenCounter;
use sonictrace::core::services::Services;
use sonictrace::{Chunk, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Create test services wrapped in Arc (matching CLI execute() signatures)
///
/// Uses the word-counting tokenizer so no model vocabulary is needed.
pub fn create_cli_test_services() -> Arc<Services> {
    let services = Services::with_counter(test_config(), Arc::new(WordCounter))
        .expect("Test services should build");
    Arc::new(services)
}

/// Word counter that records how often it was asked to count
#[derive(Default)]
pub struct CountingCounter {
    calls: AtomicUsize,
}

impl CountingCounter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TokenCounter for CountingCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        WordCounter.count_tokens(text)
    }
}

/// Chunk arguments writing to `output`, quiet, everything else default
pub fn chunk_args(inputs: Vec<PathBuf>, output: &Path) -> ChunkArgs {
    ChunkArgs {
        inputs,
        vendor: None,
        output: Some(output.to_path_buf()),
        max_tokens: None,
        tokenizer: None,
        include: vec![],
        quiet: true,
    }
}

/// Parse a JSON Lines file back into chunks
pub fn read_chunks(path: &Path) -> Vec<Chunk> {
    let contents = std::fs::read_to_string(path).expect("Failed to read output");
    contents
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be a chunk"))
        .collect()
}
