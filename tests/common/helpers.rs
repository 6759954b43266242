// Test helper functions

use sonictrace::core::chunker::TokenCounter;
use sonictrace::core::config::Config;
use sonictrace::{Chunk, ChunkingPipeline, Result};
use std::sync::Arc;

use super::fixtures::TEST_VENDOR_TOML;

/// Deterministic fake tokenizer: one token per whitespace-separated word
#[allow(dead_code)] // Used in integration tests
pub struct WordCounter;

impl TokenCounter for WordCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        Ok(text.split_whitespace().count())
    }
}

/// Pipeline counting words instead of model tokens
#[allow(dead_code)] // Used in integration tests
pub fn word_pipeline(max_tokens: usize) -> ChunkingPipeline {
    ChunkingPipeline::new(Arc::new(WordCounter), max_tokens)
}

/// Config with the test vendor table as default
#[allow(dead_code)] // Used in integration tests
pub fn test_config() -> Config {
    Config::from_toml(TEST_VENDOR_TOML).expect("Test vendor table should parse")
}

/// `n` distinct words tagged with `tag`, e.g. `bgp0 bgp1 ...`
#[allow(dead_code)] // Used in integration tests
pub fn words(n: usize, tag: &str) -> String {
    (0..n)
        .map(|i| format!("{tag}{i}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every word of every chunk, in emission order
#[allow(dead_code)] // Used in integration tests
pub fn body_words(chunks: &[Chunk]) -> Vec<String> {
    chunks
        .iter()
        .flat_map(|c| c.content.split_whitespace().map(str::to_string))
        .collect()
}

/// Assert every chunk fits `max_tokens` words unless it is a single line
#[allow(dead_code)] // Used in integration tests
pub fn assert_within_budget(chunks: &[Chunk], max_tokens: usize) {
    for chunk in chunks {
        let tokens = chunk.content.split_whitespace().count();
        assert!(
            tokens <= max_tokens || !chunk.content.contains('\n'),
            "Chunk in '{}' has {} tokens over budget {} and spans several lines",
            chunk.section,
            tokens,
            max_tokens
        );
    }
}
