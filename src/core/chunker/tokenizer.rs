//! Token counting against the embedding model's vocabulary.
//!
//! The chunk budget is only meaningful if the counts produced here
//! match what the embedding step later sees, so the counter is an
//! explicitly constructed value handed to the pipeline rather than a
//! process-wide model. Counts never include special tokens.

use std::path::Path;

use tokenizers::Tokenizer;

use crate::core::error::{ChunkError, Result};

/// Measures the token length of a text span.
///
/// Implementations must be deterministic: the same text always
/// yields the same count.
pub trait TokenCounter: Send + Sync {
    fn count_tokens(&self, text: &str) -> Result<usize>;
}

/// Token counter backed by a HuggingFace `tokenizer.json`
pub struct HfTokenCounter {
    tokenizer: Tokenizer,
}

impl HfTokenCounter {
    /// Load the vocabulary shipped with the embedding model
    /// (e.g. `BAAI/bge-small-en/tokenizer.json`).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|e| {
            ChunkError::Tokenization(format!("Failed to load tokenizer {path:?}: {e}"))
        })?;

        tracing::info!("Loaded tokenizer from {:?}", path);
        Ok(Self { tokenizer })
    }

    pub fn from_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl TokenCounter for HfTokenCounter {
    fn count_tokens(&self, text: &str) -> Result<usize> {
        self.tokenizer
            .encode(text, false)
            .map(|encoding| encoding.len())
            .map_err(|e| ChunkError::Tokenization(e.to_string()))
    }
}
