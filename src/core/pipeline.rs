//! Chunking pipeline orchestration.
//!
//! Coordinates the end-to-end parse of one document:
//! 1. Resolve vendor page range and ignore rules
//! 2. Open the document
//! 3. Walk pages in order through the section segmenter
//! 4. Return every chunk, or an error and nothing

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::core::chunker::{IgnoreRules, SectionSegmenter, SemanticSplitter, TokenCounter};
use crate::core::document::{open_document, DocumentSource};
use crate::core::error::{ChunkError, Result};
use crate::core::types::{Chunk, ParseStats};
use crate::core::vendor::VendorRegistry;

/// Default chunk budget, matching a 512-token embedding window
pub const DEFAULT_MAX_TOKENS: usize = 512;

/// Parses documents into token-budgeted chunks
#[derive(Clone)]
pub struct ChunkingPipeline {
    counter: Arc<dyn TokenCounter>,
    max_tokens: usize,
}

impl ChunkingPipeline {
    /// Create a pipeline around an explicitly owned token counter
    ///
    /// # Arguments
    ///
    /// * `counter` - Tokenizer matching the downstream embedding model
    /// * `max_tokens` - Budget for each chunk's content
    pub fn new(counter: Arc<dyn TokenCounter>, max_tokens: usize) -> Self {
        Self {
            counter,
            max_tokens,
        }
    }

    pub fn max_tokens(&self) -> usize {
        self.max_tokens
    }

    pub fn counter(&self) -> &dyn TokenCounter {
        self.counter.as_ref()
    }

    /// Parse pages `start_page..=end_page` of an open document.
    ///
    /// `end_page` defaults to the document's last page. A range
    /// outside the document fails before any page is read.
    pub fn parse(
        &self,
        document: &dyn DocumentSource,
        start_page: usize,
        end_page: Option<usize>,
        rules: &IgnoreRules,
    ) -> Result<(Vec<Chunk>, ParseStats)> {
        let start = Instant::now();
        let page_count = document.page_count();
        let end_page = end_page.unwrap_or_else(|| page_count.saturating_sub(1));

        if page_count == 0 || start_page > end_page || end_page >= page_count {
            return Err(ChunkError::InvalidPageRange {
                start: start_page,
                end: end_page,
                page_count,
            });
        }

        tracing::info!(
            "Starting parse: {}, pages {}-{}",
            document.name(),
            start_page,
            end_page
        );

        let splitter = SemanticSplitter::new(self.counter.as_ref(), self.max_tokens);
        let mut segmenter = SectionSegmenter::new(splitter, rules, document.name(), start_page);

        for page in start_page..=end_page {
            segmenter.feed_page(page, &document.page_lines(page))?;
        }

        let (chunks, counts) = segmenter.finish(end_page)?;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Parse complete: {} chunks from {} sections in {}ms ({} lines ignored)",
            chunks.len(),
            counts.sections_detected,
            duration_ms,
            counts.lines_ignored
        );

        let stats = ParseStats {
            source: document.name().to_string(),
            pages_scanned: end_page - start_page + 1,
            lines_ignored: counts.lines_ignored,
            sections_detected: counts.sections_detected,
            chunks_created: chunks.len(),
            oversized_chunks: counts.oversized_chunks,
            duration_ms,
        };

        Ok((chunks, stats))
    }

    /// Chunk a manual on disk using a registered vendor's layout.
    ///
    /// The vendor is resolved before the document is opened, so an
    /// unknown vendor never touches the file.
    pub fn chunk_file(
        &self,
        path: &Path,
        vendor: &str,
        registry: &VendorRegistry,
    ) -> Result<(Vec<Chunk>, ParseStats)> {
        tracing::info!("Chunking {:?} as vendor '{}'", path, vendor);

        let config = registry.resolve(vendor)?;
        let rules = config.rules()?;
        let document = open_document(path)?;

        self.parse(document.as_ref(), config.start_page, config.end_page, &rules)
    }
}
