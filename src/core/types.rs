//! Core data types for the chunking engine.
//!
//! Defines the chunk record handed to the downstream embedding
//! and storage step, and the statistics collected per parse.

use serde::{Deserialize, Serialize};

/// Section title used before the first boundary line of a document
pub const UNKNOWN_SECTION: &str = "UNKNOWN";

/// Inclusive page span of a chunk's originating section.
///
/// Serialized as a two-element array `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `page` falls inside the span
    pub fn contains(&self, page: usize) -> bool {
        self.start <= page && page <= self.end
    }
}

impl From<[usize; 2]> for PageRange {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<PageRange> for [usize; 2] {
    fn from(range: PageRange) -> Self {
        [range.start, range.end]
    }
}

/// A retrieval-ready passage with structural metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Most recent chapter/section title, or `UNKNOWN`
    pub section: String,

    /// Trimmed, non-empty passage text
    pub content: String,

    /// Section start page through the page that closed the section
    pub page_range: PageRange,

    /// File name of the originating document
    pub source: String,
}

/// Statistics from a single parse
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseStats {
    /// Document file name
    pub source: String,

    /// Number of pages walked
    pub pages_scanned: usize,

    /// Lines dropped by the vendor ignore rules
    pub lines_ignored: usize,

    /// Chapter and section boundaries detected
    pub sections_detected: usize,

    /// Total chunks emitted
    pub chunks_created: usize,

    /// Chunks that exceed the budget because a single line does
    pub oversized_chunks: usize,

    /// Parse duration in milliseconds
    pub duration_ms: u64,
}
