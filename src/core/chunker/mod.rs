//! Document chunking engine.
//!
//! Turns per-page text into section-aware, token-budgeted chunks:
//!
//! - **classifier**: noise / chapter / section / body per line
//! - **tokenizer**: token counting against the embedding vocabulary
//! - **splitter**: greedy line packing within a token budget
//! - **segmenter**: section state machine emitting chunks
//!
//! Line order is preserved end to end; lines are never split.

pub mod classifier;
pub mod segmenter;
pub mod splitter;
pub mod tokenizer;

pub use classifier::{
    classify, is_chapter_title, is_irrelevant, is_section_title, split_lines, IgnoreRules,
    LineKind,
};
pub use segmenter::{SectionSegmenter, SegmentCounts};
pub use splitter::SemanticSplitter;
pub use tokenizer::{HfTokenCounter, TokenCounter};
