//! sonictrace - Manual chunking for RAG ingestion
//!
//! Splits long network-OS configuration manuals into section-aware,
//! token-budgeted passages ready for embedding. Each chunk carries
//! its section title, source page range and source file name.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - config, error, types, xdg
//!   - vendor (page ranges and noise patterns per manual family)
//!   - chunker (classifier, tokenizer, splitter, segmenter)
//!   - document (PDF / text page sources)
//!   - pipeline (parse entry point), sink (JSON-Lines hand-off)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sonictrace::core::chunker::{IgnoreRules, TokenCounter};
//! use sonictrace::core::document::TextDocument;
//! use sonictrace::{ChunkingPipeline, Result};
//!
//! struct Words;
//! impl TokenCounter for Words {
//!     fn count_tokens(&self, text: &str) -> Result<usize> {
//!         Ok(text.split_whitespace().count())
//!     }
//! }
//!
//! let doc = TextDocument::from_pages("guide.txt", vec!["Chapter 1: Overview\nSONiC runs on switches"]);
//! let pipeline = ChunkingPipeline::new(Arc::new(Words), 512);
//! let (chunks, _stats) = pipeline.parse(&doc, 0, None, &IgnoreRules::default()).unwrap();
//!
//! assert_eq!(chunks[0].section, "Chapter 1: Overview");
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{ChunkError, Result};
pub use core::pipeline::ChunkingPipeline;
pub use core::services::Services;
pub use core::types::*;
