//! Core domain logic (adapter-agnostic)
//!
//! This module contains the chunking engine and everything it needs,
//! independent of the command-line front end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Chunk records and parse statistics
//! - **xdg**: XDG directory handling
//! - **vendor**: Vendor page ranges and noise patterns
//! - **chunker**: Line classification, token counting, splitting, segmentation
//! - **document**: PDF and plain-text page sources
//! - **pipeline**: Parse entry point
//! - **sink**: Downstream chunk hand-off
//! - **services**: Unified service container

pub mod chunker;
pub mod config;
pub mod document;
pub mod error;
pub mod pipeline;
pub mod services;
pub mod sink;
pub mod types;
pub mod vendor;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{ChunkError, Result};
pub use pipeline::ChunkingPipeline;
pub use services::Services;
