//! Unified service container for sonictrace
//!
//! Holds the read-only configuration and vendor registry shared by
//! every parse, and builds chunking pipelines on demand.

use crate::core::chunker::{HfTokenCounter, TokenCounter};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::pipeline::ChunkingPipeline;
use crate::core::vendor::VendorRegistry;
use crate::core::xdg::XdgDirs;
use std::path::Path;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Vendor page layouts, immutable after startup
    pub vendors: Arc<VendorRegistry>,

    /// Application configuration
    pub config: Arc<Config>,

    /// Token counter to use instead of loading `tokenizer_path`
    counter: Option<Arc<dyn TokenCounter>>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let vendors = Arc::new(config.vendor_registry()?);

        Ok(Self {
            vendors,
            config: Arc::new(config),
            counter: None,
        })
    }

    /// Create services around an already constructed token counter
    pub fn with_counter(config: Config, counter: Arc<dyn TokenCounter>) -> Result<Self> {
        let mut services = Self::new(config)?;
        services.counter = Some(counter);
        Ok(services)
    }

    /// Create a ChunkingPipeline with request-specific overrides
    ///
    /// The tokenizer vocabulary is loaded here rather than at startup,
    /// so commands that never chunk do not need it.
    pub fn create_pipeline(
        &self,
        tokenizer_path: Option<&Path>,
        max_tokens: Option<usize>,
    ) -> Result<ChunkingPipeline> {
        let max_tokens = max_tokens.unwrap_or(self.config.chunking.max_tokens);

        let counter: Arc<dyn TokenCounter> = match (&self.counter, tokenizer_path) {
            (Some(counter), None) => Arc::clone(counter),
            (_, Some(path)) => Arc::new(HfTokenCounter::from_file(path)?),
            (None, None) => {
                let path = self
                    .config
                    .chunking
                    .tokenizer_path
                    .clone()
                    .unwrap_or_else(|| XdgDirs::new().tokenizer_file());
                Arc::new(HfTokenCounter::from_file(path)?)
            }
        };

        Ok(ChunkingPipeline::new(counter, max_tokens))
    }
}
