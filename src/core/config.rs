//! Configuration management for sonictrace.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Vendor entries from the file are merged over the built-in table.

use crate::core::error::{ChunkError, Result};
use crate::core::pipeline::DEFAULT_MAX_TOKENS;
use crate::core::vendor::{default_vendors, VendorConfig, VendorRegistry};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default = "default_vendors")]
    pub vendors: BTreeMap<String, VendorConfig>,
}

/// Chunking configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChunkingConfig {
    /// Token budget per chunk
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,

    /// HuggingFace `tokenizer.json` of the embedding model; the XDG
    /// data directory's `tokenizer.json` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokenizer_path: Option<PathBuf>,

    /// Vendor used when none is given on the command line
    #[serde(default = "default_vendor")]
    pub default_vendor: String,

    /// File patterns picked up when a directory is chunked (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,
}

/// Limits configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Documents parsed at the same time
    #[serde(default = "default_max_concurrent_documents")]
    pub max_concurrent_documents: usize,
}

// Default value functions
fn default_max_tokens() -> usize {
    DEFAULT_MAX_TOKENS
}

fn default_vendor() -> String {
    "broadcom_sonic".to_string()
}

fn default_include_patterns() -> Vec<String> {
    vec!["*.pdf".to_string(), "*.txt".to_string()]
}

fn default_max_concurrent_documents() -> usize {
    1
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            tokenizer_path: None,
            default_vendor: default_vendor(),
            include_patterns: default_include_patterns(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_concurrent_documents: default_max_concurrent_documents(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunking: ChunkingConfig::default(),
            limits: LimitsConfig::default(),
            vendors: default_vendors(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file.
    ///
    /// Vendors listed in the file replace built-in entries of the same
    /// name; other built-in vendors stay available.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| ChunkError::ConfigError(format!("Failed to read config file: {e}")))?;

        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        let mut vendors = default_vendors();
        vendors.append(&mut config.vendors);
        config.vendors = vendors;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SONICTRACE_CONFIG env var
    /// 2. XDG config file (~/.config/sonictrace/config.toml)
    /// 3. ./sonictrace.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SONICTRACE_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("sonictrace.toml").exists() {
                Self::from_file("sonictrace.toml")?
            } else {
                Self::default()
            }
        };

        if config.chunking.tokenizer_path.is_none() {
            config.chunking.tokenizer_path = Some(xdg.tokenizer_file());
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(max_tokens) = env::var("SONICTRACE_MAX_TOKENS") {
            if let Ok(n) = max_tokens.parse() {
                self.chunking.max_tokens = n;
            }
        }
        if let Ok(path) = env::var("SONICTRACE_TOKENIZER") {
            self.chunking.tokenizer_path = Some(PathBuf::from(path));
        }
        if let Ok(vendor) = env::var("SONICTRACE_DEFAULT_VENDOR") {
            self.chunking.default_vendor = vendor;
        }
        if let Ok(max_concurrent) = env::var("SONICTRACE_MAX_CONCURRENT_DOCUMENTS") {
            if let Ok(max) = max_concurrent.parse() {
                self.limits.max_concurrent_documents = max;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.chunking.max_tokens == 0 {
            return Err(ChunkError::ConfigError(
                "Max tokens must be non-zero".to_string(),
            ));
        }

        if self.limits.max_concurrent_documents == 0 {
            return Err(ChunkError::ConfigError(
                "Max concurrent documents must be non-zero".to_string(),
            ));
        }

        if !self.vendors.contains_key(&self.chunking.default_vendor) {
            return Err(ChunkError::ConfigError(format!(
                "Default vendor '{}' is not in the vendor table",
                self.chunking.default_vendor
            )));
        }

        // Surfaces bad page ranges and ignore patterns
        self.vendor_registry()?;

        Ok(())
    }

    /// Build the read-only vendor registry
    pub fn vendor_registry(&self) -> Result<VendorRegistry> {
        VendorRegistry::new(self.vendors.clone())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Max tokens: {}", self.chunking.max_tokens);
        match &self.chunking.tokenizer_path {
            Some(path) => tracing::info!("  Tokenizer: {:?}", path),
            None => tracing::info!("  Tokenizer: (XDG data directory)"),
        }
        tracing::info!("  Default vendor: {}", self.chunking.default_vendor);
        tracing::info!(
            "  Include patterns: {} patterns",
            self.chunking.include_patterns.len()
        );
        tracing::info!(
            "  Max concurrent documents: {}",
            self.limits.max_concurrent_documents
        );
        tracing::info!(
            "  Vendors: {}",
            self.vendors.keys().cloned().collect::<Vec<_>>().join(", ")
        );
    }
}
