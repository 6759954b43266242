//! Error types for the chunking engine.
//!
//! Every failure is fatal for the parse call that raised it: the
//! caller either receives the complete chunk set for the requested
//! page range or one of these errors, never a partial result.

use thiserror::Error;

/// Result type alias for sonictrace operations
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Main error type for the chunking engine
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Failed to open document '{path}': {reason}")]
    DocumentOpen { path: String, reason: String },

    #[error("Vendor '{0}' is not configured")]
    VendorNotConfigured(String),

    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    #[error("Invalid page range {start}..={end} for document with {page_count} pages")]
    InvalidPageRange {
        start: usize,
        end: usize,
        page_count: usize,
    },

    #[error("Invalid ignore pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ChunkError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if the requested vendor or document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ChunkError::VendorNotConfigured(_) | ChunkError::DocumentOpen { .. }
        )
    }

    /// Check if the error stems from invalid configuration or input
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ChunkError::InvalidPageRange { .. }
                | ChunkError::InvalidPattern { .. }
                | ChunkError::ConfigError(_)
                | ChunkError::TomlError(_)
        )
    }
}
