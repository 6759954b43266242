//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub chunking: ChunkingConfig,
    pub max_concurrent_documents: usize,
    pub vendors: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChunkingConfig {
    pub max_tokens: usize,
    pub tokenizer_path: String,
    pub default_vendor: String,
    pub include_patterns: Vec<String>,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = &services.config;

    let xdg = crate::core::xdg::XdgDirs::new();
    let config_file = xdg.config_file().to_string_lossy().into_owned();

    let response = ConfigResponse {
        config_file,
        chunking: ChunkingConfig {
            max_tokens: config.chunking.max_tokens,
            tokenizer_path: config
                .chunking
                .tokenizer_path
                .clone()
                .unwrap_or_else(|| xdg.tokenizer_file())
                .to_string_lossy()
                .into_owned(),
            default_vendor: config.chunking.default_vendor.clone(),
            include_patterns: config.chunking.include_patterns.clone(),
        },
        max_concurrent_documents: config.limits.max_concurrent_documents,
        vendors: services.vendors.names().map(str::to_string).collect(),
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  chunking:");
            println!("    max_tokens: {}", response.chunking.max_tokens);
            println!("    tokenizer_path: {}", response.chunking.tokenizer_path);
            println!("    default_vendor: {}", response.chunking.default_vendor);
            println!(
                "    include_patterns: {:?}",
                response.chunking.include_patterns
            );
            println!("  limits:");
            println!(
                "    max_concurrent_documents: {}",
                response.max_concurrent_documents
            );
            println!("  vendors: {:?}", response.vendors);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
