//! List-vendors command - show the configured vendor table

use crate::cli::output::{colors, print_header};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-vendors command
#[derive(Args, Debug)]
pub struct VendorsArgs {
    /// Also print each vendor's ignore patterns
    #[arg(long, short = 'p')]
    pub patterns: bool,
}

/// One vendor entry
#[derive(Debug, Serialize)]
pub struct VendorEntry {
    pub name: String,
    pub start_page: usize,
    pub end_page: Option<usize>,
    pub ignore_patterns: Vec<String>,
    pub is_default: bool,
}

/// Vendor listing response
#[derive(Debug, Serialize)]
pub struct VendorsResponse {
    pub vendors: Vec<VendorEntry>,
}

/// Build the listing from the registry
pub fn build_response(services: &Services) -> VendorsResponse {
    let default_vendor = &services.config.chunking.default_vendor;
    VendorsResponse {
        vendors: services
            .vendors
            .iter()
            .map(|(name, vendor)| VendorEntry {
                name: name.to_string(),
                start_page: vendor.start_page,
                end_page: vendor.end_page,
                ignore_patterns: vendor.ignore_patterns.clone(),
                is_default: name == default_vendor,
            })
            .collect(),
    }
}

/// Execute the list-vendors command
pub async fn execute(
    args: VendorsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(services);

    match format {
        OutputFormat::Human => {
            print_header(&format!("Vendors ({})", response.vendors.len()));
            for entry in &response.vendors {
                let end = entry
                    .end_page
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "last".to_string());
                let marker = if entry.is_default { " (default)" } else { "" };
                println!(
                    "  {}{}  pages {}-{}  {} ignore patterns",
                    colors::vendor(&entry.name),
                    colors::dim(marker),
                    colors::number(&entry.start_page.to_string()),
                    colors::number(&end),
                    colors::number(&entry.ignore_patterns.len().to_string())
                );
                if args.patterns {
                    for pattern in &entry.ignore_patterns {
                        println!("      {}", colors::dim(pattern));
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
