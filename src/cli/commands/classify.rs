//! Classify command - show how each line of one page is treated
//!
//! Useful when tuning a vendor's ignore patterns against a new
//! manual revision.

use crate::cli::output::{colors, kind_tag};
use crate::cli::OutputFormat;
use crate::core::chunker::{classify, IgnoreRules, LineKind};
use crate::core::document::{open_document, DocumentSource};
use crate::core::error::ChunkError;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Manual to inspect
    pub path: PathBuf,

    /// Page index (0-based)
    #[arg(long, short = 'p')]
    pub page: usize,

    /// Vendor whose ignore patterns apply (defaults to the configured default vendor)
    #[arg(long, short = 'v')]
    pub vendor: Option<String>,
}

/// One classified line
#[derive(Debug, Serialize)]
pub struct ClassifiedLine {
    pub line: usize,
    pub kind: LineKind,
    pub text: String,
}

/// Classification response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub source: String,
    pub vendor: String,
    pub page: usize,
    pub lines: Vec<ClassifiedLine>,
}

/// Classify every line of one page, numbering lines from 1
pub fn classify_page(
    document: &dyn DocumentSource,
    page: usize,
    rules: &IgnoreRules,
) -> Vec<ClassifiedLine> {
    document
        .page_lines(page)
        .into_iter()
        .enumerate()
        .map(|(i, text)| ClassifiedLine {
            line: i + 1,
            kind: classify(&text, rules),
            text,
        })
        .collect()
}

/// Execute the classify command
pub async fn execute(
    args: ClassifyArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let vendor = args
        .vendor
        .unwrap_or_else(|| services.config.chunking.default_vendor.clone());
    let rules = services.vendors.resolve(&vendor)?.rules()?;

    let document = open_document(&args.path)?;
    if args.page >= document.page_count() {
        return Err(ChunkError::InvalidPageRange {
            start: args.page,
            end: args.page,
            page_count: document.page_count(),
        }
        .into());
    }

    let response = ClassifyResponse {
        source: document.name().to_string(),
        vendor,
        page: args.page,
        lines: classify_page(document.as_ref(), args.page, &rules),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} page {} ({})",
                colors::file_path(&response.source),
                colors::number(&response.page.to_string()),
                colors::vendor(&response.vendor)
            );
            for line in &response.lines {
                println!(
                    "{:>4} {} {}",
                    colors::dim(&line.line.to_string()),
                    kind_tag(line.kind),
                    line.text
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
