//! Chunk command - split manuals into JSON Lines chunk records

use crate::cli::output::{colors, format_duration_ms, print_warning};
use crate::cli::OutputFormat;
use crate::core::pipeline::ChunkingPipeline;
use crate::core::services::Services;
use crate::core::sink::{ChunkSink, JsonlSink};
use crate::core::types::{Chunk, ParseStats};
use crate::core::vendor::VendorRegistry;
use clap::Args;
use glob::Pattern;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use walkdir::WalkDir;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// Manuals to chunk (files, or directories searched recursively)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Vendor layout to apply (defaults to the configured default vendor)
    #[arg(long, short = 'v')]
    pub vendor: Option<String>,

    /// Write JSON Lines here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Token budget per chunk
    #[arg(long)]
    pub max_tokens: Option<usize>,

    /// HuggingFace tokenizer.json of the embedding model
    #[arg(long)]
    pub tokenizer: Option<PathBuf>,

    /// Glob patterns for files picked up in directories (can be specified multiple times)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Suppress the summary
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Chunking result summary
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub vendor: String,
    pub max_tokens: usize,
    pub documents: Vec<ParseStats>,
    pub chunks_written: usize,
    pub output: String,
    pub generated_at: String,
}

/// Expand directories into the documents they contain, in a stable order
pub fn collect_documents(
    inputs: &[PathBuf],
    include_patterns: &[String],
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let patterns = include_patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(|e| format!("Invalid include pattern '{p}': {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let mut documents = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            documents.push(input.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(input)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy();
                patterns.iter().any(|p| p.matches(&name))
            })
            .map(|entry| entry.into_path())
            .collect();
        found.sort();

        if found.is_empty() {
            print_warning(&format!(
                "No documents matching {include_patterns:?} in {}",
                input.display()
            ));
        }
        documents.extend(found);
    }

    Ok(documents)
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let vendor = args
        .vendor
        .clone()
        .unwrap_or_else(|| services.config.chunking.default_vendor.clone());

    // Unknown vendors fail before any document is read
    services.vendors.resolve(&vendor)?;

    if args.max_tokens == Some(0) {
        return Err("Max tokens must be greater than zero.".into());
    }

    let include_patterns = if args.include.is_empty() {
        services.config.chunking.include_patterns.clone()
    } else {
        args.include.clone()
    };

    let documents = collect_documents(&args.inputs, &include_patterns)?;
    if documents.is_empty() {
        return Err("No documents to chunk.".into());
    }

    let pipeline = services.create_pipeline(args.tokenizer.as_deref(), args.max_tokens)?;

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Chunking {} document(s) as '{}'...",
            colors::number(&documents.len().to_string()),
            colors::vendor(&vendor)
        );
    }

    let parsed = parse_documents(
        &pipeline,
        &documents,
        &vendor,
        &services.vendors,
        services.config.limits.max_concurrent_documents,
    )
    .await?;

    let output = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Cannot create output '{}': {e}", path.display()))?;
            write_chunks(JsonlSink::new(BufWriter::new(file)), &parsed)?
        }
        None => write_chunks(JsonlSink::new(io::stdout().lock()), &parsed)?,
    };

    let response = ChunkResponse {
        vendor,
        max_tokens: pipeline.max_tokens(),
        chunks_written: output,
        documents: parsed.into_iter().map(|(_, stats)| stats).collect(),
        output: args
            .output
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdout".to_string()),
        generated_at: chrono::Utc::now().to_rfc3339(),
    };

    if args.quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Human => print_summary(&response),
        OutputFormat::Json => eprintln!("{}", serde_json::to_string_pretty(&response)?),
    }

    Ok(())
}

/// Parse documents concurrently, at most `max_concurrent` at a time.
///
/// Results keep input order. Once any document fails no further
/// document is started, and documents already queued are skipped.
pub async fn parse_documents(
    pipeline: &ChunkingPipeline,
    documents: &[PathBuf],
    vendor: &str,
    vendors: &Arc<VendorRegistry>,
    max_concurrent: usize,
) -> Result<Vec<(Vec<Chunk>, ParseStats)>, Box<dyn std::error::Error>> {
    let semaphore = Arc::new(Semaphore::new(max_concurrent));
    let failed = Arc::new(AtomicBool::new(false));
    let mut handles = Vec::with_capacity(documents.len());

    for path in documents {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        if failed.load(Ordering::Acquire) {
            break;
        }

        let pipeline = pipeline.clone();
        let vendors = Arc::clone(vendors);
        let vendor = vendor.to_string();
        let failed = Arc::clone(&failed);
        let path = path.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            if failed.load(Ordering::Acquire) {
                return None;
            }
            let result = pipeline.chunk_file(&path, &vendor, &vendors);
            if result.is_err() {
                failed.store(true, Ordering::Release);
            }
            Some(result)
        }));
    }

    let mut parsed = Vec::with_capacity(handles.len());
    for (path, handle) in documents.iter().zip(handles) {
        match handle.await? {
            Some(Ok(result)) => parsed.push(result),
            Some(Err(e)) => {
                return Err(format!("{}: {e}. No chunks were written.", path.display()).into());
            }
            None => tracing::debug!("Skipped {:?} after an earlier failure", path),
        }
    }

    if parsed.len() != documents.len() {
        return Err("Chunking stopped early. No chunks were written.".into());
    }

    Ok(parsed)
}

fn write_chunks<S: ChunkSink>(
    mut sink: S,
    parsed: &[(Vec<Chunk>, ParseStats)],
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut written = 0;
    for (chunks, _) in parsed {
        for chunk in chunks {
            sink.write_chunk(chunk)?;
        }
        written += chunks.len();
    }
    sink.flush()?;
    Ok(written)
}

fn print_summary(response: &ChunkResponse) {
    for stats in &response.documents {
        eprintln!(
            "{} {}: {} chunks from {} sections, {} pages in {}",
            colors::success("Chunked"),
            colors::file_path(&stats.source),
            colors::number(&stats.chunks_created.to_string()),
            colors::number(&stats.sections_detected.to_string()),
            colors::number(&stats.pages_scanned.to_string()),
            colors::number(&format_duration_ms(stats.duration_ms))
        );
        if stats.oversized_chunks > 0 {
            print_warning(&format!(
                "{}: {} chunk(s) exceed {} tokens because a single line does",
                stats.source, stats.oversized_chunks, response.max_tokens
            ));
        }
    }
    eprintln!(
        "Wrote {} chunks to {}",
        colors::number(&response.chunks_written.to_string()),
        colors::file_path(&response.output)
    );
}
