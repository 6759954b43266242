//! Tests for the chunk command

use crate::cli::test_helpers::{
    chunk_args, create_cli_test_services, read_chunks, CountingCounter,
};
use crate::common::{manual_pages, test_config, TestManual};
use sonictrace::cli::commands::chunk::{collect_documents, execute, parse_documents};
use sonictrace::cli::OutputFormat;
use sonictrace::core::services::Services;
use sonictrace::PageRange;
use std::sync::Arc;

/// Chunking one manual writes one JSON object per chunk
#[tokio::test]
async fn test_chunk_single_manual() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");

    let result = execute(
        chunk_args(vec![manual.file(0)], &output),
        &services,
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok(), "Chunking should succeed: {result:?}");

    let chunks = read_chunks(&output);
    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[1].section, "Chapter 1: Getting Started");
    assert_eq!(chunks[1].page_range, PageRange::new(1, 2));
    assert!(chunks.iter().all(|c| c.source == "manual.txt"));
}

/// Records use the `[start, end]` page range encoding
#[tokio::test]
async fn test_chunk_output_format() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");

    execute(
        chunk_args(vec![manual.file(0)], &output),
        &services,
        OutputFormat::Json,
    )
    .await
    .unwrap();

    let first_line = std::fs::read_to_string(&output)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    let value: serde_json::Value = serde_json::from_str(&first_line).unwrap();
    assert_eq!(value["page_range"], serde_json::json!([0, 1]));
    assert_eq!(value["section"], "UNKNOWN");
    assert_eq!(value["source"], "manual.txt");
}

/// Directories are walked and manuals are written in path order
#[tokio::test]
async fn test_chunk_directory() {
    let services = create_cli_test_services();
    let pages = manual_pages();
    let manual = TestManual::with_manuals(&[
        ("b/second.txt", pages.as_slice()),
        ("a/first.txt", pages.as_slice()),
        ("notes.md", &["1.1 Not a manual\nignored"][..]),
    ]);
    let output = manual.path().join("out.jsonl");

    execute(
        chunk_args(vec![manual.path().to_path_buf()], &output),
        &services,
        OutputFormat::Human,
    )
    .await
    .unwrap();

    let chunks = read_chunks(&output);
    assert_eq!(chunks.len(), 8);
    assert!(chunks[..4].iter().all(|c| c.source == "first.txt"));
    assert!(chunks[4..].iter().all(|c| c.source == "second.txt"));
}

/// A smaller budget yields more, smaller chunks
#[tokio::test]
async fn test_chunk_max_tokens_override() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");

    let mut args = chunk_args(vec![manual.file(0)], &output);
    args.max_tokens = Some(6);
    execute(args, &services, OutputFormat::Human).await.unwrap();

    let chunks = read_chunks(&output);
    assert!(chunks.len() > 4);
    for chunk in &chunks {
        let tokens = chunk.content.split_whitespace().count();
        assert!(tokens <= 6 || !chunk.content.contains('\n'));
    }
}

/// Unknown vendors fail and write nothing
#[tokio::test]
async fn test_chunk_unknown_vendor() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");

    let mut args = chunk_args(vec![manual.file(0)], &output);
    args.vendor = Some("juniper_junos".to_string());
    let result = execute(args, &services, OutputFormat::Human).await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("juniper_junos"));
    assert!(!output.exists());
}

/// One bad document aborts the whole run before any output
#[tokio::test]
async fn test_chunk_failure_writes_nothing() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");
    let missing = manual.path().join("missing.txt");

    let result = execute(
        chunk_args(vec![manual.file(0), missing], &output),
        &services,
        OutputFormat::Human,
    )
    .await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("No chunks were written"), "got: {err}");
    assert!(!output.exists());
}

/// After a failure, documents still waiting for a slot are never parsed
#[tokio::test]
async fn test_failure_stops_remaining_documents() {
    let counter = Arc::new(CountingCounter::default());
    let services = Services::with_counter(test_config(), counter.clone()).unwrap();
    let pipeline = services.create_pipeline(None, None).unwrap();
    let manual = TestManual::sonic();
    let documents = vec![
        manual.path().join("missing.txt"),
        manual.file(0),
        manual.file(0),
    ];

    let result = parse_documents(&pipeline, &documents, "test_vendor", &services.vendors, 1).await;

    let err = result.unwrap_err().to_string();
    assert!(err.contains("missing.txt"), "got: {err}");
    assert_eq!(counter.calls(), 0, "no manual after the failing one should be parsed");
}

/// Concurrent parses still return results in input order
#[tokio::test]
async fn test_parse_documents_keeps_input_order() {
    let services = create_cli_test_services();
    let pipeline = services.create_pipeline(None, None).unwrap();
    let pages = manual_pages();
    let manual = TestManual::with_manuals(&[
        ("one.txt", pages.as_slice()),
        ("two.txt", pages.as_slice()),
        ("three.txt", pages.as_slice()),
    ]);

    let parsed = parse_documents(&pipeline, &manual.files, "test_vendor", &services.vendors, 3)
        .await
        .unwrap();

    let sources: Vec<&str> = parsed.iter().map(|(_, stats)| stats.source.as_str()).collect();
    assert_eq!(sources, vec!["one.txt", "two.txt", "three.txt"]);
}

/// Zero budget is rejected
#[tokio::test]
async fn test_chunk_zero_max_tokens() {
    let services = create_cli_test_services();
    let manual = TestManual::sonic();
    let output = manual.path().join("out.jsonl");

    let mut args = chunk_args(vec![manual.file(0)], &output);
    args.max_tokens = Some(0);

    assert!(execute(args, &services, OutputFormat::Human).await.is_err());
}

/// Empty directories have nothing to chunk
#[tokio::test]
async fn test_chunk_empty_directory() {
    let services = create_cli_test_services();
    let manual = TestManual::with_manuals(&[]);
    let output = manual.path().join("out.jsonl");

    let result = execute(
        chunk_args(vec![manual.path().to_path_buf()], &output),
        &services,
        OutputFormat::Human,
    )
    .await;

    assert!(result.is_err());
}

/// Include patterns filter what a directory contributes
#[test]
fn test_collect_documents_include_patterns() {
    let pages = manual_pages();
    let manual = TestManual::with_manuals(&[
        ("eos.pdf", pages.as_slice()),
        ("sonic.txt", pages.as_slice()),
    ]);

    let found = collect_documents(&[manual.path().to_path_buf()], &["*.txt".to_string()]).unwrap();
    assert_eq!(found.len(), 1);
    assert!(found[0].ends_with("sonic.txt"));
}
