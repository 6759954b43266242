//! Tests for list-vendors and show-config CLI commands
//!
//! These are simple commands that display configuration.

use crate::cli::test_helpers::create_cli_test_services;
use sonictrace::cli::commands::config::{execute as execute_config, ConfigArgs};
use sonictrace::cli::commands::vendors::{build_response, execute as execute_vendors, VendorsArgs};
use sonictrace::cli::OutputFormat;

// =============================================================================
// list-vendors tests
// =============================================================================

#[tokio::test]
async fn test_list_vendors_human() {
    let services = create_cli_test_services();

    let args = VendorsArgs { patterns: false };
    let result = execute_vendors(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List vendors should succeed");
}

#[tokio::test]
async fn test_list_vendors_with_patterns_json() {
    let services = create_cli_test_services();

    let args = VendorsArgs { patterns: true };
    let result = execute_vendors(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "List vendors (JSON) should succeed");
}

#[test]
fn test_vendor_listing_marks_default() {
    let services = create_cli_test_services();
    let response = build_response(&services);

    let names: Vec<&str> = response.vendors.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["arista_eos", "broadcom_sonic", "cisco_nxos", "skip_cover", "test_vendor"]
    );

    let defaults: Vec<&str> = response
        .vendors
        .iter()
        .filter(|v| v.is_default)
        .map(|v| v.name.as_str())
        .collect();
    assert_eq!(defaults, vec!["test_vendor"]);

    let sonic = &response.vendors[1];
    assert_eq!(sonic.end_page, Some(840));
}

// =============================================================================
// show-config tests
// =============================================================================

#[tokio::test]
async fn test_show_config_human() {
    let services = create_cli_test_services();

    let result = execute_config(ConfigArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

#[tokio::test]
async fn test_show_config_json() {
    let services = create_cli_test_services();

    let result = execute_config(ConfigArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}
