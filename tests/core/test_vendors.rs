//! Vendor registry and configuration tests

use crate::common::{test_config, TEST_VENDOR_TOML};
use sonictrace::core::chunker::{classify, LineKind};
use sonictrace::core::config::Config;
use sonictrace::core::vendor::{VendorConfig, VendorRegistry};
use sonictrace::ChunkError;
use std::collections::BTreeMap;

#[test]
fn test_builtin_vendor_table() {
    let registry = VendorRegistry::builtin();
    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["arista_eos", "broadcom_sonic", "cisco_nxos"]);

    let sonic = registry.resolve("broadcom_sonic").unwrap();
    assert_eq!(sonic.start_page, 24);
    assert_eq!(sonic.end_page, Some(840));

    let eos = registry.resolve("arista_eos").unwrap();
    assert_eq!((eos.start_page, eos.end_page), (10, Some(350)));

    let nxos = registry.resolve("cisco_nxos").unwrap();
    assert_eq!((nxos.start_page, nxos.end_page), (12, Some(710)));
}

#[test]
fn test_builtin_patterns_drop_running_footers() {
    let registry = VendorRegistry::builtin();
    let cases = [
        ("broadcom_sonic", "Broadcom Confidential   SONiC-UG102"),
        ("broadcom_sonic", "214"),
        ("arista_eos", "Arista Networks"),
        ("arista_eos", "EOS 4.30.1F"),
        ("cisco_nxos", "Cisco NX-OS Configuration Guide, Release 10.3"),
        ("cisco_nxos", "NX-OS Version 10.3(2)"),
    ];

    for (vendor, line) in cases {
        let rules = registry.resolve(vendor).unwrap().rules().unwrap();
        assert_eq!(classify(line, &rules), LineKind::Ignored, "{vendor}: {line}");
    }
}

#[test]
fn test_headings_survive_builtin_patterns() {
    let rules = VendorRegistry::builtin()
        .resolve("broadcom_sonic")
        .unwrap()
        .rules()
        .unwrap();

    assert_eq!(classify("3.2 Interface Configuration", &rules), LineKind::Section);
    assert_eq!(classify("Chapter 4: BGP", &rules), LineKind::Chapter);
    assert_eq!(classify("show interfaces status", &rules), LineKind::Body);
}

#[test]
fn test_unknown_vendor() {
    let err = VendorRegistry::builtin().resolve("juniper_junos").unwrap_err();
    assert!(matches!(err, ChunkError::VendorNotConfigured(_)));
    assert!(err.to_string().contains("juniper_junos"));
}

#[test]
fn test_file_vendors_merge_over_builtins() {
    let config = test_config();
    let registry = config.vendor_registry().unwrap();

    assert!(registry.contains("test_vendor"));
    assert!(registry.contains("broadcom_sonic"));
    assert_eq!(config.chunking.default_vendor, "test_vendor");
    assert!(config.validate().is_ok());
}

#[test]
fn test_file_vendor_replaces_builtin_entry() {
    let config = Config::from_toml(
        r#"
        [vendors.arista_eos]
        start_page = 2
        end_page = 5
        "#,
    )
    .unwrap();

    let eos = &config.vendors["arista_eos"];
    assert_eq!((eos.start_page, eos.end_page), (2, Some(5)));
    assert!(eos.ignore_patterns.is_empty());
}

#[test]
fn test_bad_pattern_rejected_at_startup() {
    let config = Config::from_toml(&format!(
        "{TEST_VENDOR_TOML}\n[vendors.broken]\nignore_patterns = ['(unclosed']\n"
    ))
    .unwrap();

    let err = config.validate().unwrap_err();
    assert!(matches!(err, ChunkError::InvalidPattern { .. }));
}

#[test]
fn test_inverted_page_range_rejected() {
    let mut vendors = BTreeMap::new();
    vendors.insert(
        "backwards".to_string(),
        VendorConfig {
            start_page: 10,
            end_page: Some(3),
            ignore_patterns: vec![],
        },
    );

    let err = VendorRegistry::new(vendors).unwrap_err();
    assert!(err.is_config_error());
}
