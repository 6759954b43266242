//! Vendor page-layout configuration.
//!
//! Each manual family has its own content page range and its own
//! running headers/footers. The registry is built once at startup and
//! only read afterwards, so it can be shared across concurrent parses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::chunker::IgnoreRules;
use crate::core::error::{ChunkError, Result};

/// Page range and noise patterns for one manual family
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VendorConfig {
    /// First page to scan (0-based)
    #[serde(default)]
    pub start_page: usize,

    /// Last page to scan, inclusive; the document's last page when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_page: Option<usize>,

    /// Regexes matched at the start of each trimmed line
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl VendorConfig {
    /// Compile the ignore patterns into a rule table
    pub fn rules(&self) -> Result<IgnoreRules> {
        IgnoreRules::new(&self.ignore_patterns)
    }

    fn validate(&self, name: &str) -> Result<()> {
        if let Some(end) = self.end_page {
            if end < self.start_page {
                return Err(ChunkError::ConfigError(format!(
                    "Vendor '{name}': end_page {end} is before start_page {}",
                    self.start_page
                )));
            }
        }
        self.rules()?;
        Ok(())
    }
}

fn patterns(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

/// Built-in vendor table
pub fn default_vendors() -> BTreeMap<String, VendorConfig> {
    let mut vendors = BTreeMap::new();

    vendors.insert(
        "broadcom_sonic".to_string(),
        VendorConfig {
            start_page: 24,
            end_page: Some(840),
            ignore_patterns: patterns(&[
                r"^Broadcom Confidential",
                r"^SONiC[- ]?UG\d+",
                r"^SONiC\s+\d+\.\d+\.\d+",
                r"^\d{1,4}$",
                r"^Enterprise SONiC.*User Guide",
            ]),
        },
    );

    vendors.insert(
        "arista_eos".to_string(),
        VendorConfig {
            start_page: 10,
            end_page: Some(350),
            ignore_patterns: patterns(&[
                r"^Arista Networks",
                r"^EOS\s+\d+\.\d+\.\d+",
                r"^\d{1,4}$",
                r"^Arista EOS Configuration Manual.*",
            ]),
        },
    );

    vendors.insert(
        "cisco_nxos".to_string(),
        VendorConfig {
            start_page: 12,
            end_page: Some(710),
            ignore_patterns: patterns(&[
                r"^Cisco Systems",
                r"^NX-OS Version.*",
                r"^\d{1,4}$",
                r"^Cisco NX-OS Configuration Guide.*",
            ]),
        },
    );

    vendors
}

/// Read-only lookup from vendor name to configuration
#[derive(Debug, Clone)]
pub struct VendorRegistry {
    vendors: BTreeMap<String, VendorConfig>,
}

impl VendorRegistry {
    /// Build a registry, validating every entry up front
    pub fn new(vendors: BTreeMap<String, VendorConfig>) -> Result<Self> {
        for (name, vendor) in &vendors {
            vendor.validate(name)?;
        }
        Ok(Self { vendors })
    }

    /// Registry holding only the built-in vendors
    pub fn builtin() -> Self {
        Self {
            vendors: default_vendors(),
        }
    }

    /// Look up a vendor by name
    pub fn resolve(&self, name: &str) -> Result<&VendorConfig> {
        self.vendors
            .get(name)
            .ok_or_else(|| ChunkError::VendorNotConfigured(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vendors.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vendors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VendorConfig)> {
        self.vendors.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}
