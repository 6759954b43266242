// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{manual_pages, TestManual, TEST_VENDOR_TOML};
#[allow(unused_imports)]
pub use helpers::{
    assert_within_budget, body_words, test_config, word_pipeline, words, WordCounter,
};
