//! Common test utilities

use jira_link_map::{write_report, Catalog, LinkMapping, ReportFormat};
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Test utility for integration tests
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config file into `dir` and return its path
#[allow(dead_code)] // Test utility for integration tests
pub fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}

/// Render a mapping to a string
pub fn render(mapping: &LinkMapping<'_>, format: ReportFormat) -> String {
    let mut buf = Vec::new();
    write_report(&mut buf, mapping, format).expect("Failed to write report");
    String::from_utf8(buf).expect("Report should be UTF-8")
}

/// The catalog used by a run without configuration
#[allow(dead_code)] // Test utility for integration tests
pub fn standard_catalog() -> Catalog {
    Catalog::standard()
}
