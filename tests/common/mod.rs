/*!
 * Common test utilities for the entitle test suite
 */

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

// Re-export the mock provider module
pub mod mock_provider;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a sample invoice document for testing
pub fn create_test_invoice(dir: &TempDir, filename: &str) -> Result<PathBuf> {
    let content = "INVOICE\n\
                   Acme Corporation\n\
                   Date: 2023-10-27\n\
                   \n\
                   Item: Consulting services\n\
                   Amount: 1,200.00 EUR\n";
    create_test_file(dir, filename, content)
}
