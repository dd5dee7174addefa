//! Shared helpers for integration tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create a scratch directory for a test.
pub fn scratch_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Read a file the child process wrote, with the trailing newline trimmed.
pub fn read_output(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
        .trim_end()
        .to_string()
}

/// Build an environment map from key/value pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
