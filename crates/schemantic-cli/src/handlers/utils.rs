//! Shared utilities for command handlers

use crate::config::is_yaml;
use crate::error::{Error, ErrorContext, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a schema document from a JSON or YAML file
pub fn load_schema(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(file = %path.display(), bytes = content.len(), "Read schema file");

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
            reason: e.to_string(),
        })
    }
}
