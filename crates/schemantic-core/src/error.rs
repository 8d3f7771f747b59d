//! Error types for the schema diff engine
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for diff and versioning operations
pub type DiffResult<T> = Result<T, DiffError>;

/// Errors raised by the diff, versioning and warning entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The source schema has no `$version` keyword
    #[error("Schema does not have a $version field")]
    MissingVersionField,

    /// The `$version` keyword is not a semantic version
    #[error("Schema does not have a valid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// A severity tier outside major/minor/patch
    #[error("Change does not have a known change type: '{0}'")]
    UnknownSeverity(String),

    /// The document is not shaped like a schema tree
    #[error("Malformed schema at '{path}': {reason}")]
    MalformedSchema { path: String, reason: String },
}

impl DiffError {
    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed schema error with path context
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DiffError::MissingVersionField.to_string(),
            "Schema does not have a $version field"
        );

        let error = DiffError::invalid_version("version", "Expected format X.Y.Z");
        assert!(error.to_string().starts_with("Schema does not have a valid version"));
        assert!(error.to_string().contains("'version'"));

        let error = DiffError::malformed("properties.a", "expected an object");
        assert_eq!(
            error.to_string(),
            "Malformed schema at 'properties.a': expected an object"
        );
    }
}
