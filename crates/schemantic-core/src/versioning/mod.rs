//! Schema versioning
//!
//! Reads the `$version` keyword of a schema and computes the release that a
//! [`ChangeSet`] calls for. The bump follows semantic versioning: a major
//! bump resets minor and patch, a minor bump resets patch.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

pub mod bump;
pub mod version;

pub use bump::VersionBump;
pub use version::SchemaVersion;

use crate::diff::ChangeSet;
use crate::error::{DiffError, DiffResult};
use crate::schema::SchemaDocument;
use serde_json::Value;
use tracing::debug;

/// Parse the `$version` keyword of a schema
///
/// An absent, null or empty keyword is [`DiffError::MissingVersionField`];
/// anything else that is not a valid semantic version string is
/// [`DiffError::InvalidVersion`].
pub fn current_version(document: &SchemaDocument) -> DiffResult<SchemaVersion> {
    match document.version_value() {
        None | Some(Value::Null) => Err(DiffError::MissingVersionField),
        Some(Value::String(raw)) if raw.is_empty() => Err(DiffError::MissingVersionField),
        Some(Value::String(raw)) => SchemaVersion::parse(raw),
        Some(other) => Err(DiffError::invalid_version(
            other.to_string(),
            "expected a version string",
        )),
    }
}

/// Compute the version following `current` for a set of changes
///
/// Fails with [`DiffError::InvalidVersion`] when the component to increment
/// is already at its maximum.
pub fn next_version(current: &SchemaVersion, changes: &ChangeSet) -> DiffResult<SchemaVersion> {
    let bump = VersionBump::from_change_set(changes);
    let next = current.bump(bump)?;
    debug!(%current, %next, %bump, "Computed next version");
    Ok(next)
}
