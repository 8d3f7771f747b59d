//! Changelog between two schema versions
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::{generate_schema_changes, ChangeSet};
use crate::error::DiffResult;
use crate::schema::SchemaDocument;
use crate::versioning::{current_version, next_version, SchemaVersion, VersionBump};
use crate::warnings::{generate_warnings, WarningRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Everything a renderer needs to publish a new schema version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Changelog {
    pub changes: ChangeSet,
    /// Warnings about the destination schema
    pub warnings: Vec<WarningRecord>,
    pub version_current: SchemaVersion,
    pub version_new: SchemaVersion,
}

impl Changelog {
    /// Diff `source` against `destination` and resolve the next version
    ///
    /// The source is typed and its `$version` resolved before the destination
    /// is read, so a missing or invalid version fails before any diffing
    /// happens, whatever the shape of the destination.
    #[instrument(level = "debug", skip_all)]
    pub fn generate(source: &Value, destination: &Value) -> DiffResult<Self> {
        let source = SchemaDocument::from_value(source)?;
        let version_current = current_version(&source)?;
        let destination = SchemaDocument::from_value(destination)?;
        Self::build(&source, &destination, version_current)
    }

    /// Same as [`Changelog::generate`] for documents that are already typed
    pub fn from_documents(source: &SchemaDocument, destination: &SchemaDocument) -> DiffResult<Self> {
        let version_current = current_version(source)?;
        Self::build(source, destination, version_current)
    }

    fn build(
        source: &SchemaDocument,
        destination: &SchemaDocument,
        version_current: SchemaVersion,
    ) -> DiffResult<Self> {
        let changes = generate_schema_changes(source, destination)?;
        let version_new = next_version(&version_current, &changes)?;
        let warnings = generate_warnings(destination);

        debug!(
            %version_current,
            %version_new,
            changes = changes.len(),
            warnings = warnings.len(),
            "Generated changelog"
        );

        Ok(Self {
            changes,
            warnings,
            version_current,
            version_new,
        })
    }

    /// The bump applied to reach `version_new`
    pub fn bump(&self) -> VersionBump {
        VersionBump::from_change_set(&self.changes)
    }
}
