//! Schema diff pipeline
//!
//! Two documents go through path extraction, property matching, change
//! classification and severity aggregation:
//!
//! ```text
//! (source, destination) -> extract_paths x2 -> match_properties
//!                       -> classify -> aggregate -> ChangeSet
//! ```
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

pub mod aggregate;
pub mod change;
pub mod classifier;
pub mod matcher;
pub mod paths;

pub use aggregate::{aggregate, ChangeSet};
pub use change::{ChangeRecord, Severity};
pub use classifier::classify;
pub use matcher::{match_properties, PropertyMatch};
pub use paths::{extract_paths, PropertyDescriptor};

use crate::error::DiffResult;
use crate::schema::SchemaDocument;
use serde_json::Value;
use tracing::debug;

/// Diff two typed schema documents
pub fn generate_schema_changes(
    source: &SchemaDocument,
    destination: &SchemaDocument,
) -> DiffResult<ChangeSet> {
    let source_paths = extract_paths(source);
    let destination_paths = extract_paths(destination);
    debug!(
        source = source_paths.len(),
        destination = destination_paths.len(),
        "Extracted property paths"
    );

    let PropertyMatch {
        common,
        removed,
        added,
    } = match_properties(&source_paths, &destination_paths);
    debug!(
        common = common.len(),
        removed = removed.len(),
        added = added.len(),
        "Matched properties"
    );

    let changed = classify(source, destination, &common)?;
    let change_set = aggregate(removed, added, changed);
    debug!(
        major = change_set.major.len(),
        minor = change_set.minor.len(),
        patch = change_set.patch.len(),
        "Aggregated changes"
    );

    Ok(change_set)
}

/// Diff two parsed JSON schemas
pub fn diff_values(source: &Value, destination: &Value) -> DiffResult<ChangeSet> {
    let source = SchemaDocument::from_value(source)?;
    let destination = SchemaDocument::from_value(destination)?;
    generate_schema_changes(&source, &destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_removed_property_is_major() {
        let changes = diff_values(
            &json!({"$version": "1.0.0", "properties": {"url": {"type": "string"}}}),
            &json!({}),
        )
        .unwrap();

        assert_eq!(changes.removed.len(), 1);
        assert_eq!(changes.removed[0].key, "url");
        assert_eq!(changes.major, changes.removed);
        assert!(changes.minor.is_empty());
        assert!(changes.patch.is_empty());
    }

    #[test]
    fn test_added_property_is_minor() {
        let changes = diff_values(
            &json!({"properties": {}}),
            &json!({"properties": {"category_number": {"type": "integer"}}}),
        )
        .unwrap();

        assert_eq!(changes.added.len(), 1);
        assert_eq!(changes.minor, changes.added);
        assert!(changes.major.is_empty());
    }

    #[test]
    fn test_rename_is_removal_plus_addition() {
        let changes = diff_values(
            &json!({"properties": {"start": {"type": "string", "description": "Start"}}}),
            &json!({"properties": {"begin": {"type": "string", "description": "Start"}}}),
        )
        .unwrap();

        assert_eq!(changes.removed[0].key, "start");
        assert_eq!(changes.added[0].key, "begin");
        assert!(changes.changed.is_empty());
    }

    #[test]
    fn test_malformed_destination_aborts() {
        let result = diff_values(&json!({}), &json!({"properties": {"a": 5}}));
        assert!(result.is_err());
    }
}
