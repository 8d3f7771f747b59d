//! Cross-version property matching
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::change::ChangeRecord;
use crate::diff::paths::PropertyDescriptor;
use std::collections::{HashMap, HashSet};

/// Properties partitioned by presence in the source and destination schemas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMatch {
    /// Present in both, in source order, carrying the destination descriptor
    pub common: Vec<PropertyDescriptor>,
    /// Present only in the source
    pub removed: Vec<ChangeRecord>,
    /// Present only in the destination
    pub added: Vec<ChangeRecord>,
}

/// Match two descriptor lists by their key segments
///
/// Keys are compared segment by segment rather than through the rendered
/// structural path, which is ambiguous once a key contains a dot.
pub fn match_properties(
    source: &[PropertyDescriptor],
    destination: &[PropertyDescriptor],
) -> PropertyMatch {
    let source_paths: HashSet<&[String]> = source.iter().map(PropertyDescriptor::keys).collect();
    let destination_index: HashMap<&[String], &PropertyDescriptor> = destination
        .iter()
        .map(|descriptor| (descriptor.keys(), descriptor))
        .collect();

    let common = source
        .iter()
        .filter_map(|descriptor| destination_index.get(descriptor.keys()))
        .map(|descriptor| (*descriptor).clone())
        .collect();

    let removed = source
        .iter()
        .filter(|descriptor| !destination_index.contains_key(descriptor.keys()))
        .map(ChangeRecord::removed)
        .collect();

    let added = destination
        .iter()
        .filter(|descriptor| !source_paths.contains(descriptor.keys()))
        .map(ChangeRecord::added)
        .collect();

    PropertyMatch {
        common,
        removed,
        added,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::change::Severity;
    use crate::diff::paths::extract_paths;
    use crate::schema::{SchemaDocument, SchemaType};
    use serde_json::json;

    fn paths(value: serde_json::Value) -> Vec<PropertyDescriptor> {
        extract_paths(&SchemaDocument::from_value(&value).unwrap())
    }

    #[test]
    fn test_partition() {
        let source = paths(json!({
            "properties": {
                "url": {"type": "string"},
                "kept": {"type": "string"},
                "dtstart": {"type": "string"}
            }
        }));
        let destination = paths(json!({
            "properties": {
                "category_number": {"type": "integer"},
                "dtstart": {"type": "string"},
                "kept": {"type": "integer"}
            }
        }));

        let matched = match_properties(&source, &destination);

        let common: Vec<&str> = matched.common.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(common, vec!["kept", "dtstart"]);
        assert_eq!(matched.common[0].schema_type, SchemaType::Integer);

        assert_eq!(matched.removed.len(), 1);
        assert_eq!(matched.removed[0].key, "url");
        assert_eq!(matched.removed[0].severity, Severity::Major);
        assert_eq!(matched.removed[0].message, "property was removed");

        assert_eq!(matched.added.len(), 1);
        assert_eq!(matched.added[0].key, "category_number");
        assert_eq!(matched.added[0].severity, Severity::Minor);
        assert_eq!(matched.added[0].message, "property was added");
    }

    #[test]
    fn test_same_key_at_different_depth_is_a_different_property() {
        let source = paths(json!({
            "properties": {"count": {"type": "integer"}}
        }));
        let destination = paths(json!({
            "properties": {
                "nested": {
                    "type": "object",
                    "properties": {"count": {"type": "integer"}}
                }
            }
        }));

        let matched = match_properties(&source, &destination);
        assert!(matched.common.is_empty());
        assert_eq!(matched.removed[0].structural_path, "properties.count");

        let added: Vec<&str> = matched.added.iter().map(|r| r.display_path.as_str()).collect();
        assert_eq!(added, vec!["nested", "nested.count"]);
    }

    #[test]
    fn test_dotted_key_is_not_a_nested_path() {
        let source = paths(json!({
            "properties": {"a.properties.b": {"type": "string"}}
        }));
        let destination = paths(json!({
            "properties": {
                "a": {"type": "object", "properties": {"b": {"type": "string"}}}
            }
        }));
        assert_eq!(source[0].structural_path, destination[1].structural_path);

        let matched = match_properties(&source, &destination);
        assert!(matched.common.is_empty());
        assert_eq!(matched.removed.len(), 1);
        assert_eq!(matched.removed[0].key, "a.properties.b");
        let added: Vec<&str> = matched.added.iter().map(|r| r.display_path.as_str()).collect();
        assert_eq!(added, vec!["a", "a.b"]);
    }

    #[test]
    fn test_empty_inputs() {
        let matched = match_properties(&[], &[]);
        assert_eq!(matched, PropertyMatch::default());
    }
}
