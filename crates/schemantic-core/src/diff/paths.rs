//! Property path extraction
//!
//! Flattens a schema's `properties` tree into an ordered list of
//! [`PropertyDescriptor`]s, depth-first and pre-order, so that a nested
//! object's children follow the object itself.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::schema::{Properties, SchemaDocument, SchemaType};
use serde::Serialize;

/// Location and declared type of one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name
    pub key: String,
    /// Full keyword path, e.g. `properties.nested_object.properties.count`
    pub structural_path: String,
    /// Dotted shorthand, e.g. `nested_object.count`
    pub display_path: String,
    /// Declared type
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip)]
    keys: Vec<String>,
}

impl PropertyDescriptor {
    fn child(parent: Option<&PropertyDescriptor>, key: &str, schema_type: SchemaType) -> Self {
        match parent {
            Some(parent) => {
                let mut keys = parent.keys.clone();
                keys.push(key.to_string());
                Self {
                    key: key.to_string(),
                    structural_path: format!("{}.properties.{}", parent.structural_path, key),
                    display_path: format!("{}.{}", parent.display_path, key),
                    schema_type,
                    keys,
                }
            }
            None => Self {
                key: key.to_string(),
                structural_path: format!("properties.{}", key),
                display_path: key.to_string(),
                schema_type,
                keys: vec![key.to_string()],
            },
        }
    }

    /// Property names from the root down to this property
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Extract every property of a document
pub fn extract_paths(document: &SchemaDocument) -> Vec<PropertyDescriptor> {
    document
        .properties()
        .map(|properties| extract_properties(properties, None))
        .unwrap_or_default()
}

/// Extract a `properties` mapping, prefixing paths with `parent` when nested
pub fn extract_properties(
    properties: &Properties,
    parent: Option<&PropertyDescriptor>,
) -> Vec<PropertyDescriptor> {
    properties
        .iter()
        .flat_map(|(key, node)| {
            let descriptor = PropertyDescriptor::child(parent, key, node.schema_type());
            let nested = node
                .nested_properties()
                .map(|nested| extract_properties(nested, Some(&descriptor)))
                .unwrap_or_default();
            std::iter::once(descriptor).chain(nested)
        })
        .collect()
}
