//! Schema hygiene warnings
//!
//! Advisory findings about a single schema: recommended root keys that are
//! missing, properties without a description, and type-specific constraints
//! that are left open. Warnings never affect the version.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::schema::{Properties, PropertyNode, SchemaDocument, SchemaKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Root keys every published schema should declare
pub const RECOMMENDED_ROOT_KEYS: [&str; 3] = ["$schema", "$id", "description"];

/// One advisory finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningRecord {
    /// Display path of the property, empty for the schema root
    pub path: String,
    pub message: String,
}

impl WarningRecord {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a root-level warning
    pub fn root(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for WarningRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} {}", self.path, self.message)
        }
    }
}

/// Collect warnings for a document, root first, then properties depth-first
pub fn generate_warnings(document: &SchemaDocument) -> Vec<WarningRecord> {
    let mut warnings: Vec<WarningRecord> = RECOMMENDED_ROOT_KEYS
        .iter()
        .filter(|key| !document.has_key(key))
        .map(|key| WarningRecord::root(format!("Schema is missing recommended key {}", key)))
        .collect();

    if let Some(properties) = document.properties() {
        warnings.extend(property_warnings(properties, None));
    }

    trace!(count = warnings.len(), "Generated schema warnings");
    warnings
}

fn property_warnings(properties: &Properties, parent: Option<&str>) -> Vec<WarningRecord> {
    properties
        .iter()
        .flat_map(|(key, node)| {
            let path = match parent {
                Some(parent) => format!("{}.{}", parent, key),
                None => key.to_string(),
            };

            let mut warnings: Vec<WarningRecord> = node_warnings(node)
                .into_iter()
                .map(|message| WarningRecord::new(path.clone(), message))
                .collect();

            if let Some(nested) = node.nested_properties() {
                warnings.extend(property_warnings(nested, Some(&path)));
            }
            warnings
        })
        .collect()
}

fn node_warnings(node: &PropertyNode) -> Vec<&'static str> {
    let mut messages = Vec::new();

    if node.description().is_none() {
        messages.push("no description set");
    }

    match &node.kind {
        SchemaKind::String(string) => {
            if string.max_length.is_none() {
                messages.push("no length set: default recommendation 16383");
            }
        }
        SchemaKind::Integer(numeric) | SchemaKind::Number(numeric) => {
            if !numeric.has_lower_bound() {
                messages.push("no minimum value set. Consider setting an acceptable range");
            }
            if !numeric.has_upper_bound() {
                messages.push("no maximum value set. Consider setting an acceptable range");
            }
        }
        SchemaKind::Boolean(boolean) => {
            if boolean.default.is_none() {
                messages.push("set a default state for booleans to avoid trooleans");
            }
        }
        SchemaKind::Object(object) => {
            if object.additional_properties.is_none() {
                messages.push(
                    "object does not have additionalProperties set. If you are unsure set this to false",
                );
            }
        }
        SchemaKind::Array(array) => {
            let untyped = match &array.items {
                None => true,
                Some(serde_json::Value::Array(tuple)) => tuple.is_empty(),
                Some(_) => false,
            };
            if untyped {
                messages.push("set the type of items allowed to be stored in this array");
            }
            if matches!(array.max_items, None | Some(0)) {
                messages.push("set the maximum amount of items allowed in this array");
            }
            if array.unique_items.is_none() {
                messages.push("explicitly define if unique values are expected");
            }
        }
        SchemaKind::Null => {
            messages.push("avoid using null as a placeholder until you know the data type required");
        }
        SchemaKind::Undefined => {}
    }

    messages
}
