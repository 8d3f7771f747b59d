//! Typed view over JSON Schema documents
//!
//! A [`SchemaDocument`] is built once from a parsed `serde_json::Value` and is
//! never mutated afterwards. Structural problems (a root that is not an object,
//! a `properties` keyword that is not a mapping) are reported immediately as
//! [`DiffError::MalformedSchema`] instead of being skipped.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

pub mod node;

pub use node::{
    ArraySchema, BooleanSchema, NumericSchema, ObjectSchema, Properties, PropertyNode, SchemaKind,
    StringSchema,
};

use crate::error::{DiffError, DiffResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Non-standard keyword holding the schema's semantic version
pub const VERSION_KEYWORD: &str = "$version";

/// Declared type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
    Null,
    Undefined,
}

impl SchemaType {
    /// Read the `type` keyword; anything but a single known type name is `Undefined`
    pub fn from_keyword(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("string") => Self::String,
            Some("integer") => Self::Integer,
            Some("number") => Self::Number,
            Some("boolean") => Self::Boolean,
            Some("object") => Self::Object,
            Some("array") => Self::Array,
            Some("null") => Self::Null,
            _ => Self::Undefined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Null => "null",
            Self::Undefined => "undefined",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A whole schema document: root keywords plus the root `properties` tree
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    root_keys: Vec<String>,
    version: Option<Value>,
    properties: Option<Properties>,
}

impl SchemaDocument {
    /// Build the typed view of a parsed schema
    pub fn from_value(value: &Value) -> DiffResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            DiffError::malformed("$", format!("schema root must be an object, found {}", node::kind_of(value)))
        })?;

        let properties = map
            .get("properties")
            .map(|props| Properties::from_value(props, "properties"))
            .transpose()?;

        Ok(Self {
            root_keys: map.keys().cloned().collect(),
            version: map.get(VERSION_KEYWORD).cloned(),
            properties,
        })
    }

    /// Top-level keyword names in declaration order
    pub fn root_keys(&self) -> impl Iterator<Item = &str> {
        self.root_keys.iter().map(String::as_str)
    }

    /// Whether a top-level keyword is declared
    pub fn has_key(&self, key: &str) -> bool {
        self.root_keys.iter().any(|k| k == key)
    }

    /// Raw `$version` value, if declared
    pub fn version_value(&self) -> Option<&Value> {
        self.version.as_ref()
    }

    /// Root `properties`, if declared
    pub fn properties(&self) -> Option<&Properties> {
        self.properties.as_ref()
    }

    /// Resolve a property by the chain of property names leading to it
    ///
    /// `["nested_object", "count"]` resolves
    /// `properties.nested_object.properties.count`.
    pub fn property_at<S: AsRef<str>>(&self, keys: &[S]) -> Option<&PropertyNode> {
        let (first, rest) = keys.split_first()?;
        let mut node = self.properties.as_ref()?.get(first.as_ref())?;
        for key in rest {
            node = node.nested_properties()?.get(key.as_ref())?;
        }
        Some(node)
    }
}

impl TryFrom<&Value> for SchemaDocument {
    type Error = DiffError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}
