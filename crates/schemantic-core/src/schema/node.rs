//! Typed property nodes
//!
//! Each property schema is read once into a [`PropertyNode`] whose
//! [`SchemaKind`] carries only the keywords the diff and warning rules
//! consult. Keyword values with the wrong JSON shape are rejected here so the
//! rules never have to probe raw values.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::error::{DiffError, DiffResult};
use crate::schema::SchemaType;
use serde_json::{Map, Number, Value};

/// Ordered mapping of property name to property schema
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
    entries: Vec<(String, PropertyNode)>,
}

impl Properties {
    /// Read a `properties` mapping; `path` is the structural path of the mapping itself
    pub(crate) fn from_value(value: &Value, path: &str) -> DiffResult<Self> {
        let map = value.as_object().ok_or_else(|| {
            DiffError::malformed(path, format!("'properties' must be an object, found {}", kind_of(value)))
        })?;

        let entries = map
            .iter()
            .map(|(key, schema)| {
                let node = PropertyNode::from_value(schema, &format!("{}.{}", path, key))?;
                Ok((key.clone(), node))
            })
            .collect::<DiffResult<Vec<_>>>()?;

        Ok(Self { entries })
    }

    /// Iterate properties in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyNode)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    /// Look up a property by name
    pub fn get(&self, key: &str) -> Option<&PropertyNode> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single property schema
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyNode {
    /// The `description` keyword, if declared
    pub description: Option<String>,
    /// Type-specific keywords
    pub kind: SchemaKind,
}

/// Tagged union over the property types the engine understands
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    String(StringSchema),
    Integer(NumericSchema),
    Number(NumericSchema),
    Boolean(BooleanSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Null,
    /// No `type`, a type list, or a boolean schema
    Undefined,
}

/// Keywords of a `string` property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringSchema {
    pub max_length: Option<u64>,
}

/// Keywords of an `integer` or `number` property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumericSchema {
    pub minimum: Option<Number>,
    pub exclusive_minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub exclusive_maximum: Option<Number>,
}

impl NumericSchema {
    /// True when either an inclusive or exclusive lower bound is declared
    pub fn has_lower_bound(&self) -> bool {
        self.minimum.is_some() || self.exclusive_minimum.is_some()
    }

    /// True when either an inclusive or exclusive upper bound is declared
    pub fn has_upper_bound(&self) -> bool {
        self.maximum.is_some() || self.exclusive_maximum.is_some()
    }
}

/// Keywords of a `boolean` property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooleanSchema {
    pub default: Option<Value>,
}

/// Keywords of an `object` property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    pub properties: Option<Properties>,
    pub additional_properties: Option<Value>,
    pub required: Vec<String>,
}

/// Keywords of an `array` property
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArraySchema {
    pub items: Option<Value>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub unique_items: Option<bool>,
}

impl PropertyNode {
    /// Read a property schema; `path` is the property's structural path
    pub(crate) fn from_value(value: &Value, path: &str) -> DiffResult<Self> {
        let map = match value {
            Value::Object(map) => map,
            // `true` / `false` are valid schemas that declare nothing
            Value::Bool(_) => {
                return Ok(Self {
                    description: None,
                    kind: SchemaKind::Undefined,
                })
            }
            other => {
                return Err(DiffError::malformed(
                    path,
                    format!("property schema must be an object, found {}", kind_of(other)),
                ))
            }
        };

        let keywords = Keywords { map, path };
        let description = keywords.string("description")?;

        let kind = match SchemaType::from_keyword(map.get("type")) {
            SchemaType::String => SchemaKind::String(StringSchema {
                max_length: keywords.unsigned("maxLength")?,
            }),
            SchemaType::Integer => SchemaKind::Integer(keywords.numeric()?),
            SchemaType::Number => SchemaKind::Number(keywords.numeric()?),
            SchemaType::Boolean => SchemaKind::Boolean(BooleanSchema {
                default: map.get("default").cloned(),
            }),
            SchemaType::Object => SchemaKind::Object(ObjectSchema {
                properties: map
                    .get("properties")
                    .map(|nested| Properties::from_value(nested, &format!("{}.properties", path)))
                    .transpose()?,
                additional_properties: map.get("additionalProperties").cloned(),
                required: keywords.string_list("required")?,
            }),
            SchemaType::Array => SchemaKind::Array(ArraySchema {
                items: map.get("items").cloned(),
                min_items: keywords.unsigned("minItems")?,
                max_items: keywords.unsigned("maxItems")?,
                unique_items: keywords.boolean("uniqueItems")?,
            }),
            SchemaType::Null => SchemaKind::Null,
            SchemaType::Undefined => SchemaKind::Undefined,
        };

        Ok(Self { description, kind })
    }

    /// The declared type tag
    pub fn schema_type(&self) -> SchemaType {
        match self.kind {
            SchemaKind::String(_) => SchemaType::String,
            SchemaKind::Integer(_) => SchemaType::Integer,
            SchemaKind::Number(_) => SchemaType::Number,
            SchemaKind::Boolean(_) => SchemaType::Boolean,
            SchemaKind::Object(_) => SchemaType::Object,
            SchemaKind::Array(_) => SchemaType::Array,
            SchemaKind::Null => SchemaType::Null,
            SchemaKind::Undefined => SchemaType::Undefined,
        }
    }

    /// Non-empty description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Nested properties of an object property
    pub fn nested_properties(&self) -> Option<&Properties> {
        match &self.kind {
            SchemaKind::Object(object) => object.properties.as_ref(),
            _ => None,
        }
    }
}

/// Typed keyword access with path context for errors
struct Keywords<'a> {
    map: &'a Map<String, Value>,
    path: &'a str,
}

impl Keywords<'_> {
    fn malformed(&self, keyword: &str, expected: &str, found: &Value) -> DiffError {
        DiffError::malformed(
            self.path,
            format!("'{}' must be {}, found {}", keyword, expected, kind_of(found)),
        )
    }

    fn string(&self, keyword: &str) -> DiffResult<Option<String>> {
        match self.map.get(keyword) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(self.malformed(keyword, "a string", other)),
        }
    }

    fn unsigned(&self, keyword: &str) -> DiffResult<Option<u64>> {
        match self.map.get(keyword) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .or_else(|| value.as_f64().and_then(integral))
                .map(Some)
                .ok_or_else(|| self.malformed(keyword, "a non-negative integer", value)),
        }
    }

    fn number(&self, keyword: &str) -> DiffResult<Option<Number>> {
        match self.map.get(keyword) {
            None => Ok(None),
            Some(Value::Number(n)) => Ok(Some(n.clone())),
            // draft-04 boolean exclusive bounds modify minimum/maximum rather than declaring one
            Some(Value::Bool(_)) if keyword.starts_with("exclusive") => Ok(None),
            Some(other) => Err(self.malformed(keyword, "a number", other)),
        }
    }

    fn boolean(&self, keyword: &str) -> DiffResult<Option<bool>> {
        match self.map.get(keyword) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(self.malformed(keyword, "a boolean", other)),
        }
    }

    fn string_list(&self, keyword: &str) -> DiffResult<Vec<String>> {
        match self.map.get(keyword) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| self.malformed(keyword, "an array of strings", item))
                })
                .collect(),
            Some(other) => Err(self.malformed(keyword, "an array of strings", other)),
        }
    }

    fn numeric(&self) -> DiffResult<NumericSchema> {
        Ok(NumericSchema {
            minimum: self.number("minimum")?,
            exclusive_minimum: self.number("exclusiveMinimum")?,
            maximum: self.number("maximum")?,
            exclusive_maximum: self.number("exclusiveMaximum")?,
        })
    }
}

/// A float with no fractional part, such as `32.0`, is still an integer in JSON Schema
fn integral(value: f64) -> Option<u64> {
    (value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64).then_some(value as u64)
}

/// JSON kind name for error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: Value) -> PropertyNode {
        PropertyNode::from_value(&value, "properties.key").unwrap()
    }

    #[test]
    fn test_string_node() {
        let property = node(json!({"type": "string", "description": "A name", "maxLength": 64}));
        assert_eq!(property.schema_type(), SchemaType::String);
        assert_eq!(property.description(), Some("A name"));
        assert_eq!(
            property.kind,
            SchemaKind::String(StringSchema { max_length: Some(64) })
        );
    }

    #[test]
    fn test_integral_floats_are_integers() {
        let property = node(json!({"type": "string", "maxLength": 32.0}));
        assert_eq!(
            property.kind,
            SchemaKind::String(StringSchema { max_length: Some(32) })
        );

        let property = node(json!({"type": "array", "minItems": 0.0, "maxItems": 5.0}));
        let SchemaKind::Array(array) = property.kind else {
            panic!("expected array kind");
        };
        assert_eq!(array.min_items, Some(0));
        assert_eq!(array.max_items, Some(5));

        for rejected in [json!(32.5), json!(-1), json!(-2.0)] {
            let result = PropertyNode::from_value(
                &json!({"type": "string", "maxLength": rejected}),
                "properties.key",
            );
            assert!(matches!(result, Err(DiffError::MalformedSchema { .. })));
        }
    }

    #[test]
    fn test_empty_description_is_not_a_description() {
        let property = node(json!({"type": "string", "description": ""}));
        assert_eq!(property.description(), None);
    }

    #[test]
    fn test_numeric_bounds() {
        let property = node(json!({"type": "integer", "minimum": 0, "exclusiveMaximum": 10.5}));
        let SchemaKind::Integer(numeric) = property.kind else {
            panic!("expected integer kind");
        };
        assert_eq!(numeric.minimum, Some(Number::from(0)));
        assert!(numeric.has_lower_bound());
        assert!(numeric.has_upper_bound());
        assert!(numeric.maximum.is_none());
    }

    #[test]
    fn test_nested_object_properties_keep_order() {
        let property = node(json!({
            "type": "object",
            "required": ["b"],
            "properties": {
                "z": {"type": "string"},
                "a": {"type": "number"},
                "b": {"type": "boolean"}
            }
        }));

        let nested = property.nested_properties().unwrap();
        let keys: Vec<&str> = nested.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["z", "a", "b"]);
        assert_eq!(nested.get("a").unwrap().schema_type(), SchemaType::Number);

        let SchemaKind::Object(object) = &property.kind else {
            panic!("expected object kind");
        };
        assert_eq!(object.required, vec!["b".to_string()]);
    }

    #[test]
    fn test_properties_ignored_on_non_object_types() {
        let property = node(json!({"type": "string", "properties": "not a mapping"}));
        assert!(property.nested_properties().is_none());
    }

    #[test]
    fn test_type_lists_and_boolean_schemas_are_undefined() {
        assert_eq!(node(json!({"type": ["string", "null"]})).schema_type(), SchemaType::Undefined);
        assert_eq!(node(json!({})).schema_type(), SchemaType::Undefined);
        assert_eq!(node(json!(true)).schema_type(), SchemaType::Undefined);
    }

    #[test]
    fn test_malformed_keywords_fail_fast() {
        let error = PropertyNode::from_value(&json!({"type": "string", "maxLength": "32"}), "properties.key")
            .unwrap_err();
        assert_eq!(
            error,
            DiffError::malformed("properties.key", "'maxLength' must be a non-negative integer, found a string")
        );

        let error = PropertyNode::from_value(&json!("string"), "properties.key").unwrap_err();
        assert!(matches!(error, DiffError::MalformedSchema { .. }));

        let error = PropertyNode::from_value(
            &json!({"type": "object", "properties": ["a"]}),
            "properties.key",
        )
        .unwrap_err();
        assert_eq!(
            error,
            DiffError::malformed("properties.key.properties", "'properties' must be an object, found an array")
        );
    }

    #[test]
    fn test_draft4_boolean_exclusive_bounds_are_ignored() {
        let property = node(json!({"type": "number", "minimum": 1, "exclusiveMinimum": true}));
        let SchemaKind::Number(numeric) = property.kind else {
            panic!("expected number kind");
        };
        assert_eq!(numeric.minimum, Some(Number::from(1)));
        assert!(numeric.exclusive_minimum.is_none());
    }
}
