//! Change classification for properties present in both schema versions
//!
//! Every common property is checked by the documentation rule and then by the
//! rule set of its destination type. Rule sets follow one principle: a change
//! that shrinks the set of previously valid values is [`Severity::Major`],
//! anything that widens it or only touches documentation is
//! [`Severity::Patch`].
//!
//! | Type              | Keyword                       | Major when        |
//! |-------------------|-------------------------------|-------------------|
//! | any               | `type`                        | type changed      |
//! | integer -> number | `type`                        | never             |
//! | string            | `maxLength`                   | lowered           |
//! | integer / number  | `minimum`, `exclusiveMinimum` | raised            |
//! | integer / number  | `maximum`, `exclusiveMaximum` | lowered           |
//! | boolean           | `default`                     | never             |
//! | object            | `additionalProperties`        | becomes `false`   |
//! | object            | `required`                    | name added        |
//! | array             | `maxItems`                    | lowered           |
//! | array             | `minItems`                    | raised            |
//! | array             | `uniqueItems`                 | becomes `true`    |
//!
//! `integer` and `number` form one numeric family: a retype inside it keeps
//! comparing bounds, while any other retype reports only the type change.
//!
//! Copyright (c) 2025 Schemantic Team
//! Licensed under the Apache-2.0 license

use crate::diff::change::{ChangeRecord, Severity};
use crate::diff::paths::PropertyDescriptor;
use crate::error::{DiffError, DiffResult};
use crate::schema::{
    ArraySchema, BooleanSchema, NumericSchema, ObjectSchema, PropertyNode, SchemaDocument,
    SchemaKind, SchemaType, StringSchema,
};
use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Classify changes for every common property, in `common` order
pub fn classify(
    source: &SchemaDocument,
    destination: &SchemaDocument,
    common: &[PropertyDescriptor],
) -> DiffResult<Vec<ChangeRecord>> {
    let mut changes = Vec::new();

    for descriptor in common {
        let (before, after) = match (
            source.property_at(descriptor.keys()),
            destination.property_at(descriptor.keys()),
        ) {
            (Some(before), Some(after)) => (before, after),
            _ => {
                return Err(DiffError::malformed(
                    &descriptor.structural_path,
                    "property is not declared in both schemas",
                ))
            }
        };

        changes.extend(classify_property(before, after, descriptor));
    }

    Ok(changes)
}

/// Classify one property: documentation first, then the type rule set
pub fn classify_property(
    before: &PropertyNode,
    after: &PropertyNode,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    let records: Vec<ChangeRecord> = documentation_changes(before, after, descriptor)
        .into_iter()
        .chain(type_changes(before, after, descriptor))
        .collect();

    if !records.is_empty() {
        tracing::trace!(
            path = %descriptor.structural_path,
            count = records.len(),
            "Classified property changes"
        );
    }

    records
}

/// Description text edits
pub fn documentation_changes(
    before: &PropertyNode,
    after: &PropertyNode,
    descriptor: &PropertyDescriptor,
) -> Option<ChangeRecord> {
    match (before.description(), after.description()) {
        (Some(old), Some(new)) if old != new => Some(ChangeRecord::new(
            descriptor,
            Severity::Patch,
            format!("changed description from '{}' to '{}'", old, new),
        )),
        _ => None,
    }
}

/// Type change plus the keyword rules of the destination type
///
/// Keyword rules only run when both sides share a rule set, so a retype
/// across rule sets yields the type record alone.
pub fn type_changes(
    before: &PropertyNode,
    after: &PropertyNode,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    let retyped = retype_change(before.schema_type(), after.schema_type(), descriptor);

    let keyword_changes = match (&before.kind, &after.kind) {
        (SchemaKind::String(old), SchemaKind::String(new)) => string_changes(old, new, descriptor),
        (
            SchemaKind::Integer(old) | SchemaKind::Number(old),
            SchemaKind::Integer(new) | SchemaKind::Number(new),
        ) => numeric_changes(old, new, descriptor),
        (SchemaKind::Boolean(old), SchemaKind::Boolean(new)) => boolean_changes(old, new, descriptor),
        (SchemaKind::Object(old), SchemaKind::Object(new)) => object_changes(old, new, descriptor),
        (SchemaKind::Array(old), SchemaKind::Array(new)) => array_changes(old, new, descriptor),
        _ => Vec::new(),
    };

    retyped.into_iter().chain(keyword_changes).collect()
}

fn retype_change(
    from: SchemaType,
    to: SchemaType,
    descriptor: &PropertyDescriptor,
) -> Option<ChangeRecord> {
    if from == to || to == SchemaType::Undefined {
        return None;
    }

    // every integer is also a number
    let severity = match (from, to) {
        (SchemaType::Integer, SchemaType::Number) => Severity::Patch,
        _ => Severity::Major,
    };

    Some(ChangeRecord::new(
        descriptor,
        severity,
        format!("changed type from '{}' to '{}'", from, to),
    ))
}

pub fn string_changes(
    old: &StringSchema,
    new: &StringSchema,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    limit_change(
        descriptor,
        "length",
        Limit::unsigned(old.max_length),
        Limit::unsigned(new.max_length),
        Narrowing::Lowered,
    )
    .into_iter()
    .collect()
}

pub fn numeric_changes(
    old: &NumericSchema,
    new: &NumericSchema,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    [
        ("minimum", &old.minimum, &new.minimum, Narrowing::Raised),
        ("exclusiveMinimum", &old.exclusive_minimum, &new.exclusive_minimum, Narrowing::Raised),
        ("maximum", &old.maximum, &new.maximum, Narrowing::Lowered),
        ("exclusiveMaximum", &old.exclusive_maximum, &new.exclusive_maximum, Narrowing::Lowered),
    ]
    .into_iter()
    .filter_map(|(keyword, old, new, narrowing)| {
        limit_change(
            descriptor,
            keyword,
            Limit::number(old.as_ref()),
            Limit::number(new.as_ref()),
            narrowing,
        )
    })
    .collect()
}

pub fn boolean_changes(
    old: &BooleanSchema,
    new: &BooleanSchema,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    match (&old.default, &new.default) {
        (Some(old), Some(new)) if old != new => vec![ChangeRecord::new(
            descriptor,
            Severity::Patch,
            format!("changed default from '{}' to '{}'", old, new),
        )],
        _ => Vec::new(),
    }
}

pub fn object_changes(
    old: &ObjectSchema,
    new: &ObjectSchema,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    let additional = match (&old.additional_properties, &new.additional_properties) {
        (Some(Value::Bool(old)), Some(Value::Bool(new))) if old != new => Some(ChangeRecord::new(
            descriptor,
            if *new { Severity::Patch } else { Severity::Major },
            format!("changed additionalProperties from '{}' to '{}'", old, new),
        )),
        _ => None,
    };

    let newly_required = new
        .required
        .iter()
        .filter(|name| !old.required.contains(*name))
        .map(|name| {
            ChangeRecord::new(descriptor, Severity::Major, format!("made '{}' required", name))
        });

    let no_longer_required = old
        .required
        .iter()
        .filter(|name| !new.required.contains(*name))
        .map(|name| {
            ChangeRecord::new(descriptor, Severity::Patch, format!("made '{}' optional", name))
        });

    additional
        .into_iter()
        .chain(newly_required)
        .chain(no_longer_required)
        .collect()
}

pub fn array_changes(
    old: &ArraySchema,
    new: &ArraySchema,
    descriptor: &PropertyDescriptor,
) -> Vec<ChangeRecord> {
    let unique = match (old.unique_items, new.unique_items) {
        (Some(old), Some(new)) if old != new => Some(ChangeRecord::new(
            descriptor,
            if new { Severity::Major } else { Severity::Patch },
            format!("changed uniqueItems from '{}' to '{}'", old, new),
        )),
        _ => None,
    };

    [
        limit_change(
            descriptor,
            "maxItems",
            Limit::unsigned(old.max_items),
            Limit::unsigned(new.max_items),
            Narrowing::Lowered,
        ),
        limit_change(
            descriptor,
            "minItems",
            Limit::unsigned(old.min_items),
            Limit::unsigned(new.min_items),
            Narrowing::Raised,
        ),
        unique,
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Direction of movement that makes a limit more restrictive
#[derive(Debug, Clone, Copy)]
enum Narrowing {
    Lowered,
    Raised,
}

/// A numeric keyword value with its original text
struct Limit {
    value: f64,
    text: String,
}

impl Limit {
    fn unsigned(value: Option<u64>) -> Option<Self> {
        value.map(|v| Self {
            value: v as f64,
            text: v.to_string(),
        })
    }

    fn number(value: Option<&Number>) -> Option<Self> {
        let number = value?;
        Some(Self {
            value: number.as_f64()?,
            text: number.to_string(),
        })
    }
}

/// Compare a limit declared on both sides
fn limit_change(
    descriptor: &PropertyDescriptor,
    label: &str,
    old: Option<Limit>,
    new: Option<Limit>,
    narrowing: Narrowing,
) -> Option<ChangeRecord> {
    let (old, new) = (old?, new?);

    let severity = match (new.value.partial_cmp(&old.value)?, narrowing) {
        (Ordering::Equal, _) => return None,
        (Ordering::Less, Narrowing::Lowered) | (Ordering::Greater, Narrowing::Raised) => Severity::Major,
        _ => Severity::Patch,
    };

    Some(ChangeRecord::new(
        descriptor,
        severity,
        format!("changed {} from '{}' to '{}'", label, old.text, new.text),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::paths::extract_paths;
    use serde_json::json;

    /// Classify the single property `key` of two one-property schemas
    fn changes(before: serde_json::Value, after: serde_json::Value) -> Vec<ChangeRecord> {
        let source = SchemaDocument::from_value(&json!({"properties": {"key": before}})).unwrap();
        let destination = SchemaDocument::from_value(&json!({"properties": {"key": after}})).unwrap();
        let common = extract_paths(&destination);
        classify(&source, &destination, &common).unwrap()
    }

    fn summary(records: &[ChangeRecord]) -> Vec<(Severity, &str)> {
        records
            .iter()
            .map(|r| (r.severity, r.message.as_str()))
            .collect()
    }

    #[test]
    fn test_documentation_changes() {
        let records = changes(
            json!({"type": "string", "description": "source description"}),
            json!({"type": "string", "description": "destination description"}),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].message,
            "changed description from 'source description' to 'destination description'"
        );
        assert_eq!(records[0].severity, Severity::Patch);
        assert_eq!(records[0].structural_path, "properties.key");
    }

    #[test]
    fn test_description_needs_both_sides() {
        assert!(changes(json!({"type": "string"}), json!({"type": "string", "description": "B"})).is_empty());
        assert!(changes(json!({"type": "string", "description": "A"}), json!({"type": "string"})).is_empty());
        assert!(changes(
            json!({"type": "string", "description": ""}),
            json!({"type": "string", "description": "B"})
        )
        .is_empty());
    }

    #[test]
    fn test_major_string_changes() {
        let records = changes(
            json!({"type": "string", "maxLength": 64}),
            json!({"type": "string", "maxLength": 32}),
        );
        assert_eq!(summary(&records), vec![(Severity::Major, "changed length from '64' to '32'")]);
    }

    #[test]
    fn test_patch_string_changes() {
        let records = changes(
            json!({"type": "string", "maxLength": 32}),
            json!({"type": "string", "maxLength": 64}),
        );
        assert_eq!(summary(&records), vec![(Severity::Patch, "changed length from '32' to '64'")]);
    }

    #[test]
    fn test_equal_or_one_sided_length_is_not_a_change() {
        assert!(changes(
            json!({"type": "string", "maxLength": 32}),
            json!({"type": "string", "maxLength": 32})
        )
        .is_empty());
        assert!(changes(json!({"type": "string"}), json!({"type": "string", "maxLength": 32})).is_empty());
    }

    #[test]
    fn test_documentation_and_type_rule_both_fire() {
        let records = changes(
            json!({"type": "string", "description": "A", "maxLength": 64}),
            json!({"type": "string", "description": "B", "maxLength": 16}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Patch, "changed description from 'A' to 'B'"),
                (Severity::Major, "changed length from '64' to '16'"),
            ]
        );
    }

    #[test]
    fn test_numeric_bounds() {
        let records = changes(
            json!({"type": "integer", "minimum": 0, "maximum": 100}),
            json!({"type": "integer", "minimum": 5, "maximum": 200}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Major, "changed minimum from '0' to '5'"),
                (Severity::Patch, "changed maximum from '100' to '200'"),
            ]
        );

        let records = changes(
            json!({"type": "number", "exclusiveMinimum": 1.5, "exclusiveMaximum": 10}),
            json!({"type": "number", "exclusiveMinimum": 0.5, "exclusiveMaximum": 9.5}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Patch, "changed exclusiveMinimum from '1.5' to '0.5'"),
                (Severity::Major, "changed exclusiveMaximum from '10' to '9.5'"),
            ]
        );
    }

    #[test]
    fn test_numerically_equal_bounds_are_not_a_change() {
        assert!(changes(
            json!({"type": "number", "minimum": 5}),
            json!({"type": "number", "minimum": 5.0})
        )
        .is_empty());
    }

    #[test]
    fn test_type_changes() {
        let records = changes(json!({"type": "string"}), json!({"type": "integer"}));
        assert_eq!(summary(&records), vec![(Severity::Major, "changed type from 'string' to 'integer'")]);

        let records = changes(json!({"type": "integer"}), json!({"type": "number"}));
        assert_eq!(summary(&records), vec![(Severity::Patch, "changed type from 'integer' to 'number'")]);

        let records = changes(json!({"type": "number"}), json!({"type": "null"}));
        assert_eq!(summary(&records), vec![(Severity::Major, "changed type from 'number' to 'null'")]);

        // dropping the type keyword only widens
        assert!(changes(json!({"type": "string"}), json!({})).is_empty());
    }

    #[test]
    fn test_numeric_bounds_compared_across_integer_and_number() {
        let records = changes(
            json!({"type": "integer", "maximum": 10}),
            json!({"type": "number", "maximum": 5}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Patch, "changed type from 'integer' to 'number'"),
                (Severity::Major, "changed maximum from '10' to '5'"),
            ]
        );
    }

    #[test]
    fn test_narrowing_number_to_integer_keeps_bound_rules() {
        let records = changes(
            json!({"type": "number", "minimum": 0}),
            json!({"type": "integer", "minimum": 1}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Major, "changed type from 'number' to 'integer'"),
                (Severity::Major, "changed minimum from '0' to '1'"),
            ]
        );
    }

    #[test]
    fn test_retype_across_rule_sets_skips_keyword_rules() {
        let records = changes(
            json!({"type": "array", "maxItems": 10, "uniqueItems": false}),
            json!({"type": "string", "maxLength": 5}),
        );
        assert_eq!(summary(&records), vec![(Severity::Major, "changed type from 'array' to 'string'")]);
    }

    #[test]
    fn test_boolean_default() {
        let records = changes(
            json!({"type": "boolean", "default": false}),
            json!({"type": "boolean", "default": true}),
        );
        assert_eq!(summary(&records), vec![(Severity::Patch, "changed default from 'false' to 'true'")]);
    }

    #[test]
    fn test_object_changes() {
        let records = changes(
            json!({"type": "object", "additionalProperties": true, "required": ["a", "b"]}),
            json!({"type": "object", "additionalProperties": false, "required": ["b", "c"]}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Major, "changed additionalProperties from 'true' to 'false'"),
                (Severity::Major, "made 'c' required"),
                (Severity::Patch, "made 'a' optional"),
            ]
        );

        let records = changes(
            json!({"type": "object", "additionalProperties": false}),
            json!({"type": "object", "additionalProperties": true}),
        );
        assert_eq!(
            summary(&records),
            vec![(Severity::Patch, "changed additionalProperties from 'false' to 'true'")]
        );
    }

    #[test]
    fn test_array_changes() {
        let records = changes(
            json!({"type": "array", "maxItems": 10, "minItems": 1, "uniqueItems": false}),
            json!({"type": "array", "maxItems": 5, "minItems": 0, "uniqueItems": true}),
        );
        assert_eq!(
            summary(&records),
            vec![
                (Severity::Major, "changed maxItems from '10' to '5'"),
                (Severity::Patch, "changed minItems from '1' to '0'"),
                (Severity::Major, "changed uniqueItems from 'false' to 'true'"),
            ]
        );
    }

    #[test]
    fn test_null_and_undefined_have_no_keyword_rules() {
        assert!(changes(json!({"type": "null"}), json!({"type": "null"})).is_empty());
        assert!(changes(json!({"maxLength": 5}), json!({"maxLength": 1})).is_empty());
    }

    #[test]
    fn test_unresolvable_common_property_is_an_error() {
        let source = SchemaDocument::from_value(&json!({"properties": {}})).unwrap();
        let destination =
            SchemaDocument::from_value(&json!({"properties": {"key": {"type": "string"}}})).unwrap();
        let common = extract_paths(&destination);

        let error = classify(&source, &destination, &common).unwrap_err();
        assert_eq!(
            error,
            DiffError::malformed("properties.key", "property is not declared in both schemas")
        );
    }
}
