//! Warning generation tests

use pretty_assertions::assert_eq;
use schemantic_core::{generate_warnings, Changelog, SchemaDocument, WarningRecord};
use serde_json::{json, Value};

fn document(value: Value) -> SchemaDocument {
    SchemaDocument::from_value(&value).unwrap()
}

#[test]
fn test_schema_warnings() {
    let warnings = generate_warnings(&document(json!({})));
    let messages: Vec<&str> = warnings.iter().map(|w| w.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![
            "Schema is missing recommended key $schema",
            "Schema is missing recommended key $id",
            "Schema is missing recommended key description",
        ]
    );
}

#[test]
fn test_property_warnings() {
    let warnings = generate_warnings(&document(json!({
        "$schema": "s", "$id": "i", "description": "d",
        "properties": {
            "key": {"type": "string"},
            "ratio": {"type": "number", "description": "r"},
            "meta": {"type": "object", "description": "m", "properties": {}}
        }
    })));

    assert_eq!(
        warnings,
        vec![
            WarningRecord::new("key", "no description set"),
            WarningRecord::new("key", "no length set: default recommendation 16383"),
            WarningRecord::new(
                "ratio",
                "no minimum value set. Consider setting an acceptable range"
            ),
            WarningRecord::new(
                "ratio",
                "no maximum value set. Consider setting an acceptable range"
            ),
            WarningRecord::new(
                "meta",
                "object does not have additionalProperties set. If you are unsure set this to false"
            ),
        ]
    );
}

#[test]
fn test_changelog_warns_about_destination() {
    let changelog = Changelog::generate(
        &serde_json::from_str(include_str!("fixtures/v1.0.0/sample.schema.json")).unwrap(),
        &serde_json::from_str(include_str!("fixtures/v2.0.0/sample.schema.json")).unwrap(),
    )
    .unwrap();

    let rendered: Vec<String> = changelog.warnings.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "nested_object.number no minimum value set. Consider setting an acceptable range",
            "nested_object.number no maximum value set. Consider setting an acceptable range",
            "recurring no description set",
            "recurring set a default state for booleans to avoid trooleans",
            "tags explicitly define if unique values are expected",
            "organizer object does not have additionalProperties set. If you are unsure set this to false",
        ]
    );
}
