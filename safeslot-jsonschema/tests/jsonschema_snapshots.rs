//! Snapshot tests for JSON Schema generation and validation reports.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use safeslot_jsonschema::{JsonSchemaGenerator, Validator};
use safeslot_schema::{SchemaDefinition, bind_safe_aliases};
use serde_json::json;

const ISSUE_SCHEMA: &str = r#"
    [schema]
    name = "issue_349"

    [classes.c]
    slots = ["a", "1S", "a/b", "5'end"]
    tree_root = true

    [slots."1S"]
    range = "integer"
    required = true
"#;

fn bound_schema(toml: &str) -> SchemaDefinition {
    let mut schema = SchemaDefinition::from_str(toml).expect("Failed to parse schema");
    bind_safe_aliases(&mut schema);
    schema
}

#[test]
fn test_issue_schema_document() {
    let schema = bound_schema(ISSUE_SCHEMA);
    let output = JsonSchemaGenerator::new(&schema).serialize();
    insta::assert_snapshot!("issue_schema_document", output);
}

#[test]
fn test_nested_class_document() {
    let schema = bound_schema(
        r#"
        [schema]
        name = "library"
        id = "https://w3id.org/library"

        [classes.shelf]
        slots = ["book list"]
        tree_root = true

        [classes.book]
        slots = ["2nd title"]

        [slots."book list"]
        range = "book"
        multivalued = true

        [slots."2nd title"]
        required = true
        "#,
    );
    let output = JsonSchemaGenerator::new(&schema).serialize();
    insta::assert_snapshot!("nested_class_document", output);
}

#[test]
fn test_validation_report() {
    let schema = bound_schema(ISSUE_SCHEMA);
    let validator = Validator::new(&schema);

    let instance = json!({ "1S": 5, "a/b": "x", "a": 3 });
    let errors = validator.validate(&instance).expect_err("instance should fail");
    let output = errors
        .errors()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("validation_report", output);
}
