//! Snapshot tests for Rust source generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use safeslot_classgen::build_module;
use safeslot_schema::{SchemaDefinition, bind_safe_aliases};

fn generate_source(schema_toml: &str) -> String {
    let mut schema = SchemaDefinition::from_str(schema_toml).expect("Failed to parse schema");
    bind_safe_aliases(&mut schema);
    build_module(&schema).to_source()
}

#[test]
fn test_issue_schema_source() {
    let source = generate_source(
        r#"
        [schema]
        name = "issue_349"
        description = "Slots with unsafe names"

        [classes.c]
        slots = ["a", "1S", "a/b", "5'end", "type"]
        tree_root = true
        description = "Container"

        [classes.leaf_node]
        slots = ["n"]

        [slots."1S"]
        range = "integer"
        required = true
        description = "First slot"

        [slots."5'end"]
        range = "leaf_node"
        multivalued = true

        [slots.n]
        range = "float"
        "#,
    );
    insta::assert_snapshot!("issue_schema_source", source);
}

#[test]
fn test_plain_schema_source() {
    let source = generate_source(
        r#"
        [schema]
        name = "people"

        [classes.person]
        slots = ["name", "friend", "active"]

        [slots.name]
        required = true

        [slots.friend]
        range = "person"

        [slots.active]
        range = "boolean"
        "#,
    );
    insta::assert_snapshot!("plain_schema_source", source);
}
