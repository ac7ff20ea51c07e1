//! Schema parsing from TOML files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    Error, Result, SchemaBuilder, SchemaDefinition, SlotDefinition, error::SourceContext,
    validate::ParseContext,
};

/// Default schema filename used for error reporting.
pub const DEFAULT_FILENAME: &str = "schema.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchemaFile {
    schema: RawSchemaMeta,
    #[serde(default)]
    classes: IndexMap<String, RawClass>,
    #[serde(default)]
    slots: IndexMap<String, RawSlot>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSchemaMeta {
    name: String,
    id: Option<String>,
    description: Option<String>,
    default_prefix: Option<String>,
    default_range: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
    #[serde(default)]
    slots: Vec<String>,
    #[serde(default)]
    tree_root: bool,
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSlot {
    alias: Option<String>,
    range: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    multivalued: bool,
    description: Option<String>,
}

impl RawSchemaFile {
    /// Lower the raw tables into a schema, then populate defaults.
    fn lower(self) -> SchemaDefinition {
        let meta = self.schema;
        let mut builder = SchemaBuilder::new(meta.name);
        if let Some(id) = meta.id {
            builder = builder.id(id);
        }
        if let Some(description) = meta.description {
            builder = builder.description(description);
        }

        for (name, raw) in self.slots {
            builder = builder.add_slot(SlotDefinition {
                name,
                alias: raw.alias,
                range: raw.range,
                required: raw.required,
                multivalued: raw.multivalued,
                description: raw.description,
            });
        }

        for (name, raw) in self.classes {
            let description = raw.description;
            builder = builder.add_class(name.clone(), raw.slots, raw.tree_root);
            if let Some(description) = description {
                builder = builder.describe_class(&name, description);
            }
        }

        let mut schema = builder.build();
        schema.default_prefix = meta.default_prefix;
        schema.default_range = meta.default_range;

        SchemaBuilder::from(schema).add_defaults().build()
    }
}

impl FromStr for SchemaDefinition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, DEFAULT_FILENAME)
    }
}

impl SchemaDefinition {
    /// Parse a schema file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        SchemaFile::open(path).map(SchemaFile::into_schema)
    }

    /// Parse a schema from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_schema(content, filename)
    }
}

/// Parse a schema from content with the given filename for error reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<SchemaDefinition> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawSchemaFile = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    let schema = raw.lower();

    ParseContext::new(content, filename).validate_schema(&schema)?;
    Ok(schema)
}

/// A schema file with both raw content and parsed schema.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    path: PathBuf,
    content: String,
    schema: SchemaDefinition,
}

impl SchemaFile {
    /// Open and parse a schema file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let schema = parse_schema(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            schema,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed schema.
    pub fn schema(&self) -> &SchemaDefinition {
        &self.schema
    }

    /// Take the parsed schema.
    pub fn into_schema(self) -> SchemaDefinition {
        self.schema
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ISSUE_SCHEMA: &str = r#"
        [schema]
        name = "issue_349"
        description = "Slots with unsafe names"

        [classes.c]
        slots = ["a", "1S", "a/b", "5'end"]
        tree_root = true
        description = "Container"

        [slots."1S"]
        range = "integer"
        required = true
    "#;

    #[test]
    fn test_parse_schema() {
        let schema: SchemaDefinition = ISSUE_SCHEMA.parse().unwrap();

        assert_eq!(schema.name, "issue_349");
        assert_eq!(schema.description.as_deref(), Some("Slots with unsafe names"));
        assert_eq!(schema.id.as_deref(), Some("https://example.org/issue_349"));
        assert_eq!(schema.default_range.as_deref(), Some("string"));

        let class = schema.class("c").unwrap();
        assert!(class.tree_root);
        assert_eq!(class.description.as_deref(), Some("Container"));
        assert_eq!(class.slots, ["a", "1S", "a/b", "5'end"]);

        let one_s = schema.slot("1S").unwrap();
        assert_eq!(one_s.range.as_deref(), Some("integer"));
        assert!(one_s.required);
        assert!(one_s.alias.is_none());

        // declared only through the class
        assert!(schema.slot("5'end").unwrap().range.is_none());
    }

    #[test]
    fn test_parse_explicit_defaults() {
        let schema: SchemaDefinition = r#"
            [schema]
            name = "s"
            id = "https://w3id.org/s"
            default_prefix = "ex"
            default_range = "integer"
        "#
        .parse()
        .unwrap();

        assert_eq!(schema.id.as_deref(), Some("https://w3id.org/s"));
        assert_eq!(schema.default_prefix.as_deref(), Some("ex"));
        assert_eq!(schema.default_range.as_deref(), Some("integer"));
        assert!(schema.prefixes.contains_key("ex"));
    }

    #[test]
    fn test_parse_error() {
        let result: Result<SchemaDefinition> = "[schema\nname = 1".parse();
        assert!(matches!(result.map_err(|e| *e), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_unknown_field() {
        let result: Result<SchemaDefinition> = r#"
            [schema]
            name = "s"

            [classes.c]
            tree_rot = true
        "#
        .parse();
        assert!(matches!(result.map_err(|e| *e), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_parse_unknown_range() {
        let result: Result<SchemaDefinition> = r#"
            [schema]
            name = "s"

            [classes.c]
            slots = ["born"]

            [slots.born]
            range = "date"
        "#
        .parse();
        assert!(matches!(
            result.map_err(|e| *e),
            Err(Error::UnknownRange { .. })
        ));
    }

    #[test]
    fn test_schema_file_open() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ISSUE_SCHEMA.as_bytes()).unwrap();

        let schema_file = SchemaFile::open(file.path()).unwrap();
        assert_eq!(schema_file.path(), file.path());
        assert_eq!(schema_file.content(), ISSUE_SCHEMA);
        assert_eq!(schema_file.schema().classes.len(), 1);
    }

    #[test]
    fn test_schema_file_missing() {
        let err = SchemaDefinition::from_file("/nonexistent/schema.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
