//! Load-time validation of schema files.

use std::collections::HashMap;

use miette::SourceSpan;
use safeslot_core::{camelcase, is_rust_keyword};

use crate::{Range, Result, SchemaDefinition, error::SourceContext};

/// Validation context that carries source information for error spans.
#[derive(Debug, Clone)]
pub struct ParseContext {
    source: SourceContext,
}

impl ParseContext {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: SourceContext::new(src, filename),
        }
    }

    /// Find the span of a table key in the source.
    pub fn find_span(&self, section: &str, name: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), section, name)
    }

    /// Check a fully lowered schema.
    ///
    /// Class names must be identifiers with distinct type names, every slot
    /// range must resolve and at most one class may be a tree root. Slot
    /// names only have to be non-empty: unsafe slot names are what aliases
    /// are for.
    pub fn validate_schema(&self, schema: &SchemaDefinition) -> Result<()> {
        if schema.name.trim().is_empty() {
            return Err(self
                .source
                .validation_error("schema name cannot be empty"));
        }

        let mut root: Option<&str> = None;
        let mut type_names: HashMap<String, &str> = HashMap::new();
        for class in schema.classes.values() {
            if let Some(reason) = validate_class_name(&class.name) {
                return Err(self.source.invalid_class_name_error(
                    &class.name,
                    reason,
                    self.find_span("classes", &class.name),
                ));
            }

            let type_name = camelcase(&class.name);
            if let Some(other) = type_names.get(&type_name) {
                return Err(self.source.invalid_class_name_error(
                    &class.name,
                    format!(
                        "name converts to type '{}', the same as class '{}'",
                        type_name, other
                    ),
                    self.find_span("classes", &class.name),
                ));
            }
            type_names.insert(type_name, &class.name);

            if class.tree_root {
                if let Some(first) = root {
                    return Err(self.source.multiple_tree_roots_error(
                        first,
                        &class.name,
                        self.find_span("classes", &class.name),
                    ));
                }
                root = Some(&class.name);
            }
        }

        for slot in schema.slots.values() {
            if let Some(reason) = validate_slot_name(&slot.name, slot.alias.as_deref()) {
                return Err(self.source.invalid_slot_name_error(
                    &slot.name,
                    reason,
                    self.find_span("slots", &slot.name),
                ));
            }

            let range = schema.range_name(slot);
            if Range::resolve(range, schema).is_none() {
                return Err(self.source.unknown_range_error(
                    &slot.name,
                    range,
                    self.find_span("slots", &slot.name),
                ));
            }
        }

        Ok(())
    }
}

/// Validate a class name.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_class_name(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    let type_name = camelcase(name);
    if type_name.is_empty() {
        return Some("name must contain at least one letter or number");
    }
    if is_rust_keyword(&type_name) {
        return Some("name converts to a Rust reserved keyword");
    }

    None
}

/// Validate a slot name and its pre-set alias.
///
/// Any non-empty name can be aliased to a safe identifier; an empty one
/// has nothing to sanitize.
pub(crate) fn validate_slot_name(name: &str, alias: Option<&str>) -> Option<&'static str> {
    if name.is_empty() {
        return Some("slot names cannot be empty");
    }
    if alias == Some("") {
        return Some("slot aliases cannot be empty");
    }
    None
}

/// Find the span of a key under `[section.<key>]` in TOML source.
///
/// Handles bare keys (`[classes.c]`) and quoted keys (`[slots."1S"]`,
/// `[slots.'a/b']`).
pub(crate) fn find_key_span(src: &str, section: &str, name: &str) -> Option<SourceSpan> {
    let candidates = [
        (format!("[{}.{}]", section, name), 0usize),
        (format!("[{}.{}.", section, name), 0usize),
        (format!("[{}.\"{}\"]", section, name), 1usize),
        (format!("[{}.'{}']", section, name), 1usize),
    ];

    for (pattern, quote) in &candidates {
        if let Some(pos) = src.find(pattern.as_str()) {
            // skip '[', the section, the dot and any opening quote
            let start = pos + 1 + section.len() + 1 + quote;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Inline slot lists: slots = ["a", "1S"]
    let quoted = format!("\"{}\"", name);
    if let Some(pos) = src.find(&quoted) {
        return Some(SourceSpan::from((pos + 1, name.len())));
    }

    // No fallback - better to have no span than point to wrong location
    None
}
