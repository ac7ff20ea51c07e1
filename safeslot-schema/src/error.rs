use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the schema text and filename so error constructors don't need
/// both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid class name error.
    pub fn invalid_class_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidClassName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an invalid slot name error.
    pub fn invalid_slot_name_error(
        &self,
        name: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidSlotName {
            src: self.named_source(),
            span,
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Create an unknown range error.
    pub fn unknown_range_error(
        &self,
        slot: impl Into<String>,
        range: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownRange {
            src: self.named_source(),
            span,
            slot: slot.into(),
            range: range.into(),
        })
    }

    /// Create a multiple tree roots error.
    pub fn multiple_tree_roots_error(
        &self,
        first: impl Into<String>,
        second: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MultipleTreeRoots {
            src: self.named_source(),
            span,
            first: first.into(),
            second: second.into(),
        })
    }

    /// Create a validation error without a span.
    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(safeslot::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema")]
    #[diagnostic(code(safeslot::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid class name '{name}'")]
    #[diagnostic(
        code(safeslot::invalid_class_name),
        help(
            "{reason}. Class names are not aliased: use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidClassName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid class name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("invalid slot name '{name}'")]
    #[diagnostic(code(safeslot::invalid_slot_name), help("{reason}"))]
    InvalidSlotName {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid slot name")]
        span: Option<SourceSpan>,
        name: String,
        reason: String,
    },

    #[error("slot '{slot}' has unknown range '{range}'")]
    #[diagnostic(
        code(safeslot::unknown_range),
        help("valid ranges are: string, integer, float, boolean, or a class name")
    )]
    UnknownRange {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown range")]
        span: Option<SourceSpan>,
        slot: String,
        range: String,
    },

    #[error("classes '{first}' and '{second}' are both marked as tree root")]
    #[diagnostic(
        code(safeslot::multiple_tree_roots),
        help("a schema has at most one tree root; remove `tree_root = true` from one of them")
    )]
    MultipleTreeRoots {
        #[source_code]
        src: NamedSource<String>,
        #[label("second tree root")]
        span: Option<SourceSpan>,
        first: String,
        second: String,
    },

    #[error("{message}")]
    #[diagnostic(code(safeslot::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },
}
