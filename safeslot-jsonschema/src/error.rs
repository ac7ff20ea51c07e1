//! Instance validation errors.

use std::fmt;

/// A single way an instance fails its schema.
///
/// Paths are JSON pointers into the instance; the document root is `/`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("{path}: expected {expected}, found {found}")]
    Type {
        path: String,
        expected: String,
        found: &'static str,
    },

    #[error("{path}: missing required property '{property}'")]
    Required { path: String, property: String },

    #[error("{path}: additional property '{property}' is not allowed")]
    AdditionalProperty { path: String, property: String },

    #[error("{path}: unresolved reference '{reference}'")]
    UnresolvedRef { path: String, reference: String },

    #[error("{path}: reference '{reference}' leads back to itself")]
    CircularRef { path: String, reference: String },

    #[error("{path}: value matches none of the allowed schemas")]
    AnyOf { path: String },

    #[error("no class '{class}' in schema")]
    UnknownClass { class: String },
}

impl ValidationError {
    /// Instance location of the failure, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Type { path, .. }
            | Self::Required { path, .. }
            | Self::AdditionalProperty { path, .. }
            | Self::UnresolvedRef { path, .. }
            | Self::CircularRef { path, .. }
            | Self::AnyOf { path } => Some(path),
            Self::UnknownClass { .. } => None,
        }
    }
}

/// Every failure found in one instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instance failed validation with {} error(s)",
            self.0.len()
        )?;
        for error in &self.0 {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
