/// Errors raised while looking up or constructing a class.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstructionError {
    #[error("no class '{class}' in module")]
    UnknownClass { class: String },

    #[error("class '{class}' has no field '{field}'{}", suggestion(.alias))]
    UnknownField {
        class: String,
        field: String,
        /// Effective name of the slot whose original name is `field`.
        alias: Option<String>,
    },

    #[error("class '{class}' is missing required field '{field}'")]
    MissingRequired { class: String, field: String },

    #[error("field '{field}' of class '{class}' expects {expected}, found {found}")]
    TypeMismatch {
        class: String,
        field: String,
        expected: String,
        found: &'static str,
    },
}

fn suggestion(alias: &Option<String>) -> String {
    match alias {
        Some(alias) => format!(" (use '{}')", alias),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_field_message() {
        let err = ConstructionError::UnknownField {
            class: "C".into(),
            field: "1S".into(),
            alias: Some("x_1S".into()),
        };
        assert_eq!(err.to_string(), "class 'C' has no field '1S' (use 'x_1S')");

        let err = ConstructionError::UnknownField {
            class: "C".into(),
            field: "zz".into(),
            alias: None,
        };
        assert_eq!(err.to_string(), "class 'C' has no field 'zz'");
    }
}
