//! Validate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Outcome of checking one instance with both generators.
#[derive(Debug)]
pub struct ValidateReport {
    /// Path to the instance file.
    pub instance_path: PathBuf,
    /// Schema name of the target class.
    pub class: String,
    /// JSON Schema validation failures.
    pub validation_errors: Vec<String>,
    /// Type name of the constructed instance, or the construction error.
    pub construction: Result<String, String>,
}

impl ValidateReport {
    /// Whether the instance passed both validation and construction.
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty() && self.construction.is_ok()
    }
}

impl Report for ValidateReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Instance", &self.instance_path.display().to_string());
        out.key_value("Class", &self.class);
        out.newline();

        out.section("JSON Schema");
        if self.validation_errors.is_empty() {
            out.list_item("✓ valid");
        } else {
            for error in &self.validation_errors {
                out.list_item(error);
            }
        }

        out.section("Construction");
        match &self.construction {
            Ok(type_name) => out.list_item(&format!("✓ constructed {}", type_name)),
            Err(error) => out.list_item(error),
        }

        if !self.is_valid() {
            out.newline();
            out.error(&format!("{} is not a valid {}", self.instance_path.display(), self.class));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_valid() {
        let report = ValidateReport {
            instance_path: PathBuf::from("data.json"),
            class: "c".into(),
            validation_errors: Vec::new(),
            construction: Ok("C".into()),
        };
        assert_eq!(
            RecordingOutput::render(&report),
            [
                "Instance: data.json",
                "Class: c",
                "",
                "JSON Schema:",
                "  - ✓ valid",
                "Construction:",
                "  - ✓ constructed C",
            ]
        );
    }

    #[test]
    fn test_render_invalid() {
        let report = ValidateReport {
            instance_path: PathBuf::from("data.json"),
            class: "c".into(),
            validation_errors: vec!["/: additional property '1S' is not allowed".into()],
            construction: Err("class 'C' has no field '1S' (use 'x_1S')".into()),
        };
        let lines = RecordingOutput::render(&report);
        assert_eq!(lines[4], "  - /: additional property '1S' is not allowed");
        assert_eq!(lines[6], "  - class 'C' has no field '1S' (use 'x_1S')");
        assert_eq!(lines.last().unwrap(), "error: data.json is not a valid c");
    }
}
