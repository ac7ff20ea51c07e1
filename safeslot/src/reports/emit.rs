//! Emit report data structures for the generating commands.

use std::path::PathBuf;

use safeslot_core::WriteResult;

use super::output::{Output, Report};

/// Generated output, either printed or written to a file.
#[derive(Debug)]
pub enum EmitReport {
    /// Content to print to stdout.
    Printed(String),
    /// Content was written to a file.
    Written { path: PathBuf, result: WriteResult },
}

impl Report for EmitReport {
    fn render(&self, out: &mut dyn Output) {
        match self {
            Self::Printed(content) => out.preformatted(content.trim_end()),
            Self::Written {
                path,
                result: WriteResult::Written,
            } => out.preformatted(&format!("✓ wrote {}", path.display())),
            Self::Written {
                path,
                result: WriteResult::Unchanged,
            } => out.preformatted(&format!("✓ {} is up to date", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let printed = EmitReport::Printed("{}\n".into());
        assert_eq!(RecordingOutput::render(&printed), ["{}"]);

        let written = EmitReport::Written {
            path: PathBuf::from("out.rs"),
            result: WriteResult::Unchanged,
        };
        assert_eq!(RecordingOutput::render(&written), ["✓ out.rs is up to date"]);
    }
}
