//! Emit operation - print generated output or write it to a file.

use std::path::Path;

use eyre::Result;
use safeslot_core::File;

use crate::reports::EmitReport;

/// Write `content` to `output`, or hand it back for printing when no output
/// path is given.
pub fn emit(content: String, output: Option<&Path>) -> Result<EmitReport> {
    match output {
        Some(path) => {
            let file = File::new(path, content);
            let result = file.write()?;
            Ok(EmitReport::Written {
                path: path.to_path_buf(),
                result,
            })
        }
        None => Ok(EmitReport::Printed(content)),
    }
}
