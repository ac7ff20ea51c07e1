use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use serde_json::Value;

use super::SchemaArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ValidateCommand {
    /// JSON instance to validate
    pub instance: PathBuf,

    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Class to validate against (defaults to the tree root)
    #[arg(short, long)]
    pub class: Option<String>,
}

impl ValidateCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;

        let content = std::fs::read_to_string(&self.instance)
            .wrap_err_with(|| format!("failed to read '{}'", self.instance.display()))?;
        let instance: Value = serde_json::from_str(&content)
            .wrap_err_with(|| format!("'{}' is not valid JSON", self.instance.display()))?;

        let report = ops::validate(&schema, &instance, &self.instance, self.class.as_deref())?;
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
