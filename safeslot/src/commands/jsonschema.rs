use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use safeslot_jsonschema::JsonSchemaGenerator;

use super::SchemaArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct JsonSchemaCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl JsonSchemaCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let mut document = JsonSchemaGenerator::new(&schema).serialize();
        document.push('\n');

        ops::emit(document, self.output.as_deref())?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
