use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use safeslot_classgen::build_module;

use super::SchemaArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,

    /// Write the Rust source to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenCommand {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let source = build_module(&schema).to_source();

        ops::emit(source, self.output.as_deref())?.render(&mut TerminalOutput::new());
        Ok(())
    }
}
