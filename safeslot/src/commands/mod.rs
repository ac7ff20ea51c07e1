mod check;
mod completions;
mod generate;
mod jsonschema;
mod validate;

use std::path::PathBuf;

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenCommand;
use jsonschema::JsonSchemaCommand;
use safeslot_core::DEFAULT_PREFIX;
use safeslot_schema::{DEFAULT_FILENAME, SchemaDefinition};
use validate::ValidateCommand;

use crate::ops;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for safeslot_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Schema location and alias options shared by every schema command.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Path to the schema file
    #[arg(short, long, default_value = DEFAULT_FILENAME)]
    pub schema: PathBuf,

    /// Prefix for aliases of slot names that start with a digit
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

impl SchemaArgs {
    /// Load the schema and bind safe aliases to its slots.
    pub fn load(&self) -> Result<SchemaDefinition> {
        let schema = SchemaDefinition::from_file(&self.schema).unwrap_or_exit();
        ops::bind(schema, &self.prefix)
    }
}

#[derive(Parser)]
#[command(name = "safeslot")]
#[command(version)]
#[command(about = "Bind safe slot aliases and generate matching JSON Schema and Rust classes")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Check(cmd) => cmd.run(),
            Commands::Jsonschema(cmd) => cmd.run(),
            Commands::Gen(cmd) => cmd.run(),
            Commands::Validate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the schema and show slot aliases
    Check(CheckCommand),

    /// Generate the JSON Schema document
    Jsonschema(JsonSchemaCommand),

    /// Generate Rust class definitions
    Gen(GenCommand),

    /// Validate a JSON instance and construct its class
    Validate(ValidateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
