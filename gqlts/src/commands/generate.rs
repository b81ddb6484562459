use std::path::PathBuf;

use clap::Args;
use eyre::{OptionExt, Result};
use gqlts_codegen::GenerateOptions;
use gqlts_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the GraphQL schema (defaults to `schema` in gqlts.toml)
    pub schema: Option<PathBuf>,

    /// Path to the config file (defaults to ./gqlts.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Module name, also used as the output file stem
    #[arg(short, long)]
    pub module_name: Option<String>,

    /// Directory to write `<module>.ts` into (prints to stdout if unset)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the module instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref()).unwrap_or_exit();

        let schema_path = self
            .schema
            .clone()
            .or_else(|| config.schema_path())
            .ok_or_eyre("no schema given; pass a path or set `schema` in gqlts.toml")?;
        let schema = Schema::from_file(&schema_path).unwrap_or_exit();

        let mut options = GenerateOptions::new().generators(config.generators());
        if let Some(name) = self.module_name.as_ref().or(config.module_name.as_ref()) {
            options = options.module_name(name);
        }

        let output_dir = self.output.clone().or_else(|| config.output_dir());

        let report = ops::generate(&schema_path, &schema, options, output_dir.as_deref(), self.dry_run)?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
