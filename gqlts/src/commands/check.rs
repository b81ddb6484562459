use std::path::PathBuf;

use clap::Args;
use eyre::{OptionExt, Result};
use gqlts_schema::Schema;

use super::UnwrapOrExit;
use crate::{
    config::Config,
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the GraphQL schema (defaults to `schema` in gqlts.toml)
    pub schema: Option<PathBuf>,

    /// Path to the config file (defaults to ./gqlts.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = Config::discover(self.config.as_deref()).unwrap_or_exit();

        let schema_path = self
            .schema
            .clone()
            .or_else(|| config.schema_path())
            .ok_or_eyre("no schema given; pass a path or set `schema` in gqlts.toml")?;
        let schema = Schema::from_file(&schema_path).unwrap_or_exit();

        let report = ops::check(&schema_path, &schema, &config);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
