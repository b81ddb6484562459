//! Generate operation - schema to TypeScript module.

use std::{fs, path::Path};

use eyre::{Context, Result};
use gqlts_codegen::{GenerateOptions, Generator};
use gqlts_schema::{Schema, is_reserved};
use tracing::info;

use crate::reports::{GenerateReport, GenerateTarget};

/// Execute the generate operation.
///
/// Without an output directory, or on a dry run, the module text is kept in
/// the report. Otherwise it is written to `<output_dir>/<module>.ts`.
pub fn generate(
    schema_path: &Path,
    schema: &Schema,
    options: GenerateOptions,
    output_dir: Option<&Path>,
    dry_run: bool,
) -> Result<GenerateReport> {
    let result = Generator::new(options)
        .generate(schema)
        .wrap_err_with(|| format!("Failed to generate types for {}", schema_path.display()))?;

    let type_count = schema.iter().filter(|(name, _)| !is_reserved(name)).count();

    let target = match output_dir {
        None => GenerateTarget::Stdout {
            content: result.content,
        },
        Some(dir) if dry_run => GenerateTarget::Preview {
            path: dir.join(result.file_name()),
            content: result.content,
        },
        Some(dir) => {
            let path = dir.join(result.file_name());
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;
            fs::write(&path, &result.content)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = result.content.len(), "wrote module");

            GenerateTarget::Written {
                path,
                bytes: result.content.len(),
            }
        }
    };

    Ok(GenerateReport {
        schema_path: schema_path.to_path_buf(),
        module_name: result.module_name,
        type_count,
        target,
    })
}
