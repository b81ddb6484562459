//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Where the generated module went.
#[derive(Debug)]
pub enum GenerateTarget {
    /// No output directory; the module goes to stdout as is.
    Stdout { content: String },
    /// Dry run against an output directory.
    Preview { path: PathBuf, content: String },
    Written { path: PathBuf, bytes: usize },
}

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub schema_path: PathBuf,
    pub module_name: String,
    /// Number of non-reserved types in the schema.
    pub type_count: usize,
    pub target: GenerateTarget,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.target {
            GenerateTarget::Stdout { content } => out.raw(content),
            GenerateTarget::Preview { path, content } => {
                out.divider(&path.display().to_string());
                out.raw(content);
                out.divider("dry run, nothing written");
            }
            GenerateTarget::Written { path, bytes } => {
                out.preformatted(&format!(
                    "✓ Generated module '{}' from {}",
                    self.module_name,
                    self.schema_path.display()
                ));
                out.key_value("types", &self.type_count.to_string());
                out.key_value("file", &format!("{} ({} bytes)", path.display(), bytes));
            }
        }
    }
}
