//! Check command report data structures.

use std::path::PathBuf;

use gqlts_schema::TypeKind;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Non-reserved types in declaration order.
    pub types: Vec<(String, TypeKind)>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn count(&self, kind: TypeKind) -> usize {
        self.types.iter().filter(|(_, k)| *k == kind).count()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
        out.newline();

        for (label, kind) in [
            ("scalars", TypeKind::Scalar),
            ("enums", TypeKind::Enum),
            ("interfaces", TypeKind::Interface),
            ("objects", TypeKind::Object),
        ] {
            out.key_value(label, &self.count(kind).to_string());
        }

        if !self.types.is_empty() {
            out.newline();
            for (name, kind) in &self.types {
                out.list_item(&format!("{} ({})", name, kind));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_valid_report_lists_types() {
        let report = CheckReport {
            schema_path: PathBuf::from("schema.graphql"),
            types: vec![
                ("Role".to_string(), TypeKind::Enum),
                ("User".to_string(), TypeKind::Object),
            ],
            errors: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.stdout,
            "✓ schema.graphql is valid\n\n  scalars: 0\n  enums: 1\n  interfaces: 0\n  objects: 1\n\n    Role (enum)\n    User (object)\n"
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_invalid_report_prints_errors_only() {
        let report = CheckReport {
            schema_path: PathBuf::from("schema.graphql"),
            types: Vec::new(),
            errors: vec!["boom".to_string()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, "error: boom\n");
    }
}
