//! Check operation - schema validation.

use std::path::Path;

use gqlts_codegen::{GenerateOptions, Generator};
use gqlts_schema::{Schema, TypeKind, is_reserved};

use crate::{config::Config, reports::CheckReport};

/// Execute the check operation.
///
/// Loading already validated the document itself; this runs generation
/// without writing to catch field types that cannot be expressed.
pub fn check(schema_path: &Path, schema: &Schema, config: &Config) -> CheckReport {
    let types: Vec<(String, TypeKind)> = schema
        .iter()
        .filter(|(name, _)| !is_reserved(name))
        .map(|(name, def)| (name.to_string(), def.kind()))
        .collect();

    let options = GenerateOptions::new().generators(config.generators());
    let errors = match Generator::new(options).generate(schema) {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };

    CheckReport {
        schema_path: schema_path.to_path_buf(),
        types,
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_types_by_kind() {
        let schema = Schema::from_sdl(
            "scalar Date\nenum Role { ADMIN }\ninterface Node { id: ID! }\ntype User implements Node { id: ID! role: Role }",
        )
        .unwrap();

        let report = check(Path::new("schema.graphql"), &schema, &Config::default());
        assert!(report.is_valid());
        assert_eq!(report.count(TypeKind::Scalar), 6);
        assert_eq!(report.count(TypeKind::Enum), 1);
        assert_eq!(report.count(TypeKind::Interface), 1);
        assert_eq!(report.count(TypeKind::Object), 1);
    }

    #[test]
    fn test_reports_unresolvable_field() {
        let schema = Schema::from_sdl("type Grid { cells: [[Int]] }").unwrap();
        let report = check(Path::new("schema.graphql"), &schema, &Config::default());
        assert!(!report.is_valid());
        assert!(report.errors[0].contains("Grid.cells"));
    }
}
