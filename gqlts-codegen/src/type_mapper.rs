//! TypeScript type mapper implementation.

use gqlts_schema::StandardScalar;

/// Maps GraphQL type notions to target-language type text.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a standard scalar to a primitive type
    fn map_scalar(&self, scalar: StandardScalar) -> &'static str;

    /// Wrap an element type into an array type
    fn array_of(&self, inner: &str) -> String;
}

/// TypeScript type mapper implementation.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_scalar(&self, scalar: StandardScalar) -> &'static str {
        match scalar {
            StandardScalar::String => "string",
            StandardScalar::Int => "number",
            StandardScalar::Float => "number",
            StandardScalar::Boolean => "boolean",
            StandardScalar::ID => "string",
        }
    }

    fn array_of(&self, inner: &str) -> String {
        format!("{}[]", inner)
    }
}
