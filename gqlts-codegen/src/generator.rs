//! Generation entry points.

use gqlts_schema::Schema;
use tracing::debug;

use crate::{
    GenerateContext, Generators, Result,
    rules::RuleSet,
    type_mapper::{TypeMapper, TypeScriptTypeMapper},
    walker,
};

/// Module name used when the options do not set one.
pub const DEFAULT_MODULE_NAME: &str = "types";

/// Options for a generation call. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub module_name: Option<String>,
    pub generators: Generators,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = Some(name.into());
        self
    }

    pub fn generators(mut self, generators: Generators) -> Self {
        self.generators = generators;
        self
    }
}

/// Generated module text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub module_name: String,
    pub content: String,
}

impl GenerateResult {
    /// File name for the module, e.g. `types.ts`.
    pub fn file_name(&self) -> String {
        format!("{}.ts", self.module_name)
    }
}

/// TypeScript declaration generator.
///
/// Holds the effective rule set, so one generator can be reused across
/// schemas and shared between threads.
#[derive(Debug, Clone)]
pub struct Generator {
    module_name: String,
    rules: RuleSet,
}

impl Generator {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            module_name: options
                .module_name
                .unwrap_or_else(|| DEFAULT_MODULE_NAME.to_string()),
            rules: RuleSet::merged(&options.generators),
        }
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Generate declarations for every non-reserved type of `schema`.
    pub fn generate(&self, schema: &Schema) -> Result<GenerateResult> {
        debug!(
            module = %self.module_name,
            language = TypeScriptTypeMapper.language(),
            types = schema.len(),
            "generating declarations"
        );

        let ctx = GenerateContext::new(&self.module_name, schema, &self.rules);
        let content = walker::walk(schema, &ctx)?;

        debug!(module = %self.module_name, bytes = content.len(), "generation finished");

        Ok(GenerateResult {
            module_name: self.module_name.clone(),
            content,
        })
    }

    /// Parse SDL text and generate declarations for it.
    pub fn generate_from_source(&self, src: &str) -> Result<GenerateResult> {
        let schema = Schema::from_sdl(src)?;
        self.generate(&schema)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

/// Generate declarations for `schema` with the given options.
pub fn generate_types(schema: &Schema, options: Option<GenerateOptions>) -> Result<GenerateResult> {
    Generator::new(options.unwrap_or_default()).generate(schema)
}

/// Parse SDL text and generate declarations for it.
pub fn generate_types_from_source(
    src: &str,
    options: Option<GenerateOptions>,
) -> Result<GenerateResult> {
    Generator::new(options.unwrap_or_default()).generate_from_source(src)
}

#[cfg(test)]
mod tests {
    use gqlts_schema::{EnumType, ScalarType};

    use super::*;

    #[test]
    fn test_default_module_name() {
        let result = generate_types(&Schema::new(), None).unwrap();
        assert_eq!(result.module_name, "types");
        assert_eq!(result.file_name(), "types.ts");
        assert_eq!(result.content, "");
    }

    #[test]
    fn test_custom_module_name() {
        let generator = Generator::new(GenerateOptions::new().module_name("models"));
        assert_eq!(generator.module_name(), "models");
        let result = generator.generate(&Schema::new()).unwrap();
        assert_eq!(result.module_name, "models");
    }

    #[test]
    fn test_context_exposes_module_name() {
        let options = GenerateOptions::new()
            .module_name("api")
            .generators(Generators::new().enum_type(|ty, ctx| {
                Ok(format!("// {}.{}\r\n", ctx.module_name(), ty.name))
            }));
        let schema = Schema::new().with_type(EnumType::new("Color"));

        let result = generate_types(&schema, Some(options)).unwrap();
        assert_eq!(result.content, "// api.Color\r\n");
    }

    #[test]
    fn test_from_source_propagates_schema_errors() {
        let err = generate_types_from_source("union U = A", None).unwrap_err();
        assert!(matches!(err, crate::Error::Schema(_)));
    }

    #[test]
    fn test_generator_is_reusable() {
        let generator = Generator::default();
        let schema = Schema::new().with_type(ScalarType::new("Date"));
        let first = generator.generate(&schema).unwrap();
        let second = generator.generate(&schema).unwrap();
        assert_eq!(first, second);
    }
}
