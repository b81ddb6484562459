//! Generation rules and the per-key override merge.
//!
//! A rule renders one schema element to text. [`Generators`] holds the
//! caller's overrides; [`RuleSet`] is the effective set used during
//! generation, where every rule the caller did not override keeps its
//! default from [`defaults`](crate::defaults).

use std::{fmt, sync::Arc};

use gqlts_schema::{EnumType, Field, InterfaceType, ObjectType, ScalarType};

use crate::{GenerateContext, Result, defaults};

/// Renders a scalar, either inline at a point of use (`scalar`) or as a
/// top-level declaration (`scalar_def`).
pub type ScalarRule = Arc<dyn Fn(&ScalarType, &GenerateContext<'_>) -> Result<String> + Send + Sync>;
pub type EnumRule = Arc<dyn Fn(&EnumType, &GenerateContext<'_>) -> Result<String> + Send + Sync>;
/// Renders one member line of an object or interface body.
pub type FieldRule = Arc<dyn Fn(&Field, &GenerateContext<'_>) -> Result<String> + Send + Sync>;
pub type ObjectRule = Arc<dyn Fn(&ObjectType, &GenerateContext<'_>) -> Result<String> + Send + Sync>;
pub type InterfaceRule =
    Arc<dyn Fn(&InterfaceType, &GenerateContext<'_>) -> Result<String> + Send + Sync>;

/// Caller-supplied rule overrides. Unset rules keep their defaults.
///
/// ```
/// use gqlts_codegen::Generators;
///
/// let generators = Generators::new().scalar(|ty, _ctx| {
///     Ok(match ty.name.as_str() {
///         "AWSDateTime" => "Date".to_string(),
///         _ => "string".to_string(),
///     })
/// });
/// assert!(generators.scalar.is_some());
/// assert!(generators.object.is_none());
/// ```
#[derive(Clone, Default)]
pub struct Generators {
    pub scalar: Option<ScalarRule>,
    pub scalar_def: Option<ScalarRule>,
    pub enum_type: Option<EnumRule>,
    pub field: Option<FieldRule>,
    pub interface: Option<InterfaceRule>,
    pub object: Option<ObjectRule>,
}

impl Generators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar<F>(mut self, rule: F) -> Self
    where
        F: Fn(&ScalarType, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.scalar = Some(Arc::new(rule));
        self
    }

    pub fn scalar_def<F>(mut self, rule: F) -> Self
    where
        F: Fn(&ScalarType, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.scalar_def = Some(Arc::new(rule));
        self
    }

    pub fn enum_type<F>(mut self, rule: F) -> Self
    where
        F: Fn(&EnumType, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.enum_type = Some(Arc::new(rule));
        self
    }

    pub fn field<F>(mut self, rule: F) -> Self
    where
        F: Fn(&Field, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.field = Some(Arc::new(rule));
        self
    }

    pub fn interface<F>(mut self, rule: F) -> Self
    where
        F: Fn(&InterfaceType, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.interface = Some(Arc::new(rule));
        self
    }

    pub fn object<F>(mut self, rule: F) -> Self
    where
        F: Fn(&ObjectType, &GenerateContext<'_>) -> Result<String> + Send + Sync + 'static,
    {
        self.object = Some(Arc::new(rule));
        self
    }

    /// Names of the overridden rules.
    pub fn overridden(&self) -> Vec<&'static str> {
        [
            ("scalar", self.scalar.is_some()),
            ("scalar_def", self.scalar_def.is_some()),
            ("enum_type", self.enum_type.is_some()),
            ("field", self.field.is_some()),
            ("interface", self.interface.is_some()),
            ("object", self.object.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }
}

impl fmt::Debug for Generators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generators")
            .field("overridden", &self.overridden())
            .finish()
    }
}

/// The effective rules of one generator: defaults with overrides applied.
#[derive(Clone)]
pub struct RuleSet {
    pub(crate) scalar: ScalarRule,
    pub(crate) scalar_def: ScalarRule,
    pub(crate) enum_type: EnumRule,
    pub(crate) field: FieldRule,
    pub(crate) interface: InterfaceRule,
    pub(crate) object: ObjectRule,
}

impl RuleSet {
    /// Replace each default rule that `overrides` sets, key by key.
    pub fn merged(overrides: &Generators) -> Self {
        let defaults = Self::default();
        Self {
            scalar: overrides.scalar.clone().unwrap_or(defaults.scalar),
            scalar_def: overrides.scalar_def.clone().unwrap_or(defaults.scalar_def),
            enum_type: overrides.enum_type.clone().unwrap_or(defaults.enum_type),
            field: overrides.field.clone().unwrap_or(defaults.field),
            interface: overrides.interface.clone().unwrap_or(defaults.interface),
            object: overrides.object.clone().unwrap_or(defaults.object),
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            scalar: Arc::new(defaults::scalar),
            scalar_def: Arc::new(defaults::scalar_def),
            enum_type: Arc::new(defaults::enum_type),
            field: Arc::new(defaults::field),
            interface: Arc::new(defaults::interface),
            object: Arc::new(defaults::object),
        }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use gqlts_schema::Schema;

    use super::*;

    fn render_scalar(rules: &RuleSet, name: &str) -> String {
        let schema = Schema::new();
        let ctx = GenerateContext::new("types", &schema, rules);
        ctx.scalar(&ScalarType::new(name)).unwrap()
    }

    #[test]
    fn test_default_rule_set() {
        let rules = RuleSet::default();
        assert_eq!(render_scalar(&rules, "Int"), "number");
    }

    #[test]
    fn test_merge_replaces_only_given_keys() {
        let overrides = Generators::new().scalar(|_, _| Ok("unknown".to_string()));
        let rules = RuleSet::merged(&overrides);
        assert_eq!(render_scalar(&rules, "Int"), "unknown");

        let schema = Schema::new();
        let ctx = GenerateContext::new("types", &schema, &rules);
        let rendered = ctx
            .enum_type(&EnumType::new("E").values(["A", "B"]))
            .unwrap();
        assert_eq!(rendered, "enum E {\r\n  A,\r\n  B\r\n}\r\n");
    }

    #[test]
    fn test_overridden_names() {
        let generators = Generators::new()
            .object(|ty, _| Ok(ty.name.clone()))
            .scalar_def(|_, _| Ok(String::new()));
        assert_eq!(generators.overridden(), ["scalar_def", "object"]);
        assert!(format!("{:?}", generators).contains("object"));
    }
}
