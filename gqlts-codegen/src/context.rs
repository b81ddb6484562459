//! Per-call generation context.

use gqlts_schema::{
    EnumType, Field, InterfaceType, ObjectType, ScalarType, Schema, TypeDefinition,
};

use crate::{Result, rules::RuleSet};

/// State threaded through one generation call.
///
/// A context is created at the start of a call and dropped at its end. Rules
/// receive it by reference and use it to reach the schema and to invoke
/// sibling rules through the effective [`RuleSet`], so an overridden rule is
/// honoured wherever it is called from.
#[derive(Debug, Clone, Copy)]
pub struct GenerateContext<'a> {
    module_name: &'a str,
    schema: &'a Schema,
    rules: &'a RuleSet,
    parent: Option<&'a str>,
}

impl<'a> GenerateContext<'a> {
    pub fn new(module_name: &'a str, schema: &'a Schema, rules: &'a RuleSet) -> Self {
        Self {
            module_name,
            schema,
            rules,
            parent: None,
        }
    }

    pub fn module_name(&self) -> &'a str {
        self.module_name
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Name of the object or interface whose fields are being rendered.
    pub fn parent(&self) -> Option<&'a str> {
        self.parent
    }

    /// A context for rendering the fields of `parent`.
    pub fn within<'b>(&self, parent: &'b str) -> GenerateContext<'b>
    where
        'a: 'b,
    {
        GenerateContext {
            module_name: self.module_name,
            schema: self.schema,
            rules: self.rules,
            parent: Some(parent),
        }
    }

    pub fn scalar(&self, ty: &ScalarType) -> Result<String> {
        (self.rules.scalar)(ty, self)
    }

    pub fn scalar_def(&self, ty: &ScalarType) -> Result<String> {
        (self.rules.scalar_def)(ty, self)
    }

    pub fn enum_type(&self, ty: &EnumType) -> Result<String> {
        (self.rules.enum_type)(ty, self)
    }

    pub fn field(&self, field: &Field) -> Result<String> {
        (self.rules.field)(field, self)
    }

    /// Render an object type; its fields see the object as their parent.
    pub fn object(&self, ty: &ObjectType) -> Result<String> {
        (self.rules.object)(ty, &self.within(&ty.name))
    }

    pub fn interface(&self, ty: &InterfaceType) -> Result<String> {
        (self.rules.interface)(ty, &self.within(&ty.name))
    }

    /// Dispatch a top-level definition to the rule for its kind.
    pub fn definition(&self, def: &TypeDefinition) -> Result<String> {
        match def {
            TypeDefinition::Scalar(ty) => self.scalar_def(ty),
            TypeDefinition::Enum(ty) => self.enum_type(ty),
            TypeDefinition::Object(ty) => self.object(ty),
            TypeDefinition::Interface(ty) => self.interface(ty),
        }
    }
}
