//! Default generation rules.
//!
//! These are public so an override can delegate to the default it replaces:
//!
//! ```
//! use gqlts_codegen::{Generators, defaults};
//!
//! let generators = Generators::new().scalar(|ty, ctx| match ty.name.as_str() {
//!     "DateTime" => Ok("Date".to_string()),
//!     _ => defaults::scalar(ty, ctx),
//! });
//! # let _ = generators;
//! ```

use gqlts_schema::{EnumType, Field, InterfaceType, ObjectType, ScalarType};

use crate::{
    GenerateContext, Result,
    ast::{Enum, Interface, InterfaceField, TypeAlias},
    resolve,
    type_mapper::{TypeMapper, TypeScriptTypeMapper},
};

/// Type text used for a scalar at a point of use.
///
/// Standard scalars map to primitives. Any other scalar is referenced by its
/// own name, which [`scalar_def`] declares as an alias.
pub fn scalar(ty: &ScalarType, _ctx: &GenerateContext<'_>) -> Result<String> {
    Ok(match ty.standard() {
        Some(standard) => TypeScriptTypeMapper.map_scalar(standard).to_string(),
        None => ty.name.clone(),
    })
}

/// `type Name = string` for custom scalars, nothing for standard ones.
pub fn scalar_def(ty: &ScalarType, _ctx: &GenerateContext<'_>) -> Result<String> {
    if ty.is_standard() {
        return Ok(String::new());
    }
    Ok(TypeAlias::new(&ty.name, "string").build())
}

pub fn enum_type(ty: &EnumType, _ctx: &GenerateContext<'_>) -> Result<String> {
    Ok(Enum::new(&ty.name).members(&ty.values).build())
}

/// `name: type;`, with `?` after the name unless the field is non-null.
pub fn field(field: &Field, ctx: &GenerateContext<'_>) -> Result<String> {
    let resolved = resolve::render_field_type(field, ctx)?;
    let member = InterfaceField::new(&field.name, resolved.ty);
    let member = if resolved.optional {
        member.optional()
    } else {
        member
    };
    Ok(member.to_line())
}

pub fn object(ty: &ObjectType, ctx: &GenerateContext<'_>) -> Result<String> {
    record(&ty.name, &ty.interfaces, ty.fields.values(), ctx)
}

pub fn interface(ty: &InterfaceType, ctx: &GenerateContext<'_>) -> Result<String> {
    record(&ty.name, &ty.interfaces, ty.fields.values(), ctx)
}

// Field rules returning an empty string drop the member.
fn record<'f>(
    name: &str,
    extends: &[String],
    fields: impl Iterator<Item = &'f Field>,
    ctx: &GenerateContext<'_>,
) -> Result<String> {
    let ctx = ctx.within(name);
    let mut interface = extends
        .iter()
        .fold(Interface::new(name), |interface, parent| interface.extends(parent));

    for field in fields {
        let member = ctx.field(field)?;
        if !member.is_empty() {
            interface = interface.member(member);
        }
    }

    Ok(interface.build())
}

#[cfg(test)]
mod tests {
    use gqlts_schema::{Schema, TypeRef};

    use super::*;
    use crate::rules::RuleSet;

    fn with_ctx<T>(schema: &Schema, f: impl FnOnce(&GenerateContext<'_>) -> T) -> T {
        let rules = RuleSet::default();
        let ctx = GenerateContext::new("types", schema, &rules);
        f(&ctx)
    }

    #[test]
    fn test_scalar_standard_names() {
        let schema = Schema::new();
        with_ctx(&schema, |ctx| {
            assert_eq!(scalar(&ScalarType::new("String"), ctx).unwrap(), "string");
            assert_eq!(scalar(&ScalarType::new("Int"), ctx).unwrap(), "number");
            assert_eq!(scalar(&ScalarType::new("Float"), ctx).unwrap(), "number");
            assert_eq!(scalar(&ScalarType::new("Boolean"), ctx).unwrap(), "boolean");
            assert_eq!(scalar(&ScalarType::new("ID"), ctx).unwrap(), "string");
        });
    }

    #[test]
    fn test_scalar_custom_name_falls_back_to_name() {
        let schema = Schema::new();
        with_ctx(&schema, |ctx| {
            assert_eq!(scalar(&ScalarType::new("AWSDateTime"), ctx).unwrap(), "AWSDateTime");
        });
    }

    #[test]
    fn test_scalar_def() {
        let schema = Schema::new();
        with_ctx(&schema, |ctx| {
            assert_eq!(
                scalar_def(&ScalarType::new("AWSDateTime"), ctx).unwrap(),
                "type AWSDateTime = string\r\n"
            );
            assert_eq!(scalar_def(&ScalarType::new("ID"), ctx).unwrap(), "");
        });
    }

    #[test]
    fn test_field_rendering_laws() {
        let schema = Schema::new();
        let cases = [
            (TypeRef::non_null(TypeRef::named("String")), "name: string;"),
            (TypeRef::named("String"), "name?: string;"),
            (TypeRef::list(TypeRef::named("Int")), "name?: number[];"),
            (
                TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("ID")))),
                "name: string[];",
            ),
        ];

        with_ctx(&schema, |ctx| {
            for (ty, expected) in cases {
                assert_eq!(field(&Field::new("name", ty), ctx).unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_object_without_interfaces() {
        let schema = Schema::new();
        let widget = ObjectType::new("Widget").field("id", TypeRef::non_null(TypeRef::named("ID")));
        let rendered = with_ctx(&schema, |ctx| object(&widget, ctx)).unwrap();
        assert_eq!(rendered, "export interface Widget {\r\n  id: string;\r\n}\r\n");
    }

    #[test]
    fn test_interface_extends() {
        let schema = Schema::new();
        let named = InterfaceType::new("Named")
            .implements("Node")
            .implements("Entity")
            .field("name", TypeRef::named("String"));
        let rendered = with_ctx(&schema, |ctx| interface(&named, ctx)).unwrap();
        assert_eq!(
            rendered,
            "export interface Named extends Node, Entity {\r\n  name?: string;\r\n}\r\n"
        );
    }
}
