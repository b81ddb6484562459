//! Field type resolution.
//!
//! A field type is unwrapped in a fixed order: an outer non-null marker, then
//! a list, then a non-null marker on the list item, ending at a named type.
//! TypeScript has no notation for non-null list items, so the inner marker is
//! accepted and dropped. Any other wrapper shape is rejected.

use gqlts_schema::{Field, ScalarType, StandardScalar, TypeDefinition, TypeRef};

use crate::{
    Error, GenerateContext, Result,
    type_mapper::{TypeMapper, TypeScriptTypeMapper},
};

/// A type reference with its wrappers peeled off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unwrapped<'a> {
    pub name: &'a str,
    pub non_null: bool,
    pub list: bool,
}

/// Peel `[NonNull] [List [NonNull]] Named`. Returns `None` for other shapes.
pub fn unwrap(ty: &TypeRef) -> Option<Unwrapped<'_>> {
    let (non_null, ty) = match ty {
        TypeRef::NonNull(inner) => (true, inner.as_ref()),
        other => (false, other),
    };
    let (list, ty) = match ty {
        TypeRef::List(inner) => (true, inner.as_ref()),
        other => (false, other),
    };
    let ty = match ty {
        TypeRef::NonNull(inner) if list => inner.as_ref(),
        other => other,
    };

    match ty {
        TypeRef::Named(name) => Some(Unwrapped {
            name: name.as_str(),
            non_null,
            list,
        }),
        TypeRef::List(_) | TypeRef::NonNull(_) => None,
    }
}

/// Rendered type of a field, ready to be placed after `name:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub ty: String,
    pub optional: bool,
}

/// Resolve a field's type to TypeScript.
///
/// Scalars go through the `scalar` rule; enums, objects and interfaces are
/// referenced by name and never expanded.
pub fn render_field_type(field: &Field, ctx: &GenerateContext<'_>) -> Result<FieldType> {
    let unwrapped = unwrap(&field.ty).ok_or_else(|| Error::UnsupportedTypeShape {
        parent: ctx.parent().unwrap_or_default().to_string(),
        field: field.name.clone(),
        shape: field.ty.to_string(),
    })?;

    let base = match ctx.schema().get(unwrapped.name) {
        Some(TypeDefinition::Scalar(scalar)) => ctx.scalar(scalar)?,
        Some(def) => def.name().to_string(),
        // Hand-built schemas may leave the standard scalars out.
        None => match StandardScalar::from_name(unwrapped.name) {
            Some(standard) => ctx.scalar(&ScalarType::from(standard))?,
            None => {
                return Err(Error::UnknownType {
                    parent: ctx.parent().unwrap_or_default().to_string(),
                    field: field.name.clone(),
                    name: unwrapped.name.to_string(),
                });
            }
        },
    };

    let ty = if unwrapped.list {
        TypeScriptTypeMapper.array_of(&base)
    } else {
        base
    };

    Ok(FieldType {
        ty,
        optional: !unwrapped.non_null,
    })
}

#[cfg(test)]
mod tests {
    use gqlts_schema::{EnumType, ObjectType, Schema};

    use super::*;
    use crate::rules::RuleSet;

    fn named(name: &str) -> TypeRef {
        TypeRef::named(name)
    }

    #[test]
    fn test_unwrap_supported_shapes() {
        assert_eq!(
            unwrap(&named("A")),
            Some(Unwrapped { name: "A", non_null: false, list: false })
        );
        assert_eq!(
            unwrap(&TypeRef::non_null(named("A"))),
            Some(Unwrapped { name: "A", non_null: true, list: false })
        );
        assert_eq!(
            unwrap(&TypeRef::list(named("A"))),
            Some(Unwrapped { name: "A", non_null: false, list: true })
        );
        assert_eq!(
            unwrap(&TypeRef::list(TypeRef::non_null(named("A")))),
            Some(Unwrapped { name: "A", non_null: false, list: true })
        );
        assert_eq!(
            unwrap(&TypeRef::non_null(TypeRef::list(TypeRef::non_null(named("A"))))),
            Some(Unwrapped { name: "A", non_null: true, list: true })
        );
    }

    #[test]
    fn test_unwrap_rejects_nested_lists() {
        assert_eq!(unwrap(&TypeRef::list(TypeRef::list(named("A")))), None);
        assert_eq!(
            unwrap(&TypeRef::non_null(TypeRef::list(TypeRef::list(named("A"))))),
            None
        );
    }

    #[test]
    fn test_unwrap_rejects_double_non_null() {
        assert_eq!(unwrap(&TypeRef::non_null(TypeRef::non_null(named("A")))), None);
    }

    #[test]
    fn test_named_types_are_referenced_not_expanded() {
        // Post and Blog reference each other.
        let schema = Schema::new()
            .with_type(EnumType::new("Status").value("ACTIVE"))
            .with_type(ObjectType::new("Post").field("blog", named("Blog")))
            .with_type(ObjectType::new("Blog").field("posts", TypeRef::list(named("Post"))));
        let rules = RuleSet::default();
        let ctx = GenerateContext::new("types", &schema, &rules);

        let posts = render_field_type(&Field::new("posts", TypeRef::list(named("Post"))), &ctx);
        assert_eq!(
            posts.unwrap(),
            FieldType { ty: "Post[]".to_string(), optional: true }
        );

        let status = render_field_type(&Field::new("status", TypeRef::non_null(named("Status"))), &ctx);
        assert_eq!(
            status.unwrap(),
            FieldType { ty: "Status".to_string(), optional: false }
        );
    }

    #[test]
    fn test_unsupported_shape_error_names_field() {
        let schema = Schema::new();
        let rules = RuleSet::default();
        let ctx = GenerateContext::new("types", &schema, &rules);
        let field = Field::new("grid", TypeRef::list(TypeRef::list(named("Int"))));

        let err = render_field_type(&field, &ctx.within("Board")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported schema type shape '[[Int]]' on field 'Board.grid'"
        );
    }

    #[test]
    fn test_unknown_type_error() {
        let schema = Schema::new();
        let rules = RuleSet::default();
        let ctx = GenerateContext::new("types", &schema, &rules);
        let field = Field::new("owner", named("User"));

        let err = render_field_type(&field, &ctx.within("Post")).unwrap_err();
        assert!(matches!(err, Error::UnknownType { ref name, .. } if name == "User"));
    }
}
