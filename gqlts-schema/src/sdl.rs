//! Building a [`Schema`] from GraphQL SDL.

use std::{collections::HashMap, path::Path};

use async_graphql_parser::{
    Positioned,
    types::{self as ast, BaseType},
};
use indexmap::IndexMap;
use miette::SourceSpan;

use crate::{
    EnumType, Error, Field, InterfaceType, ObjectType, Result, ScalarType, Schema,
    StandardScalar, TypeDefinition, TypeRef, error::SourceContext,
};

impl Schema {
    /// Parse SDL text into a schema.
    ///
    /// The five standard scalars are registered first unless the document
    /// declares them itself. Field arguments and directives are ignored.
    pub fn from_sdl(src: &str) -> Result<Self> {
        Self::from_sdl_named(src, "schema.graphql")
    }

    /// Parse SDL text, naming the source in diagnostics.
    pub fn from_sdl_named(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let document = async_graphql_parser::parse_schema(src).map_err(|e| ctx.parse_error(e))?;
        lower_document(&document, &ctx)
    }

    /// Read and parse an SDL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_sdl_named(&src, &path.display().to_string())
    }
}

fn lower_document(document: &ast::ServiceDocument, ctx: &SourceContext) -> Result<Schema> {
    let definitions: Vec<&Positioned<ast::TypeDefinition>> = document
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::TypeSystemDefinition::Type(ty) => Some(ty),
            ast::TypeSystemDefinition::Schema(_) | ast::TypeSystemDefinition::Directive(_) => {
                None
            }
        })
        .collect();

    let mut schema = Schema::new();
    for scalar in StandardScalar::ALL {
        let declared = definitions
            .iter()
            .any(|def| def.node.name.node.as_str() == scalar.as_str());
        if !declared {
            schema.insert(ScalarType::from(scalar));
        }
    }

    let mut seen: HashMap<&str, SourceSpan> = HashMap::new();
    for definition in definitions {
        let name = &definition.node.name;
        let span = ctx.span_at(name.pos, name.node.len());

        if definition.node.extend {
            return Err(ctx.unsupported_definition(&name.node, "type extension", span));
        }

        if let Some(first) = seen.insert(name.node.as_str(), span) {
            return Err(ctx.duplicate_type(&name.node, first, span));
        }

        let lowered = lower_definition(&definition.node, span, ctx)?;
        schema.insert(lowered);
    }

    Ok(schema)
}

fn lower_definition(
    definition: &ast::TypeDefinition,
    span: SourceSpan,
    ctx: &SourceContext,
) -> Result<TypeDefinition> {
    let name = definition.name.node.as_str();

    match &definition.kind {
        ast::TypeKind::Scalar => Ok(ScalarType::new(name).into()),
        ast::TypeKind::Enum(enum_type) => Ok(EnumType::new(name)
            .values(enum_type.values.iter().map(|v| v.node.value.node.as_str()))
            .into()),
        ast::TypeKind::Object(object) => Ok(ObjectType {
            name: name.to_string(),
            fields: lower_fields(name, &object.fields, ctx)?,
            interfaces: names(&object.implements),
        }
        .into()),
        ast::TypeKind::Interface(interface) => Ok(InterfaceType {
            name: name.to_string(),
            fields: lower_fields(name, &interface.fields, ctx)?,
            interfaces: names(&interface.implements),
        }
        .into()),
        ast::TypeKind::Union(_) => Err(ctx.unsupported_definition(name, "union", span)),
        ast::TypeKind::InputObject(_) => {
            Err(ctx.unsupported_definition(name, "input object", span))
        }
    }
}

fn lower_fields(
    type_name: &str,
    fields: &[Positioned<ast::FieldDefinition>],
    ctx: &SourceContext,
) -> Result<IndexMap<String, Field>> {
    let mut lowered = IndexMap::with_capacity(fields.len());
    for field in fields {
        let name = &field.node.name;
        let field_name = name.node.to_string();
        if lowered.contains_key(&field_name) {
            let span = ctx.span_at(name.pos, name.node.len());
            return Err(ctx.duplicate_field(type_name, &field_name, span));
        }
        let ty = lower_type(&field.node.ty.node);
        lowered.insert(field_name.clone(), Field::new(field_name, ty));
    }
    Ok(lowered)
}

fn lower_type(ty: &ast::Type) -> TypeRef {
    let inner = match &ty.base {
        BaseType::Named(name) => TypeRef::named(name.as_str()),
        BaseType::List(item) => TypeRef::list(lower_type(item)),
    };
    if ty.nullable {
        inner
    } else {
        TypeRef::non_null(inner)
    }
}

fn names<T: ToString>(list: &[Positioned<T>]) -> Vec<String> {
    list.iter().map(|name| name.node.to_string()).collect()
}
