//! Named type definitions.

use std::fmt;

use indexmap::IndexMap;

use crate::TypeRef;

/// The five scalars every GraphQL schema provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardScalar {
    String,
    Int,
    Float,
    Boolean,
    #[allow(clippy::upper_case_acronyms)]
    ID,
}

impl StandardScalar {
    /// All standard scalars, in the order they are registered by the SDL loader.
    pub const ALL: [StandardScalar; 5] = [
        StandardScalar::String,
        StandardScalar::Int,
        StandardScalar::Float,
        StandardScalar::Boolean,
        StandardScalar::ID,
    ];

    /// Look up a standard scalar by its GraphQL name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(Self::String),
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Boolean" => Some(Self::Boolean),
            "ID" => Some(Self::ID),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Boolean => "Boolean",
            Self::ID => "ID",
        }
    }
}

impl fmt::Display for StandardScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarType {
    pub name: String,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The standard scalar this type names, if any.
    pub fn standard(&self) -> Option<StandardScalar> {
        StandardScalar::from_name(&self.name)
    }

    /// Whether this is one of the five built-in scalars.
    pub fn is_standard(&self) -> bool {
        self.standard().is_some()
    }
}

impl From<StandardScalar> for ScalarType {
    fn from(scalar: StandardScalar) -> Self {
        Self::new(scalar.as_str())
    }
}

/// An enumeration with its values in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub values: Vec<String>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Append a value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.values.push(value.into());
        self
    }

    /// Append several values.
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
        self
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeRef,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An object type with the interfaces it implements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    pub name: String,
    pub fields: IndexMap<String, Field>,
    /// Implemented interface names, in declaration order.
    pub interfaces: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        }
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a field. A field with the same name is replaced in place.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        let field = Field::new(name, ty);
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// An interface type with the interfaces it extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceType {
    pub name: String,
    pub fields: IndexMap<String, Field>,
    /// Extended interface names, in declaration order.
    pub interfaces: Vec<String>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            interfaces: Vec::new(),
        }
    }

    /// Add an extended interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Add a field. A field with the same name is replaced in place.
    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        let field = Field::new(name, ty);
        self.fields.insert(field.name.clone(), field);
        self
    }
}

/// Kind tag of a [`TypeDefinition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Enum,
    Object,
    Interface,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "object",
            Self::Interface => "interface",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDefinition {
    Scalar(ScalarType),
    Enum(EnumType),
    Object(ObjectType),
    Interface(InterfaceType),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(ty) => &ty.name,
            Self::Enum(ty) => &ty.name,
            Self::Object(ty) => &ty.name,
            Self::Interface(ty) => &ty.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Scalar(_) => TypeKind::Scalar,
            Self::Enum(_) => TypeKind::Enum,
            Self::Object(_) => TypeKind::Object,
            Self::Interface(_) => TypeKind::Interface,
        }
    }
}

impl From<ScalarType> for TypeDefinition {
    fn from(ty: ScalarType) -> Self {
        Self::Scalar(ty)
    }
}

impl From<EnumType> for TypeDefinition {
    fn from(ty: EnumType) -> Self {
        Self::Enum(ty)
    }
}

impl From<ObjectType> for TypeDefinition {
    fn from(ty: ObjectType) -> Self {
        Self::Object(ty)
    }
}

impl From<InterfaceType> for TypeDefinition {
    fn from(ty: InterfaceType) -> Self {
        Self::Interface(ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scalar_lookup() {
        for scalar in StandardScalar::ALL {
            assert_eq!(StandardScalar::from_name(scalar.as_str()), Some(scalar));
        }
        assert_eq!(StandardScalar::from_name("AWSDateTime"), None);
        assert_eq!(StandardScalar::from_name("string"), None);
    }

    #[test]
    fn test_scalar_is_standard() {
        assert!(ScalarType::new("ID").is_standard());
        assert!(!ScalarType::new("DateTime").is_standard());
    }

    #[test]
    fn test_object_builder_keeps_order() {
        let object = ObjectType::new("Widget")
            .implements("Node")
            .implements("Named")
            .field("id", TypeRef::named("ID"))
            .field("name", TypeRef::named("String"));

        assert_eq!(object.interfaces, vec!["Node", "Named"]);
        let names: Vec<_> = object.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "name"]);
    }

    #[test]
    fn test_definition_name_and_kind() {
        let def = TypeDefinition::from(EnumType::new("Status").values(["A", "B"]));
        assert_eq!(def.name(), "Status");
        assert_eq!(def.kind(), TypeKind::Enum);
        assert_eq!(def.kind().to_string(), "enum");
    }
}
