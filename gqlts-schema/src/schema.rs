//! The schema type map.

use indexmap::IndexMap;

use crate::TypeDefinition;

/// Prefix of introspection type names such as `__Schema`.
pub const RESERVED_PREFIX: &str = "__";

/// Whether a type name is reserved for introspection.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}

/// An ordered set of named type definitions.
///
/// Schemas are read-only once built; the generator never mutates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, keyed by its name.
    pub fn with_type(mut self, def: impl Into<TypeDefinition>) -> Self {
        self.insert(def);
        self
    }

    /// Insert a definition. Returns the definition previously registered
    /// under the same name, which keeps its original position.
    pub fn insert(&mut self, def: impl Into<TypeDefinition>) -> Option<TypeDefinition> {
        let def = def.into();
        self.types.insert(def.name().to_string(), def)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// The name-to-definition map, in declaration order.
    pub fn type_map(&self) -> &IndexMap<String, TypeDefinition> {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TypeDefinition)> {
        self.types.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDefinition> for Schema {
    fn from_iter<I: IntoIterator<Item = TypeDefinition>>(iter: I) -> Self {
        let mut schema = Self::new();
        for def in iter {
            schema.insert(def);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnumType, ScalarType};

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("__Schema"));
        assert!(is_reserved("__TypeKind"));
        assert!(!is_reserved("_Private"));
        assert!(!is_reserved("Node"));
    }

    #[test]
    fn test_iteration_follows_insertion() {
        let schema = Schema::new()
            .with_type(EnumType::new("Zeta"))
            .with_type(ScalarType::new("Alpha"))
            .with_type(EnumType::new("Mid"));

        let names: Vec<_> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_insert_returns_previous() {
        let mut schema = Schema::new();
        assert!(schema.insert(ScalarType::new("Date")).is_none());
        let previous = schema.insert(ScalarType::new("Date"));
        assert!(previous.is_some());
        assert_eq!(schema.len(), 1);
    }
}
