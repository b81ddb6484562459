//! GraphQL schema model for the gqlts TypeScript generator.
//!
//! A [`Schema`] is an ordered map from type name to [`TypeDefinition`].
//! Iteration follows declaration order, which is the order generated
//! declarations are emitted in.
//!
//! Schemas can be assembled by hand with the fluent builders or loaded from
//! SDL text:
//!
//! ```
//! use gqlts_schema::{ObjectType, Schema, TypeDefinition, TypeRef};
//!
//! let schema = Schema::new().with_type(TypeDefinition::Object(
//!     ObjectType::new("Widget").field("id", TypeRef::non_null(TypeRef::named("ID"))),
//! ));
//! assert!(schema.contains("Widget"));
//!
//! let loaded = Schema::from_sdl("type Widget { id: ID! }").unwrap();
//! assert!(loaded.contains("Widget"));
//! ```

mod error;
mod schema;
mod sdl;
mod type_ref;
mod types;

pub use error::{Error, Result};
pub use schema::{RESERVED_PREFIX, Schema, is_reserved};
pub use type_ref::TypeRef;
pub use types::{
    EnumType, Field, InterfaceType, ObjectType, ScalarType, StandardScalar, TypeDefinition,
    TypeKind,
};
