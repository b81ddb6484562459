//! TypeScript declaration generator for GraphQL schemas.
//!
//! Every named type of a [`Schema`](gqlts_schema::Schema) is rendered to a
//! TypeScript declaration, in declaration order:
//!
//! - custom scalars become `type Name = string` aliases
//! - enums become `enum` declarations
//! - object and interface types become `export interface` declarations,
//!   with an `extends` clause for implemented interfaces
//!
//! Introspection types (names starting with `__`) are skipped.
//!
//! # Usage
//!
//! ```
//! use gqlts_codegen::{GenerateOptions, Generators, generate_types_from_source};
//!
//! let sdl = r#"
//!     enum Status { ACTIVE INACTIVE }
//!     type Widget { id: ID! tags: [String] }
//! "#;
//!
//! let result = generate_types_from_source(sdl, None).unwrap();
//! assert_eq!(result.module_name, "types");
//! assert!(result.content.contains("export interface Widget {\r\n  id: string;\r\n"));
//!
//! // Override one rule, keep the others.
//! let options = GenerateOptions::new()
//!     .module_name("models")
//!     .generators(Generators::new().scalar(|ty, _ctx| Ok(format!("Scalar<'{}'>", ty.name))));
//! let result = generate_types_from_source(sdl, Some(options)).unwrap();
//! assert!(result.content.contains("id: Scalar<'ID'>;"));
//! assert!(result.content.contains("enum Status {"));
//! ```
//!
//! # Module Organization
//!
//! - [`builder`] - Indented code building blocks (CodeBuilder, CodeFragment)
//! - [`ast`] - TypeScript declaration nodes (Interface, Enum, TypeAlias)
//! - [`rules`] - Rule overrides and the effective rule set
//! - [`defaults`] - Default generation rules
//! - [`resolve`] - Field type resolution

mod context;
mod error;
mod generator;
mod type_mapper;
mod walker;

pub mod ast;
pub mod builder;
pub mod defaults;
pub mod resolve;
pub mod rules;

pub use context::GenerateContext;
pub use error::{Error, Result};
pub use generator::{
    DEFAULT_MODULE_NAME, GenerateOptions, GenerateResult, Generator, generate_types,
    generate_types_from_source,
};
pub use gqlts_schema as schema;
pub use rules::{
    EnumRule, FieldRule, Generators, InterfaceRule, ObjectRule, RuleSet, ScalarRule,
};
pub use type_mapper::{TypeMapper, TypeScriptTypeMapper};
