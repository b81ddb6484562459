//! TypeScript AST builders for the declarations the generator emits.
//!
//! Each node implements [`Renderable`](crate::builder::Renderable) and can be
//! built to a string with the TypeScript [`CodeBuilder`](crate::builder::CodeBuilder).

mod alias;
mod enums;
mod interface;

pub use alias::TypeAlias;
pub use enums::Enum;
pub use interface::{Interface, InterfaceField};
