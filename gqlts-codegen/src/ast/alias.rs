//! TypeScript type alias builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// `type Name = Target`
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    target: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
        }
    }

    /// The declaration without a line terminator.
    pub fn declaration(&self) -> String {
        format!("type {} = {}", self.name, self.target)
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.declaration())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias() {
        let alias = TypeAlias::new("AWSDateTime", "string");
        assert_eq!(alias.declaration(), "type AWSDateTime = string");
        assert_eq!(alias.build(), "type AWSDateTime = string\r\n");
    }
}
