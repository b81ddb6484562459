//! TypeScript enum builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// Builder for TypeScript enums.
///
/// Members are separated by commas with no trailing comma after the last one.
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    members: Vec<String>,
    exported: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            exported: false,
        }
    }

    /// Add a member.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.members.push(name.into());
        self
    }

    /// Add several members in order.
    pub fn members<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members.extend(names.into_iter().map(Into::into));
        self
    }

    /// Prefix the declaration with `export`.
    pub fn export(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn members_to_fragments(&self) -> Vec<CodeFragment> {
        let last = self.members.len().saturating_sub(1);
        self.members
            .iter()
            .enumerate()
            .map(|(idx, member)| {
                let separator = if idx < last { "," } else { "" };
                CodeFragment::Line(format!("{}{}", member, separator))
            })
            .collect()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![CodeFragment::Block {
            header: format!("{}enum {} {{", export, self.name),
            body: self.members_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
