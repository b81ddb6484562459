//! TypeScript interface builder.

use crate::builder::{CodeBuilder, CodeFragment, Renderable};

/// A property in a TypeScript interface.
#[derive(Debug, Clone)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
    pub readonly: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }

    /// Render as a single member line, e.g. `name?: string;`.
    pub fn to_line(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }
}

/// Builder for TypeScript interfaces.
///
/// Members are kept as pre-rendered lines so that any member text can be
/// placed in the body.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    extends: Vec<String>,
    members: Vec<String>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extends: Vec::new(),
            members: Vec::new(),
            exported: true,
        }
    }

    /// Add a required field.
    pub fn field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty))
    }

    /// Add an optional field.
    pub fn optional_field(self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.field_with(InterfaceField::new(name, ty).optional())
    }

    /// Add a field with full configuration.
    pub fn field_with(self, field: InterfaceField) -> Self {
        self.member(field.to_line())
    }

    /// Add a pre-rendered member line.
    pub fn member(mut self, line: impl Into<String>) -> Self {
        self.members.push(line.into());
        self
    }

    /// Add an extended interface.
    pub fn extends(mut self, name: impl Into<String>) -> Self {
        self.extends.push(name.into());
        self
    }

    /// Make this interface private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        if self.extends.is_empty() {
            format!("{}interface {} {{", export, self.name)
        } else {
            format!(
                "{}interface {} extends {} {{",
                export,
                self.name,
                self.extends.join(", ")
            )
        }
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Block {
            header: self.header(),
            body: self.members.iter().cloned().map(CodeFragment::Line).collect(),
            close: Some("}".to_string()),
        }]
    }
}
