//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, LineEnding, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`).
///
/// # Example (Consuming API)
///
/// ```
/// use gqlts_codegen::builder::{CodeBuilder, Indent, LineEnding};
///
/// let code = CodeBuilder::new(Indent::Spaces(2), LineEnding::Lf)
///     .line("interface Point {")
///     .indent()
///     .line("x: number;")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "interface Point {\n  x: number;\n}\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use gqlts_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::typescript();
/// builder
///     .push_line("enum Color {")
///     .push_indent()
///     .push_line("RED")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "enum Color {\r\n  RED\r\n}\r\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    line_ending: LineEnding,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified whitespace.
    pub fn new(indent: Indent, line_ending: LineEnding) -> Self {
        Self {
            indent_level: 0,
            indent,
            line_ending,
            buffer: String::new(),
        }
    }

    /// 2-space indentation and CRLF line endings.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT, LineEnding::CrLf)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Add every line of a possibly multi-line string at the current
    /// indentation (mutable).
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        for line in s.lines() {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push_str(self.line_ending.as_str());
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &(impl Renderable + ?Sized)) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) if s.contains('\n') => {
                self.push_lines(&s);
            }
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lf() -> CodeBuilder {
        CodeBuilder::new(Indent::TYPESCRIPT, LineEnding::Lf)
    }

    #[test]
    fn test_basic_line() {
        let code = lf().line("let x = 1;").build();
        assert_eq!(code, "let x = 1;\n");
    }

    #[test]
    fn test_push_lines_leaves_blank_lines_unindented() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_lines("x;\r\n\r\ny;\r\n");
        assert_eq!(builder.build(), "  x;\r\n\r\n  y;\r\n");
    }

    #[test]
    fn test_crlf_line_endings() {
        let code = CodeBuilder::typescript()
            .line("enum A {")
            .indent()
            .line("B")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum A {\r\n  B\r\n}\r\n");
    }

    #[test]
    fn test_block() {
        let code = lf()
            .block_with_close("interface Foo {", "}", |b| b.line("bar: string;"))
            .build();

        assert_eq!(code, "interface Foo {\n  bar: string;\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = lf().line("type A = string").blank().line("type B = string").build();
        assert_eq!(code, "type A = string\n\ntype B = string\n");
    }

    #[test]
    fn test_each() {
        let code = lf()
            .line("enum Color {")
            .indent()
            .each(["RED", "GREEN"], |b, color| b.line(&format!("{},", color)))
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "enum Color {\n  RED,\n  GREEN,\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = lf().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_push_lines_splits_any_terminator() {
        let mut builder = CodeBuilder::typescript();
        builder.push_indent().push_lines("a: string;\nb: number;\r\n");
        assert_eq!(builder.build(), "  a: string;\r\n  b: number;\r\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "export interface Node {",
                    vec![CodeFragment::line("id: string;")],
                    Some("}".to_string()),
                )]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.as_str(),
            "export interface Node {\r\n  id: string;\r\n}\r\n"
        );
    }
}
