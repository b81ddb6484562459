use std::path::PathBuf;

use async_graphql_parser::Pos;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the SDL text and its filename so loader errors can point at the
/// offending definition.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Byte span of `len` bytes starting at a parser position.
    pub fn span_at(&self, pos: Pos, len: usize) -> SourceSpan {
        (pos_to_offset(&self.src, pos), len).into()
    }

    pub fn parse_error(&self, source: async_graphql_parser::Error) -> Box<Error> {
        let span = source
            .positions()
            .next()
            .map(|pos| self.span_at(pos, 0));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn unsupported_definition(
        &self,
        name: &str,
        kind: &'static str,
        span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::UnsupportedDefinition {
            src: self.named_source(),
            span,
            name: name.to_string(),
            kind,
        })
    }

    pub fn duplicate_type(
        &self,
        name: &str,
        first_span: SourceSpan,
        second_span: SourceSpan,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            first_span,
            second_span,
            name: name.to_string(),
        })
    }

    pub fn duplicate_field(&self, type_name: &str, field: &str, span: SourceSpan) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            span,
            type_name: type_name.to_string(),
            field: field.to_string(),
        })
    }
}

// Parser positions are 1-based line and character column.
fn pos_to_offset(src: &str, pos: Pos) -> usize {
    let mut offset = 0;
    for (index, line) in src.split_inclusive('\n').enumerate() {
        if index + 1 == pos.line {
            let column = line
                .char_indices()
                .nth(pos.column.saturating_sub(1))
                .map(|(byte, _)| byte)
                .unwrap_or(line.len());
            return offset + column;
        }
        offset += line.len();
    }
    src.len()
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(gqlts::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse GraphQL schema")]
    #[diagnostic(code(gqlts::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: async_graphql_parser::Error,
    },

    #[error("{kind} '{name}' cannot be translated to TypeScript")]
    #[diagnostic(
        code(gqlts::unsupported_definition),
        help("only scalars, enums, object types and interfaces are supported")
    )]
    UnsupportedDefinition {
        #[source_code]
        src: NamedSource<String>,
        #[label("unsupported {kind}")]
        span: SourceSpan,
        name: String,
        kind: &'static str,
    },

    #[error("type '{name}' is defined more than once")]
    #[diagnostic(code(gqlts::duplicate_type))]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("first defined here")]
        first_span: SourceSpan,
        #[label("defined again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("field '{field}' is defined more than once on '{type_name}'")]
    #[diagnostic(code(gqlts::duplicate_field))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate field")]
        span: SourceSpan,
        type_name: String,
        field: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}
