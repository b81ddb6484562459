use thiserror::Error;

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a generation call fails. A failed call never yields partial text.
#[derive(Debug, Error)]
pub enum Error {
    /// A field type with more wrappers than `[T!]!` resolves.
    #[error("unsupported schema type shape '{shape}' on field '{parent}.{field}'")]
    UnsupportedTypeShape {
        parent: String,
        field: String,
        shape: String,
    },

    #[error("unknown type '{name}' referenced by field '{parent}.{field}'")]
    UnknownType {
        parent: String,
        field: String,
        name: String,
    },

    /// Raised by caller-supplied generation rules.
    #[error("{0}")]
    Rule(String),

    #[error(transparent)]
    Schema(#[from] Box<gqlts_schema::Error>),
}

impl Error {
    pub fn rule(message: impl Into<String>) -> Self {
        Self::Rule(message.into())
    }
}
