//! `gqlts.toml` project configuration.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
    sync::Arc,
};

use gqlts_codegen::{Generators, ast::TypeAlias, defaults};
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG: &str = "gqlts.toml";

/// Result type for config loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<ConfigError>>;

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create it or pass a different path with --config"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    #[diagnostic(code(gqlts::config))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `gqlts.toml`. Every key is optional.
///
/// ```toml
/// schema = "schema.graphql"
/// module_name = "types"
/// output = "src/generated"
///
/// [scalars]
/// AWSDateTime = "Date"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub schema: Option<PathBuf>,
    pub module_name: Option<String>,
    pub output: Option<PathBuf>,
    /// Custom scalar name to TypeScript type.
    #[serde(default)]
    pub scalars: BTreeMap<String, String>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: PathBuf,
}

impl Config {
    /// Load the given config file, or `gqlts.toml` if it exists.
    ///
    /// An explicitly given file must exist; a missing default file yields
    /// the default config.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::open(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::open(Path::new(DEFAULT_CONFIG)),
            None => Ok(Self::default()),
        }
    }

    pub fn open(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|source| {
            Box::new(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let mut config = Self::parse(&src, &path.display().to_string())?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    fn parse(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|source: toml::de::Error| {
            let span = source.span().map(SourceSpan::from);
            Box::new(ConfigError::Parse {
                src: NamedSource::new(filename, src.to_string()),
                span,
                source,
            })
        })
    }

    /// Resolve a path from the config against the config file's directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn schema_path(&self) -> Option<PathBuf> {
        self.schema.as_deref().map(|p| self.resolve(p))
    }

    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output.as_deref().map(|p| self.resolve(p))
    }

    /// Rule overrides for the `[scalars]` table.
    ///
    /// A mapped scalar is referenced as its mapped type, and a mapped custom
    /// scalar is declared as an alias of it. All other rules stay default.
    pub fn generators(&self) -> Generators {
        if self.scalars.is_empty() {
            return Generators::new();
        }

        let scalars = Arc::new(self.scalars.clone());
        let aliases = Arc::clone(&scalars);

        Generators::new()
            .scalar(move |ty, ctx| match scalars.get(&ty.name) {
                Some(mapped) => Ok(mapped.clone()),
                None => defaults::scalar(ty, ctx),
            })
            .scalar_def(move |ty, ctx| match aliases.get(&ty.name) {
                Some(mapped) if !ty.is_standard() => Ok(TypeAlias::new(&ty.name, mapped).build()),
                _ => defaults::scalar_def(ty, ctx),
            })
    }
}

impl FromStr for Config {
    type Err = Box<ConfigError>;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, DEFAULT_CONFIG)
    }
}
