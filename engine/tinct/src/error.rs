//! CLI errors.

use std::path::PathBuf;

use thiserror::Error;
use tinct_core::GrammarError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("no input files")]
    NoInput,

    #[error("invalid built-in grammar: {0}")]
    Grammar(#[from] GrammarError),

    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map an I/O failure on `path` to the matching variant.
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}
