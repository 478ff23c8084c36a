//! Error handling for the command-line host

use guess_core::{DataError, ParseError};
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Decklist error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl CliError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit code, loosely following sysexits.h.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::BadRequest(_) => 64,
            CliError::Data(_) | CliError::Parse(_) => 65,
            CliError::NotFound(_) => 66,
            CliError::Io { .. } => 74,
            CliError::Config(_) => 78,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
