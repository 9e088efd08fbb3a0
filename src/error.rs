//! Unified error type for the gistub CLI.
//!
//! Bridges engine errors and IO failures into one type with stable exit
//! codes:
//! - `2`: invalid arguments (bad input from caller)
//! - `3`: graph errors (unreadable or unparseable metadata graph)
//! - `4`: generation errors (emission aborted, stub could not be written)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use gistub_gi::EmitError;

#[derive(Debug, Error)]
pub enum GistubError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// The metadata graph file could not be read.
    #[error("failed to read metadata graph {path}: {source}")]
    GraphRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The metadata graph file is not valid graph JSON.
    #[error("failed to parse metadata graph {path}: {source}")]
    GraphParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Stub emission aborted.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// A stub file or package marker could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GistubError {
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        GistubError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Stable CLI exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            GistubError::InvalidArguments { .. } => 2,
            GistubError::GraphRead { .. } | GistubError::GraphParse { .. } => 3,
            GistubError::Emit(_) | GistubError::Write { .. } => 4,
        }
    }
}
