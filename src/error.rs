//! Error types for a seed run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SeedError>;

/// Coarse classification of a failed run, one per pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Connection,
    Parse,
    Insert,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to connect to MongoDB: {source}")]
    Connection {
        #[source]
        source: mongodb::error::Error,
    },

    #[error("dataset file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read dataset file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse dataset: {message}")]
    Parse { message: String },

    #[error("bulk insert failed: {source}")]
    Insert {
        #[source]
        source: mongodb::error::Error,
    },
}

impl SeedError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Config,
            Self::Connection { .. } => ErrorKind::Connection,
            // Anything the loader raises counts as a parse-stage failure.
            Self::FileNotFound { .. } | Self::Read { .. } | Self::Parse { .. } => ErrorKind::Parse,
            Self::Insert { .. } => ErrorKind::Insert,
        }
    }
}
