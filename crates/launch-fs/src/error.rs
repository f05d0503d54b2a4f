//! Error types for launch-fs

use std::path::PathBuf;

/// Result type for launch-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in launch-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not locate the launcher executable: {0}")]
    ExecutableUnknown(#[source] std::io::Error),

    #[error("Project root {path} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
