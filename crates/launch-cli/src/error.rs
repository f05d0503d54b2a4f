//! Error types for launch-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from launch-core
    #[error(transparent)]
    Core(#[from] launch_core::Error),

    /// Error from launch-fs
    #[error(transparent)]
    Fs(#[from] launch_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(e) => e.exit_code(),
            Self::Fs(_) | Self::Io(_) => 1,
        }
    }
}
