//! Error types for launch-core

use std::path::PathBuf;

/// Result type for launch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for a missing virtual environment.
pub const EXIT_RUNTIME_MISSING: i32 = 2;
/// Exit code for a missing configuration with no template.
pub const EXIT_CONFIG_MISSING: i32 = 3;

/// Errors that can occur while bootstrapping the service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file absent and no template to seed it from
    #[error(
        "Configuration file {path} not found and no template at {template}.\n  \
         Create {path} with OPENAI_API_KEY, BACKEND_URL and PORT."
    )]
    ConfigMissing { path: PathBuf, template: PathBuf },

    /// `PORT` is not a usable TCP port
    #[error("Invalid PORT '{value}': {reason}")]
    InvalidPort { value: String, reason: String },

    /// `agent-launch.toml` could not be parsed
    #[error("Failed to parse launcher settings at {path}: {message}")]
    LauncherConfig { path: PathBuf, message: String },

    /// The health probe could not be issued at all
    #[error("Health probe for {url} failed: {message}")]
    HealthProbe { url: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from launch-fs
    #[error(transparent)]
    Fs(#[from] launch_fs::Error),

    /// Runtime error from launch-runtime
    #[error(transparent)]
    Runtime(#[from] launch_runtime::Error),
}

impl Error {
    /// Process exit code for this failure.
    ///
    /// The two fatal preconditions get distinct codes and an operator
    /// interrupt is a clean exit; everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Runtime(launch_runtime::Error::RuntimeMissing { .. }) => EXIT_RUNTIME_MISSING,
            Self::ConfigMissing { .. } => EXIT_CONFIG_MISSING,
            Self::Runtime(launch_runtime::Error::Interrupted { .. }) => 0,
            _ => 1,
        }
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Runtime(launch_runtime::Error::Interrupted { .. }))
    }
}
