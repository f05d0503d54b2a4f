//! Error types for launch-runtime

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] launch_fs::Error),

    #[error("Virtual environment not found at {path}. Create it first:\n  {remedy}")]
    RuntimeMissing { path: PathBuf, remedy: String },

    #[error("Dependency manifest not found at {path}; cannot install missing dependencies")]
    ManifestMissing { path: PathBuf },

    #[error("Dependency installation failed{}: {command}\n  Check the output above for details.", exit_suffix(*.exit_code))]
    InstallFailed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid probe module name '{module}'")]
    InvalidProbe { module: String },

    #[error("Interrupted while {activity}")]
    Interrupted { activity: &'static str },
}

fn exit_suffix(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => String::new(),
    }
}

impl Error {
    pub fn spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Spawn {
            program: program.into(),
            source,
        }
    }
}
