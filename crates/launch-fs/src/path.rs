//! Project root resolution
//!
//! The launcher always operates relative to the directory it lives in,
//! regardless of the caller's working directory.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable that overrides the executable-derived project root.
pub const ROOT_OVERRIDE_VAR: &str = "AGENT_LAUNCH_ROOT";

/// Canonical directory the launcher operates in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRoot {
    path: PathBuf,
}

impl ProjectRoot {
    /// Create a root from an existing directory.
    ///
    /// The path is canonicalized with `dunce` so that Windows roots never
    /// carry the `\\?\` verbatim prefix into child process arguments.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let canonical = dunce::canonicalize(path).map_err(|e| Error::io(path, e))?;
        if !canonical.is_dir() {
            return Err(Error::NotADirectory { path: canonical });
        }
        Ok(Self { path: canonical })
    }

    /// Resolve the root from the directory containing the running executable.
    pub fn from_executable() -> Result<Self> {
        let exe = std::env::current_exe().map_err(Error::ExecutableUnknown)?;
        let dir = exe.parent().ok_or_else(|| Error::NotADirectory {
            path: exe.clone(),
        })?;
        Self::new(dir)
    }

    /// Resolve the root, honouring [`ROOT_OVERRIDE_VAR`] when set.
    pub fn discover() -> Result<Self> {
        Self::discover_with(std::env::var_os(ROOT_OVERRIDE_VAR))
    }

    /// Resolve the root from an explicit override value.
    ///
    /// Empty overrides are treated as unset.
    pub fn discover_with(override_dir: Option<OsString>) -> Result<Self> {
        match override_dir.filter(|v| !v.is_empty()) {
            Some(dir) => {
                tracing::debug!(root = ?dir, "Using project root override");
                Self::new(PathBuf::from(dir))
            }
            None => Self::from_executable(),
        }
    }

    /// The canonical root path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a project-relative name against the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.path.join(relative)
    }

    /// Make the root the process working directory.
    pub fn enter(&self) -> Result<()> {
        std::env::set_current_dir(&self.path).map_err(|e| Error::io(&self.path, e))?;
        tracing::debug!(root = %self, "Entered project root");
        Ok(())
    }
}

impl AsRef<Path> for ProjectRoot {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
