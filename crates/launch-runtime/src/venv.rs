//! Python virtual environment discovery and activation

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use launch_fs::ProjectRoot;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Directory name used when the launcher settings do not override it.
pub const DEFAULT_VENV_DIR: &str = "venv";

/// The command an operator runs to create the environment at `dir_name`.
pub fn creation_command(dir_name: &str) -> String {
    if cfg!(windows) {
        format!("python -m venv {dir_name}")
    } else {
        format!("python3 -m venv {dir_name}")
    }
}

/// A Python virtual environment on disk.
///
/// The environment is owned by an external tool; the launcher only reads
/// it, and adds packages to it through its own interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    /// Point at an environment without checking that it exists.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Locate the environment `dir_name` under the project root.
    ///
    /// Fails with [`Error::RuntimeMissing`] unless the environment's
    /// interpreter exists; a bare directory is not enough.
    pub fn locate(project: &ProjectRoot, dir_name: &str) -> Result<Self> {
        let env = Self::at(project.join(dir_name));
        if !env.is_present() {
            return Err(Error::RuntimeMissing {
                path: env.root,
                remedy: creation_command(dir_name),
            });
        }
        tracing::debug!(venv = %env.root.display(), "Found virtual environment");
        Ok(env)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `bin/` on Unix, `Scripts/` on Windows.
    pub fn scripts_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    /// Path to the environment's interpreter.
    pub fn python(&self) -> PathBuf {
        if cfg!(windows) {
            self.scripts_dir().join("python.exe")
        } else {
            self.scripts_dir().join("python")
        }
    }

    pub fn is_present(&self) -> bool {
        self.python().is_file()
    }

    /// Compute the activation against the current process `PATH`.
    pub fn activation(&self) -> Activation {
        self.activation_with_path(std::env::var_os("PATH"))
    }

    /// Compute the activation against an explicit base `PATH`.
    pub fn activation_with_path(&self, base_path: Option<OsString>) -> Activation {
        let mut entries = vec![self.scripts_dir()];
        if let Some(base) = base_path.as_deref() {
            entries.extend(std::env::split_paths(base));
        }
        // split_paths only fails on entries containing the separator, which
        // the scripts dir never does; fall back to the dir alone regardless.
        let path = std::env::join_paths(&entries)
            .unwrap_or_else(|_| self.scripts_dir().into_os_string());

        Activation {
            set: vec![
                ("VIRTUAL_ENV".to_string(), self.root.clone().into_os_string()),
                ("PATH".to_string(), path),
            ],
            removed: vec!["PYTHONHOME".to_string()],
        }
    }
}

/// Environment changes that activate a virtual environment for a child.
///
/// Applied per child process; the launcher's own environment is never
/// mutated, so nothing outlives the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    set: Vec<(String, OsString)>,
    removed: Vec<String>,
}

impl Activation {
    /// Value this activation assigns to `key`, if any.
    pub fn get(&self, key: &str) -> Option<&OsStr> {
        self.set
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_os_str())
    }

    /// Whether this activation clears `key` from the child's environment.
    pub fn removes(&self, key: &str) -> bool {
        self.removed.iter().any(|k| k == key)
    }

    pub fn apply(&self, cmd: &mut Command) {
        for key in &self.removed {
            cmd.env_remove(key);
        }
        for (key, value) in &self.set {
            cmd.env(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fake_venv(root: &Path, dir_name: &str) {
        let env = VirtualEnv::at(root.join(dir_name));
        fs::create_dir_all(env.scripts_dir()).unwrap();
        fs::write(env.python(), "").unwrap();
    }

    #[test]
    fn test_locate_missing_reports_remedy() {
        let temp = TempDir::new().unwrap();
        let project = ProjectRoot::new(temp.path()).unwrap();

        let err = VirtualEnv::locate(&project, "venv").unwrap_err();
        match err {
            Error::RuntimeMissing { path, remedy } => {
                assert!(path.ends_with("venv"));
                assert!(remedy.ends_with("-m venv venv"));
            }
            other => panic!("expected RuntimeMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_directory_without_interpreter_is_missing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("venv")).unwrap();
        let project = ProjectRoot::new(temp.path()).unwrap();

        assert!(matches!(
            VirtualEnv::locate(&project, "venv"),
            Err(Error::RuntimeMissing { .. })
        ));
    }

    #[test]
    fn test_locate_custom_dir_name() {
        let temp = TempDir::new().unwrap();
        fake_venv(temp.path(), ".venv");
        let project = ProjectRoot::new(temp.path()).unwrap();

        let env = VirtualEnv::locate(&project, ".venv").unwrap();
        assert_eq!(env.root(), project.join(".venv"));
        assert!(env.is_present());
    }

    #[test]
    fn test_activation_prepends_scripts_dir() {
        let env = VirtualEnv::at("/srv/agent/venv");
        let base = std::env::join_paths(["/usr/local/bin", "/usr/bin"]).unwrap();

        let activation = env.activation_with_path(Some(base));

        let path = activation.get("PATH").unwrap();
        let entries: Vec<PathBuf> = std::env::split_paths(path).collect();
        assert_eq!(entries[0], env.scripts_dir());
        assert_eq!(entries.len(), 3);
        assert_eq!(
            activation.get("VIRTUAL_ENV"),
            Some(OsStr::new("/srv/agent/venv"))
        );
        assert!(activation.removes("PYTHONHOME"));
    }

    #[test]
    fn test_activation_without_base_path() {
        let env = VirtualEnv::at("/srv/agent/venv");
        let activation = env.activation_with_path(None);

        let entries: Vec<PathBuf> =
            std::env::split_paths(activation.get("PATH").unwrap()).collect();
        assert_eq!(entries, vec![env.scripts_dir()]);
    }

    #[test]
    fn test_creation_command_uses_dir_name() {
        assert!(creation_command("env").ends_with("-m venv env"));
    }
}
