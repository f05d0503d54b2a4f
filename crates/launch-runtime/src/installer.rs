//! Dependency probing and installation.
//!
//! Both operations run the virtual environment's own interpreter so the
//! answer and the install target are always the environment itself, never
//! a system-wide Python.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{Error, Result};
use crate::interrupt::{Interrupts, Supervised, supervise};
use crate::venv::VirtualEnv;

/// Module imported when the launcher settings do not override it.
pub const DEFAULT_PROBE_MODULE: &str = "fastapi";

/// Manifest installed when the launcher settings do not override it.
pub const DEFAULT_MANIFEST: &str = "requirements.txt";

/// Check that `module` is a dotted Python identifier path.
///
/// The probe is interpolated into `python -c`, so anything else is refused.
pub fn validate_module_name(module: &str) -> Result<()> {
    let valid = !module.is_empty()
        && module.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        });
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidProbe {
            module: module.to_string(),
        })
    }
}

/// Returns whether `module` imports cleanly inside `env`.
///
/// Import errors are an answer (`false`), not a failure; only a failure to
/// start the interpreter at all is returned as [`Error::Spawn`].
pub async fn library_available(env: &VirtualEnv, module: &str) -> Result<bool> {
    validate_module_name(module)?;

    let python = env.python();
    let mut cmd = Command::new(&python);
    cmd.arg("-c")
        .arg(format!("import {module}"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    env.activation().apply(&mut cmd);

    let status = cmd
        .status()
        .await
        .map_err(|e| Error::spawn(&python, e))?;

    tracing::debug!(module, available = status.success(), "Probed dependency");
    Ok(status.success())
}

/// The command line shown to operators for installing `manifest`.
pub fn install_command_line(manifest: &Path) -> String {
    format!("python -m pip install -r {}", manifest.display())
}

/// Install every requirement listed in `manifest` into `env`.
///
/// Runs `python -m pip install -r <manifest>` with stdout and stderr
/// inherited so progress and resolver errors stream to the console. An
/// operator interrupt is passed on to pip and reported as
/// [`Error::Interrupted`].
pub async fn install_manifest(
    env: &VirtualEnv,
    manifest: &Path,
    interrupts: &mut Interrupts,
) -> Result<()> {
    if !manifest.is_file() {
        return Err(Error::ManifestMissing {
            path: manifest.to_path_buf(),
        });
    }

    let python = env.python();
    let mut cmd = Command::new(&python);
    cmd.args(["-m", "pip", "install", "-r"])
        .arg(manifest)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = manifest.parent().filter(|p| !p.as_os_str().is_empty()) {
        cmd.current_dir(dir);
    }
    env.activation().apply(&mut cmd);

    if interrupts.take_pending().await {
        return Err(Error::Interrupted {
            activity: "installing dependencies",
        });
    }

    tracing::info!(manifest = %manifest.display(), "Installing dependencies");
    let mut child = cmd.spawn().map_err(|e| Error::spawn(&python, e))?;

    match supervise(&mut child, &python, interrupts).await? {
        Supervised::Exited(status) if status.success() => Ok(()),
        Supervised::Exited(status) => Err(Error::InstallFailed {
            command: install_command_line(manifest),
            exit_code: status.code(),
        }),
        Supervised::Interrupted => Err(Error::Interrupted {
            activity: "installing dependencies",
        }),
    }
}
