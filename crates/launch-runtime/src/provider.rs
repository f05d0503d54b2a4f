//! ServiceRuntime trait and the virtual-environment implementation

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::installer;
use crate::interrupt::{Interrupts, Supervised, supervise};
use crate::venv::VirtualEnv;

/// How to start the service inside the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec {
    /// Module run with `python -m` (e.g. `uvicorn`)
    pub module: String,
    /// Application target handed to the module (e.g. `app:app`)
    pub app: String,
    pub host: String,
    pub port: u16,
    pub working_dir: PathBuf,
    /// Extra variables exported to the service
    pub env: Vec<(String, String)>,
}

impl LaunchSpec {
    /// Interpreter arguments: `-m <module> <app> --host <host> --port <port>`.
    pub fn args(&self) -> Vec<String> {
        vec![
            "-m".to_string(),
            self.module.clone(),
            self.app.clone(),
            "--host".to_string(),
            self.host.clone(),
            "--port".to_string(),
            self.port.to_string(),
        ]
    }
}

/// How a foreground launch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The service exited on its own. `code` is `None` when it was killed
    /// by a signal.
    Exited { code: Option<i32> },
    /// The operator interrupted the launcher, or the service died from
    /// SIGINT.
    Interrupted,
}

impl LaunchOutcome {
    pub fn success(&self) -> bool {
        matches!(self, Self::Interrupted | Self::Exited { code: Some(0) })
    }

    /// Exit code the launcher should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 0,
            Self::Exited { code: Some(code) } => *code,
            Self::Exited { code: None } => 1,
        }
    }
}

/// Operations the bootstrap sequence needs from a runtime environment.
#[async_trait]
pub trait ServiceRuntime: Send + Sync {
    /// Whether `module` can be imported inside `env`.
    async fn has_library(&self, env: &VirtualEnv, module: &str) -> Result<bool>;

    /// Install everything listed in `manifest` into `env`.
    async fn install(&self, env: &VirtualEnv, manifest: &Path) -> Result<()>;

    /// Run the service in the foreground until it exits or is interrupted.
    async fn launch(&self, env: &VirtualEnv, spec: &LaunchSpec) -> Result<LaunchOutcome>;
}

/// [`ServiceRuntime`] backed by real child processes.
///
/// The first call starts listening for interrupts, so an interrupt during
/// the install or the launch is passed on to that child instead of
/// terminating the launcher.
#[derive(Debug, Default)]
pub struct VenvRuntime {
    interrupts: Mutex<Interrupts>,
}

impl VenvRuntime {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ServiceRuntime for VenvRuntime {
    async fn has_library(&self, env: &VirtualEnv, module: &str) -> Result<bool> {
        self.interrupts.lock().await.arm();
        installer::library_available(env, module).await
    }

    async fn install(&self, env: &VirtualEnv, manifest: &Path) -> Result<()> {
        let mut interrupts = self.interrupts.lock().await;
        interrupts.arm();
        installer::install_manifest(env, manifest, &mut interrupts).await
    }

    async fn launch(&self, env: &VirtualEnv, spec: &LaunchSpec) -> Result<LaunchOutcome> {
        let mut interrupts = self.interrupts.lock().await;
        interrupts.arm();
        if interrupts.take_pending().await {
            return Ok(LaunchOutcome::Interrupted);
        }

        let python = env.python();
        let mut cmd = Command::new(&python);
        cmd.args(spec.args())
            .current_dir(&spec.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        env.activation().apply(&mut cmd);
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().map_err(|e| Error::spawn(&python, e))?;
        tracing::info!(pid = child.id(), port = spec.port, app = %spec.app, "Service started");

        match supervise(&mut child, &python, &mut interrupts).await? {
            Supervised::Exited(status) => {
                tracing::debug!(?status, "Service exited");
                Ok(LaunchOutcome::Exited {
                    code: status.code(),
                })
            }
            Supervised::Interrupted => Ok(LaunchOutcome::Interrupted),
        }
    }
}
