//! The bootstrap sequence
//!
//! Brings the service online in a fixed order, stopping at the first fatal
//! precondition:
//!
//! 1. locate the virtual environment (fatal if absent)
//! 2. activate it for every child the launcher starts
//! 3. probe for the required library, installing the manifest once if the
//!    probe fails
//! 4. ensure the configuration file exists, seeding it from the template
//!    (fatal if neither exists)
//! 5. launch the service in the foreground on the configured port
//!
//! Steps 1-4 are [`Bootstrap::prepare`]; step 5 is [`Bootstrap::launch`].

use launch_fs::ProjectRoot;
use launch_runtime::{LaunchOutcome, LaunchSpec, ServiceRuntime, VirtualEnv};

use crate::Result;
use crate::config::{ConfigOrigin, EnvFile, LauncherConfig, ServiceSettings, ensure_config};

type EnvLookup = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Everything established before launch.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub env: VirtualEnv,
    /// Whether the manifest had to be installed during this run
    pub installed: bool,
    pub config: ConfigOrigin,
    pub service: ServiceSettings,
    pub launch: LaunchSpec,
}

/// A completed bootstrap run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub prepared: Prepared,
    pub outcome: LaunchOutcome,
}

/// Drives the bootstrap sequence against a [`ServiceRuntime`].
pub struct Bootstrap<R> {
    root: ProjectRoot,
    settings: LauncherConfig,
    runtime: R,
    process_env: EnvLookup,
}

impl<R: ServiceRuntime> Bootstrap<R> {
    pub fn new(root: ProjectRoot, settings: LauncherConfig, runtime: R) -> Self {
        Self {
            root,
            settings,
            runtime,
            process_env: Box::new(|key| std::env::var(key).ok()),
        }
    }

    /// Create a bootstrap with settings read from the project's
    /// `agent-launch.toml`, if any.
    pub fn load(root: ProjectRoot, runtime: R) -> Result<Self> {
        let settings = LauncherConfig::load(&root)?;
        Ok(Self::new(root, settings, runtime))
    }

    /// Replace the process-environment lookup used when resolving `PORT`
    /// and `BACKEND_URL`.
    pub fn with_process_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.process_env = Box::new(lookup);
        self
    }

    pub fn root(&self) -> &ProjectRoot {
        &self.root
    }

    pub fn settings(&self) -> &LauncherConfig {
        &self.settings
    }

    /// Run every step up to, but not including, the launch.
    pub async fn prepare(&self) -> Result<Prepared> {
        let runtime_settings = &self.settings.runtime;

        let env = VirtualEnv::locate(&self.root, &runtime_settings.dir)?;
        tracing::debug!(venv = %env.root().display(), "Virtual environment activated for child processes");

        let installed = self.ensure_dependencies(&env).await?;

        let config_path = self.root.join(&self.settings.config.file);
        let template_path = self.root.join(&self.settings.config.template);
        let config = ensure_config(&config_path, &template_path)?;

        let env_file = EnvFile::load(&config_path)?;
        let service = ServiceSettings::resolve(&env_file, &self.process_env)?;

        let service_settings = &self.settings.service;
        let launch = LaunchSpec {
            module: service_settings.module.clone(),
            app: service_settings.app.clone(),
            host: service_settings.host.clone(),
            port: service.port,
            working_dir: self.root.path().to_path_buf(),
            env: service.child_env(),
        };

        Ok(Prepared {
            env,
            installed,
            config,
            service,
            launch,
        })
    }

    /// Probe once; on failure install the manifest once and move on.
    async fn ensure_dependencies(&self, env: &VirtualEnv) -> Result<bool> {
        let probe = &self.settings.runtime.probe;
        if self.runtime.has_library(env, probe).await? {
            tracing::debug!(module = %probe, "Dependencies present");
            return Ok(false);
        }

        let manifest = self.root.join(&self.settings.runtime.manifest);
        tracing::info!(
            module = %probe,
            manifest = %manifest.display(),
            "Required library missing, installing dependencies"
        );
        self.runtime.install(env, &manifest).await?;
        Ok(true)
    }

    /// Run the service in the foreground until it exits or is interrupted.
    pub async fn launch(&self, prepared: &Prepared) -> Result<LaunchOutcome> {
        let outcome = self.runtime.launch(&prepared.env, &prepared.launch).await?;
        tracing::debug!(?outcome, "Launch finished");
        Ok(outcome)
    }

    /// [`prepare`](Self::prepare) followed by [`launch`](Self::launch).
    pub async fn run(&self) -> Result<BootstrapReport> {
        let prepared = self.prepare().await?;
        let outcome = self.launch(&prepared).await?;
        Ok(BootstrapReport { prepared, outcome })
    }
}
