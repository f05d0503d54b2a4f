//! The health probe command

use colored::Colorize;
use launch_core::config::{EnvFile, LauncherConfig, ServiceSettings};
use launch_core::health::{self, DEFAULT_TIMEOUT};
use launch_fs::ProjectRoot;

use crate::error::Result;

/// Probe the service configured in `root`.
///
/// Returns `0` when the service reports healthy, `1` otherwise.
pub async fn run_health(root: ProjectRoot) -> Result<i32> {
    let settings = LauncherConfig::load(&root)?;

    // A project that was never bootstrapped still has a default port to try
    let config_path = root.join(&settings.config.file);
    let env_file = if config_path.is_file() {
        EnvFile::load(&config_path)?
    } else {
        EnvFile::default()
    };
    let service = ServiceSettings::from_env(&env_file)?;

    let url = health::health_url(service.port);
    let report = health::probe(&url, DEFAULT_TIMEOUT).await?;

    if report.is_healthy() {
        println!("{} {} is {}", "+".green(), url.cyan(), "healthy".green());
        Ok(0)
    } else {
        eprintln!("{}: {} {}", "unhealthy".red().bold(), url, report);
        Ok(1)
    }
}
