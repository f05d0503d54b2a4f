//! Launcher settings from `agent-launch.toml`
//!
//! Every field has a default, so a project without the file gets the
//! conventional layout: `venv/`, `requirements.txt`, `.env`, `.env.example`
//! and `uvicorn app:app`.

use launch_fs::ProjectRoot;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// File name of the optional launcher settings in the project root.
pub const LAUNCHER_CONFIG_FILE: &str = "agent-launch.toml";

/// `[runtime]` table: the virtual environment and its dependencies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeSection {
    /// Virtual environment directory, relative to the project root
    pub dir: String,
    /// Dependency manifest installed when the probe fails
    pub manifest: String,
    /// Module whose import decides whether dependencies are installed
    pub probe: String,
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            dir: launch_runtime::DEFAULT_VENV_DIR.to_string(),
            manifest: launch_runtime::installer::DEFAULT_MANIFEST.to_string(),
            probe: launch_runtime::installer::DEFAULT_PROBE_MODULE.to_string(),
        }
    }
}

/// `[config]` table: the service's environment file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigSection {
    pub file: String,
    pub template: String,
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            file: ".env".to_string(),
            template: ".env.example".to_string(),
        }
    }
}

/// `[service]` table: how the service is started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSection {
    pub module: String,
    pub app: String,
    pub host: String,
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            module: "uvicorn".to_string(),
            app: "app:app".to_string(),
            host: "0.0.0.0".to_string(),
        }
    }
}

/// Parsed `agent-launch.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LauncherConfig {
    pub runtime: RuntimeSection,
    pub config: ConfigSection,
    pub service: ServiceSection,
}

impl LauncherConfig {
    /// Parse settings from TOML content.
    ///
    /// ```
    /// use launch_core::config::LauncherConfig;
    ///
    /// let settings = LauncherConfig::parse("[runtime]\ndir = \".venv\"\n").unwrap();
    /// assert_eq!(settings.runtime.dir, ".venv");
    /// assert_eq!(settings.config.file, ".env");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::LauncherConfig {
            path: LAUNCHER_CONFIG_FILE.into(),
            message: e.to_string(),
        })
    }

    /// Load settings from the project root, falling back to defaults when
    /// the file does not exist.
    pub fn load(root: &ProjectRoot) -> Result<Self> {
        let path = root.join(LAUNCHER_CONFIG_FILE);
        if !path.is_file() {
            tracing::debug!("No {LAUNCHER_CONFIG_FILE}, using defaults");
            return Ok(Self::default());
        }

        let content = launch_fs::io::read_text(&path)?;
        toml::from_str(&content).map_err(|e| Error::LauncherConfig {
            path,
            message: e.to_string(),
        })
    }
}
