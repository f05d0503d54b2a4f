//! Launcher and service configuration
//!
//! - [`LauncherConfig`]: optional `agent-launch.toml`, names the files and
//!   command the bootstrap uses
//! - [`EnvFile`] / [`ServiceSettings`]: the service's `.env` and the values
//!   the launcher reads from it
//! - [`ensure_config`]: presence check with template fallback

mod ensure;
mod env_file;
pub mod service;
mod settings;

pub use ensure::{ConfigOrigin, ensure_config};
pub use env_file::EnvFile;
pub use service::{DEFAULT_BACKEND_URL, DEFAULT_PORT, ServiceSettings, parse_port};
pub use settings::{
    ConfigSection, LAUNCHER_CONFIG_FILE, LauncherConfig, RuntimeSection, ServiceSection,
};
