//! Core of the agent launcher
//!
//! Ties the filesystem and runtime layers into the bootstrap sequence that
//! brings the agent service online:
//!
//! - **Configuration**: launcher settings, the service's `.env`, and the
//!   template fallback
//! - **Bootstrap**: the ordered checks and the foreground launch
//! - **Health**: the `/health` contract and a probe for it
//!
//! ```text
//!        launch-cli
//!            |
//!       launch-core
//!        |        |
//! launch-runtime  |
//!        |        |
//!        launch-fs
//! ```

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod health;

pub use bootstrap::{Bootstrap, BootstrapReport, Prepared};
pub use config::{ConfigOrigin, EnvFile, LauncherConfig, ServiceSettings};
pub use error::{EXIT_CONFIG_MISSING, EXIT_RUNTIME_MISSING, Error, Result};
pub use health::{HealthReport, HealthResponse};
