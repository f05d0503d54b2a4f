//! Filesystem helpers for the agent launcher
//!
//! Resolves the project root the launcher operates in and provides the
//! atomic write/copy primitives used when seeding configuration files.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::{ProjectRoot, ROOT_OVERRIDE_VAR};
