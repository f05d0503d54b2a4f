//! Runtime environment handling for the agent launcher.
//!
//! Locates the project's Python virtual environment, computes the
//! process-scoped activation for children, probes for and installs missing
//! dependencies, and runs the service in the foreground.

pub mod error;
pub mod installer;
pub mod interrupt;
pub mod provider;
pub mod venv;

pub use error::{Error, Result};
pub use interrupt::Interrupts;
pub use provider::{LaunchOutcome, LaunchSpec, ServiceRuntime, VenvRuntime};
pub use venv::{Activation, DEFAULT_VENV_DIR, VirtualEnv, creation_command};
