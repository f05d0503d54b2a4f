//! Agent launcher CLI
//!
//! Shared pieces of the `agent-launch` and `agent-health` binaries.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
