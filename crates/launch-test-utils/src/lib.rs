//! Shared test utilities for the agent-launcher workspace.
//!
//! This crate provides the [`TestProject`] fixture used by every crate's
//! test suite. It is a dev-dependency only and is never published.

pub mod project;

pub use project::TestProject;
