//! Command implementations

mod health;
mod launch;

pub use health::run_health;
pub use launch::run_launch;
