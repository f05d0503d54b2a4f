//! CLI argument parsing using clap derive
//!
//! Both binaries take no arguments; clap supplies `--help` and `--version`.

use clap::Parser;

/// Bootstrap and run the agent service from the directory this binary lives in
///
/// Checks the virtual environment, installs missing dependencies, creates
/// .env from .env.example if needed, then runs the service on PORT
/// (default 8000) until it exits or is interrupted.
#[derive(Parser, Debug)]
#[command(name = "agent-launch")]
#[command(author, version, about)]
pub struct LaunchCli {}

/// Check that the agent service answers its /health endpoint
#[derive(Parser, Debug)]
#[command(name = "agent-health")]
#[command(author, version, about, long_about = None)]
pub struct HealthCli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        LaunchCli::command().debug_assert();
        HealthCli::command().debug_assert();
    }

    #[test]
    fn test_launch_takes_no_arguments() {
        assert!(LaunchCli::try_parse_from(["agent-launch"]).is_ok());
        assert!(LaunchCli::try_parse_from(["agent-launch", "serve"]).is_err());
        assert!(LaunchCli::try_parse_from(["agent-launch", "--port", "9000"]).is_err());
    }

    #[test]
    fn test_health_takes_no_arguments() {
        assert!(HealthCli::try_parse_from(["agent-health"]).is_ok());
        assert!(HealthCli::try_parse_from(["agent-health", "extra"]).is_err());
    }
}
