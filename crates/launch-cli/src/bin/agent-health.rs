//! `agent-health`: probe the agent service's health endpoint.

use clap::Parser;
use colored::Colorize;
use launch_cli::cli::HealthCli;
use launch_cli::{commands, logging};
use launch_fs::ProjectRoot;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = HealthCli::parse();
    let _ = logging::init();

    let result = match ProjectRoot::discover() {
        Ok(root) => commands::run_health(root).await,
        Err(e) => Err(e.into()),
    };

    let code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}
