//! `agent-launch`: bootstrap and run the agent service.

use clap::Parser;
use colored::Colorize;
use launch_cli::cli::LaunchCli;
use launch_cli::error::Result;
use launch_cli::{commands, logging};
use launch_fs::ProjectRoot;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = LaunchCli::parse();
    let _ = logging::init();

    let code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<i32> {
    let root = ProjectRoot::discover()?;
    tracing::debug!(root = %root, "Resolved project root");
    commands::run_launch(root).await
}
