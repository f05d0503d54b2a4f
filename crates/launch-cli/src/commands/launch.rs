//! The bootstrap-and-launch command

use colored::Colorize;
use launch_core::health::{liveness_guidance, port_conflict_guidance};
use launch_core::{Bootstrap, ConfigOrigin};
use launch_fs::ProjectRoot;
use launch_runtime::VenvRuntime;

use crate::error::Result;

/// Bootstrap the service in `root` and run it in the foreground.
///
/// Returns the exit code the launcher should terminate with.
pub async fn run_launch(root: ProjectRoot) -> Result<i32> {
    root.enter()?;

    let bootstrap = Bootstrap::load(root, VenvRuntime::new())?;
    let prepared = match bootstrap.prepare().await {
        Ok(prepared) => prepared,
        Err(e) if e.is_interrupted() => {
            eprintln!("{}: {}", "interrupted".yellow().bold(), e);
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    if prepared.installed {
        println!(
            "{} Installed dependencies from {}",
            "+".green(),
            bootstrap.settings().runtime.manifest.cyan()
        );
    }

    if let ConfigOrigin::FromTemplate { template } = &prepared.config {
        eprintln!(
            "{}: created {} from {}",
            "warning".yellow().bold(),
            bootstrap.settings().config.file.cyan(),
            template.display()
        );
        eprintln!(
            "         Edit it and set real credentials (OPENAI_API_KEY) before the service will work."
        );
    }

    let port = prepared.launch.port;
    println!("{}", liveness_guidance(port));

    let outcome = bootstrap.launch(&prepared).await?;
    if !outcome.success() {
        eprintln!();
        eprintln!(
            "{}: service exited with code {}",
            "error".red().bold(),
            outcome.exit_code()
        );
        eprintln!("{}", port_conflict_guidance(port));
    }

    Ok(outcome.exit_code())
}
