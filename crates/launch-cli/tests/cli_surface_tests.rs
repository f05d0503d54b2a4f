//! Integration tests for the argument surface of both binaries

use assert_cmd::Command;
use launch_test_utils::TestProject;
use predicates::prelude::*;

fn launch_cmd() -> Command {
    Command::cargo_bin("agent-launch").expect("Failed to find agent-launch binary")
}

fn health_cmd() -> Command {
    Command::cargo_bin("agent-health").expect("Failed to find agent-health binary")
}

#[test]
fn test_launch_version() {
    launch_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agent-launch"));
}

#[test]
fn test_launch_help_describes_bootstrap() {
    launch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("virtual environment"))
        .stdout(predicate::str::contains(".env.example"));
}

#[test]
fn test_launch_rejects_flags() {
    launch_cmd()
        .args(["--port", "9000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}

#[test]
fn test_health_help() {
    health_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("/health"));
}

#[test]
fn test_launch_bad_root_override() {
    let project = TestProject::new();
    launch_cmd()
        .env("AGENT_LAUNCH_ROOT", project.path("does-not-exist"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_launch_malformed_settings() {
    let project = TestProject::new();
    project.with_venv().write("agent-launch.toml", "[runtime]\nfolder = \"venv\"\n");

    launch_cmd()
        .env("AGENT_LAUNCH_ROOT", project.root())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("agent-launch.toml"));
}
