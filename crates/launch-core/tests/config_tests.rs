//! Loading launcher settings and the service environment from disk.

use launch_core::config::{EnvFile, LauncherConfig, ServiceSettings, ensure_config};
use launch_core::{ConfigOrigin, Error};
use launch_fs::ProjectRoot;
use launch_test_utils::TestProject;
use launch_test_utils::project::SAMPLE_TEMPLATE;
use pretty_assertions::assert_eq;

#[test]
fn test_load_without_settings_file_uses_defaults() {
    let project = TestProject::new();
    let root = ProjectRoot::new(project.root()).unwrap();

    assert_eq!(LauncherConfig::load(&root).unwrap(), LauncherConfig::default());
}

#[test]
fn test_load_settings_file() {
    let project = TestProject::new();
    project.write("agent-launch.toml", "[service]\nhost = \"127.0.0.1\"\n");
    let root = ProjectRoot::new(project.root()).unwrap();

    let settings = LauncherConfig::load(&root).unwrap();
    assert_eq!(settings.service.host, "127.0.0.1");
}

#[test]
fn test_load_settings_error_names_file() {
    let project = TestProject::new();
    project.write("agent-launch.toml", "[service]\nport = 8000\n");
    let root = ProjectRoot::new(project.root()).unwrap();

    let err = LauncherConfig::load(&root).unwrap_err();
    assert!(matches!(err, Error::LauncherConfig { .. }));
    assert!(err.to_string().contains("agent-launch.toml"));
}

#[test]
fn test_template_seed_then_resolve() {
    let project = TestProject::new();
    project.with_template(SAMPLE_TEMPLATE);

    let origin = ensure_config(&project.path(".env"), &project.path(".env.example")).unwrap();
    assert!(matches!(origin, ConfigOrigin::FromTemplate { .. }));

    let env = EnvFile::load(&project.path(".env")).unwrap();
    let settings = ServiceSettings::resolve(&env, |_| None).unwrap();
    assert_eq!(settings.port, 8000);
    assert_eq!(settings.backend_url, "http://localhost:5000");
}

#[test]
fn test_second_ensure_keeps_seeded_file() {
    let project = TestProject::new();
    project.with_template(SAMPLE_TEMPLATE);
    let config = project.path(".env");
    let template = project.path(".env.example");

    ensure_config(&config, &template).unwrap();
    project.with_config("OPENAI_API_KEY=sk-edited\n");

    let origin = ensure_config(&config, &template).unwrap();
    assert_eq!(origin, ConfigOrigin::Existing);
    assert_eq!(project.read(".env"), "OPENAI_API_KEY=sk-edited\n");
}
