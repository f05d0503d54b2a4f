//! [`TestProject`] builder for launcher test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::TempDir;

/// Template content matching what a fresh checkout ships.
pub const SAMPLE_TEMPLATE: &str = "\
# Copy to .env and fill in real values
OPENAI_API_KEY=your_openai_api_key_here
BACKEND_URL=http://localhost:5000
PORT=8000
";

/// A temporary service project directory.
///
/// # Example
///
/// ```rust,no_run
/// use launch_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.with_venv().with_template(launch_test_utils::project::SAMPLE_TEMPLATE);
/// project.assert_file_not_exists(".env");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty project directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Root path of the project.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of a project-relative file.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to a project-relative file, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        self
    }

    /// Read a project-relative file.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }

    /// Last modification time of a project-relative file.
    pub fn modified(&self, relative: &str) -> SystemTime {
        fs::metadata(self.path(relative))
            .and_then(|m| m.modified())
            .unwrap()
    }

    /// Relative path of the interpreter inside `venv/`.
    pub fn interpreter_path() -> &'static str {
        if cfg!(windows) {
            "venv/Scripts/python.exe"
        } else {
            "venv/bin/python"
        }
    }

    /// Create `venv/` with a placeholder interpreter file.
    ///
    /// Enough for presence checks; nothing can execute it.
    pub fn with_venv(&self) -> &Self {
        self.write(Self::interpreter_path(), "")
    }

    /// Create `venv/` whose interpreter is a shell script with `body`.
    ///
    /// Realism level: STAND-IN. It executes and records what it is asked to do,
    /// but is not Python.
    #[cfg(unix)]
    pub fn with_stand_in_interpreter(&self, body: &str) -> &Self {
        use std::os::unix::fs::PermissionsExt;

        let relative = Self::interpreter_path();
        self.write(relative, &format!("#!/bin/sh\n{body}\n"));
        fs::set_permissions(self.path(relative), fs::Permissions::from_mode(0o755)).unwrap();
        self
    }

    pub fn with_config(&self, content: &str) -> &Self {
        self.write(".env", content)
    }

    pub fn with_template(&self, content: &str) -> &Self {
        self.write(".env.example", content)
    }

    pub fn with_manifest(&self, content: &str) -> &Self {
        self.write("requirements.txt", content)
    }

    /// Assert that `path` (relative to the project root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the project root) does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.path(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            path,
            content,
            file_content
        );
    }
}
