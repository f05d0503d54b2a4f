//! Reader for the service's `.env` file
//!
//! The launcher only ever reads this file. It is owned by the operator and
//! by the service itself, which loads it again on startup.

use std::path::Path;

use crate::Result;

/// Ordered `KEY=value` entries from an environment file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Parse environment file content.
    ///
    /// Accepts blank lines, `#` comments, an optional `export ` prefix,
    /// matching single or double quotes around values, and trailing
    /// `# comments` on unquoted values. Lines without `=` are ignored.
    pub fn parse(content: &str) -> Self {
        let mut entries = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").map(str::trim_start).unwrap_or(line);

            let Some((key, value)) = line.split_once('=') else {
                tracing::debug!(line = index + 1, "Ignoring env line without '='");
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }

            entries.push((key.to_string(), parse_value(value.trim()).to_string()));
        }

        Self { entries }
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = launch_fs::io::read_text(path)?;
        Ok(Self::parse(&content))
    }

    /// Value for `key`; the last assignment wins, as when a shell sources it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_value(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) {
            if let Some(end) = value[1..].find(quote) {
                return &value[1..end + 1];
            }
        }
    }

    // Unquoted: a '#' preceded by whitespace starts a comment
    match value.find(" #").or_else(|| value.find("\t#")) {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}
