//! Configuration presence check with template fallback

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Where the configuration file in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// The operator's file was already there and was left untouched.
    Existing,
    /// The file was just seeded from the template and still holds its
    /// placeholder credentials.
    FromTemplate { template: PathBuf },
}

impl ConfigOrigin {
    pub fn is_from_template(&self) -> bool {
        matches!(self, Self::FromTemplate { .. })
    }
}

/// Make sure `config` exists, seeding it from `template` when it does not.
///
/// An existing file is never opened for writing. The copy is byte-exact;
/// no value is filled in or generated.
pub fn ensure_config(config: &Path, template: &Path) -> Result<ConfigOrigin> {
    if config.is_file() {
        tracing::debug!(config = %config.display(), "Configuration present");
        return Ok(ConfigOrigin::Existing);
    }

    if !template.is_file() {
        return Err(Error::ConfigMissing {
            path: config.to_path_buf(),
            template: template.to_path_buf(),
        });
    }

    launch_fs::io::copy_atomic(template, config)?;
    tracing::warn!(
        config = %config.display(),
        template = %template.display(),
        "Created configuration from template; fill in real credentials before the service will work"
    );

    Ok(ConfigOrigin::FromTemplate {
        template: template.to_path_buf(),
    })
}
