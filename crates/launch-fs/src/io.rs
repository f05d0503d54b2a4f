//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

use crate::{Error, Result};

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a reader never sees a partially
/// written configuration file.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives in the same directory so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: path.to_path_buf(),
        })?;

    let written = temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(&temp_path, e));
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: path.to_path_buf(),
    })?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(Error::io(path, e));
    }

    Ok(())
}

/// Copy `from` to `to` byte-for-byte using [`write_atomic`].
///
/// Returns the number of bytes copied.
pub fn copy_atomic(from: &Path, to: &Path) -> Result<u64> {
    let content = fs::read(from).map_err(|e| Error::io(from, e))?;
    write_atomic(to, &content)?;
    tracing::debug!(from = %from.display(), to = %to.display(), bytes = content.len(), "Copied file");
    Ok(content.len() as u64)
}

/// Read text content from a file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}
