// src/io.rs

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::error::{Result, SeedError};

/// Read the whole seed file as UTF-8.
#[instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn read_seed<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = content.len(), "read seed file");
    Ok(content)
}

/// Write `content` to `path` atomically: to a temp file in the same
/// directory, then rename over the target.
#[instrument(level = "debug", skip(path, content), fields(path = %path.as_ref().display(), bytes = content.len()))]
pub fn write_seed_atomic<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| SeedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    // temp files are created 0600; the target keeps its own mode, new files get 0644
    match fs::metadata(path) {
        Ok(existing) => tmp
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(write_err)?,
        Err(_) => set_default_mode(tmp.as_file()).map_err(write_err)?,
    }
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    debug!("persisted seed file");
    Ok(())
}

#[cfg(unix)]
fn set_default_mode(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_mode(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
