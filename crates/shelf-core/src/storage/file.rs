//! Directory-backed storage.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go to a temp file in the same
//! directory and are moved into place with an atomic rename, so a crash never
//! leaves a half-written document behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Result, ShelfError};
use crate::storage::traits::KeyValueStore;

/// File-per-key store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    const EXTENSION: &'static str = "json";

    /// Use `dir` as the data directory. It is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the document holding `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        Self::validate_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(ShelfError::Validation(
                "Storage key must not be empty".to_string(),
            ));
        }
        if !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ShelfError::Validation(format!(
                "Storage key \"{}\" contains invalid characters",
                key
            )));
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ShelfError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn write_raw(&mut self, key: &str, text: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir).map_err(|e| {
            ShelfError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let temp_path = self
            .dir
            .join(format!(".{}.{}.tmp", key, std::process::id()));
        let written =
            write_synced(&temp_path, text).and_then(|()| replace_file(&temp_path, &path));
        if let Err(err) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(ShelfError::Storage(format!(
                "Failed to write {}: {}",
                path.display(),
                err
            )));
        }
        Ok(())
    }
}

fn write_synced(path: &Path, text: &str) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.sync_all()
}

/// Move `temp_path` over `destination`.
#[cfg(not(windows))]
fn replace_file(temp_path: &Path, destination: &Path) -> std::io::Result<()> {
    fs::rename(temp_path, destination)
}

/// Windows can refuse to rename onto a file that is open elsewhere, so the
/// destination is removed and the rename retried once.
#[cfg(windows)]
fn replace_file(temp_path: &Path, destination: &Path) -> std::io::Result<()> {
    if fs::rename(temp_path, destination).is_ok() {
        return Ok(());
    }
    let _ = fs::remove_file(destination);
    fs::rename(temp_path, destination)
}
