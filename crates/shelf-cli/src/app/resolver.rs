//! Path resolution for the config file and data directory.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_dir, ShelfConfig};

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory from the CLI flag (or SHELF_DATA_DIR), then the
/// config file, then the XDG data dir.
pub fn resolve_data_dir(flag: Option<&str>, config: &ShelfConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = flag.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config.storage.dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}
