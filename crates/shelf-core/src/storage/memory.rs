//! In-memory storage backend.

use std::collections::HashMap;

use crate::error::{Result, ShelfError};
use crate::storage::traits::KeyValueStore;

/// Map-backed store. Nothing survives the process.
///
/// `fail_writes` makes every subsequent write return a storage error, which
/// lets callers exercise the store's rollback path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed `key` with a raw document.
    pub fn with_value(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.values.insert(key.into(), text.into());
        self
    }

    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(ShelfError::Storage(format!(
                "Write to \"{}\" rejected",
                key
            )));
        }
        self.values.insert(key.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read_raw("mangas").unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let mut store = MemoryStore::new();
        store.write_raw("mangas", "[]").unwrap();
        assert_eq!(store.read_raw("mangas").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_write_keeps_previous_value() {
        let mut store = MemoryStore::new().with_value("mangas", "[]");
        store.fail_writes(true);
        assert!(store.write_raw("mangas", "[1]").is_err());
        assert_eq!(store.get("mangas"), Some("[]"));
    }
}
