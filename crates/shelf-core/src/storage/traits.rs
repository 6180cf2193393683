//! Key-value storage trait definition.
//!
//! The entry store only needs to read and write one text document under a
//! fixed key. `KeyValueStore` keeps that contract small so backends (a data
//! directory on disk, an in-memory map) can be swapped without touching the
//! core logic.

use crate::error::Result;

/// Synchronous text storage keyed by name.
///
/// Implementations must ensure:
/// - `write_raw` replaces the whole value for the key, or fails leaving the
///   previous value intact
/// - `read_raw` returns `Ok(None)` for a key that was never written
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the backend cannot be read.
    fn read_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if:
    /// - The backend location cannot be created
    /// - The write or the final rename fails
    fn write_raw(&mut self, key: &str, text: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        (**self).read_raw(key)
    }

    fn write_raw(&mut self, key: &str, text: &str) -> Result<()> {
        (**self).write_raw(key, text)
    }
}
