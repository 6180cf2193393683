use shelf_core::{Entry, EntryStore, KeyValueStore};

use crate::errors::from_core;

/// Resolve a full id or unique prefix to an owned entry.
pub fn find_entry<S: KeyValueStore>(store: &EntryStore<S>, id: &str) -> anyhow::Result<Entry> {
    store.find(id).cloned().map_err(from_core)
}
