//! The entry store: the authoritative, ordered collection of entries.
//!
//! The whole collection is written back to storage after every mutation.
//! A mutation first builds the candidate collection, writes it, and only then
//! replaces the in-memory list, so a failed write leaves both sides as they
//! were.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::clock::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::error::{Result, ShelfError};
use crate::notify::{NoticeKind, Notifier, TracingNotifier};
use crate::storage::KeyValueStore;
use crate::types::{normalize_text, Entry, EntryDraft};

/// Storage key the collection lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "mangas";

/// Shortest id prefix accepted by [`EntryStore::find`].
pub const MIN_ID_PREFIX: usize = 4;

const MAX_ID_ATTEMPTS: usize = 8;

/// In-memory collection mirrored to a [`KeyValueStore`].
pub struct EntryStore<S: KeyValueStore> {
    storage: S,
    key: String,
    entries: Vec<Entry>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdGenerator>,
    notifier: Box<dyn Notifier>,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Create an empty store over `storage`. Call [`load`](Self::load) to
    /// read the persisted collection.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: DEFAULT_STORAGE_KEY.to_string(),
            entries: Vec::new(),
            clock: Box::new(SystemClock),
            ids: Box::new(UuidGenerator),
            notifier: Box::new(TracingNotifier),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Read the persisted collection, replacing whatever is in memory.
    ///
    /// # Returns
    ///
    /// The number of entries loaded; `0` when nothing was stored yet.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::LoadParse` if the document cannot be read, is
    /// not valid JSON, or breaks an entry invariant. The store is left empty
    /// and usable, and an error notice is sent.
    pub fn load(&mut self) -> Result<usize> {
        self.entries.clear();

        match self.read_document() {
            Ok(entries) => {
                debug!(key = %self.key, count = entries.len(), "collection loaded");
                self.entries = entries;
                Ok(self.entries.len())
            }
            Err(err) => {
                debug!(key = %self.key, error = %err, "collection could not be loaded");
                self.notifier.notify(
                    NoticeKind::Error,
                    "Could not load collection",
                    "Your saved entries could not be read.",
                );
                Err(err)
            }
        }
    }

    fn read_document(&self) -> Result<Vec<Entry>> {
        let raw = self
            .storage
            .read_raw(&self.key)
            .map_err(|e| ShelfError::LoadParse(e.to_string()))?;
        let Some(raw) = raw else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let entries: Vec<Entry> =
            serde_json::from_str(&raw).map_err(|e| ShelfError::LoadParse(e.to_string()))?;

        let mut seen = HashSet::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(ShelfError::LoadParse(format!(
                    "entry {} has an empty name",
                    index
                )));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ShelfError::LoadParse(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
        }
        Ok(entries)
    }

    /// Add a new entry built from `draft`.
    ///
    /// Assigns a fresh id and the creation timestamp; an absent view date
    /// becomes the creation date.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Validation` if the name is blank (nothing is
    /// written), or `ShelfError::Storage` if persisting fails.
    pub fn add(&mut self, draft: EntryDraft) -> Result<Entry> {
        let draft = validate_draft(draft)?;
        let now = self.clock.now();
        let id = self.fresh_id()?;

        let entry = Entry {
            id,
            name: draft.name,
            category: draft.category,
            rating: draft.rating,
            link: draft.link,
            last_position: draft.last_position,
            view_date: Some(draft.view_date.unwrap_or_else(|| now.date_naive())),
            date_added: now,
        };

        let mut candidate = self.entries.clone();
        candidate.push(entry.clone());
        self.commit(candidate)?;

        self.notifier.notify(
            NoticeKind::Info,
            "Entry added",
            &format!("{} was added to your collection.", entry.name),
        );
        Ok(entry)
    }

    /// Replace the entry whose id matches `entry.id`, keeping its position.
    ///
    /// The stored `date_added` always wins over the one passed in.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::NotFound` if no entry has that id,
    /// `ShelfError::Validation` for a blank name, or `ShelfError::Storage`
    /// if persisting fails. The collection is unchanged on error.
    pub fn update(&mut self, entry: Entry) -> Result<Entry> {
        let position = self
            .position(&entry.id)
            .ok_or_else(|| ShelfError::NotFound(format!("Entry {}", entry.id)))?;
        let draft = validate_draft(EntryDraft::from(&entry))?;
        let updated = self.entries[position].revised(draft);

        let mut candidate = self.entries.clone();
        candidate[position] = updated.clone();
        self.commit(candidate)?;

        self.notifier.notify(
            NoticeKind::Info,
            "Entry updated",
            &format!("{} was updated.", updated.name),
        );
        Ok(updated)
    }

    /// Remove the entry with `id`.
    ///
    /// # Returns
    ///
    /// The removed entry, or `None` when no entry had that id (nothing is
    /// written in that case).
    pub fn remove(&mut self, id: &str) -> Result<Option<Entry>> {
        let Some(position) = self.position(id) else {
            warn!(id, "remove requested for an id that is not in the collection");
            return Ok(None);
        };

        let mut candidate = self.entries.clone();
        let removed = candidate.remove(position);
        self.commit(candidate)?;

        self.notifier.notify(
            NoticeKind::Info,
            "Entry removed",
            &format!("{} was removed from your collection.", removed.name),
        );
        Ok(Some(removed))
    }

    /// Write the current collection to storage.
    pub fn persist(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.entries)?;
        self.storage.write_raw(&self.key, &text)?;
        debug!(key = %self.key, count = self.entries.len(), "collection persisted");
        Ok(())
    }

    fn commit(&mut self, candidate: Vec<Entry>) -> Result<()> {
        let text = serde_json::to_string(&candidate)?;
        self.storage.write_raw(&self.key, &text)?;
        debug!(key = %self.key, count = candidate.len(), "collection persisted");
        self.entries = candidate;
        Ok(())
    }

    fn fresh_id(&self) -> Result<String> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !id.is_empty() && self.position(&id).is_none() {
                return Ok(id);
            }
        }
        Err(ShelfError::Validation(
            "Could not generate a unique entry id".to_string(),
        ))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// All entries in collection order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::NotFound` when nothing matches and
    /// `ShelfError::Validation` when a prefix matches several entries.
    pub fn find(&self, query: &str) -> Result<&Entry> {
        let query = query.trim();
        if let Some(entry) = self.get(query) {
            return Ok(entry);
        }
        if query.chars().count() < MIN_ID_PREFIX {
            return Err(ShelfError::NotFound(format!("Entry {}", query)));
        }

        let mut matches = self.entries.iter().filter(|e| e.id.starts_with(query));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry),
            (None, _) => Err(ShelfError::NotFound(format!("Entry {}", query))),
            (Some(_), Some(_)) => Err(ShelfError::Validation(format!(
                "Entry id prefix \"{}\" is ambiguous",
                query
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

fn validate_draft(mut draft: EntryDraft) -> Result<EntryDraft> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ShelfError::Validation("Name must not be empty".to_string()));
    }
    draft.name = name.to_string();
    draft.link = normalize_text(draft.link);
    draft.last_position = normalize_text(draft.last_position);
    Ok(draft)
}
