//! # Shelf Core
//!
//! Core library for Shelf - a personal catalog of manga, manhwa and other
//! serialized illustrated fiction.
//!
//! This crate provides the domain model, the entry store and the pure query
//! and statistics functions, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **types**: `Entry`, `EntryDraft` and the closed `Category`/`Rating` sets
//! - **store**: `EntryStore`, the ordered collection persisted on every change
//! - **query**: search, filter and sort (`view`)
//! - **stats**: collection statistics (`summarize`)
//! - **storage**: key-value backends (data directory, in-memory)
//! - **clock** / **notify**: collaborators injected into the store

pub mod clock;
pub mod error;
pub mod notify;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, IdGenerator, SequentialIds, SystemClock, UuidGenerator};
pub use error::{Result, ShelfError};
pub use notify::{NoticeKind, Notifier, RecordingNotifier, TracingNotifier};
pub use query::{view, Criteria, SortDirection, SortKey};
pub use stats::{summarize, RatingCount, Stats};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{EntryStore, DEFAULT_STORAGE_KEY};
pub use types::{parse_view_date, Category, Entry, EntryDraft, Rating};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
