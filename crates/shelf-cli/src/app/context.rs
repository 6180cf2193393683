//! Application context for the Shelf CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use shelf_core::{EntryStore, FileStore, ShelfError};

use crate::cli::Cli;
use crate::config::{read_config, ShelfConfig};
use crate::errors::from_core;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::notifier::TerminalNotifier;
use super::resolver::{resolve_config_path, resolve_data_dir};

/// Store type every command works against.
pub type Store = EntryStore<FileStore>;

/// Application context that bundles CLI args with the config file.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ShelfConfig>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config, reading it on first use. A missing file yields the
    /// built-in defaults.
    pub fn config(&self) -> anyhow::Result<&ShelfConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "reading config");
                read_config(&path)
            } else {
                Ok(ShelfConfig::default())
            }
        })
    }

    /// Build a UI context from per-command output flags plus the global ones.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::new(json, format, self.cli.no_color, self.cli.ascii)
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli.data_dir.as_deref(), self.config()?)
    }

    /// Open and load the collection.
    ///
    /// An unreadable document is not fatal here: the store comes back empty
    /// alongside the load error, so read-only commands can still run.
    pub fn open_store(&self) -> anyhow::Result<(Store, Option<ShelfError>)> {
        let dir = self.data_dir()?;
        let key = self.config()?.storage_key().to_string();
        let notifier = TerminalNotifier::new(self.ui_context(false, None), self.quiet());

        let mut store = EntryStore::new(FileStore::new(&dir))
            .with_key(key)
            .with_notifier(notifier);
        match store.load() {
            Ok(count) => {
                debug!(dir = %dir.display(), count, "store opened");
                Ok((store, None))
            }
            Err(err) => Ok((store, Some(err))),
        }
    }

    /// Open the collection for a command that writes it back.
    ///
    /// Fails when the saved document could not be read, so it is never
    /// replaced by an empty collection.
    pub fn open_store_for_write(&self) -> anyhow::Result<Store> {
        let (store, failure) = self.open_store()?;
        match failure {
            Some(err) => Err(from_core(err)),
            None => Ok(store),
        }
    }
}
