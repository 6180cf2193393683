use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use shelf_core::{Category, Rating, SortKey, DEFAULT_STORAGE_KEY};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub defaults: DefaultsSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    /// Data directory; XDG data dir when unset
    pub dir: Option<String>,
    /// Storage key (file stem) of the collection
    pub key: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DefaultsSection {
    pub category: Option<String>,
    pub rating: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub descending: bool,
}

impl ShelfConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            storage: StorageSection {
                dir: Some(data_dir.to_string_lossy().to_string()),
                key: None,
            },
            defaults: DefaultsSection::default(),
        }
    }

    pub fn storage_key(&self) -> &str {
        self.storage.key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    /// Default category for new entries.
    pub fn default_category(&self) -> anyhow::Result<Category> {
        match self.defaults.category.as_deref() {
            Some(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Config defaults.category: {}", e)),
            None => Ok(Category::Manga),
        }
    }

    /// Default rating for new entries.
    pub fn default_rating(&self) -> anyhow::Result<Rating> {
        match self.defaults.rating.as_deref() {
            Some(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Config defaults.rating: {}", e)),
            None => Ok(Rating::B),
        }
    }

    pub fn default_sort(&self) -> anyhow::Result<SortKey> {
        match self.defaults.sort.as_deref() {
            Some(value) => value
                .parse()
                .map_err(|e| anyhow::anyhow!("Config defaults.sort: {}", e)),
            None => Ok(SortKey::Name),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<ShelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &ShelfConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("shelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
