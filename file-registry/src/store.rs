//! Registry persistence: the [`RegistryStore`] trait and its implementations.
//!
//! [`JsonFileStore`] is the production store (flat JSON object on disk); [`InMemoryStore`]
//! keeps the last saved map in memory and counts saves.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::RegistryError;

/// Display name → file reference. Ordered so listing and stem tie-breaks are deterministic.
pub type FileMap = BTreeMap<String, String>;

/// Loads and saves the whole registry mapping. Single writer; no partial writes.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Returns the stored mapping. A store with nothing saved yet returns an empty map.
    async fn load(&self) -> Result<FileMap, RegistryError>;
    /// Replaces the stored mapping with `entries`.
    async fn save(&self, entries: &FileMap) -> Result<(), RegistryError>;
    /// Human-readable location for logs (e.g. the cache file path).
    fn location(&self) -> String;
}

/// Stores the mapping as a JSON object in a single file, overwritten on every save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl RegistryStore for JsonFileStore {
    async fn load(&self) -> Result<FileMap, RegistryError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.display_path(), "Cache file absent, starting empty");
                return Ok(FileMap::new());
            }
            Err(source) => {
                return Err(RegistryError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        let entries: FileMap =
            serde_json::from_slice(&data).map_err(|source| RegistryError::Parse {
                path: self.display_path(),
                source,
            })?;

        info!(path = %self.display_path(), count = entries.len(), "File cache loaded");
        Ok(entries)
    }

    async fn save(&self, entries: &FileMap) -> Result<(), RegistryError> {
        let data = serde_json::to_vec_pretty(entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| RegistryError::Io {
                    path: parent.display().to_string(),
                    source,
                })?;
        }

        tokio::fs::write(&self.path, data)
            .await
            .map_err(|source| RegistryError::Io {
                path: self.display_path(),
                source,
            })?;

        debug!(path = %self.display_path(), count = entries.len(), "File cache saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.display_path()
    }
}

/// Non-persistent store. Keeps the last saved map and counts `save` calls.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: RwLock<FileMap>,
    saves: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that returns `entries` from the first `load`.
    pub fn with_entries(entries: FileMap) -> Self {
        Self {
            saved: RwLock::new(entries),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The map passed to the most recent `save` (or the seed map).
    pub async fn saved(&self) -> FileMap {
        self.saved.read().await.clone()
    }
}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn load(&self) -> Result<FileMap, RegistryError> {
        Ok(self.saved.read().await.clone())
    }

    async fn save(&self, entries: &FileMap) -> Result<(), RegistryError> {
        *self.saved.write().await = entries.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
