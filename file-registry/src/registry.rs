//! In-memory file registry backed by a [`RegistryStore`].
//!
//! Every mutation persists the full map before returning. Store failures are logged and never
//! propagated: the in-memory map stays authoritative and the next successful save reconciles.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use crate::naming::file_stem;
use crate::store::{FileMap, RegistryStore};

/// Display name → file reference registry shared by the whole bot (no per-user scoping).
pub struct FileRegistry {
    entries: RwLock<FileMap>,
    store: Arc<dyn RegistryStore>,
}

impl FileRegistry {
    /// Loads the initial map from `store`. A failed load is logged and yields an empty registry.
    #[instrument(skip(store), fields(location = %store.location()))]
    pub async fn open(store: Arc<dyn RegistryStore>) -> Self {
        let entries = match store.load().await {
            Ok(entries) => entries,
            Err(e) => {
                error!(error = %e, "Failed to load file cache, starting empty");
                FileMap::new()
            }
        };
        info!(count = entries.len(), "File registry ready");
        Self {
            entries: RwLock::new(entries),
            store,
        }
    }

    /// Inserts or overwrites `display_name`, then saves.
    #[instrument(skip(self, file_reference))]
    pub async fn put(&self, display_name: &str, file_reference: &str) {
        let mut entries = self.entries.write().await;
        if let Some(previous) = entries.insert(display_name.to_string(), file_reference.to_string())
        {
            warn!(previous = %previous, "Overwriting existing entry");
        }
        self.persist(&entries).await;
    }

    /// Exact-name lookup.
    pub async fn get(&self, display_name: &str) -> Option<String> {
        self.entries.read().await.get(display_name).cloned()
    }

    /// Removes `display_name`. Returns false (and does not save) when it was absent.
    #[instrument(skip(self))]
    pub async fn remove(&self, display_name: &str) -> bool {
        let mut entries = self.entries.write().await;
        if entries.remove(display_name).is_none() {
            return false;
        }
        self.persist(&entries).await;
        true
    }

    /// First entry (in name order) whose extension-stripped name equals `stem`.
    /// Returns `(file_reference, display_name)`.
    pub async fn find_by_stem(&self, stem: &str) -> Option<(String, String)> {
        self.entries
            .read()
            .await
            .iter()
            .find(|(name, _)| file_stem(name) == stem)
            .map(|(name, reference)| (reference.clone(), name.clone()))
    }

    /// All display names in name order.
    pub async fn list(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Copy of the current mapping.
    pub async fn snapshot(&self) -> FileMap {
        self.entries.read().await.clone()
    }

    async fn persist(&self, entries: &FileMap) {
        if let Err(e) = self.store.save(entries).await {
            error!(
                error = %e,
                location = %self.store.location(),
                "Failed to save file cache; in-memory registry remains authoritative"
            );
        }
    }
}
