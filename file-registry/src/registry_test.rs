//! Unit tests for FileRegistry.
//!
//! Covers put/get, find_by_stem, remove and save-on-mutation using InMemoryStore.

use std::sync::Arc;

use crate::registry::FileRegistry;
use crate::store::{FileMap, InMemoryStore};

async fn registry_with_store() -> (FileRegistry, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let registry = FileRegistry::open(store.clone()).await;
    (registry, store)
}

#[tokio::test]
async fn test_put_then_get_returns_reference() {
    let (registry, store) = registry_with_store().await;

    registry.put("report.pdf", "FILE_ID_1").await;

    assert_eq!(registry.get("report.pdf").await.as_deref(), Some("FILE_ID_1"));
    assert_eq!(store.save_count(), 1);
    assert_eq!(
        store.saved().await.get("report.pdf").map(String::as_str),
        Some("FILE_ID_1")
    );
}

#[tokio::test]
async fn test_put_then_find_by_unique_stem() {
    let (registry, _store) = registry_with_store().await;

    registry.put("report.pdf", "FILE_ID_1").await;
    registry.put("notes.txt", "FILE_ID_2").await;

    let found = registry.find_by_stem("report").await;
    assert_eq!(
        found,
        Some(("FILE_ID_1".to_string(), "report.pdf".to_string()))
    );
    assert!(registry.find_by_stem("report.pdf").await.is_none());
}

#[tokio::test]
async fn test_put_same_name_overwrites() {
    let (registry, store) = registry_with_store().await;

    registry.put("a.txt", "OLD").await;
    registry.put("a.txt", "NEW").await;

    assert_eq!(registry.len().await, 1);
    assert_eq!(registry.get("a.txt").await.as_deref(), Some("NEW"));
    assert_eq!(store.save_count(), 2);
}

#[tokio::test]
async fn test_find_by_stem_tie_break_is_name_order() {
    let (registry, _store) = registry_with_store().await;

    registry.put("song.mp3", "MP3").await;
    registry.put("song.flac", "FLAC").await;

    let (reference, name) = registry.find_by_stem("song").await.unwrap();
    assert_eq!(name, "song.flac");
    assert_eq!(reference, "FLAC");
}

#[tokio::test]
async fn test_remove_present_then_lookup_fails() {
    let (registry, store) = registry_with_store().await;
    registry.put("old.zip", "Z").await;

    assert!(registry.remove("old.zip").await);
    assert!(registry.get("old.zip").await.is_none());
    assert!(registry.find_by_stem("old").await.is_none());
    assert_eq!(store.save_count(), 2);
    assert!(store.saved().await.is_empty());
}

#[tokio::test]
async fn test_remove_absent_is_noop_without_save() {
    let (registry, store) = registry_with_store().await;
    registry.put("keep.txt", "K").await;

    assert!(!registry.remove("missing.txt").await);
    assert_eq!(registry.list().await, vec!["keep.txt".to_string()]);
    assert_eq!(store.save_count(), 1);
}

#[tokio::test]
async fn test_list_is_sorted_by_name() {
    let (registry, _store) = registry_with_store().await;
    assert!(registry.is_empty().await);

    registry.put("zeta.txt", "3").await;
    registry.put("alpha.txt", "1").await;
    registry.put("mid.txt", "2").await;

    assert_eq!(
        registry.list().await,
        vec!["alpha.txt", "mid.txt", "zeta.txt"]
    );
    assert!(!registry.is_empty().await);
}

#[tokio::test]
async fn test_open_uses_entries_from_store() {
    let mut seed = FileMap::new();
    seed.insert("seed.bin".to_string(), "SEED".to_string());
    let store = Arc::new(InMemoryStore::with_entries(seed.clone()));

    let registry = FileRegistry::open(store.clone()).await;

    assert_eq!(registry.snapshot().await, seed);
    assert_eq!(store.save_count(), 0);
}
