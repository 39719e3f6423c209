//! Integration tests for [`file_registry::JsonFileStore`] and [`file_registry::FileRegistry`] on disk.
//!
//! Covers absent/malformed cache files, save → load round trip, and that lookups that do not
//! mutate never touch the file. Uses temp directories.

use std::sync::Arc;

use file_registry::{FileMap, FileRegistry, JsonFileStore, RegistryError, RegistryStore};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::new(dir.path().join("file_cache.json"))
}

/// **Test: Loading an absent cache file yields an empty map, not an error.**
#[tokio::test]
async fn test_load_absent_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let entries = store.load().await.expect("absent file must not be an error");

    assert!(entries.is_empty());
    assert!(!store.path().exists());
}

/// **Test: save followed by a fresh load reproduces an equal mapping.**
///
/// **Setup:** Map with names containing spaces, unicode and Markdown characters.
/// **Action:** `save` with one store, `load` with a new store on the same path.
/// **Expected:** Maps are equal.
#[tokio::test]
async fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut entries = FileMap::new();
    entries.insert("report.pdf".to_string(), "BQACAgIAAxkBAAIB".to_string());
    entries.insert("my file (v2).docx".to_string(), "BQACAgIAAxkBAAIC".to_string());
    entries.insert("照片.jpg".to_string(), "AgACAgIAAxkBAAID".to_string());

    store_in(&dir).save(&entries).await.unwrap();
    let loaded = store_in(&dir).load().await.unwrap();

    assert_eq!(loaded, entries);
}

/// **Test: The cache file is a flat JSON object of name → reference.**
#[tokio::test]
async fn test_saved_file_is_flat_json_object() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let mut entries = FileMap::new();
    entries.insert("a.txt".to_string(), "A".to_string());

    store.save(&entries).await.unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "a.txt": "A" }));
}

/// **Test: A malformed cache file is a Parse error from the store.**
#[tokio::test]
async fn test_load_malformed_file_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), b"{ not json").unwrap();

    let err = store.load().await.unwrap_err();

    assert!(matches!(err, RegistryError::Parse { .. }));
}

/// **Test: FileRegistry over a malformed cache starts empty and keeps working.**
///
/// **Expected:** Registry is empty; a later put rewrites the file with valid JSON.
#[tokio::test]
async fn test_registry_over_malformed_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let path = store.path().to_path_buf();
    std::fs::write(&path, b"[1, 2, 3]").unwrap();

    let registry = FileRegistry::open(Arc::new(store)).await;
    assert!(registry.is_empty().await);

    registry.put("fresh.txt", "F").await;
    let reloaded = JsonFileStore::new(&path).load().await.unwrap();
    assert_eq!(reloaded.get("fresh.txt").map(String::as_str), Some("F"));
}

/// **Test: Removing an absent name on an empty registry never writes the cache file.**
#[tokio::test]
async fn test_remove_absent_does_not_write_file() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let path = store.path().to_path_buf();
    let registry = FileRegistry::open(Arc::new(store)).await;

    assert!(!registry.remove("missing.txt").await);
    assert!(registry.find_by_stem("missing").await.is_none());

    assert!(!path.exists());
}

/// **Test: save creates missing parent directories.**
#[tokio::test]
async fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("data/cache/file_cache.json"));

    store.save(&FileMap::new()).await.unwrap();

    assert!(store.path().exists());
}

/// **Test: A save failure is not fatal; the in-memory registry stays authoritative.**
///
/// **Setup:** Cache path points at an existing directory, so writes fail.
#[tokio::test]
async fn test_save_failure_keeps_in_memory_state() {
    let dir = TempDir::new().unwrap();
    let registry = FileRegistry::open(Arc::new(JsonFileStore::new(dir.path()))).await;

    registry.put("a.txt", "A").await;

    assert_eq!(registry.get("a.txt").await.as_deref(), Some("A"));
}
