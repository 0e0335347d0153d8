//! File-based store — a single JSON object on disk.
//!
//! The file maps cache keys to their raw string values, the same shape a
//! browser's local storage would hold.
//!
//! Storage location: `~/.partnerlogo/cache.json`

use async_trait::async_trait;
use partnerlogo_core::error::StoreError;
use partnerlogo_core::store::AssetStore;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A file-backed store.
///
/// Entries are loaded into memory on creation and flushed to disk on every
/// `set`. Clones share the same entries and file.
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl FileStore {
    /// Create a new file-based store at the given path.
    ///
    /// If the file exists, entries are loaded from it.
    /// If the file does not exist, starts empty (file created on first write).
    pub fn new(path: PathBuf) -> Self {
        let entries = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = entries.len(), "File store loaded");
        Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_disk(path: &Path) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return BTreeMap::new(), // File doesn't exist yet — start empty
        };

        match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Cache file is corrupted, starting empty");
                BTreeMap::new()
            }
        }
    }

    /// Flush all entries to disk.
    ///
    /// Callers hold the write guard, so concurrent `set`s flush one at a time.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create cache directory: {e}"))
            })?;
        }

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StoreError::Storage(format!("Failed to serialize cache: {e}")))?;

        std::fs::write(&self.path, content)
            .map_err(|e| StoreError::Storage(format!("Failed to write cache file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl AssetStore for FileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        let previous = entries.insert(key.to_string(), value);
        if let Err(e) = self.flush(&entries) {
            // Keep memory consistent with what is on disk
            match previous {
                Some(old) => entries.insert(key.to_string(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_path() -> PathBuf {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp); // Close file so the store can create it
        path
    }

    #[tokio::test]
    async fn set_persists_across_reload() {
        let path = temp_path();

        let store = FileStore::new(path.clone());
        store
            .set("partnerLogos_abc", r#"{"assetID":"ba-1"}"#.into())
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("partnerLogos_abc"));

        let reloaded = FileStore::new(path);
        assert_eq!(
            reloaded.get("partnerLogos_abc").await.unwrap().as_deref(),
            Some(r#"{"assetID":"ba-1"}"#)
        );
    }

    #[tokio::test]
    async fn overwrite_keeps_single_entry() {
        let path = temp_path();
        let store = FileStore::new(path.clone());
        store.set("k", "one".into()).await.unwrap();
        store.set("k", "two".into()).await.unwrap();

        let reloaded = FileStore::new(path);
        assert_eq!(reloaded.get("k").await.unwrap().as_deref(), Some("two"));
    }

    #[tokio::test]
    async fn handles_missing_file_gracefully() {
        let path = temp_path();
        let store = FileStore::new(path);
        assert!(store.get("anything").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn corrupted_file_starts_empty() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "this is not json").unwrap();

        let store = FileStore::new(tmp.path().to_path_buf());
        assert!(store.get("k").await.unwrap().is_none());

        // Next write replaces the corrupted file with a valid one
        store.set("k", "v".into()).await.unwrap();
        let reloaded = FileStore::new(tmp.path().to_path_buf());
        assert_eq!(reloaded.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");
        let store = FileStore::new(path.clone());
        store.set("k", "v".into()).await.unwrap();
        assert!(path.exists());
    }
}
