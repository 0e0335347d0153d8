//! In-memory store — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use partnerlogo_core::error::StoreError;
use partnerlogo_core::store::AssetStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// An in-memory store backed by a HashMap.
/// Clones share the same entries, so a test can keep a handle for inspection.
#[derive(Clone)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetStore for InMemoryStore {
    fn name(&self) -> &str { "memory" }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get() {
        let store = InMemoryStore::new();
        store.set("partnerLogos_a", "{}".into()).await.unwrap();
        assert_eq!(store.get("partnerLogos_a").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn missing_key_is_none() {
        let store = InMemoryStore::new();
        assert!(store.get("partnerLogos_missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_overwrites() {
        let store = InMemoryStore::new();
        store.set("k", "first".into()).await.unwrap();
        store.set("k", "second".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let store = InMemoryStore::new();
        let handle = store.clone();
        store.set("k", "v".into()).await.unwrap();
        assert_eq!(handle.get("k").await.unwrap().as_deref(), Some("v"));
    }
}
