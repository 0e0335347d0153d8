//! Store trait — the persistent key-value cache behind resolved assets.
//!
//! The resolver only ever needs `get` and `set` on string values. Keys come
//! from [`CacheKey`](crate::CacheKey) and values are JSON-serialized
//! [`ResolvedAssetState`](crate::ResolvedAssetState).

use async_trait::async_trait;
use crate::error::StoreError;

/// The core AssetStore trait.
///
/// Implementations: JSON file, SQLite, in-memory (for testing), none (no-op).
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// The backend name (e.g., "file", "sqlite", "none").
    fn name(&self) -> &str;

    /// Read the raw value stored under `key`.
    async fn get(&self, key: &str) -> std::result::Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> std::result::Result<(), StoreError>;
}
