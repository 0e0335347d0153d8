//! No-op store — disables persistent caching entirely.

use async_trait::async_trait;
use partnerlogo_core::error::StoreError;
use partnerlogo_core::store::AssetStore;

/// A no-op store that remembers nothing; every mount starts from defaults.
pub struct NoopStore;

#[async_trait]
impl AssetStore for NoopStore {
    fn name(&self) -> &str { "none" }

    async fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String) -> Result<(), StoreError> {
        Ok(())
    }
}
