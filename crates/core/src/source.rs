//! Source trait — the abstraction over the remote brand-asset service.
//!
//! A source turns an asset identifier into the raw response body. Picking
//! the document and its variants out of that body is the resolver's job, so
//! a source only reports transport and JSON-decoding failures.

use async_trait::async_trait;
use crate::error::FetchError;

#[async_trait]
pub trait AssetSource: Send + Sync {
    /// The source name (e.g., "http").
    fn name(&self) -> &str;

    /// Fetch the response body for `asset_id`, decoded as JSON.
    ///
    /// The body is expected to be an object keyed by the asset id.
    async fn fetch(&self, asset_id: &str) -> std::result::Result<serde_json::Value, FetchError>;
}
