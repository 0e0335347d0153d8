//! HTTP asset source.
//!
//! Issues `GET {base_url}{asset_id}` against the brand-asset gateway and
//! decodes the body as JSON. No authentication is sent.

use async_trait::async_trait;
use partnerlogo_config::ServiceConfig;
use partnerlogo_core::error::FetchError;
use partnerlogo_core::source::AssetSource;
use std::time::Duration;
use tracing::{debug, warn};

pub struct HttpAssetSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAssetSource {
    /// Create a source with the given base URL and transport timeout.
    ///
    /// The base URL is used verbatim; the asset id is appended directly.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self, FetchError> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    /// The request URL for an asset.
    pub fn url_for(&self, asset_id: &str) -> String {
        format!("{}{}", self.base_url, asset_id)
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, asset_id: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.url_for(asset_id);
        debug!(%url, "Fetching asset document");

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %error_body, "Asset service returned error");
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                message: error_body,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}
