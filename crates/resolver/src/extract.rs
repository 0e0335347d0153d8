//! Variant extraction from an asset content document.
//!
//! The service answers with `{ <assetID>: { content: { logos, thumbnails,
//! colors } } }`. The document and its `content` object must be present;
//! everything below that is optional and falls back per field.

use partnerlogo_config::AssetDefaultsConfig;
use partnerlogo_core::asset::{ResolvedAssetState, Variant};
use partnerlogo_core::error::FetchError;
use serde_json::Value;
use tracing::debug;

/// What to substitute for fields the document does not provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackValues {
    pub image_url: String,
    pub background: String,
}

impl FallbackValues {
    pub fn from_config(config: &AssetDefaultsConfig) -> Self {
        Self {
            image_url: config.placeholder_image_url.clone(),
            background: config.fallback_background.clone(),
        }
    }
}

impl Default for FallbackValues {
    fn default() -> Self {
        Self::from_config(&AssetDefaultsConfig::default())
    }
}

/// Build a resolved state for `asset_id` from a raw response body.
pub fn extract_state(
    asset_id: &str,
    body: &Value,
    fallback: &FallbackValues,
) -> Result<ResolvedAssetState, FetchError> {
    let document = body
        .get(asset_id)
        .filter(|doc| !doc.is_null())
        .ok_or_else(|| FetchError::MissingDocument {
            asset_id: asset_id.to_string(),
        })?;

    let content = document
        .get("content")
        .filter(|content| content.is_object())
        .ok_or_else(|| FetchError::MissingContent {
            asset_id: asset_id.to_string(),
        })?;

    let image = |kind: &str, variant: Variant| -> String {
        svg_at(content, kind, variant).unwrap_or_else(|| {
            debug!(asset_id, kind, variant = variant.index(), "Variant missing, using placeholder");
            fallback.image_url.clone()
        })
    };

    let background_color = content
        .pointer("/colors/0/background/hex")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.background.clone());

    Ok(ResolvedAssetState {
        asset_id: Some(asset_id.to_string()),
        logo_colour_url: image("logos", Variant::Colour),
        logo_white_url: image("logos", Variant::White),
        thumb_colour_url: image("thumbnails", Variant::Colour),
        thumb_white_url: image("thumbnails", Variant::White),
        background_color,
    })
}

fn svg_at(content: &Value, kind: &str, variant: Variant) -> Option<String> {
    content
        .get(kind)?
        .get(variant.index())?
        .get("svg")?
        .as_str()
        .map(str::to_string)
}
