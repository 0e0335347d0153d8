//! Component props as the host hands them over.

use crate::selector::AssetSelection;
use partnerlogo_config::RenderConfig;
use partnerlogo_core::asset::Variant;
use serde::{Deserialize, Deserializer, Serialize};

/// Everything one partner-logo component is configured with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoProps {
    /// Host-assigned component id; the cache key derives from it
    pub id: String,

    #[serde(flatten)]
    pub selection: AssetSelection,

    /// 0 = colour, 1 = white
    #[serde(default, alias = "logoVersionIndex")]
    pub asset_variant_index: Variant,

    #[serde(default)]
    pub is_thumb: bool,

    #[serde(default)]
    pub has_fill: bool,

    /// Corner radius; never negative
    #[serde(default, deserialize_with = "non_negative")]
    pub radius: f64,

    #[serde(default = "default_width")]
    pub width: f64,

    #[serde(default = "default_height")]
    pub height: f64,

    /// Layout props passed to the surface untouched
    #[serde(flatten)]
    pub passthrough: serde_json::Map<String, serde_json::Value>,
}

fn default_width() -> f64 {
    RenderConfig::default().width
}
fn default_height() -> f64 {
    RenderConfig::default().height
}

fn non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_nan() || value < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "radius must be >= 0 (got {value})"
        )));
    }
    Ok(value)
}

impl LogoProps {
    pub fn new(id: impl Into<String>, selection: AssetSelection) -> Self {
        Self {
            id: id.into(),
            selection,
            asset_variant_index: Variant::default(),
            is_thumb: false,
            has_fill: false,
            radius: 0.0,
            width: default_width(),
            height: default_height(),
            passthrough: serde_json::Map::new(),
        }
    }

    /// Apply configured surface size.
    pub fn with_size(mut self, render: &RenderConfig) -> Self {
        self.width = render.width;
        self.height = render.height;
        self
    }

    /// The identifier that drives resolution.
    pub fn asset_id(&self) -> Option<&str> {
        self.selection.active_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_component() {
        let props: LogoProps = serde_json::from_str(r#"{"id":"id_abc"}"#).unwrap();
        assert_eq!(props.width, 180.0);
        assert_eq!(props.height, 90.0);
        assert_eq!(props.asset_variant_index, Variant::Colour);
        assert!(!props.is_thumb);
        assert!(!props.has_fill);
        assert!(props.passthrough.is_empty());
    }

    #[test]
    fn parses_host_props() {
        let props: LogoProps = serde_json::from_str(
            r#"{
                "id": "id_abc",
                "category": "Hotel",
                "hotelID": "h-1",
                "assetVariantIndex": 1,
                "isThumb": true,
                "hasFill": true,
                "radius": 8,
                "opacity": 0.5
            }"#,
        )
        .unwrap();
        assert_eq!(props.asset_id(), Some("h-1"));
        assert_eq!(props.asset_variant_index, Variant::White);
        assert!(props.is_thumb);
        assert!(props.has_fill);
        assert_eq!(props.radius, 8.0);
        assert_eq!(props.passthrough["opacity"], 0.5);
    }

    #[test]
    fn legacy_variant_field_name_is_accepted() {
        let props: LogoProps =
            serde_json::from_str(r#"{"id":"x","logoVersionIndex":1}"#).unwrap();
        assert_eq!(props.asset_variant_index, Variant::White);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let result: Result<LogoProps, _> = serde_json::from_str(r#"{"id":"x","radius":-4}"#);
        assert!(result.is_err());

        let props: LogoProps = serde_json::from_str(r#"{"id":"x","radius":0}"#).unwrap();
        assert_eq!(props.radius, 0.0);
    }

    #[test]
    fn out_of_range_variant_is_rejected() {
        let result: Result<LogoProps, _> =
            serde_json::from_str(r#"{"id":"x","assetVariantIndex":3}"#);
        assert!(result.is_err());
    }
}
