//! What the rendering surface receives.

use crate::props::LogoProps;
use partnerlogo_core::asset::ResolvedAssetState;
use serde::Serialize;

/// A filled rectangle with the logo painted inside it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderSpec {
    pub image: String,
    pub background_color: String,
    pub radius: f64,
    pub width: f64,
    pub height: f64,
    pub background_size: &'static str,
    pub background_repeat: &'static str,
    pub background_position: &'static str,
    #[serde(flatten)]
    pub passthrough: serde_json::Map<String, serde_json::Value>,
}

impl RenderSpec {
    /// Combine resolved state with the component's display props.
    pub fn build(state: &ResolvedAssetState, props: &LogoProps) -> Self {
        Self {
            image: state
                .select(props.is_thumb, props.asset_variant_index)
                .to_string(),
            background_color: state.background(props.has_fill).to_string(),
            radius: props.radius.max(0.0),
            width: props.width,
            height: props.height,
            background_size: "contain",
            background_repeat: "no-repeat",
            background_position: "center",
            passthrough: props.passthrough.clone(),
        }
    }
}
