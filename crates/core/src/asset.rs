//! Resolved asset state and its persisted forms.
//!
//! A resolved state holds all four image variants plus the accent color so
//! that switching between logo/thumbnail or colour/white never needs the
//! network.

use serde::{Deserialize, Serialize};

/// Background used when no accent color is known.
pub const TRANSPARENT: &str = "transparent";

/// Colour or white rendering of a logo or thumbnail.
///
/// Indexes the `logos[]` / `thumbnails[]` arrays of a content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Variant {
    #[default]
    Colour,
    White,
}

impl Variant {
    pub fn index(self) -> usize {
        match self {
            Variant::Colour => 0,
            Variant::White => 1,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::Colour => "Colour",
            Variant::White => "White",
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Variant::Colour),
            1 => Ok(Variant::White),
            other => Err(format!("unknown asset variant index {other} (expected 0 or 1)")),
        }
    }
}

impl From<Variant> for u8 {
    fn from(variant: Variant) -> Self {
        variant.index() as u8
    }
}

/// Everything a component instance needs to paint its logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedAssetState {
    /// The asset this bundle was computed for; `None` for seeded defaults
    #[serde(rename = "assetID", default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,

    #[serde(rename = "logoColourURL")]
    pub logo_colour_url: String,

    #[serde(rename = "logoWhiteURL")]
    pub logo_white_url: String,

    #[serde(rename = "thumbColourURL")]
    pub thumb_colour_url: String,

    #[serde(rename = "thumbWhiteURL")]
    pub thumb_white_url: String,

    #[serde(rename = "backgroundColor")]
    pub background_color: String,
}

impl ResolvedAssetState {
    /// A state with every image set to `image_url` and no accent color.
    pub fn placeholder(image_url: &str) -> Self {
        Self {
            asset_id: None,
            logo_colour_url: image_url.to_string(),
            logo_white_url: image_url.to_string(),
            thumb_colour_url: image_url.to_string(),
            thumb_white_url: image_url.to_string(),
            background_color: TRANSPARENT.to_string(),
        }
    }

    /// Pick the one URL to display for the given format and variant.
    pub fn select(&self, is_thumb: bool, variant: Variant) -> &str {
        match (is_thumb, variant) {
            (true, Variant::White) => &self.thumb_white_url,
            (true, Variant::Colour) => &self.thumb_colour_url,
            (false, Variant::White) => &self.logo_white_url,
            (false, Variant::Colour) => &self.logo_colour_url,
        }
    }

    /// The background to paint: the accent color only when filled.
    pub fn background(&self, has_fill: bool) -> &str {
        if has_fill {
            &self.background_color
        } else {
            TRANSPARENT
        }
    }

    /// Whether this state was computed for `asset_id`.
    pub fn is_for(&self, asset_id: &str) -> bool {
        self.asset_id.as_deref() == Some(asset_id)
    }
}

/// Any shape a cache value may take on disk.
///
/// Older entries stored only the single displayed image; they still seed a
/// usable state but carry no asset id, so the next sync refreshes them.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CachedEntry {
    Full(ResolvedAssetState),
    Legacy {
        #[serde(rename = "imageURL")]
        image_url: String,
        #[serde(rename = "backgroundColor", default)]
        background_color: Option<String>,
    },
}

impl CachedEntry {
    /// Parse a raw cache value in either the full or the legacy shape.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn into_state(self) -> ResolvedAssetState {
        match self {
            CachedEntry::Full(state) => state,
            CachedEntry::Legacy {
                image_url,
                background_color,
            } => {
                let mut state = ResolvedAssetState::placeholder(&image_url);
                if let Some(color) = background_color {
                    state.background_color = color;
                }
                state
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResolvedAssetState {
        ResolvedAssetState {
            asset_id: Some("ba-1".into()),
            logo_colour_url: "https://cdn/logo-colour.svg".into(),
            logo_white_url: "https://cdn/logo-white.svg".into(),
            thumb_colour_url: "https://cdn/thumb-colour.svg".into(),
            thumb_white_url: "https://cdn/thumb-white.svg".into(),
            background_color: "#075AAA".into(),
        }
    }

    #[test]
    fn thumb_white_selection() {
        assert_eq!(sample().select(true, Variant::White), "https://cdn/thumb-white.svg");
    }

    #[test]
    fn logo_colour_selection() {
        assert_eq!(sample().select(false, Variant::Colour), "https://cdn/logo-colour.svg");
    }

    #[test]
    fn remaining_selections() {
        let state = sample();
        assert_eq!(state.select(true, Variant::Colour), "https://cdn/thumb-colour.svg");
        assert_eq!(state.select(false, Variant::White), "https://cdn/logo-white.svg");
    }

    #[test]
    fn unfilled_background_is_transparent() {
        let state = sample();
        assert_eq!(state.background(false), TRANSPARENT);
        assert_eq!(state.background(true), "#075AAA");
    }

    #[test]
    fn serializes_with_host_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["assetID"], "ba-1");
        assert_eq!(json["thumbWhiteURL"], "https://cdn/thumb-white.svg");
        assert_eq!(json["backgroundColor"], "#075AAA");
    }

    #[test]
    fn full_entry_parses() {
        let raw = serde_json::to_string(&sample()).unwrap();
        let state = CachedEntry::parse(&raw).unwrap().into_state();
        assert_eq!(state, sample());
    }

    #[test]
    fn legacy_entry_seeds_every_variant() {
        let raw = r##"{"imageURL":"https://cdn/old.svg","backgroundColor":"#FF0000"}"##;
        let state = CachedEntry::parse(raw).unwrap().into_state();
        assert_eq!(state.asset_id, None);
        assert_eq!(state.select(true, Variant::White), "https://cdn/old.svg");
        assert_eq!(state.select(false, Variant::Colour), "https://cdn/old.svg");
        assert_eq!(state.background_color, "#FF0000");
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(CachedEntry::parse("not json").is_err());
        assert!(CachedEntry::parse(r#"{"unrelated":true}"#).is_err());
    }

    #[test]
    fn variant_index_conversion() {
        assert_eq!(Variant::try_from(0).unwrap(), Variant::Colour);
        assert_eq!(Variant::try_from(1).unwrap(), Variant::White);
        assert!(Variant::try_from(2).is_err());
        assert_eq!(serde_json::to_string(&Variant::White).unwrap(), "1");
    }
}
