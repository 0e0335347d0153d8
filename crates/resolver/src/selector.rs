//! Picks the active asset identifier for the selected category.

use partnerlogo_core::catalog::Category;
use serde::{Deserialize, Deserializer, Serialize};

/// The category choice plus one identifier slot per category.
///
/// Only the slot matching the category is authoritative; the others keep
/// whatever the user last picked so switching back restores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSelection {
    /// `None` covers both "unset" and labels this build does not know
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Option<Category>,

    #[serde(rename = "airlineID", default)]
    pub airline_id: Option<String>,

    #[serde(rename = "otaID", default)]
    pub ota_id: Option<String>,

    #[serde(rename = "hotelID", default)]
    pub hotel_id: Option<String>,

    #[serde(rename = "chargeCardID", default)]
    pub charge_card_id: Option<String>,
}

fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let label = Option::<String>::deserialize(deserializer)?;
    Ok(label.as_deref().and_then(Category::from_label))
}

impl AssetSelection {
    /// Set the category from a raw inspector label.
    ///
    /// Unrecognized labels clear the category, which selects the airline slot.
    pub fn with_category_label(mut self, label: &str) -> Self {
        self.category = Category::from_label(label);
        self
    }

    /// The identifier that drives resolution.
    ///
    /// `Payment`, `Hotel` and `OTA` use their own slot; everything else,
    /// including no category at all, falls back to the airline slot.
    pub fn active_id(&self) -> Option<&str> {
        let slot = match self.category {
            Some(Category::Payment) => &self.charge_card_id,
            Some(Category::Hotel) => &self.hotel_id,
            Some(Category::Ota) => &self.ota_id,
            Some(Category::Airline) | None => &self.airline_id,
        };
        slot.as_deref()
    }
}
