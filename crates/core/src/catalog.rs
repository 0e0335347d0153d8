//! Catalog records and the owner categories they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single entry of the static brand-asset catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Stable asset identifier used by the remote service
    pub id: String,

    /// Display name (may carry stray whitespace)
    pub name: String,

    /// Owner label; its prefix decides the category
    pub owner: String,
}

impl AssetRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            owner: owner.into(),
        }
    }

    /// Whether this record's owner falls under `category`.
    pub fn belongs_to(&self, category: Category) -> bool {
        self.owner.starts_with(category.prefix())
    }
}

/// Owner classification of a partner asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Airline,
    #[serde(rename = "OTA")]
    Ota,
    Hotel,
    Payment,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Airline,
        Category::Ota,
        Category::Hotel,
        Category::Payment,
    ];

    /// The owner prefix that marks catalog membership.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Airline => "Airline",
            Category::Ota => "OTA",
            Category::Hotel => "Hotel",
            Category::Payment => "Payment",
        }
    }

    /// Parse a category label exactly as the inspector emits it.
    ///
    /// Returns `None` for anything unrecognized; callers resolve that to the
    /// airline identifier.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.prefix() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_prefix_decides_membership() {
        let record = AssetRecord::new("a1", "Virgin America", "Airline - Virgin");
        assert!(record.belongs_to(Category::Airline));
        assert!(!record.belongs_to(Category::Hotel));
    }

    #[test]
    fn prefix_match_is_case_sensitive() {
        let record = AssetRecord::new("o1", "Expedia", "ota");
        assert!(!record.belongs_to(Category::Ota));
    }

    #[test]
    fn labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_label(category.prefix()), Some(category));
        }
        assert_eq!(Category::from_label("Rail"), None);
    }

    #[test]
    fn ota_serializes_as_uppercase_label() {
        let json = serde_json::to_string(&Category::Ota).unwrap();
        assert_eq!(json, "\"OTA\"");
    }
}
