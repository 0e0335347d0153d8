//! Category index over the static catalog.

use partnerlogo_core::catalog::{AssetRecord, Category};
use partnerlogo_core::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// One selectable entry: the asset id and the title shown for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetOption {
    pub id: String,
    pub title: String,
}

/// The full catalog, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: Vec<AssetRecord>,
}

impl CatalogIndex {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        Self { records }
    }

    /// Load a catalog from a JSON array of records.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let records: Vec<AssetRecord> =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!(path = %path.display(), count = records.len(), "Catalog loaded");
        Ok(Self::new(records))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    /// Selectable options for `category`, ordered by name.
    ///
    /// Names compare byte-wise after trimming; equal names keep catalog order.
    pub fn select_by_category(&self, category: Category) -> Vec<AssetOption> {
        let mut matching: Vec<&AssetRecord> = self
            .records
            .iter()
            .filter(|record| record.belongs_to(category))
            .collect();

        matching.sort_by(|a, b| a.name.trim().cmp(b.name.trim()));

        matching
            .into_iter()
            .map(|record| AssetOption {
                id: record.id.clone(),
                title: record.name.trim().to_string(),
            })
            .collect()
    }

    /// Parallel id and title lists, the shape enum controls expect.
    pub fn options(&self, category: Category) -> (Vec<String>, Vec<String>) {
        self.select_by_category(category)
            .into_iter()
            .map(|option| (option.id, option.title))
            .unzip()
    }

    /// Look up a record by asset id.
    pub fn find(&self, id: &str) -> Option<&AssetRecord> {
        self.records.iter().find(|record| record.id == id)
    }
}
