pub mod cache;
pub mod catalog;
pub mod onboard;
pub mod resolve;
pub mod status;

use partnerlogo_catalog::CatalogIndex;
use partnerlogo_config::AppConfig;
use partnerlogo_core::store::AssetStore;
use partnerlogo_store::{FileStore, InMemoryStore, NoopStore, SqliteStore};
use std::sync::Arc;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    Ok(AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?)
}

/// Open the configured cache backend.
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn AssetStore>, Box<dyn std::error::Error>> {
    let store: Arc<dyn AssetStore> = match config.store.backend.as_str() {
        "sqlite" => {
            let path = config.store.resolved_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            Arc::new(SqliteStore::new(&path.to_string_lossy()).await?)
        }
        "memory" => Arc::new(InMemoryStore::new()),
        "none" => Arc::new(NoopStore),
        _ => Arc::new(FileStore::new(config.store.resolved_path())),
    };
    Ok(store)
}

/// Load the catalog, or an empty one when no file exists yet.
pub fn load_catalog(config: &AppConfig) -> Result<CatalogIndex, Box<dyn std::error::Error>> {
    let path = config.catalog.resolved_path();
    if !path.exists() {
        tracing::info!("No catalog found at {}, using an empty one", path.display());
        return Ok(CatalogIndex::default());
    }
    Ok(CatalogIndex::load(&path)?)
}
