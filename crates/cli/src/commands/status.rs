//! `partnerlogo status` — Show configuration and backend status.

use super::{CommandResult, load_catalog, load_config};
use partnerlogo_config::AppConfig;

pub async fn run() -> CommandResult {
    let config = load_config()?;

    println!("Partner Logo Status");
    println!("===================");
    println!("  Config dir:   {}", AppConfig::config_dir().display());
    println!("  Service:      {}", config.service.base_url);
    println!("  Timeout:      {}s", config.service.timeout_secs);
    println!("  Default ID:   {}", config.assets.default_asset_id);
    println!("  Store:        {}", config.store.backend);
    if matches!(config.store.backend.as_str(), "file" | "sqlite") {
        let path = config.store.resolved_path();
        if path.exists() {
            let size_kb = std::fs::metadata(&path)?.len() as f64 / 1024.0;
            println!("  Store file:   {} ({:.1} KB)", path.display(), size_kb);
        } else {
            println!("  Store file:   {} (not created yet)", path.display());
        }
    }
    println!("  Render size:  {}×{}", config.render.width, config.render.height);

    match load_catalog(&config) {
        Ok(catalog) => println!("  Catalog:      {} records", catalog.len()),
        Err(e) => println!("  Catalog:      ❌ {e}"),
    }

    let config_path = AppConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — run `partnerlogo onboard` first");
    }

    Ok(())
}
