//! `partnerlogo catalog` and `partnerlogo controls` — Catalog inspection.

use super::{CommandResult, load_catalog, load_config};
use partnerlogo_catalog::{ControlDefaults, property_controls};
use partnerlogo_core::catalog::Category;

pub async fn list(label: &str) -> CommandResult {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;

    let category = Category::from_label(label).ok_or_else(|| {
        format!("Unknown category '{label}' (expected Airline, OTA, Hotel or Payment)")
    })?;

    let options = catalog.select_by_category(category);
    println!("{category} assets ({})", options.len());
    println!("{}", "=".repeat(24));
    if options.is_empty() {
        println!("   No assets in this category.");
    }
    for option in &options {
        println!("  {:<40} {}", option.id, option.title);
    }

    Ok(())
}

pub async fn controls() -> CommandResult {
    let config = load_config()?;
    let catalog = load_catalog(&config)?;

    let defaults = ControlDefaults {
        airline_id: config.assets.default_asset_id.clone(),
    };
    let controls = property_controls(&catalog, &defaults);
    println!("{}", serde_json::to_string_pretty(&controls)?);

    Ok(())
}
