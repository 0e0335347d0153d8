//! `partnerlogo cache` — Cache inspection.

use super::{CommandResult, load_config, open_store};
use partnerlogo_core::asset::CachedEntry;
use partnerlogo_core::cache_key::CacheKey;

pub async fn show(component_id: &str) -> CommandResult {
    let config = load_config()?;
    let store = open_store(&config).await?;
    let key = CacheKey::derive(component_id);

    println!("Cache entry {key} ({} backend)", store.name());
    match store.get(key.as_str()).await? {
        None => println!("   No entry cached."),
        Some(raw) => match CachedEntry::parse(&raw) {
            Ok(CachedEntry::Full(state)) => {
                println!("{}", serde_json::to_string_pretty(&state)?);
            }
            Ok(legacy @ CachedEntry::Legacy { .. }) => {
                println!("   Legacy entry, refreshed on next resolve:");
                println!("{}", serde_json::to_string_pretty(&legacy.into_state())?);
            }
            Err(e) => println!("   ❌ Unreadable entry ({e}): {raw}"),
        },
    }

    Ok(())
}
