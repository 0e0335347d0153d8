//! `partnerlogo onboard` — First-time setup.

use super::CommandResult;
use partnerlogo_config::AppConfig;

pub async fn run() -> CommandResult {
    let config_dir = AppConfig::config_dir();
    let config_path = config_dir.join("config.toml");

    println!("Partner Logo — First-Time Setup");
    println!("===============================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
        return Ok(());
    }

    std::fs::write(&config_path, AppConfig::default_toml())?;
    println!("✅ Created config.toml at: {}", config_path.display());

    let catalog_path = AppConfig::default().catalog.resolved_path();
    println!("\n📝 Next steps:");
    println!(
        "   1. Place the asset catalog (JSON array of {{id, name, owner}}) at {}",
        catalog_path.display()
    );
    println!("   2. Run: partnerlogo catalog Airline");
    println!("   3. Run: partnerlogo resolve <component-id> --airline <asset-id>\n");

    Ok(())
}
