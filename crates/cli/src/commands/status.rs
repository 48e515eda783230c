//! `george status` — Show configuration and table summary.

use uptend_config::AssistantConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AssistantConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let router = super::build_router()?;
    let store = uptend_knowledge::builtin_store()?;

    println!("🏠 {} Knowledge Router Status", config.assistant_name);
    println!("================================");
    println!("  Config dir:      {}", AssistantConfig::config_dir().display());
    println!("  Context budget:  {} chars", router.budget_chars());
    println!("  Corpora loaded:  {}", store.len());
    println!("  Routing rules:   {}", router.rules().count());

    let config_path = AssistantConfig::config_dir().join("config.toml");
    if config_path.exists() {
        println!("\n  ✅ Config file found");
    } else {
        println!("\n  ⚠️  No config file — built-in defaults in effect");
    }

    Ok(())
}
