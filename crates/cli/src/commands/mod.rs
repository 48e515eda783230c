pub mod corpora;
pub mod route;
pub mod rules;
pub mod status;

use uptend_config::AssistantConfig;
use uptend_router::{default_rules, KnowledgeRouter};

/// Build the router from the built-in tables and the user's config.
pub fn build_router() -> Result<KnowledgeRouter, Box<dyn std::error::Error>> {
    let config = AssistantConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = uptend_knowledge::builtin_store()?;
    let router = KnowledgeRouter::new(
        &store,
        default_rules()?,
        config.knowledge.context_budget_chars,
    )?;
    Ok(router)
}
