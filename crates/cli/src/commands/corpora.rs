//! `george corpora` — List the built-in knowledge corpora.

use uptend_config::AssistantConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AssistantConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let store = uptend_knowledge::builtin_store()?;
    let budget = config.knowledge.context_budget_chars;

    println!("Knowledge corpora ({} loaded)", store.len());
    println!("============================");
    for corpus in store.iter() {
        let fit = if corpus.chars() > budget {
            "truncated at budget"
        } else {
            "fits budget"
        };
        println!(
            "  {:<20} {:<36} {:>7} chars (~{} tokens, {})",
            corpus.id,
            corpus.label,
            corpus.chars(),
            corpus.estimated_tokens(),
            fit
        );
    }

    Ok(())
}
