//! `george rules` — Print the ordered routing rule table.
//!
//! Position is priority: the first matching rule wins, so the listing
//! doubles as the precedence documentation.

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let router = super::build_router()?;

    println!("Routing rules (first match wins)");
    println!("================================");
    for (position, (name, corpus_id, label)) in router.rules().enumerate() {
        println!("  {:>2}. {:<20} -> {:<20} ({label})", position + 1, name, corpus_id);
    }

    Ok(())
}
