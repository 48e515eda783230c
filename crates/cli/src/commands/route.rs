//! `george route` — Route one message and print the context block.
//!
//! Prints the exact string the chat layer would append to the system
//! prompt; an empty routing result goes to stderr so piped output stays
//! clean.

pub fn run(message: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = super::build_router()?;

    let block = router.route(message);
    if block.is_empty() {
        eprintln!("No knowledge corpus matched; the assistant answers generally.");
    } else {
        println!("{block}");
    }

    Ok(())
}
