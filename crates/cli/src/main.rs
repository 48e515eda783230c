//! `george` CLI — the main entry point.
//!
//! Commands:
//! - `route`    — Route one message and print the knowledge context block
//! - `corpora`  — List the built-in knowledge corpora
//! - `rules`    — Print the ordered routing rule table
//! - `status`   — Show configuration and table summary

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "george",
    about = "george — UpTend assistant knowledge router tooling",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Route a message and print the context block that would be injected
    Route {
        /// The user message to route
        message: String,
    },

    /// List the built-in knowledge corpora
    Corpora,

    /// Print the ordered routing rule table
    Rules,

    /// Show configuration and table summary
    Status,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Route { message } => commands::route::run(&message)?,
        Commands::Corpora => commands::corpora::run()?,
        Commands::Rules => commands::rules::run()?,
        Commands::Status => commands::status::run()?,
    }

    Ok(())
}
