//! Error types for the UpTend knowledge domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all knowledge-router operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Routing errors ---
    #[error("Routing error: {0}")]
    Routing(#[from] RoutingError),

    // --- Configuration errors ---
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Defects in the rule table or corpus set, surfaced when the router is
/// constructed. Nothing in this enum is reachable from `route()` itself.
#[derive(Debug, Clone, Error)]
pub enum RoutingError {
    #[error("Rule '{rule}' references unknown corpus: {corpus_id}")]
    UnknownCorpus { rule: String, corpus_id: String },

    #[error("Invalid pattern for rule '{rule}': {reason}")]
    InvalidPattern { rule: String, reason: String },

    #[error("Duplicate corpus id: {0}")]
    DuplicateCorpus(String),

    #[error("Corpus '{0}' has empty content")]
    EmptyCorpus(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: std::path::PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: std::path::PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
