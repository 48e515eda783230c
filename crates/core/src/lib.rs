//! # UpTend Core
//!
//! Domain types and error definitions for the UpTend assistant's knowledge
//! router. This crate defines the domain model that the store, router, and
//! tooling crates build against.
//!
//! ## Design Philosophy
//!
//! Corpora are immutable value types created once at startup and shared
//! read-only for the lifetime of the process. Everything that can go wrong
//! goes wrong at construction time (bad pattern, dangling corpus reference,
//! broken config); the routing hot path itself is total over all inputs.

pub mod corpus;
pub mod error;

// Re-export key types at crate root for ergonomics
pub use corpus::Corpus;
pub use error::{ConfigError, Error, Result, RoutingError};
