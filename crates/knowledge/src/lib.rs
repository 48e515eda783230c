//! # UpTend Knowledge
//!
//! The knowledge corpus store and the built-in corpus set.
//!
//! Each corpus is one markdown guide on a single business topic, compiled
//! into the binary with `include_str!` from `content/*.md`. The guides are
//! static data: loaded once at startup, shared read-only for the life of
//! the process, never mutated.

pub mod store;

pub use store::CorpusStore;

use uptend_core::{Corpus, Result};

/// Stable ids for the built-in corpora. Routing rules reference these.
pub mod corpus_ids {
    pub const BUSINESS_OPS: &str = "business_ops";
    pub const BOOKKEEPING: &str = "bookkeeping";
    pub const HIRING: &str = "hiring";
    pub const BUSINESS_PLANS: &str = "business_plans";
    pub const SERVICE_CATEGORIES: &str = "service_categories";
    pub const FLORIDA: &str = "florida";
}

/// Build the store holding the six built-in UpTend guides.
///
/// Fails only on a build-time defect (duplicate id, empty guide), never
/// at routing time.
pub fn builtin_store() -> Result<CorpusStore> {
    CorpusStore::new(vec![
        Corpus::new(
            corpus_ids::BUSINESS_OPS,
            "Business Operations Knowledge",
            include_str!("../content/business-ops.md"),
        ),
        Corpus::new(
            corpus_ids::BOOKKEEPING,
            "Bookkeeping & Tax Knowledge",
            include_str!("../content/bookkeeping.md"),
        ),
        Corpus::new(
            corpus_ids::HIRING,
            "Hiring & Team Building Knowledge",
            include_str!("../content/hiring.md"),
        ),
        Corpus::new(
            corpus_ids::BUSINESS_PLANS,
            "Business Planning Knowledge",
            include_str!("../content/business-plans.md"),
        ),
        Corpus::new(
            corpus_ids::SERVICE_CATEGORIES,
            "Service Category Knowledge",
            include_str!("../content/service-categories.md"),
        ),
        Corpus::new(
            corpus_ids::FLORIDA,
            "Florida Market Knowledge",
            include_str!("../content/florida.md"),
        ),
    ])
}
