//! # UpTend Router
//!
//! Maps one free-text user message to at most one knowledge corpus and
//! produces a size-bounded, delimited context block ready for prompt
//! injection. This is the decision core behind the assistant's "attach
//! relevant reference material" step: no LLM call, no network, no state.
//!
//! ## Shape
//!
//! - [`Predicate`] — a pure boolean test over the message. Regex and
//!   keyword-set implementations ship here; anything pure fits the seam.
//! - [`RoutingRule`] — (name, predicate, corpus id), held in a fixed order.
//!   Order encodes priority: the first matching rule wins and later rules
//!   are never evaluated.
//! - [`KnowledgeRouter`] — binds rules to corpora at construction, then
//!   answers [`KnowledgeRouter::route`] as a pure function of its input.

pub mod predicate;
pub mod router;
pub mod rules;

pub use predicate::{KeywordPredicate, Predicate, RegexPredicate};
pub use router::{
    KnowledgeRouter, DEFAULT_CONTEXT_BUDGET_CHARS, INSTRUCTION_SUFFIX, TRUNCATION_MARKER,
};
pub use rules::{default_rules, RoutingRule};
