//! The knowledge router: ordered first-match scan, character-budget
//! truncation, and prompt-block formatting.
//!
//! `route` is a pure function of its input and the tables fixed at
//! construction. Every input string, including the empty string, takes a
//! defined normal-path branch; there are no reachable error states.

use std::sync::Arc;
use tracing::debug;
use uptend_core::{Corpus, Error, Result, RoutingError};
use uptend_knowledge::CorpusStore;

use crate::rules::{default_rules, RoutingRule};

/// Maximum characters of corpus content allowed into one routed block.
/// Protects the downstream model's context window deterministically.
pub const DEFAULT_CONTEXT_BUDGET_CHARS: usize = 12_000;

/// Fixed marker appended when a guide was cut to fit the budget. Downstream
/// consumers and tests detect truncation by this exact substring.
pub const TRUNCATION_MARKER: &str =
    "\n\n[Guide truncated to fit the context budget. More detail exists on this topic.]";

/// Fixed instruction text appended after the knowledge block.
pub const INSTRUCTION_SUFFIX: &str = "Use the knowledge above when it applies. \
Be specific and quantitative: cite real prices, thresholds, and deadlines from the material. \
For tax, legal, or licensing decisions, remind the user to confirm with a licensed CPA or attorney.";

/// A rule bound to its corpus. Binding happens once, at construction, so
/// the scan in `route` never has a lookup that can fail.
#[derive(Debug)]
struct BoundRule {
    rule: RoutingRule,
    corpus: Arc<Corpus>,
}

/// Stateless router over an ordered rule table and a fixed corpus set.
#[derive(Debug)]
pub struct KnowledgeRouter {
    rules: Vec<BoundRule>,
    budget_chars: usize,
}

impl KnowledgeRouter {
    /// Bind a rule table to a corpus store.
    ///
    /// A rule referencing an id absent from the store is a configuration
    /// defect and fails here, not during routing.
    pub fn new(store: &CorpusStore, rules: Vec<RoutingRule>, budget_chars: usize) -> Result<Self> {
        let mut bound = Vec::with_capacity(rules.len());
        for rule in rules {
            let corpus = store.get(rule.corpus_id()).ok_or_else(|| {
                Error::Routing(RoutingError::UnknownCorpus {
                    rule: rule.name().to_string(),
                    corpus_id: rule.corpus_id().to_string(),
                })
            })?;
            bound.push(BoundRule { rule, corpus });
        }

        debug!(
            rules = bound.len(),
            budget_chars, "Knowledge router constructed"
        );
        Ok(Self {
            rules: bound,
            budget_chars,
        })
    }

    /// Router over the built-in UpTend guides and rule table with the
    /// default budget.
    pub fn with_defaults() -> Result<Self> {
        let store = uptend_knowledge::builtin_store()?;
        Self::new(&store, default_rules()?, DEFAULT_CONTEXT_BUDGET_CHARS)
    }

    /// Map one user message to a formatted context block, or `""`.
    ///
    /// Rules are evaluated in table order; the first match selects the
    /// corpus and no further rules run. No match (and a blank message) is
    /// a normal outcome, not an error: it means "answer generally".
    pub fn route(&self, message: &str) -> String {
        if message.trim().is_empty() {
            return String::new();
        }

        for bound in &self.rules {
            if bound.rule.matches(message) {
                debug!(
                    rule = bound.rule.name(),
                    corpus = %bound.corpus.id,
                    "Knowledge rule matched"
                );
                return self.format_block(&bound.corpus);
            }
        }

        debug!("No knowledge rule matched");
        String::new()
    }

    /// The ordered (name, corpus id, label) view of the rule table.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &str, &str)> {
        self.rules
            .iter()
            .map(|b| (b.rule.name(), b.corpus.id.as_str(), b.corpus.label.as_str()))
    }

    /// Configured truncation budget in characters.
    pub fn budget_chars(&self) -> usize {
        self.budget_chars
    }

    /// Wrap (possibly truncated) corpus content in the delimited block the
    /// chat layer concatenates into the system prompt.
    fn format_block(&self, corpus: &Corpus) -> String {
        let (content, truncated) = truncate_chars(&corpus.content, self.budget_chars);
        if truncated {
            debug!(
                corpus = %corpus.id,
                budget = self.budget_chars,
                full_chars = corpus.chars(),
                "Corpus truncated to budget"
            );
        }

        let mut block = String::with_capacity(content.len() + 512);
        block.push_str("\n\n=== RELEVANT KNOWLEDGE: ");
        block.push_str(&corpus.label);
        block.push_str(" ===\n\n");
        block.push_str(content);
        if truncated {
            block.push_str(TRUNCATION_MARKER);
        }
        block.push_str("\n\n=== END KNOWLEDGE ===\n\n");
        block.push_str(INSTRUCTION_SUFFIX);
        block
    }
}

/// Cut `content` to at most `budget` characters, on a char boundary.
/// Returns the slice and whether anything was cut.
fn truncate_chars(content: &str, budget: usize) -> (&str, bool) {
    match content.char_indices().nth(budget) {
        Some((byte_idx, _)) => (&content[..byte_idx], true),
        None => (content, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uptend_core::Corpus;

    fn store_with(corpora: Vec<Corpus>) -> CorpusStore {
        CorpusStore::new(corpora).unwrap()
    }

    fn rule(name: &str, corpus_id: &str, pattern: &str) -> RoutingRule {
        RoutingRule::regex(name, corpus_id, pattern).unwrap()
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_output() {
        let router = KnowledgeRouter::with_defaults().unwrap();
        assert_eq!(router.route(""), "");
        assert_eq!(router.route("   \n\t "), "");
    }

    #[test]
    fn no_match_yields_empty_output() {
        let router = KnowledgeRouter::with_defaults().unwrap();
        assert_eq!(router.route("What's the weather today?"), "");
    }

    #[test]
    fn match_wraps_content_with_label_header() {
        let store = store_with(vec![Corpus::new("a", "Alpha Knowledge", "alpha body text")]);
        let rules = vec![rule("alpha", "a", r"\balpha\b")];
        let router = KnowledgeRouter::new(&store, rules, 100).unwrap();

        let block = router.route("tell me about alpha");
        assert!(block.contains("=== RELEVANT KNOWLEDGE: Alpha Knowledge ==="));
        assert!(block.contains("alpha body text"));
        assert!(block.contains("=== END KNOWLEDGE ==="));
        assert!(block.contains("licensed CPA or attorney"));
    }

    #[test]
    fn first_match_wins_over_later_broader_rule() {
        let store = store_with(vec![
            Corpus::new("narrow", "Narrow", "narrow content"),
            Corpus::new("broad", "Broad", "broad content"),
        ]);
        // Rule A: narrower pattern, earlier. Rule B: matches almost anything.
        let rules = vec![
            rule("narrow", "narrow", r"\bwidget pricing\b"),
            rule("broad", "broad", r"\bpricing\b"),
        ];
        let router = KnowledgeRouter::new(&store, rules, 1_000).unwrap();

        let block = router.route("question about widget pricing today");
        assert!(block.contains("Narrow"));
        assert!(!block.contains("Broad"));
    }

    #[test]
    fn over_budget_content_is_cut_and_marked() {
        let long = "x".repeat(500);
        let store = store_with(vec![Corpus::new("big", "Big", long)]);
        let rules = vec![rule("big", "big", r"\bbig\b")];
        let router = KnowledgeRouter::new(&store, rules, 100).unwrap();

        let block = router.route("big question");
        assert!(block.contains(TRUNCATION_MARKER));
        assert!(block.contains(&"x".repeat(100)));
        assert!(!block.contains(&"x".repeat(101)));
    }

    #[test]
    fn under_budget_content_kept_verbatim_without_marker() {
        let store = store_with(vec![Corpus::new("small", "Small", "short guide")]);
        let rules = vec![rule("small", "small", r"\bsmall\b")];
        let router = KnowledgeRouter::new(&store, rules, 12_000).unwrap();

        let block = router.route("small question");
        assert!(block.contains("short guide"));
        assert!(!block.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn truncation_is_char_boundary_safe() {
        // 3-byte chars: byte-indexed truncation would slice mid-sequence.
        let long = "日".repeat(50);
        let store = store_with(vec![Corpus::new("jp", "JP", long)]);
        let rules = vec![rule("jp", "jp", r"\bjp\b")];
        let router = KnowledgeRouter::new(&store, rules, 10).unwrap();

        let block = router.route("jp please");
        assert!(block.contains(&"日".repeat(10)));
        assert!(!block.contains(&"日".repeat(11)));
        assert!(block.contains(TRUNCATION_MARKER));
    }

    #[test]
    fn route_is_idempotent() {
        let router = KnowledgeRouter::with_defaults().unwrap();
        let msg = "how should I handle bookkeeping for my business";
        assert_eq!(router.route(msg), router.route(msg));
    }

    #[test]
    fn unknown_corpus_reference_fails_construction() {
        let store = store_with(vec![Corpus::new("a", "A", "content")]);
        let rules = vec![rule("dangling", "nope", r"\bx\b")];
        let err = KnowledgeRouter::new(&store, rules, 100).unwrap_err();
        assert!(err.to_string().contains("unknown corpus"));
        assert!(err.to_string().contains("dangling"));
    }

    #[test]
    fn truncate_chars_exact_fit_is_not_truncated() {
        let (s, cut) = truncate_chars("abcd", 4);
        assert_eq!(s, "abcd");
        assert!(!cut);

        let (s, cut) = truncate_chars("abcde", 4);
        assert_eq!(s, "abcd");
        assert!(cut);
    }
}
