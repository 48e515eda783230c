//! Routing rules and the built-in rule table.
//!
//! A rule pairs a predicate with the id of the corpus it attaches. Rules
//! live in a fixed, meaningful order: the table is scanned top to bottom
//! and the first match wins, so specific topics sit above the broad
//! `business_ops` catch-all. Order is the only specificity mechanism;
//! overlapping patterns are intentional and resolved by position.

use uptend_core::{Error, Result, RoutingError};
use uptend_knowledge::corpus_ids;

use crate::predicate::{KeywordPredicate, Predicate, RegexPredicate};

/// One (name, predicate, corpus reference) triple.
pub struct RoutingRule {
    name: String,
    corpus_id: String,
    predicate: Box<dyn Predicate>,
}

impl RoutingRule {
    /// Create a rule from any predicate.
    pub fn new(
        name: impl Into<String>,
        corpus_id: impl Into<String>,
        predicate: Box<dyn Predicate>,
    ) -> Self {
        Self {
            name: name.into(),
            corpus_id: corpus_id.into(),
            predicate,
        }
    }

    /// Create a rule with a case-insensitive regex predicate.
    pub fn regex(
        name: impl Into<String>,
        corpus_id: impl Into<String>,
        pattern: &str,
    ) -> Result<Self> {
        let name = name.into();
        let predicate = RegexPredicate::new(pattern).map_err(|e| {
            Error::Routing(RoutingError::InvalidPattern {
                rule: name.clone(),
                reason: e.to_string(),
            })
        })?;
        Ok(Self::new(name, corpus_id, Box::new(predicate)))
    }

    /// Create a rule with a keyword-set predicate.
    pub fn keywords<I, S>(
        name: impl Into<String>,
        corpus_id: impl Into<String>,
        keywords: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, corpus_id, Box::new(KeywordPredicate::new(keywords)))
    }

    /// Human-readable rule name (used in logs and the `george rules` listing).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id of the corpus this rule attaches.
    pub fn corpus_id(&self) -> &str {
        &self.corpus_id
    }

    /// Evaluate the rule's predicate against a message.
    pub fn matches(&self, message: &str) -> bool {
        self.predicate.matches(message)
    }
}

impl std::fmt::Debug for RoutingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingRule")
            .field("name", &self.name)
            .field("corpus_id", &self.corpus_id)
            .finish_non_exhaustive()
    }
}

/// The built-in ordered rule table for the six UpTend guides.
///
/// Financial and people topics outrank trade-specific terms so that, e.g.,
/// "help with hiring an electrician" attaches the hiring guide rather than
/// the electrical category sheet. `business_ops` is the catch-all and must
/// stay last.
pub fn default_rules() -> Result<Vec<RoutingRule>> {
    Ok(vec![
        RoutingRule::regex(
            "bookkeeping",
            corpus_ids::BOOKKEEPING,
            r"\b(bookkeep\w*|tax(es)?|accounting|accountant|invoice\w*|invoicing|quickbooks|deduct\w*|write[- ]?offs?|cash flow|profit and loss|p&l|s[- ]?corps?)\b",
        )?,
        RoutingRule::regex(
            "hiring",
            corpus_ids::HIRING,
            r"\b(hir(e|ing)|employees?|payroll|recruit\w*|onboard\w*|1099|w-?2|workers'? comp\w*|interview\w*|retention)\b",
        )?,
        RoutingRule::regex(
            "business_plans",
            corpus_ids::BUSINESS_PLANS,
            r"\b(business plans?|sba|loan application|investors?|funding|financial projections?|executive summary)\b",
        )?,
        RoutingRule::regex(
            "florida",
            corpus_ids::FLORIDA,
            r"\b(florida|orlando|dbpr|cilb|hurricanes?|sales tax|sunbiz|licens\w*)\b",
        )?,
        RoutingRule::regex(
            "service_categories",
            corpus_ids::SERVICE_CATEGORIES,
            r"\b(hvac|air condition\w*|a/?c|plumb\w*|electric\w*|pressure wash\w*|lawn|landscap\w*|junk removal|hauling|roof\w*|cleaning|handyman|pest control|pool service|garage doors?|paint\w*|gutters?|appliances?|mosquito\w*)\b",
        )?,
        RoutingRule::regex(
            "business_ops",
            corpus_ids::BUSINESS_OPS,
            r"\b(pricing|price\w*|marketing|schedul\w*|dispatch\w*|customers?|reviews?|insurance|operations?|scal(e|ing)|grow\w*|revenue|estimates?)\b",
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_compiles_and_ends_with_catch_all() {
        let rules = default_rules().unwrap();
        assert_eq!(rules.len(), 6);
        assert_eq!(rules.last().unwrap().corpus_id(), corpus_ids::BUSINESS_OPS);
    }

    #[test]
    fn hiring_outranks_trade_terms() {
        let rules = default_rules().unwrap();
        let first_match = rules
            .iter()
            .find(|r| r.matches("I need help with HIRING an electrician"))
            .unwrap();
        assert_eq!(first_match.corpus_id(), corpus_ids::HIRING);
    }

    #[test]
    fn bookkeeping_outranks_hiring_when_both_mentioned() {
        let rules = default_rules().unwrap();
        let first_match = rules
            .iter()
            .find(|r| r.matches("bookkeeping once I start hiring?"))
            .unwrap();
        assert_eq!(first_match.corpus_id(), corpus_ids::BOOKKEEPING);
    }

    #[test]
    fn weather_matches_nothing() {
        let rules = default_rules().unwrap();
        assert!(!rules.iter().any(|r| r.matches("What's the weather today?")));
    }

    #[test]
    fn keyword_rules_plug_into_the_same_table() {
        let rule = RoutingRule::keywords("storm_prep", corpus_ids::FLORIDA, [
            "storm prep",
            "shutters",
        ]);
        assert!(rule.matches("need STORM PREP before the weekend"));
        assert!(!rule.matches("routine maintenance question"));
        assert_eq!(rule.corpus_id(), corpus_ids::FLORIDA);
    }

    #[test]
    fn invalid_pattern_carries_rule_name() {
        let err = RoutingRule::regex("broken", "whatever", r"\b(unclosed").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }
}
