//! Text-matching predicates for routing rules.
//!
//! A predicate is a pure function from the message to a boolean. The router
//! only ever calls `matches`, so regex, keyword sets, and future matchers
//! (embedding thresholds, learned classifiers) all plug in behind the same
//! trait without touching the selection, truncation, or formatting logic.

use regex_lite::Regex;

/// A pure boolean test over an input message.
pub trait Predicate: Send + Sync {
    /// Whether this predicate considers the message a match.
    fn matches(&self, message: &str) -> bool;
}

/// Case-insensitive regular-expression predicate.
pub struct RegexPredicate {
    regex: Regex,
}

impl RegexPredicate {
    /// Compile a pattern. Case-insensitivity is applied here so rule
    /// authors write plain patterns.
    pub fn new(pattern: &str) -> Result<Self, regex_lite::Error> {
        let regex = Regex::new(&format!("(?i){pattern}"))?;
        Ok(Self { regex })
    }
}

impl Predicate for RegexPredicate {
    fn matches(&self, message: &str) -> bool {
        self.regex.is_match(message)
    }
}

/// Case-insensitive "message contains any of these words/phrases" predicate.
pub struct KeywordPredicate {
    keywords: Vec<String>,
}

impl KeywordPredicate {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }
}

impl Predicate for KeywordPredicate {
    fn matches(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.keywords.iter().any(|k| message.contains(k.as_str()))
    }
}
