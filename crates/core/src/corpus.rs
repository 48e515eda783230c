//! Corpus — one named, labeled block of static domain reference text.
//!
//! Corpora are defined at process start from embedded source documents and
//! never mutated afterwards. A corpus knows nothing about routing; rules in
//! the router crate reference corpora by id and share them read-only.

use serde::{Deserialize, Serialize};

/// A single block of domain reference prose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Corpus {
    /// Stable identifier, e.g. `"bookkeeping"`.
    pub id: String,
    /// Human-readable display name used in the attached prompt header,
    /// e.g. `"Bookkeeping & Tax Knowledge"`.
    pub label: String,
    /// The full reference text. Arbitrarily long (the real guides run to
    /// tens of thousands of characters); truncation is the router's job.
    pub content: String,
}

impl Corpus {
    /// Create a corpus from its parts.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            content: content.into(),
        }
    }

    /// Content length in characters (the unit the truncation budget counts).
    pub fn chars(&self) -> usize {
        self.content.chars().count()
    }

    /// Rough token estimate for the content (4 chars ≈ 1 token).
    pub fn estimated_tokens(&self) -> usize {
        self.content.len() / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_construction() {
        let c = Corpus::new("hiring", "Hiring & Team Building Knowledge", "# Hiring\n\ntext");
        assert_eq!(c.id, "hiring");
        assert!(c.label.contains("Hiring"));
        assert!(c.content.starts_with("# Hiring"));
    }

    #[test]
    fn chars_counts_unicode_scalars_not_bytes() {
        let c = Corpus::new("t", "T", "héllo"); // 5 chars, 6 bytes
        assert_eq!(c.chars(), 5);
        assert_eq!(c.content.len(), 6);
    }

    #[test]
    fn estimated_tokens_reasonable() {
        let c = Corpus::new("t", "T", "a".repeat(4000));
        assert_eq!(c.estimated_tokens(), 1000);
    }
}
