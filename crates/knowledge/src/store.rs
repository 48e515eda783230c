//! Corpus store — the fixed set of named, labeled text blocks.
//!
//! Pure data, no behavior beyond lookup. The router validates its rule
//! references against the store at construction, so a missing corpus is a
//! startup defect rather than something `route()` has to recover from.

use std::sync::Arc;
use tracing::debug;
use uptend_core::{Corpus, Error, Result, RoutingError};

/// An immutable collection of corpora, addressable by id.
///
/// Corpora are held behind `Arc` so routing rules can share them read-only
/// without copying guide text per rule.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    corpora: Vec<Arc<Corpus>>,
}

impl CorpusStore {
    /// Build a store from a list of corpora.
    ///
    /// Rejects duplicate ids and empty content; both indicate a defect in
    /// the source data, not a runtime condition.
    pub fn new(corpora: Vec<Corpus>) -> Result<Self> {
        let mut seen: Vec<&str> = Vec::with_capacity(corpora.len());
        for corpus in &corpora {
            if corpus.content.trim().is_empty() {
                return Err(Error::Routing(RoutingError::EmptyCorpus(corpus.id.clone())));
            }
            if seen.contains(&corpus.id.as_str()) {
                return Err(Error::Routing(RoutingError::DuplicateCorpus(
                    corpus.id.clone(),
                )));
            }
            seen.push(&corpus.id);
        }

        debug!(corpora = corpora.len(), "Corpus store loaded");
        Ok(Self {
            corpora: corpora.into_iter().map(Arc::new).collect(),
        })
    }

    /// Look up a corpus by id.
    pub fn get(&self, id: &str) -> Option<Arc<Corpus>> {
        self.corpora.iter().find(|c| c.id == id).cloned()
    }

    /// Iterate the corpora in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Corpus>> {
        self.corpora.iter()
    }

    /// Number of corpora in the store.
    pub fn len(&self) -> usize {
        self.corpora.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.corpora.is_empty()
    }
}
