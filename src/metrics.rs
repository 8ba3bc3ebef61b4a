//! Aggregate statistics snapshot.

use core::fmt;

/// Counts gathered by a full pass over the table. Never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexMetrics {
    /// Distinct terms stored.
    pub term_count: usize,
    /// Sum of doc-id list lengths over all terms.
    pub doc_count: usize,
    /// `term_count / capacity`.
    pub load_factor: f64,
}

impl IndexMetrics {
    pub(crate) fn new(term_count: usize, doc_count: usize, capacity: usize) -> Self {
        Self {
            term_count,
            doc_count,
            load_factor: term_count as f64 / capacity as f64,
        }
    }
}

impl fmt::Display for IndexMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "terms={} docs={} load_factor={:.4}",
            self.term_count, self.doc_count, self.load_factor
        )
    }
}
