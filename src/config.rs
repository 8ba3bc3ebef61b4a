//! Construction-time settings for [`TermIndex`](crate::TermIndex).

/// Default number of buckets, matching the console front end's initial table.
pub const DEFAULT_CAPACITY: usize = 50;

/// Default number of doc-id slots reserved for a newly seen term.
pub const DEFAULT_INITIAL_DOC_CAPACITY: usize = 10;

/// Settings for building a [`TermIndex`](crate::TermIndex).
///
/// `capacity` must be non-zero; construction rejects 0 with
/// `IndexError::InvalidArgument`. An `initial_doc_capacity` of 0 is
/// treated as 1 so doubling growth always makes progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Number of buckets in the table.
    pub capacity: usize,
    /// Doc-id slots reserved when a term is first inserted.
    pub initial_doc_capacity: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            initial_doc_capacity: DEFAULT_INITIAL_DOC_CAPACITY,
        }
    }
}

impl IndexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_initial_doc_capacity(mut self, initial_doc_capacity: usize) -> Self {
        self.initial_doc_capacity = initial_doc_capacity;
        self
    }

    pub(crate) fn effective_doc_capacity(&self) -> usize {
        self.initial_doc_capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: defaults are 50 buckets and 10 doc-id slots.
    #[test]
    fn defaults() {
        let c = IndexConfig::default();
        assert_eq!(c.capacity, 50);
        assert_eq!(c.initial_doc_capacity, 10);
        assert_eq!(IndexConfig::new(), c);
    }

    /// Invariant: builder methods override individual fields only.
    #[test]
    fn builder_overrides() {
        let c = IndexConfig::new().with_capacity(7).with_initial_doc_capacity(2);
        assert_eq!(c.capacity, 7);
        assert_eq!(c.initial_doc_capacity, 2);
    }

    /// Invariant: a zero doc capacity is bumped to 1 so doubling can grow it.
    #[test]
    fn zero_doc_capacity_is_clamped() {
        let c = IndexConfig::new().with_initial_doc_capacity(0);
        assert_eq!(c.effective_doc_capacity(), 1);
    }
}
