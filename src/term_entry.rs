//! TermEntry: one stored term, its doc-id list, and its chain link.

use crate::error::Result;
use slotmap::new_key_type;

/// Document identifier. Any `i32` is accepted, negatives included.
pub type DocId = i32;

new_key_type! {
    /// Arena key of a `TermEntry`; buckets and chain links hold these.
    pub(crate) struct EntryKey;
}

/// A stored term and the doc ids recorded for it, in insertion order.
///
/// Doc ids are only ever appended; duplicates are kept as-is.
#[derive(Debug)]
pub struct TermEntry {
    term: Box<[u8]>,
    doc_ids: Vec<DocId>,
    pub(crate) next: Option<EntryKey>,
}

impl TermEntry {
    /// Copy `term` and record `first` in a doc-id array of `initial_capacity`
    /// slots. Both allocations are fallible.
    pub(crate) fn new(term: &[u8], first: DocId, initial_capacity: usize) -> Result<Self> {
        let mut owned = Vec::new();
        owned.try_reserve_exact(term.len())?;
        owned.extend_from_slice(term);

        let mut doc_ids = Vec::new();
        doc_ids.try_reserve_exact(initial_capacity.max(1))?;
        doc_ids.push(first);

        Ok(Self {
            term: owned.into_boxed_slice(),
            doc_ids,
            next: None,
        })
    }

    /// Append a doc id, doubling the array when full. The reservation happens
    /// before the write, so on error the entry is exactly as it was.
    pub(crate) fn push_doc_id(&mut self, doc_id: DocId) -> Result<()> {
        if self.doc_ids.len() == self.doc_ids.capacity() {
            let additional = self.doc_ids.capacity().max(1);
            self.doc_ids.try_reserve_exact(additional)?;
        }
        self.doc_ids.push(doc_id);
        Ok(())
    }

    pub fn term(&self) -> &[u8] {
        &self.term
    }

    pub fn doc_ids(&self) -> &[DocId] {
        &self.doc_ids
    }

    /// Number of doc ids recorded.
    pub fn len(&self) -> usize {
        self.doc_ids.len()
    }

    /// Always false: an entry exists only once it holds a doc id.
    pub fn is_empty(&self) -> bool {
        self.doc_ids.is_empty()
    }

    /// Allocated doc-id slots.
    pub fn capacity(&self) -> usize {
        self.doc_ids.capacity()
    }
}
