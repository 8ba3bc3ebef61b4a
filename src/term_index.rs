//! TermIndex: bucket array over an entry arena, chained by arena keys.

use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::hasher::bucket_index;
use crate::metrics::IndexMetrics;
use crate::term_entry::{DocId, EntryKey, TermEntry};
use core::num::NonZeroUsize;
use slotmap::SlotMap;
use tracing::{debug, error, info, warn};

/// In-memory inverted index: term bytes to the doc ids they occur in.
///
/// Each bucket holds the arena key of its chain head; each entry links to
/// the next entry of its chain. New terms are linked at the head. Within a
/// chain, terms are pairwise distinct.
///
/// The index performs no locking. Mutating operations take `&mut self`;
/// callers sharing one index across threads must wrap it themselves.
#[derive(Debug)]
pub struct TermIndex {
    buckets: Vec<Option<EntryKey>>,
    capacity: NonZeroUsize,
    entries: SlotMap<EntryKey, TermEntry>, // storage for every chain
    initial_doc_capacity: usize,
}

fn check_capacity(capacity: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(capacity).ok_or_else(|| {
        warn!("invalid table capacity: must be greater than 0");
        IndexError::InvalidArgument("capacity must be greater than 0")
    })
}

fn alloc_buckets(capacity: NonZeroUsize) -> Result<Vec<Option<EntryKey>>> {
    let mut buckets = Vec::new();
    if let Err(e) = buckets.try_reserve_exact(capacity.get()) {
        error!(capacity = capacity.get(), "failed to allocate bucket array");
        return Err(e.into());
    }
    buckets.resize(capacity.get(), None);
    Ok(buckets)
}

/// Iterator over one bucket's chain, head to tail.
pub(crate) struct Chain<'a> {
    entries: &'a SlotMap<EntryKey, TermEntry>,
    cur: Option<EntryKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (EntryKey, &'a TermEntry);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let e = self.entries.get(k)?;
        self.cur = e.next;
        Some((k, e))
    }
}

/// Iterator over all stored terms in bucket order, then chain order.
pub struct Iter<'a> {
    index: &'a TermIndex,
    bucket: usize,
    cur: Option<EntryKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a [u8], &'a [DocId]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(k) = self.cur {
                let e = self.index.entries.get(k)?;
                self.cur = e.next;
                return Some((e.term(), e.doc_ids()));
            }
            if self.bucket >= self.index.buckets.len() {
                return None;
            }
            self.cur = self.index.buckets[self.bucket];
            self.bucket += 1;
        }
    }
}

impl TermIndex {
    /// Build an empty index with `capacity` buckets and default settings
    /// otherwise. A capacity of 0 is rejected.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(IndexConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: IndexConfig) -> Result<Self> {
        let capacity = check_capacity(config.capacity)?;
        let buckets = alloc_buckets(capacity)?;
        debug!(capacity = capacity.get(), "term index initialized");
        Ok(Self {
            buckets,
            capacity,
            entries: SlotMap::with_key(),
            initial_doc_capacity: config.effective_doc_capacity(),
        })
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of distinct terms stored.
    pub fn term_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn chain(&self, bucket: usize) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cur: self.buckets[bucket],
        }
    }

    fn find_in_bucket(&self, bucket: usize, term: &[u8]) -> Option<EntryKey> {
        self.chain(bucket)
            .find(|(_, e)| e.term() == term)
            .map(|(k, _)| k)
    }

    /// Look up the entry stored for `term`, if any.
    pub fn get(&self, term: impl AsRef<[u8]>) -> Option<&TermEntry> {
        let term = term.as_ref();
        let bucket = bucket_index(term, self.capacity);
        self.find_in_bucket(bucket, term).map(|k| &self.entries[k])
    }

    pub fn contains_term(&self, term: impl AsRef<[u8]>) -> bool {
        self.get(term).is_some()
    }

    /// Record that `term` occurs in `doc_id`.
    ///
    /// An existing term gets `doc_id` appended; a new term gets an entry
    /// linked at the head of its bucket's chain. Any byte string is a valid
    /// term, the empty one included. Either the id is fully recorded or
    /// nothing changes.
    ///
    /// The term copy and doc-id array are reserved fallibly and fail with
    /// `AllocationFailure`. Growing the entry arena itself goes through the
    /// global allocator, so running out of memory there aborts the process
    /// instead of returning an error.
    pub fn insert(&mut self, term: impl AsRef<[u8]>, doc_id: DocId) -> Result<()> {
        let term = term.as_ref();
        let bucket = bucket_index(term, self.capacity);

        if let Some(k) = self.find_in_bucket(bucket, term) {
            return self.entries[k].push_doc_id(doc_id);
        }

        let mut entry = TermEntry::new(term, doc_id, self.initial_doc_capacity)?;
        entry.next = self.buckets[bucket];
        let k = self.entries.insert(entry);
        self.buckets[bucket] = Some(k);
        Ok(())
    }

    /// Apply [`insert`](Self::insert) to each pair in order.
    ///
    /// Not atomic: the first failure is returned and every pair before it
    /// stays committed.
    pub fn insert_batch<I, T>(&mut self, batch: I) -> Result<()>
    where
        I: IntoIterator<Item = (T, DocId)>,
        T: AsRef<[u8]>,
    {
        for (applied, (term, doc_id)) in batch.into_iter().enumerate() {
            if let Err(e) = self.insert(term, doc_id) {
                warn!(applied, error = %e, "batch insert stopped at first failure");
                return Err(e);
            }
        }
        Ok(())
    }

    /// Return up to `max_results` doc ids recorded for `term`, in insertion
    /// order. The result is always a prefix of the stored list.
    pub fn search(&self, term: impl AsRef<[u8]>, max_results: usize) -> Result<Vec<DocId>> {
        let term = term.as_ref();
        let entry = self.get(term).ok_or(IndexError::TermNotFound)?;
        let n = entry.len().min(max_results);
        let mut out = Vec::new();
        out.try_reserve_exact(n)?;
        out.extend_from_slice(&entry.doc_ids()[..n]);
        Ok(out)
    }

    /// Return up to `max_results` doc ids across every term starting with
    /// `prefix`. Ids of one term stay in insertion order; the order of terms
    /// is bucket order then chain order and carries no meaning.
    pub fn search_prefix(
        &self,
        prefix: impl AsRef<[u8]>,
        max_results: usize,
    ) -> Result<Vec<DocId>> {
        let prefix = prefix.as_ref();
        if prefix.is_empty() {
            return Err(IndexError::InvalidArgument("prefix must not be empty"));
        }

        let mut out = Vec::new();
        let mut matched = false;
        for (term, ids) in self.iter() {
            if !term.starts_with(prefix) {
                continue;
            }
            matched = true;
            let room = max_results - out.len();
            if room == 0 {
                break;
            }
            let take = ids.len().min(room);
            out.try_reserve(take)?;
            out.extend_from_slice(&ids[..take]);
        }

        if matched {
            Ok(out)
        } else {
            Err(IndexError::TermNotFound)
        }
    }

    /// Rebuild the bucket array at `new_capacity` and move every entry into
    /// it. All doc ids of every term are carried over, so search results are
    /// the same before and after.
    ///
    /// The new bucket array is allocated before anything is relinked; if
    /// that fails, or `new_capacity` is 0, the index is left untouched.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let new_cap = check_capacity(new_capacity)?;
        let mut buckets = alloc_buckets(new_cap)?;

        // Nothing below can fail.
        for head in &self.buckets {
            let mut cur = *head;
            while let Some(k) = cur {
                let entry = &mut self.entries[k];
                cur = entry.next;
                let b = bucket_index(entry.term(), new_cap);
                entry.next = buckets[b];
                buckets[b] = Some(k);
            }
        }

        let old_capacity = self.capacity.get();
        self.buckets = buckets;
        self.capacity = new_cap;
        info!(
            old_capacity,
            new_capacity,
            terms = self.entries.len(),
            "term index resized"
        );
        Ok(())
    }

    /// Count terms and doc ids by walking every bucket and chain.
    pub fn metrics(&self) -> IndexMetrics {
        let mut term_count = 0;
        let mut doc_count = 0;
        for bucket in 0..self.buckets.len() {
            for (_, e) in self.chain(bucket) {
                term_count += 1;
                doc_count += e.len();
            }
        }
        debug_assert_eq!(term_count, self.entries.len());
        IndexMetrics::new(term_count, doc_count, self.capacity.get())
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            index: self,
            bucket: 0,
            cur: None,
        }
    }

    /// Explicit teardown. Equivalent to dropping the index.
    pub fn destroy(self) {
        debug!(
            capacity = self.capacity.get(),
            terms = self.entries.len(),
            "term index destroyed"
        );
    }
}

impl<'a> IntoIterator for &'a TermIndex {
    type Item = (&'a [u8], &'a [DocId]);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tear down an index if one is present; `None` is a no-op.
pub fn destroy(index: Option<TermIndex>) {
    if let Some(index) = index {
        index.destroy();
    }
}
