//! chained-term-index: an in-memory inverted index mapping terms to the
//! document ids they occur in, stored in a separately chained hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small index engine whose every failure is an explicit
//!   `Result`, with ownership of all entries held by one `TermIndex` value.
//! - Layers:
//!   - `hasher`: deterministic polynomial hash, reduced modulo the bucket
//!     count at every byte.
//!   - `TermEntry`: owned term bytes plus an append-only doc-id array that
//!     grows by doubling.
//!   - `TermIndex`: bucket array whose slots hold the arena key of a chain
//!     head; entries live in a `SlotMap` and link to the next entry of their
//!     chain by key.
//!   - `IndexMetrics`: term/doc counts and load factor, recomputed on demand
//!     by walking every chain.
//!
//! Constraints
//! - Single-threaded: no locking, no atomics, no background work. Mutation
//!   takes `&mut self`; callers sharing an index across threads provide
//!   their own mutual exclusion.
//! - Terms are opaque, byte-exact keys. No tokenization or normalization.
//! - Any byte string is a term, the empty one included; it hashes to
//!   bucket 0.
//! - Insert is all-or-nothing per call: the term copy and doc-id array
//!   are reserved fallibly before any state changes. Growth of the entry
//!   arena uses the global allocator and aborts on out-of-memory.
//!
//! Resize policy
//! - `resize` allocates the new bucket array first and fails without side
//!   effects if that is impossible. Entries are then relinked, never copied,
//!   and every doc id of every term survives. Search results are identical
//!   before and after a resize.
//!
//! Batch insert
//! - `insert_batch` is not atomic. It stops at the first failing pair and
//!   leaves earlier pairs committed.
//!
//! Logging
//! - Lifecycle events (construction, construction failure, resize, batch
//!   abort, teardown) are emitted through `tracing`. The crate never
//!   installs a subscriber.
//!
//! Notes and non-goals
//! - No term deletion, persistence, ranking, or concurrent access.
//! - The hash is unseeded and not collision resistant.
//! - `search_prefix` scans every chain; it is linear in the number of
//!   stored terms.

mod config;
mod error;
pub mod hasher;
mod metrics;
mod term_entry;
mod term_index;
mod term_index_proptest;

// Public surface
pub use config::{IndexConfig, DEFAULT_CAPACITY, DEFAULT_INITIAL_DOC_CAPACITY};
pub use error::{IndexError, Result};
pub use metrics::IndexMetrics;
pub use term_entry::{DocId, TermEntry};
pub use term_index::{destroy, Iter, TermIndex};
