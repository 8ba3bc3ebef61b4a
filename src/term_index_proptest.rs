#![cfg(test)]

// Property tests for TermIndex kept inside the crate so they can inspect
// bucket placement without widening the public surface.

use crate::error::IndexError;
use crate::hasher::bucket_index;
use crate::term_entry::DocId;
use crate::term_index::TermIndex;
use core::num::NonZeroUsize;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations: indices shrink to earlier terms, the pool shrinks,
// and op lists shrink in length.
#[derive(Clone, Debug)]
enum Op {
    Insert(usize, DocId),
    InsertEmpty(DocId),
    SearchEmpty(usize),
    Search(usize, usize),
    SearchMissing(String),
    Prefix(String, usize),
    Resize(usize),
    Metrics,
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<Op>)> {
    (
        1usize..=16,
        proptest::collection::vec("[a-d]{1,4}", 1..=8),
    )
        .prop_flat_map(|(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let op = prop_oneof![
                4 => (idx.clone(), any::<DocId>()).prop_map(|(i, d)| Op::Insert(i, d)),
                1 => any::<DocId>().prop_map(Op::InsertEmpty),
                1 => (0usize..12).prop_map(Op::SearchEmpty),
                2 => (idx.clone(), 0usize..12).prop_map(|(i, n)| Op::Search(i, n)),
                1 => "[e-z]{1,4}".prop_map(Op::SearchMissing),
                1 => ("[a-d]{1,2}", 0usize..20).prop_map(|(p, n)| Op::Prefix(p, n)),
                1 => (0usize..=24).prop_map(Op::Resize),
                1 => Just(Op::Metrics),
            ];
            proptest::collection::vec(op, 1..80)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        })
}

// Property: state-machine equivalence against a HashMap<term, Vec<DocId>>.
// Invariants exercised across random operation sequences:
// - search returns exactly the model's prefix of length min(len, max_results).
// - absent terms are TermNotFound; the empty term is an ordinary key.
// - prefix search returns exactly the matching terms' ids, each term's ids in order.
// - resize keeps every doc id of every term; resize(0) changes nothing.
// - every entry sits in the bucket its term hashes to, and chains hold distinct terms.
// - metrics match the model and load_factor == term_count / capacity exactly.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let mut sut = TermIndex::new(capacity).unwrap();
        let mut model: HashMap<Vec<u8>, Vec<DocId>> = HashMap::new();

        for op in ops {
            match op {
                Op::Insert(i, d) => {
                    sut.insert(&pool[i], d).unwrap();
                    model.entry(pool[i].as_bytes().to_vec()).or_default().push(d);
                }
                Op::InsertEmpty(d) => {
                    sut.insert("", d).unwrap();
                    model.entry(Vec::new()).or_default().push(d);
                }
                Op::SearchEmpty(n) => match model.get(&b""[..]) {
                    Some(ids) => {
                        let got = sut.search("", n).unwrap();
                        prop_assert_eq!(&got[..], &ids[..ids.len().min(n)]);
                    }
                    None => {
                        prop_assert_eq!(sut.search("", n), Err(IndexError::TermNotFound));
                    }
                },
                Op::Search(i, n) => {
                    let key = pool[i].as_bytes();
                    match model.get(key) {
                        Some(ids) => {
                            let got = sut.search(key, n).unwrap();
                            prop_assert_eq!(&got[..], &ids[..ids.len().min(n)]);
                        }
                        None => {
                            prop_assert_eq!(sut.search(key, n), Err(IndexError::TermNotFound));
                        }
                    }
                }
                Op::SearchMissing(t) => {
                    prop_assert_eq!(sut.search(&t, 10), Err(IndexError::TermNotFound));
                }
                Op::Prefix(p, n) => {
                    let matching: Vec<&Vec<DocId>> = model
                        .iter()
                        .filter(|(t, _)| t.starts_with(p.as_bytes()))
                        .map(|(_, ids)| ids)
                        .collect();
                    match sut.search_prefix(&p, n) {
                        Ok(got) => {
                            prop_assert!(!matching.is_empty());
                            let total: usize = matching.iter().map(|ids| ids.len()).sum();
                            prop_assert_eq!(got.len(), total.min(n));
                            if n >= total {
                                let mut expected: Vec<DocId> =
                                    matching.iter().flat_map(|ids| ids.iter().copied()).collect();
                                let mut sorted = got.clone();
                                expected.sort_unstable();
                                sorted.sort_unstable();
                                prop_assert_eq!(sorted, expected);
                            }
                            // Each term's ids form one contiguous run of its stored list.
                            let full = sut.search_prefix(&p, usize::MAX).unwrap();
                            prop_assert_eq!(&got[..], &full[..got.len()]);
                            let mut at = 0;
                            for (term, ids) in sut.iter().filter(|(t, _)| t.starts_with(p.as_bytes())) {
                                prop_assert_eq!(Some(&ids.to_vec()), model.get(term));
                                prop_assert_eq!(&full[at..at + ids.len()], ids);
                                at += ids.len();
                            }
                            prop_assert_eq!(at, full.len());
                        }
                        Err(e) => {
                            prop_assert_eq!(e, IndexError::TermNotFound);
                            prop_assert!(matching.is_empty());
                        }
                    }
                }
                Op::Resize(c) => {
                    let before = sut.capacity();
                    match sut.resize(c) {
                        Ok(()) => prop_assert_eq!(sut.capacity(), c),
                        Err(e) => {
                            prop_assert_eq!(c, 0);
                            prop_assert!(matches!(e, IndexError::InvalidArgument(_)));
                            prop_assert_eq!(sut.capacity(), before);
                        }
                    }
                }
                Op::Metrics => {
                    let m = sut.metrics();
                    prop_assert_eq!(m.term_count, model.len());
                    prop_assert_eq!(m.doc_count, model.values().map(Vec::len).sum::<usize>());
                    prop_assert_eq!(m.load_factor, m.term_count as f64 / sut.capacity() as f64);
                }
            }

            // Structural invariants after each step.
            let cap = NonZeroUsize::new(sut.capacity()).unwrap();
            let mut seen = BTreeSet::new();
            for b in 0..sut.capacity() {
                let mut in_chain = BTreeSet::new();
                for (_, e) in sut.chain(b) {
                    prop_assert_eq!(bucket_index(e.term(), cap), b);
                    prop_assert!(in_chain.insert(e.term().to_vec()), "duplicate term in chain");
                    prop_assert_eq!(Some(&e.doc_ids().to_vec()), model.get(e.term()));
                    seen.insert(e.term().to_vec());
                }
            }
            prop_assert_eq!(seen.len(), model.len());
        }
    }
}
