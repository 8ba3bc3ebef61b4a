use chained_term_index::TermIndex;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

// 10k distinct terms; repeated draws append to existing entries.
fn term(n: u64) -> String {
    format!("t{:04x}", n % 10_000)
}

fn filled(capacity: usize, seed: u64, n: usize) -> TermIndex {
    let mut m = TermIndex::new(capacity).unwrap();
    for (i, x) in lcg(seed).take(n).enumerate() {
        m.insert(term(x), i as i32).unwrap();
    }
    m
}

fn bench_insert_100k(c: &mut Criterion) {
    for capacity in [1_024usize, 16_384] {
        c.bench_function(&format!("index::insert_100k_cap_{}", capacity), |b| {
            b.iter_batched(
                || TermIndex::new(capacity).unwrap(),
                |mut m| {
                    for (i, x) in lcg(1).take(100_000).enumerate() {
                        m.insert(term(x), i as i32).unwrap();
                    }
                    black_box(m)
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_search_hit_10k(c: &mut Criterion) {
    c.bench_function("index::search_hit_10k", |b| {
        let m = filled(4_096, 7, 100_000);
        let queries: Vec<String> = lcg(7).take(10_000).map(term).collect();
        b.iter(|| {
            for q in &queries {
                black_box(m.search(q, 10).ok());
            }
        })
    });
}

fn bench_search_miss_10k(c: &mut Criterion) {
    c.bench_function("index::search_miss_10k", |b| {
        let m = filled(4_096, 11, 100_000);
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            for _ in 0..10_000 {
                let q = format!("miss{:016x}", miss.next().unwrap());
                black_box(m.search(&q, 10).err());
            }
        })
    });
}

fn bench_resize(c: &mut Criterion) {
    c.bench_function("index::resize_1k_to_16k_with_10k_terms", |b| {
        b.iter_batched(
            || filled(1_024, 13, 50_000),
            |mut m| {
                m.resize(16_384).unwrap();
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_metrics_and_prefix(c: &mut Criterion) {
    let m = filled(4_096, 17, 100_000);
    c.bench_function("index::metrics_10k_terms", |b| {
        b.iter(|| black_box(m.metrics()))
    });
    c.bench_function("index::search_prefix_10k_terms", |b| {
        b.iter(|| black_box(m.search_prefix("t1", 1_000).ok()))
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_search_hit_10k,
              bench_search_miss_10k,
              bench_resize,
              bench_metrics_and_prefix
}
criterion_main!(benches_insert, benches_ops);
