// Serde support for configuration and metrics (requires the `serde` feature).
use chained_term_index::{IndexConfig, IndexMetrics, TermIndex};

#[test]
fn config_from_json_with_defaults() {
    let c: IndexConfig = serde_json::from_str(r#"{ "capacity": 128 }"#).unwrap();
    assert_eq!(c.capacity, 128);
    assert_eq!(c.initial_doc_capacity, 10);

    let m = TermIndex::with_config(c).unwrap();
    assert_eq!(m.capacity(), 128);
}

#[test]
fn metrics_to_json() {
    let mut m = TermIndex::new(5).unwrap();
    m.insert("cat", 10).unwrap();
    m.insert("dog", 20).unwrap();
    let v = serde_json::to_value(m.metrics()).unwrap();
    assert_eq!(v["term_count"], 2);
    assert_eq!(v["doc_count"], 2);
    assert_eq!(v["load_factor"], 0.4);

    let back: IndexMetrics = serde_json::from_value(v).unwrap();
    assert_eq!(back, m.metrics());
}
