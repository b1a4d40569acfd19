#![allow(dead_code)]

use kitbag_core::api::{FloatQueue, HttpClient, HttpConfig, Reducer, RingAccumulator};

pub fn float_queue(capacity: usize, initial: &[f64]) -> FloatQueue {
    FloatQueue::additive(capacity, 0.0, initial.iter().copied()).expect("capacity is non-zero")
}

/// Fold `combine` over the ring's items from its base value.
pub fn fold_items<T, R>(ring: &RingAccumulator<T, R>, reducer: &R) -> T
where
    T: Clone,
    R: Reducer<T>,
{
    ring.iter()
        .fold(ring.base().clone(), |acc, v| reducer.combine(&acc, v))
}

pub fn http_client() -> HttpClient {
    let mut cfg = HttpConfig::default();
    cfg.timeout_ms = 5_000;
    HttpClient::new(&cfg).expect("default config builds a client")
}
