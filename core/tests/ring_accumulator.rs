mod common;

use common::{float_queue, fold_items};
use kitbag_core::api::{Additive, FnReducer, QueueError, RingAccumulator, Xor};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn sliding_window_over_a_stream() {
    let mut q = float_queue(3, &[]);
    let mut sums = Vec::new();
    for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
        q.enqueue(v);
        sums.push(*q.sum());
    }
    assert_eq!(sums, vec![1.0, 3.0, 6.0, 9.0, 12.0, 15.0]);
    assert_eq!(q.items(), vec![4.0, 5.0, 6.0]);
    assert!(q.is_full());
}

#[test]
fn initial_values_beyond_capacity_keep_newest() {
    let q = float_queue(2, &[10.0, 20.0, 30.0]);
    assert_eq!(q.items(), vec![20.0, 30.0]);
    assert_eq!(*q.sum(), 50.0);
    assert_eq!(*q.item(0).unwrap(), 20.0);
    assert_eq!(
        q.item(2),
        Err(QueueError::IndexOutOfRange { index: 2, len: 2 })
    );
}

#[test]
fn zero_capacity_is_rejected() {
    let err = RingAccumulator::new(0, 0i64, Vec::new(), Additive).unwrap_err();
    assert_eq!(err, QueueError::InvalidCapacity(0));
}

#[test]
fn custom_reducer_tracks_product() {
    let reducer = FnReducer::new(|a: &f64, b: &f64| a * b, |a: &f64, b: &f64| a / b);
    let mut q = RingAccumulator::new(2, 1.0, [2.0, 4.0], reducer).unwrap();
    assert_eq!(*q.sum(), 8.0);
    q.enqueue(0.5);
    assert_eq!(*q.sum(), 2.0);
    assert_eq!(q.items(), vec![4.0, 0.5]);
}

const PROPTEST_CASES: u32 = 64;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn aggregate_matches_fold_of_items(
        capacity in 1usize..16,
        values in proptest::collection::vec(-1_000i64..1_000, 0..64),
    ) {
        let mut q = RingAccumulator::additive(capacity, 0i64, Vec::new()).unwrap();
        for (n, v) in values.iter().enumerate() {
            q.enqueue(*v);
            prop_assert_eq!(*q.sum(), fold_items(&q, &Additive));
            prop_assert_eq!(*q.sum(), q.recompute());
            prop_assert_eq!(q.len(), (n + 1).min(capacity));
        }
    }

    #[test]
    fn items_are_the_newest_in_order(
        capacity in 1usize..16,
        values in proptest::collection::vec(any::<u32>(), 0..64),
    ) {
        let q = RingAccumulator::new(capacity, 0u32, values.clone(), Xor).unwrap();
        let skip = values.len().saturating_sub(capacity);
        prop_assert_eq!(q.items(), values[skip..].to_vec());
        prop_assert_eq!(*q.sum(), fold_items(&q, &Xor));
    }

    #[test]
    fn clear_resets_to_base(
        capacity in 1usize..8,
        values in proptest::collection::vec(-100i64..100, 0..20),
    ) {
        let mut q = RingAccumulator::additive(capacity, 7i64, values).unwrap();
        q.clear();
        prop_assert!(q.is_empty());
        prop_assert_eq!(*q.sum(), 7);
        q.enqueue(3);
        prop_assert_eq!(q.items(), vec![3]);
        prop_assert_eq!(*q.sum(), 10);
    }
}
