//! Concurrent first use of the per-precision special-value registry.

use dec_float::numeric::{limb_count, special_values, DecFloat};
use std::thread;

// Precisions not touched by any other test in this binary, so the first
// access really happens inside the spawned threads.
type Dec37 = DecFloat<37, { limb_count(37) }>;
type Dec61 = DecFloat<61, { limb_count(61) }>;

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_access_builds_one_table() {
    let addresses: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| special_values::<37, { limb_count(37) }>() as *const _ as usize)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addresses.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_concurrent_conversions_agree() {
    let results: Vec<(f64, Dec61)> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                s.spawn(move || {
                    let x = Dec61::from_f64(1.0e-200 * (i as f64 + 1.0));
                    let p = Dec61::pow2(-100);
                    (x.to_f64(), p)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, (value, pow)) in results.iter().enumerate() {
        assert_eq!(*value, 1.0e-200 * (i as f64 + 1.0));
        assert_eq!(*pow, results[0].1);
    }
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dec37>();
    assert_send_sync::<Dec61>();

    let x = Dec37::from_u64(12345);
    let doubled = thread::scope(|s| s.spawn(move || x * 2u64).join().unwrap());
    assert_eq!(doubled, Dec37::from_u64(24690));
}
