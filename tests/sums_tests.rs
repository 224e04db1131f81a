use walletrank::errors::SumError;
use walletrank::sums::{
    run_timing_comparison, sum_closed_form, sum_iterative, sum_recursive, sum_to_n,
    sum_to_n_cached, SumCache, SumStrategy, MAX_RECURSIVE_N,
};

#[test]
fn test_strategies_agree_with_the_closed_form() {
    for n in [1u64, 2, 3, 10, 99, 1_000, 5_000] {
        let expected = n * (n + 1) / 2;
        assert_eq!(sum_iterative(n).unwrap(), expected, "iterative, n={n}");
        assert_eq!(sum_recursive(n).unwrap(), expected, "recursive, n={n}");
        assert_eq!(sum_closed_form(n).unwrap(), expected, "closed form, n={n}");
    }
}

#[test]
fn test_dispatch_matches_direct_calls() {
    assert_eq!(sum_to_n(SumStrategy::Iterative, 1_000), sum_iterative(1_000));
    assert_eq!(sum_to_n(SumStrategy::Recursive, 1_000), sum_recursive(1_000));
    assert_eq!(sum_to_n(SumStrategy::ClosedForm, 1_000), sum_closed_form(1_000));
}

#[test]
fn test_zero_is_a_deterministic_error() {
    for strategy in SumStrategy::ALL {
        assert_eq!(sum_to_n(strategy, 0), Err(SumError::InputTooSmall));
    }
}

#[test]
fn test_recursion_past_the_cap_fails_without_recursing() {
    let n = MAX_RECURSIVE_N + 1;
    assert_eq!(sum_recursive(n), Err(SumError::DepthExceeded(n)));
}

#[test]
fn test_closed_form_rejects_overflowing_inputs() {
    assert_eq!(
        sum_closed_form(7_000_000_000),
        Err(SumError::Overflow(7_000_000_000))
    );
}

#[test]
fn test_cached_agrees_with_uncached() {
    let mut cache = SumCache::new();

    for n in [1u64, 10, 1_000] {
        let cached = sum_to_n_cached(SumStrategy::ClosedForm, n, &mut cache).unwrap();
        assert_eq!(cached, sum_closed_form(n).unwrap());
    }

    assert_eq!(cache.len(), 3);
}

#[test]
fn test_repeated_calls_do_not_change_cached_values() {
    let mut cache = SumCache::new();

    let first = sum_to_n_cached(SumStrategy::Iterative, 1_000, &mut cache).unwrap();
    assert_eq!(first, 500_500);
    assert_eq!(cache.get(1_000), Some(500_500));

    let second = sum_to_n_cached(SumStrategy::Iterative, 1_000, &mut cache).unwrap();
    assert_eq!(second, first);
    assert_eq!(cache.get(1_000), Some(500_500));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_cache_is_shared_across_strategies() {
    // The cache is keyed by input alone, so a value computed under one
    // strategy answers for every other.
    let mut cache = SumCache::new();

    sum_to_n_cached(SumStrategy::Iterative, 64, &mut cache).unwrap();
    let via_recursive = sum_to_n_cached(SumStrategy::Recursive, 64, &mut cache).unwrap();

    assert_eq!(via_recursive, 2_080);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_timing_comparison_produces_agreeing_rows() {
    let rows = run_timing_comparison(1_000).expect("comparison runs");

    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.value == 500_500));
}
