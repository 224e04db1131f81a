use std::time::{Duration, Instant};

use crate::errors::SumError;

use super::{sum_to_n, sum_to_n_cached, SumCache, SumStrategy};

/// One measurement from the timing comparison.
#[derive(Debug, Clone)]
pub struct TimingRow {
    pub strategy: SumStrategy,
    pub cached: bool,
    pub value: u64,
    pub elapsed: Duration,
}

/// Time every strategy on the same input, then show the effect of the memo
/// cache with a cold and a warm run of the iterative strategy.
///
/// A strategy that cannot handle the input (recursion past its depth cap)
/// is skipped with a warning rather than aborting the comparison. Each
/// measurement is logged as a structured event; the rows are also returned
/// for callers that want to render them differently.
pub fn run_timing_comparison(n: u64) -> Result<Vec<TimingRow>, SumError> {
    let mut rows = Vec::with_capacity(SumStrategy::ALL.len() + 2);

    for strategy in SumStrategy::ALL {
        let started = Instant::now();
        match sum_to_n(strategy, n) {
            Ok(value) => rows.push(record(strategy, false, value, started.elapsed())),
            Err(SumError::DepthExceeded(_)) => {
                tracing::warn!(
                    strategy = %strategy,
                    n,
                    "Skipping strategy: input exceeds its safe recursion depth"
                );
            }
            Err(e) => return Err(e),
        }
    }

    let mut cache = SumCache::new();
    for _ in 0..2 {
        let started = Instant::now();
        let value = sum_to_n_cached(SumStrategy::Iterative, n, &mut cache)?;
        rows.push(record(SumStrategy::Iterative, true, value, started.elapsed()));
    }

    Ok(rows)
}

fn record(strategy: SumStrategy, cached: bool, value: u64, elapsed: Duration) -> TimingRow {
    tracing::info!(
        strategy = %strategy,
        cached,
        value,
        elapsed_us = elapsed.as_micros() as u64,
        "Summation timed"
    );

    TimingRow {
        strategy,
        cached,
        value,
        elapsed,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
