use std::collections::HashMap;

use metrics::counter;

use crate::errors::SumError;

use super::{sum_to_n, SumStrategy};

/// Caller-owned memo of previously computed sums, keyed by n.
///
/// Entries are never evicted; the map grows with the number of distinct
/// inputs, which the owner is expected to keep small.
#[derive(Debug, Clone, Default)]
pub struct SumCache {
    entries: HashMap<u64, u64>,
}

impl SumCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, n: u64) -> Option<u64> {
        self.entries.get(&n).copied()
    }

    pub fn insert(&mut self, n: u64, sum: u64) {
        self.entries.insert(n, sum);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Memoizing wrapper around [`sum_to_n`]: the cache is consulted before any
/// computation and populated after. An existing entry is returned as-is and
/// never overwritten.
pub fn sum_to_n_cached(
    strategy: SumStrategy,
    n: u64,
    cache: &mut SumCache,
) -> Result<u64, SumError> {
    if let Some(sum) = cache.get(n) {
        counter!("sum_cache_hits_total").increment(1);
        return Ok(sum);
    }

    counter!("sum_cache_misses_total").increment(1);
    let sum = sum_to_n(strategy, n)?;
    cache.insert(n, sum);
    Ok(sum)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
