pub mod cache;
pub mod timing;

pub use cache::{sum_to_n_cached, SumCache};
pub use timing::{run_timing_comparison, TimingRow};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SumError;

/// Summation strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SumStrategy {
    Iterative,
    Recursive,
    ClosedForm,
}

impl SumStrategy {
    /// Every strategy, in the order the timing comparison runs them.
    pub const ALL: [SumStrategy; 3] = [
        SumStrategy::Iterative,
        SumStrategy::Recursive,
        SumStrategy::ClosedForm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SumStrategy::Iterative => "iterative",
            SumStrategy::Recursive => "recursive",
            SumStrategy::ClosedForm => "closed_form",
        }
    }
}

impl fmt::Display for SumStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs above this bound are rejected by the recursive strategy instead
/// of risking stack exhaustion. One call frame per decrement; 10k frames
/// stay well inside the default 8 MiB main-thread stack.
pub const MAX_RECURSIVE_N: u64 = 10_000;

/// Sum of 1..=n under the chosen strategy.
pub fn sum_to_n(strategy: SumStrategy, n: u64) -> Result<u64, SumError> {
    match strategy {
        SumStrategy::Iterative => sum_iterative(n),
        SumStrategy::Recursive => sum_recursive(n),
        SumStrategy::ClosedForm => sum_closed_form(n),
    }
}

/// Linear scan with a running total. O(n) time, O(1) space.
pub fn sum_iterative(n: u64) -> Result<u64, SumError> {
    if n == 0 {
        return Err(SumError::InputTooSmall);
    }

    let mut total: u64 = 0;
    for i in 1..=n {
        total = total.checked_add(i).ok_or(SumError::Overflow(n))?;
    }
    Ok(total)
}

/// f(n) = n + f(n - 1) with f(1) = 1. O(n) time and call depth, so inputs
/// above [`MAX_RECURSIVE_N`] fail with `DepthExceeded`.
pub fn sum_recursive(n: u64) -> Result<u64, SumError> {
    if n == 0 {
        return Err(SumError::InputTooSmall);
    }
    if n > MAX_RECURSIVE_N {
        return Err(SumError::DepthExceeded(n));
    }
    Ok(recurse(n))
}

// n is capped at MAX_RECURSIVE_N, so the additions cannot overflow u64.
fn recurse(n: u64) -> u64 {
    if n == 1 {
        return 1;
    }
    n + recurse(n - 1)
}

/// n(n+1)/2 through a u128 intermediate so the product cannot wrap. O(1).
pub fn sum_closed_form(n: u64) -> Result<u64, SumError> {
    if n == 0 {
        return Err(SumError::InputTooSmall);
    }

    let sum = u128::from(n) * (u128::from(n) + 1) / 2;
    u64::try_from(sum).map_err(|_| SumError::Overflow(n))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
