/// Errors surfaced while deriving priced rows from ranked balances.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    #[error("no price available for currency {0}")]
    MissingPrice(String),
}

/// Deterministic failures of the summation strategies.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SumError {
    #[error("n must be at least 1")]
    InputTooSmall,

    #[error("sum of 1..={0} does not fit in u64")]
    Overflow(u64),

    #[error("n={0} exceeds the safe recursion depth")]
    DepthExceeded(u64),
}
