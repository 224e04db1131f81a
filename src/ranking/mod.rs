pub mod classifier;
pub mod ranker;

pub use classifier::{classify, UNRECOGNIZED_PRIORITY};
pub use ranker::{rank, value_balances};
