pub mod balances;
pub mod prices;

pub use balances::{BalanceSource, SnapshotFile};
pub use prices::{PriceSource, PriceTable};
