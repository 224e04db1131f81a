use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RankedBalance, WalletBalance};

/// Point-in-time view of a wallet's balances as yielded by a balance source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub wallet: Option<String>,
    pub as_of: DateTime<Utc>,
    pub balances: Vec<WalletBalance>,
}

/// Sum of the fiat values of priced rows.
pub fn total_value(rows: &[RankedBalance]) -> Decimal {
    rows.iter().map(|r| r.value).sum()
}
