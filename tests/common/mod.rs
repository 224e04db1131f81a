use chrono::Utc;
use rust_decimal::Decimal;

use walletrank::models::{Chain, PortfolioSnapshot, WalletBalance};

/// Build a balance from an integer amount.
#[allow(dead_code)]
pub fn make_balance(currency: &str, chain: &str, amount: i64) -> WalletBalance {
    WalletBalance {
        currency: currency.to_string(),
        amount: Decimal::from(amount),
        chain: Chain::from(chain),
    }
}

/// Wrap balances in a snapshot the way a balance source would yield them.
#[allow(dead_code)]
pub fn make_snapshot(balances: Vec<WalletBalance>) -> PortfolioSnapshot {
    PortfolioSnapshot {
        wallet: Some("wallet_test".into()),
        as_of: Utc::now(),
        balances,
    }
}
