use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Chain;

/// A single wallet holding as reported by a balance source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBalance {
    pub currency: String,
    pub amount: Decimal,
    pub chain: Chain,
}

/// A balance enriched with its chain priority, a display string, and its
/// fiat value. Derived on every ranking pass, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RankedBalance {
    pub currency: String,
    pub chain: Chain,
    pub priority: i32,
    pub amount: Decimal,
    /// Amount rendered with zero decimal places.
    pub formatted: String,
    /// Amount multiplied by the unit price of the currency.
    pub value: Decimal,
}
