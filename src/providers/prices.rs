use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read side of a currency price feed.
pub trait PriceSource {
    /// Unit price of a currency, if the feed knows it.
    fn price(&self, currency: &str) -> Option<Decimal>;
}

/// In-memory price feed keyed by currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: HashMap<String, Decimal>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `{"CURRENCY": price, ...}` JSON document.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading price table {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing price table {}", path.display()))
    }

    pub fn set(&mut self, currency: impl Into<String>, price: Decimal) {
        self.prices.insert(currency.into(), price);
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl PriceSource for PriceTable {
    fn price(&self, currency: &str) -> Option<Decimal> {
        self.prices.get(currency).copied()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_lookup() {
        let mut table = PriceTable::new();
        table.set("ETH", Decimal::from(3_600));

        assert_eq!(table.price("ETH"), Some(Decimal::from(3_600)));
        assert_eq!(table.price("OSMO"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_parses_json_document() {
        let table: PriceTable =
            serde_json::from_str(r#"{"ETH": 3600, "OSMO": "0.42"}"#).expect("valid document");

        assert_eq!(table.price("ETH"), Some(Decimal::from(3_600)));
        assert_eq!(table.price("OSMO"), Some(Decimal::new(42, 2)));
    }
}
