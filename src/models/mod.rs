pub mod balance;
pub mod portfolio;

pub use balance::{RankedBalance, WalletBalance};
pub use portfolio::PortfolioSnapshot;

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Chain
// ---------------------------------------------------------------------------

/// Origin chain of a wallet balance.
///
/// Known chains are a closed set; any other tag parses into `Unrecognized`,
/// which ranks below every known chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Chain {
    Osmosis,
    Ethereum,
    Arbitrum,
    Zilliqa,
    Neo,
    Unrecognized(String),
}

impl Chain {
    pub fn as_str(&self) -> &str {
        match self {
            Chain::Osmosis => "Osmosis",
            Chain::Ethereum => "Ethereum",
            Chain::Arbitrum => "Arbitrum",
            Chain::Zilliqa => "Zilliqa",
            Chain::Neo => "Neo",
            Chain::Unrecognized(tag) => tag.as_str(),
        }
    }
}

impl From<String> for Chain {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Osmosis" => Chain::Osmosis,
            "Ethereum" => Chain::Ethereum,
            "Arbitrum" => Chain::Arbitrum,
            "Zilliqa" => Chain::Zilliqa,
            "Neo" => Chain::Neo,
            _ => Chain::Unrecognized(tag),
        }
    }
}

impl From<&str> for Chain {
    fn from(tag: &str) -> Self {
        Chain::from(tag.to_string())
    }
}

impl From<Chain> for String {
    fn from(chain: Chain) -> Self {
        match chain {
            Chain::Unrecognized(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
