use crate::models::Chain;

/// Priority assigned to chains outside the ranking table.
pub const UNRECOGNIZED_PRIORITY: i32 = -99;

/// Look up the ranking priority of a chain. Higher sorts first.
///
/// Total function: an unrecognized tag lands on `UNRECOGNIZED_PRIORITY`
/// rather than failing.
pub fn classify(chain: &Chain) -> i32 {
    match chain {
        Chain::Osmosis => 100,
        Chain::Ethereum => 50,
        Chain::Arbitrum => 30,
        Chain::Zilliqa => 20,
        Chain::Neo => 20,
        Chain::Unrecognized(_) => UNRECOGNIZED_PRIORITY,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chain_priorities() {
        assert_eq!(classify(&Chain::Osmosis), 100);
        assert_eq!(classify(&Chain::Ethereum), 50);
        assert_eq!(classify(&Chain::Arbitrum), 30);
        assert_eq!(classify(&Chain::Zilliqa), 20);
        assert_eq!(classify(&Chain::Neo), 20);
    }

    #[test]
    fn test_unrecognized_tag_gets_sentinel() {
        assert_eq!(classify(&Chain::from("Unknown")), UNRECOGNIZED_PRIORITY);
        assert_eq!(classify(&Chain::from("osmosis")), UNRECOGNIZED_PRIORITY);
        assert_eq!(classify(&Chain::from("")), UNRECOGNIZED_PRIORITY);
    }
}
