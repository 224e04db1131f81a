use std::path::PathBuf;

use anyhow::Context;

use crate::models::PortfolioSnapshot;

/// Source of wallet balance snapshots.
pub trait BalanceSource {
    fn snapshot(&self) -> anyhow::Result<PortfolioSnapshot>;
}

/// Balance source backed by a JSON snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BalanceSource for SnapshotFile {
    fn snapshot(&self) -> anyhow::Result<PortfolioSnapshot> {
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading snapshot {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing snapshot {}", self.path.display()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chain;
    use rust_decimal::Decimal;

    const SNAPSHOT_JSON: &str = r#"
    {
        "wallet": "wallet_test",
        "as_of": "2026-08-06T00:00:00Z",
        "balances": [
            {"currency": "OSMO", "amount": "-12", "chain": "Osmosis"},
            {"currency": "XYZ", "amount": -1.5, "chain": "Unknown"}
        ]
    }
    "#;

    #[test]
    fn test_parses_snapshot_document() {
        let snapshot: PortfolioSnapshot =
            serde_json::from_str(SNAPSHOT_JSON).expect("valid document");

        assert_eq!(snapshot.wallet.as_deref(), Some("wallet_test"));
        assert_eq!(snapshot.balances.len(), 2);
        assert_eq!(snapshot.balances[0].chain, Chain::Osmosis);
        assert_eq!(snapshot.balances[0].amount, Decimal::from(-12));
        assert_eq!(snapshot.balances[1].chain, Chain::from("Unknown"));
    }

    #[test]
    fn test_snapshot_file_reads_from_disk() {
        let path = std::env::temp_dir().join(format!("walletrank_snapshot_{}.json", std::process::id()));
        std::fs::write(&path, SNAPSHOT_JSON).expect("temp file is writable");

        let snapshot = SnapshotFile::new(&path).snapshot().expect("file parses");
        std::fs::remove_file(&path).ok();

        assert_eq!(snapshot.balances.len(), 2);
    }

    #[test]
    fn test_snapshot_file_missing_path_is_an_error() {
        let source = SnapshotFile::new("/nonexistent/walletrank_snapshot.json");
        assert!(source.snapshot().is_err());
    }
}
