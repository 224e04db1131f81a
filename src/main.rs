use anyhow::Context;
use chrono::Utc;
use rust_decimal::Decimal;

use walletrank::config::AppConfig;
use walletrank::metrics::init_metrics;
use walletrank::models::portfolio::total_value;
use walletrank::models::{Chain, PortfolioSnapshot, WalletBalance};
use walletrank::providers::{BalanceSource, PriceTable, SnapshotFile};
use walletrank::ranking::{rank, value_balances};
use walletrank::sums::run_timing_comparison;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let metrics_handle = init_metrics();

    let snapshot = match &config.snapshot_path {
        Some(path) => SnapshotFile::new(path).snapshot()?,
        None => {
            tracing::warn!("SNAPSHOT_PATH not set — using built-in sample portfolio");
            sample_snapshot()
        }
    };

    let prices = match &config.prices_path {
        Some(path) => PriceTable::from_file(path)?,
        None => {
            tracing::warn!("PRICES_PATH not set — using built-in sample prices");
            sample_prices()
        }
    };

    tracing::info!(
        wallet = snapshot.wallet.as_deref().unwrap_or("unknown"),
        balance_count = snapshot.balances.len(),
        as_of = %snapshot.as_of,
        "Portfolio snapshot loaded"
    );

    let ranked = rank(&snapshot.balances);
    let rows = value_balances(&ranked, &prices).context("valuing ranked balances")?;

    for row in &rows {
        tracing::info!(
            currency = %row.currency,
            chain = %row.chain,
            priority = row.priority,
            amount = %row.formatted,
            value = %row.value,
            "Ranked balance"
        );
    }

    tracing::info!(
        retained = rows.len(),
        dropped = snapshot.balances.len() - rows.len(),
        total = %total_value(&rows),
        "Portfolio ranked and valued"
    );

    if config.bench_enabled {
        tracing::info!(n = config.bench_n, "Running summation timing comparison");
        run_timing_comparison(config.bench_n).context("running summation timing comparison")?;
    }

    tracing::debug!(payload = %metrics_handle.render(), "Metrics snapshot");

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}

fn sample_snapshot() -> PortfolioSnapshot {
    let balance = |currency: &str, chain: Chain, amount: Decimal| WalletBalance {
        currency: currency.to_string(),
        amount,
        chain,
    };

    PortfolioSnapshot {
        wallet: Some("sample".into()),
        as_of: Utc::now(),
        balances: vec![
            balance("ETH", Chain::Ethereum, Decimal::ZERO),
            balance("OSMO", Chain::Osmosis, Decimal::from(-12)),
            balance("ZIL", Chain::Zilliqa, Decimal::from(-250)),
            balance("ARB", Chain::Arbitrum, Decimal::new(-35, 1)),
            balance("NEO", Chain::Neo, Decimal::from(-7)),
            // Dropped by the filter: unrecognized chain.
            balance("DOGE", Chain::from("Dogecoin"), Decimal::from(-40)),
            // Dropped by the filter: positive amount.
            balance("WETH", Chain::Ethereum, Decimal::new(125, 2)),
        ],
    }
}

fn sample_prices() -> PriceTable {
    let mut prices = PriceTable::new();
    prices.set("ETH", Decimal::from(3_600));
    prices.set("OSMO", Decimal::new(42, 2));
    prices.set("ZIL", Decimal::new(2, 2));
    prices.set("ARB", Decimal::new(78, 2));
    prices.set("NEO", Decimal::from(11));
    prices
}
