use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Fixture paths (optional — absent means built-in sample data)
    pub snapshot_path: Option<String>,
    pub prices_path: Option<String>,

    // Summation timing comparison
    pub bench_n: u64,
    pub bench_enabled: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            snapshot_path: env::var("SNAPSHOT_PATH").ok(),
            prices_path: env::var("PRICES_PATH").ok(),

            bench_n: env::var("BENCH_N")
                .unwrap_or_else(|_| "1000".into())
                .parse()?,
            bench_enabled: env::var("BENCH_ENABLED")
                .unwrap_or_else(|_| "true".into())
                .parse()
                .unwrap_or(true),
        })
    }
}
