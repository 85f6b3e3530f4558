//! Fetch-data CLI command.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use pairscan_binance::BinanceClient;
use pairscan_core::ConfigLoader;
use pairscan_data::CsvStorage;
use std::path::Path;

/// Arguments for the fetch-data command.
#[derive(Args, Debug, Clone)]
pub struct FetchDataArgs {
    /// Symbol to fetch (e.g., BTCUSDT)
    #[arg(short, long)]
    pub symbol: String,

    /// Kline interval (e.g., 1m, 1h, 1d)
    #[arg(short, long, default_value = "1d")]
    pub interval: String,

    /// Start date, YYYY-MM-DD
    #[arg(long)]
    pub start: String,

    /// End date, YYYY-MM-DD (defaults to now)
    #[arg(long)]
    pub end: Option<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "data/klines.csv")]
    pub output: String,

    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,
}

/// Runs the fetch-data command.
///
/// # Errors
/// Returns an error if the fetch fails or the output file cannot be written.
pub async fn run_fetch_data(args: FetchDataArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    let start = parse_date(&args.start)?;
    let end = args.end.as_deref().map(parse_date).transpose()?;

    tracing::info!(
        "Fetching {} klines for {} from {}",
        args.interval,
        args.symbol,
        args.start
    );

    let client = BinanceClient::new(config.binance.api_url);
    let records = client
        .fetch_klines(&args.symbol, &args.interval, start, end)
        .await?;

    if let Some(parent) = Path::new(&args.output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }
    }
    CsvStorage::write_klines(&args.output, &records)?;

    tracing::info!("Wrote {} klines to {}", records.len(), args.output);
    Ok(())
}

fn parse_date(date: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {date}. Expected YYYY-MM-DD"))?
        .and_hms_opt(0, 0, 0)
        .context("Invalid time of day")?;
    Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
}
