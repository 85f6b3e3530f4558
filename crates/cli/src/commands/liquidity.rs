//! Liquidity CLI command.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use pairscan_binance::BinanceHistoryProvider;
use pairscan_core::ConfigLoader;

/// Arguments for the liquidity command.
#[derive(Args, Debug, Clone)]
pub struct LiquidityArgs {
    /// Symbol to score (e.g., BTCUSDT)
    #[arg(short, long)]
    pub symbol: String,

    /// Kline interval (e.g., 1d)
    #[arg(short, long, default_value = "1d")]
    pub interval: String,

    /// Start date, YYYY-MM-DD (defaults to the configured start date)
    #[arg(long)]
    pub start: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,
}

/// Runs the liquidity command.
///
/// # Errors
/// Returns an error if the fetch fails or the score is undefined.
pub async fn run_liquidity(args: LiquidityArgs) -> Result<()> {
    let config = ConfigLoader::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    let start_date = args.start.unwrap_or(config.screener.start_date);
    let start = parse_date(&start_date)?;

    let provider = BinanceHistoryProvider::new(config.binance.api_url);
    let score = provider
        .liquidity_score(&args.symbol, &args.interval, start)
        .await?;

    tracing::info!("Liquidity score for {} since {}: {:.2}", args.symbol, start_date, score);
    println!("{score:.2}");
    Ok(())
}

fn parse_date(date: &str) -> Result<DateTime<Utc>> {
    let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date: {date}. Expected YYYY-MM-DD"))?
        .and_hms_opt(0, 0, 0)
        .context("Invalid time of day")?;
    Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
}
