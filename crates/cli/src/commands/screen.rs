//! Screen CLI command.
//!
//! Runs the full pairwise screen over the configured ticker universe and
//! writes the pair metrics table to CSV.

use anyhow::{anyhow, Context, Result};
use clap::Args;
use pairscan_binance::BinanceHistoryProvider;
use pairscan_core::ConfigLoader;
use pairscan_data::CsvStorage;
use pairscan_screener::Screener;
use std::path::Path;
use std::sync::Arc;

/// Arguments for the screen command.
#[derive(Args, Debug, Clone)]
pub struct ScreenArgs {
    /// Config file path
    #[arg(short, long, default_value = "config/Config.toml")]
    pub config: String,

    /// Output CSV path (overrides the configured path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Worker count (overrides the configured value)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Start date, YYYY-MM-DD (overrides the configured value)
    #[arg(long)]
    pub start: Option<String>,
}

/// Runs the screen command.
///
/// # Errors
/// Returns an error if configuration loading, screening, or writing the
/// output file fails.
pub async fn run_screen(args: ScreenArgs) -> Result<()> {
    let mut config = ConfigLoader::load_from(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config))?;

    if let Some(workers) = args.workers {
        config.screener.workers = Some(workers);
    }
    if let Some(start) = args.start {
        config.screener.start_date = start;
    }
    let output = args.output.unwrap_or_else(|| config.output.path.clone());

    if config.screener.tickers.len() < 2 {
        return Err(anyhow!(
            "Need at least 2 tickers to screen, got {}",
            config.screener.tickers.len()
        ));
    }

    tracing::info!(
        "Screening {} tickers from {} ({} interval)",
        config.screener.tickers.len(),
        config.screener.start_date,
        config.screener.interval
    );

    let provider = Arc::new(BinanceHistoryProvider::new(config.binance.api_url.clone()));
    let screener = Screener::new(provider, config.screener.clone());
    let records = screener.run().await?;

    if let Some(parent) = Path::new(&output).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
        }
    }
    CsvStorage::write_pair_metrics(&output, &records)?;

    tracing::info!("Wrote {} pair rows to {}", records.len(), output);
    Ok(())
}
