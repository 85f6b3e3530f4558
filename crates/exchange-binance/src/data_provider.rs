use crate::BinanceClient;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pairscan_core::{ClosePoint, HistoryProvider};
use rust_decimal::prelude::ToPrimitive;
use tracing::debug;

/// `HistoryProvider` backed by the Binance spot REST API.
///
/// Each fetch is an independent, stateless request, so one provider can
/// be shared across concurrent pair workers.
pub struct BinanceHistoryProvider {
    client: BinanceClient,
}

impl BinanceHistoryProvider {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            client: BinanceClient::new(api_url),
        }
    }

    /// Yearly liquidity proxy: total volume divided by the close range.
    ///
    /// # Errors
    /// Returns error if the fetch fails, no candles exist, or the close
    /// range is zero
    pub async fn liquidity_score(
        &self,
        symbol: &str,
        interval: &str,
        start: DateTime<Utc>,
    ) -> Result<f64> {
        let records = self
            .client
            .fetch_klines(symbol, interval, start, None)
            .await
            .with_context(|| format!("Failed to fetch klines for {symbol}"))?;

        if records.is_empty() {
            anyhow::bail!("No kline data for {symbol}");
        }

        let volume: f64 = records
            .iter()
            .filter_map(|r| r.volume.to_f64())
            .sum();
        let closes: Vec<f64> = records.iter().filter_map(|r| r.close.to_f64()).collect();
        let max = closes.iter().copied().fold(f64::MIN, f64::max);
        let min = closes.iter().copied().fold(f64::MAX, f64::min);
        let range = max - min;
        if range <= 0.0 {
            anyhow::bail!("Close range for {symbol} is zero, liquidity score undefined");
        }
        Ok(volume / range)
    }
}

#[async_trait]
impl HistoryProvider for BinanceHistoryProvider {
    async fn fetch_close_history(
        &self,
        symbol: &str,
        interval: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClosePoint>> {
        let records = self
            .client
            .fetch_klines(symbol, interval, start, end)
            .await
            .with_context(|| format!("Failed to fetch klines for {symbol}"))?;

        debug!("Fetched {} klines for {}", records.len(), symbol);

        Ok(records
            .into_iter()
            .filter_map(|r| {
                let close = r.close.to_f64()?;
                close.is_finite().then_some(ClosePoint {
                    timestamp: r.timestamp,
                    close,
                })
            })
            .collect())
    }
}
