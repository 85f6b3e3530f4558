use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use pairscan_core::HistoryProvider;
use pairscan_data::PairMetricsRecord;
use pairscan_stats::{
    adf_statistic, align_trailing, correlation, engle_granger_statistic, granger_max_pvalue,
    half_life, hedge_ratio, kpss_statistic, mean, spread, std_dev, zscore_last, StatError,
    DEFAULT_MAX_LAG,
};
use std::sync::Arc;
use tracing::debug;

/// Computes the fixed-schema metric record for one ticker pair.
///
/// Per-statistic failures (insufficient data, degenerate inputs) become
/// NaN fields; a fetch failure or an empty aligned window fails the pair
/// as a unit and is handled by the orchestrator.
pub struct PairProcessor {
    provider: Arc<dyn HistoryProvider>,
    interval: String,
    start: DateTime<Utc>,
}

impl PairProcessor {
    #[must_use]
    pub fn new(provider: Arc<dyn HistoryProvider>, interval: String, start: DateTime<Utc>) -> Self {
        Self {
            provider,
            interval,
            start,
        }
    }

    /// Processes a single pair into its metric record.
    ///
    /// # Errors
    /// Returns error if either ticker's history cannot be fetched or the
    /// aligned window is empty
    pub async fn process(&self, ticker_a: &str, ticker_b: &str) -> Result<PairMetricsRecord> {
        let closes_a = self.fetch_closes(ticker_a).await?;
        let closes_b = self.fetch_closes(ticker_b).await?;

        let (aligned_a, aligned_b) = align_trailing(&closes_a, &closes_b);
        if aligned_a.is_empty() {
            anyhow::bail!("No overlapping history for {ticker_a} and {ticker_b}");
        }

        let pair = format!("{ticker_a}-{ticker_b}");
        let pair_spread = spread(aligned_a, aligned_b);

        Ok(PairMetricsRecord {
            correlation: correlation(aligned_a, aligned_b),
            mean_spread: mean(&pair_spread),
            std_spread: std_dev(&pair_spread),
            zscore_spread: zscore_last(&pair_spread),
            half_life_spread: or_nan(half_life(&pair_spread), &pair, "half-life"),
            adf_stat: or_nan(adf_statistic(&pair_spread), &pair, "ADF"),
            kpss_stat: or_nan(kpss_statistic(&pair_spread), &pair, "KPSS"),
            engle_granger_stat: or_nan(
                engle_granger_statistic(aligned_a, aligned_b),
                &pair,
                "Engle-Granger",
            ),
            johansen: PairMetricsRecord::JOHANSEN_PLACEHOLDER.to_string(),
            hedge_ratio: or_nan(hedge_ratio(aligned_a, aligned_b), &pair, "hedge ratio"),
            granger_causality: or_nan(
                granger_max_pvalue(aligned_a, aligned_b, DEFAULT_MAX_LAG),
                &pair,
                "Granger causality",
            ),
            pair,
        })
    }

    async fn fetch_closes(&self, symbol: &str) -> Result<Vec<f64>> {
        let points = self
            .provider
            .fetch_close_history(symbol, &self.interval, self.start, None)
            .await
            .with_context(|| format!("Failed to fetch close history for {symbol}"))?;

        Ok(points
            .into_iter()
            .map(|p| p.close)
            .filter(|c| c.is_finite())
            .collect())
    }
}

/// Contains a per-statistic failure as a NaN field.
fn or_nan(result: Result<f64, StatError>, pair: &str, statistic: &str) -> f64 {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!("{} unavailable for {}: {}", statistic, pair, e);
            f64::NAN
        }
    }
}
