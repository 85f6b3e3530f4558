use crate::processor::PairProcessor;
use crate::universe::unique_pairs;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use pairscan_core::{HistoryProvider, ScreenerConfig};
use pairscan_data::PairMetricsRecord;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{info, warn};

/// Log progress every this many completed pairs (and at the end).
const PROGRESS_EVERY: usize = 25;

/// Fans the pair processor out over the ticker universe with a bounded
/// worker pool.
///
/// Workers pull `(ticker_a, ticker_b)` tasks from a shared queue and
/// push `(pair_id, outcome)` into a results channel, so pair-to-record
/// association is independent of completion order. A failed pair is
/// omitted from the results and logged with its identity; only failures
/// of the pool machinery itself abort the run.
pub struct Screener {
    provider: Arc<dyn HistoryProvider>,
    config: ScreenerConfig,
}

impl Screener {
    #[must_use]
    pub fn new(provider: Arc<dyn HistoryProvider>, config: ScreenerConfig) -> Self {
        Self { provider, config }
    }

    /// Processes every unordered ticker pair and returns the collected
    /// records, in completion order.
    ///
    /// # Errors
    /// Returns error if the start date is invalid or a worker panics.
    /// Per-pair failures are contained and logged, not propagated.
    pub async fn run(&self) -> Result<Vec<PairMetricsRecord>> {
        let start = parse_start_date(&self.config.start_date)?;
        let pairs = unique_pairs(&self.config.tickers);
        let total = pairs.len();
        if total == 0 {
            warn!("Ticker universe has fewer than 2 tickers, nothing to screen");
            return Ok(Vec::new());
        }

        let workers = self.config.worker_count().max(1).min(total);
        info!(
            "Screening {} pairs from {} tickers with {} workers",
            total,
            self.config.tickers.len(),
            workers
        );

        let processor = Arc::new(PairProcessor::new(
            self.provider.clone(),
            self.config.interval.clone(),
            start,
        ));
        let queue = Arc::new(Mutex::new(VecDeque::from(pairs)));
        let (result_tx, mut result_rx) = mpsc::channel::<(String, Result<PairMetricsRecord>)>(64);

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let queue = Arc::clone(&queue);
            let result_tx = result_tx.clone();
            let processor = Arc::clone(&processor);
            handles.push(tokio::spawn(async move {
                loop {
                    let next = queue.lock().await.pop_front();
                    let Some((ticker_a, ticker_b)) = next else {
                        break;
                    };
                    let outcome = processor.process(&ticker_a, &ticker_b).await;
                    if result_tx
                        .send((format!("{ticker_a}-{ticker_b}"), outcome))
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
            }));
        }
        drop(result_tx);

        let mut records = Vec::with_capacity(total);
        let mut processed = 0usize;
        while let Some((pair_id, outcome)) = result_rx.recv().await {
            processed += 1;
            match outcome {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping pair {}: {:#}", pair_id, e),
            }
            if processed % PROGRESS_EVERY == 0 || processed == total {
                info!("Processed {}/{} pairs", processed, total);
            }
        }

        for handle in handles {
            handle
                .await
                .map_err(|e| anyhow!("Pair worker failed: {e}"))?;
        }

        Ok(records)
    }
}

fn parse_start_date(start_date: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(start_date, "%Y-%m-%d")
        .with_context(|| format!("Invalid start date: {start_date}. Expected YYYY-MM-DD"))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid start date: {start_date}"))?;
    Ok(DateTime::from_naive_utc_and_offset(naive, Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_start_date_at_midnight_utc() {
        let parsed = parse_start_date("2020-01-01").unwrap();

        assert_eq!(parsed.to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn rejects_malformed_start_date() {
        assert!(parse_start_date("01/01/2020").is_err());
        assert!(parse_start_date("not-a-date").is_err());
    }
}
