use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// One observation of a ticker's closing price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosePoint {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
}

/// A source of historical closing prices.
///
/// Implementations must return points strictly ascending in timestamp with
/// no duplicates. The handle issues independent, stateless requests, so it
/// is safe to share across concurrent workers.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetches the close series for `symbol` from `start` to `end`
    /// (or "now" when `end` is `None`) at the given candle interval.
    async fn fetch_close_history(
        &self,
        symbol: &str,
        interval: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<ClosePoint>>;
}
