use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use governor::{clock::DefaultClock, state::InMemoryState, Quota, RateLimiter};
use pairscan_data::KlineRecord;
use reqwest::Client;
use rust_decimal::Decimal;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::sync::Arc;

/// Maximum klines per request allowed by the Binance REST API.
const KLINES_PAGE_LIMIT: usize = 1000;

pub struct BinanceClient {
    http_client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter<governor::state::direct::NotKeyed, InMemoryState, DefaultClock>>,
}

impl BinanceClient {
    #[must_use]
    pub fn new(base_url: String) -> Self {
        // 1200 weight per minute = 20 per second
        let quota = Quota::per_second(NonZeroU32::new(20).unwrap());
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            http_client: Client::new(),
            base_url,
            rate_limiter,
        }
    }

    async fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<serde_json::Value> {
        self.rate_limiter.until_ready().await;
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http_client
            .get(&url)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} returned an error status"))?;
        let json = response.json().await?;
        Ok(json)
    }

    /// Fetches klines for `symbol` from `start` to `end` (or now), paging
    /// through the API in 1000-candle batches.
    ///
    /// # Errors
    /// Returns error if a request fails or the response cannot be parsed
    pub async fn fetch_klines(
        &self,
        symbol: &str,
        interval: &str,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<KlineRecord>> {
        let interval_ms = interval_to_millis(interval)?;
        let end_ms = end.map_or_else(|| Utc::now().timestamp_millis(), |e| e.timestamp_millis());
        let mut cursor = start.timestamp_millis();
        let mut records = Vec::new();

        while cursor < end_ms {
            let params = [
                ("symbol", symbol.to_string()),
                ("interval", interval.to_string()),
                ("startTime", cursor.to_string()),
                ("endTime", end_ms.to_string()),
                ("limit", KLINES_PAGE_LIMIT.to_string()),
            ];
            let json = self.get("/api/v3/klines", &params).await?;
            let rows = json
                .as_array()
                .ok_or_else(|| anyhow!("Unexpected klines response for {symbol}: {json}"))?;

            if rows.is_empty() {
                break;
            }

            let mut last_open_ms = cursor;
            for row in rows {
                let record = parse_kline(symbol, row)?;
                last_open_ms = record.timestamp.timestamp_millis();
                records.push(record);
            }

            if rows.len() < KLINES_PAGE_LIMIT {
                break;
            }
            cursor = last_open_ms + interval_ms;
        }

        Ok(records)
    }
}

/// Parses one kline row: `[open_time, open, high, low, close, volume, ...]`.
fn parse_kline(symbol: &str, row: &serde_json::Value) -> Result<KlineRecord> {
    let fields = row
        .as_array()
        .ok_or_else(|| anyhow!("Kline row is not an array: {row}"))?;
    if fields.len() < 6 {
        return Err(anyhow!("Kline row too short for {symbol}: {row}"));
    }

    let open_time = fields[0]
        .as_i64()
        .ok_or_else(|| anyhow!("Invalid kline open time: {}", fields[0]))?;
    let timestamp = DateTime::from_timestamp_millis(open_time)
        .ok_or_else(|| anyhow!("Kline open time out of range: {open_time}"))?;

    let decimal_at = |i: usize| -> Result<Decimal> {
        let s = fields[i]
            .as_str()
            .ok_or_else(|| anyhow!("Kline field {i} is not a string: {}", fields[i]))?;
        Decimal::from_str(s).with_context(|| format!("Invalid decimal in kline field {i}: {s}"))
    };

    Ok(KlineRecord {
        timestamp,
        symbol: symbol.to_string(),
        open: decimal_at(1)?,
        high: decimal_at(2)?,
        low: decimal_at(3)?,
        close: decimal_at(4)?,
        volume: decimal_at(5)?,
    })
}

/// Parse interval string (e.g., "1m", "4h", "1d") to milliseconds.
fn interval_to_millis(interval: &str) -> Result<i64> {
    let (value, unit_ms) = if let Some(v) = interval.strip_suffix('m') {
        (v, 60_000)
    } else if let Some(v) = interval.strip_suffix('h') {
        (v, 3_600_000)
    } else if let Some(v) = interval.strip_suffix('d') {
        (v, 86_400_000)
    } else if let Some(v) = interval.strip_suffix('w') {
        (v, 604_800_000)
    } else {
        anyhow::bail!("Invalid interval format: {interval}. Expected format: 1m, 1h, 1d, 1w");
    };
    let value: i64 = value
        .parse()
        .with_context(|| format!("Invalid interval value: {interval}"))?;
    Ok(value * unit_ms)
}
