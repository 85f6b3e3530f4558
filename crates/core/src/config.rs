use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub screener: ScreenerConfig,
    pub binance: BinanceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenerConfig {
    /// Ordered ticker universe. Pairs are enumerated in this order.
    pub tickers: Vec<String>,
    /// Candle interval (e.g., "1d", "1h").
    pub interval: String,
    /// Start of the historical window, "YYYY-MM-DD".
    pub start_date: String,
    /// Number of concurrent pair workers. Defaults to available parallelism.
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinanceConfig {
    pub api_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screener: ScreenerConfig {
                tickers: vec![
                    "BTCUSDT".to_string(),
                    "ETHUSDT".to_string(),
                    "BNBUSDT".to_string(),
                    "XRPUSDT".to_string(),
                    "ADAUSDT".to_string(),
                    "SOLUSDT".to_string(),
                    "DOGEUSDT".to_string(),
                    "DOTUSDT".to_string(),
                    "LTCUSDT".to_string(),
                    "LINKUSDT".to_string(),
                ],
                interval: "1d".to_string(),
                start_date: "2020-01-01".to_string(),
                workers: None,
            },
            binance: BinanceConfig {
                api_url: "https://api.binance.com".to_string(),
            },
            output: OutputConfig {
                path: "data/pair_metrics.csv".to_string(),
            },
        }
    }
}

impl ScreenerConfig {
    /// Resolves the worker count, falling back to available parallelism.
    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(4)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_tickers_and_daily_interval() {
        let config = AppConfig::default();
        assert!(config.screener.tickers.len() >= 2);
        assert_eq!(config.screener.interval, "1d");
        assert_eq!(config.screener.start_date, "2020-01-01");
    }

    #[test]
    fn worker_count_prefers_explicit_value() {
        let mut config = AppConfig::default();
        config.screener.workers = Some(3);
        assert_eq!(config.screener.worker_count(), 3);
    }

    #[test]
    fn worker_count_defaults_to_nonzero() {
        let config = AppConfig::default();
        assert!(config.screener.worker_count() >= 1);
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.screener.tickers, config.screener.tickers);
        assert_eq!(parsed.output.path, config.output.path);
    }
}
