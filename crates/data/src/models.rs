use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// One candlestick as returned by the exchange.
#[derive(Debug, Clone)]
pub struct KlineRecord {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}

/// The fixed-schema result row for one ticker pair.
///
/// Every field is always present; statistics that are mathematically
/// undefined for the pair carry `f64::NAN` rather than being absent.
#[derive(Debug, Clone)]
pub struct PairMetricsRecord {
    /// Pair identifier, `"{ticker_a}-{ticker_b}"`.
    pub pair: String,
    /// Pearson correlation of the aligned close series.
    pub correlation: f64,
    /// Mean of the spread.
    pub mean_spread: f64,
    /// Sample standard deviation of the spread.
    pub std_spread: f64,
    /// Z-score of the most recent spread observation.
    pub zscore_spread: f64,
    /// Half-life of mean reversion of the spread.
    pub half_life_spread: f64,
    /// ADF test statistic on the spread.
    pub adf_stat: f64,
    /// KPSS test statistic on the spread.
    pub kpss_stat: f64,
    /// Engle-Granger cointegration test statistic.
    pub engle_granger_stat: f64,
    /// Reserved placeholder column; the Johansen test is not computed.
    pub johansen: String,
    /// OLS hedge ratio (slope of A on B).
    pub hedge_ratio: f64,
    /// Worst-case Granger causality p-value over lags 1..=5.
    pub granger_causality: f64,
}

impl PairMetricsRecord {
    /// Value written to the reserved Johansen column.
    pub const JOHANSEN_PLACEHOLDER: &'static str = "Not Implemented";

    /// CSV header, one name per schema field in order.
    pub const CSV_HEADER: [&'static str; 12] = [
        "Pair",
        "Correlation",
        "Mean_Spread",
        "Standard_Deviation_Spread",
        "Z-Score_Spread",
        "Half-Life_Spread",
        "Stationarity_ADF",
        "Stationarity_KPSS",
        "Engle_Granger_Test",
        "Johansen_Test",
        "Optimal_Hedge_Ratio",
        "Granger_Causality",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_matches_schema_width() {
        assert_eq!(PairMetricsRecord::CSV_HEADER.len(), 12);
        assert_eq!(PairMetricsRecord::CSV_HEADER[0], "Pair");
        assert_eq!(PairMetricsRecord::CSV_HEADER[9], "Johansen_Test");
    }

    #[test]
    fn nan_fields_serialize_as_nan_text() {
        assert_eq!(f64::NAN.to_string(), "NaN");
    }
}
