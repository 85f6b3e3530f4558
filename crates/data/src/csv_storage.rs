use crate::models::{KlineRecord, PairMetricsRecord};
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;

pub struct CsvStorage;

impl CsvStorage {
    /// Writes the pair metrics table to a CSV file.
    ///
    /// Header row matches the record schema; no index column is written.
    /// Undefined statistics are written as `NaN`.
    ///
    /// # Errors
    /// Returns error if the file cannot be created or writing fails
    pub fn write_pair_metrics(path: &str, records: &[PairMetricsRecord]) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create CSV file: {path}"))?;
        let mut writer = Writer::from_writer(file);

        writer.write_record(PairMetricsRecord::CSV_HEADER)?;

        for record in records {
            writer.write_record(&[
                record.pair.clone(),
                record.correlation.to_string(),
                record.mean_spread.to_string(),
                record.std_spread.to_string(),
                record.zscore_spread.to_string(),
                record.half_life_spread.to_string(),
                record.adf_stat.to_string(),
                record.kpss_stat.to_string(),
                record.engle_granger_stat.to_string(),
                record.johansen.clone(),
                record.hedge_ratio.to_string(),
                record.granger_causality.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Writes raw kline records to a CSV file, sorted by timestamp ascending.
    ///
    /// Format: timestamp,symbol,open,high,low,close,volume
    ///
    /// # Errors
    /// Returns error if the file cannot be created or writing fails
    pub fn write_klines(path: &str, records: &[KlineRecord]) -> Result<()> {
        let file =
            File::create(path).with_context(|| format!("Failed to create CSV file: {path}"))?;
        let mut writer = Writer::from_writer(file);

        writer.write_record(["timestamp", "symbol", "open", "high", "low", "close", "volume"])?;

        let mut sorted = records.to_vec();
        sorted.sort_by_key(|r| r.timestamp);

        for record in sorted {
            writer.write_record(&[
                record.timestamp.to_rfc3339(),
                record.symbol.clone(),
                record.open.to_string(),
                record.high.to_string(),
                record.low.to_string(),
                record.close.to_string(),
                record.volume.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn sample_record(pair: &str) -> PairMetricsRecord {
        PairMetricsRecord {
            pair: pair.to_string(),
            correlation: 0.95,
            mean_spread: 1.5,
            std_spread: 0.25,
            zscore_spread: -0.5,
            half_life_spread: f64::NAN,
            adf_stat: -3.2,
            kpss_stat: 0.12,
            engle_granger_stat: -4.1,
            johansen: PairMetricsRecord::JOHANSEN_PLACEHOLDER.to_string(),
            hedge_ratio: 1.8,
            granger_causality: 0.03,
        }
    }

    #[test]
    fn writes_header_and_one_row_per_pair() {
        let path = std::env::temp_dir().join("pairscan_metrics_test.csv");
        let path = path.to_str().unwrap().to_string();

        let records = vec![sample_record("BTCUSDT-ETHUSDT"), sample_record("BTCUSDT-BNBUSDT")];
        CsvStorage::write_pair_metrics(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Pair,Correlation,Mean_Spread"));
        assert!(lines[1].starts_with("BTCUSDT-ETHUSDT,"));
        assert!(lines[1].contains("NaN"));
        assert!(lines[1].contains("Not Implemented"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn writes_klines_sorted_by_timestamp() {
        let path = std::env::temp_dir().join("pairscan_klines_test.csv");
        let path = path.to_str().unwrap().to_string();

        let later = KlineRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
            symbol: "BTCUSDT".to_string(),
            open: dec!(101),
            high: dec!(103),
            low: dec!(100),
            close: dec!(102),
            volume: dec!(10),
        };
        let earlier = KlineRecord {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            ..later.clone()
        };

        CsvStorage::write_klines(&path, &[later, earlier]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2024-01-01"));
        assert!(lines[2].starts_with("2024-01-02"));

        std::fs::remove_file(&path).ok();
    }
}
