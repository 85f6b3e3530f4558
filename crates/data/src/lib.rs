//! Data models and CSV storage for the pairs screener.

pub mod csv_storage;
pub mod models;

pub use csv_storage::CsvStorage;
pub use models::{KlineRecord, PairMetricsRecord};
