//! Statistical relationship measures for pairs screening.
//!
//! This crate provides the pure statistic functions applied to every
//! ticker pair: series alignment, spread descriptives, half-life of mean
//! reversion, stationarity tests (ADF, KPSS), the Engle-Granger
//! cointegration test, the OLS hedge ratio, and Granger causality.
//!
//! All functions take plain `&[f64]` slices. Mathematically undefined
//! results (zero variance, singular regressions) are reported as
//! `f64::NAN`, never as panics; an insufficient sample is a `StatError`
//! the caller is expected to contain per statistic.

mod causality;
mod cointegration;
mod describe;
mod error;
mod ols;
mod series;
mod stationarity;

pub use causality::{granger_max_pvalue, granger_pvalue, DEFAULT_MAX_LAG};
pub use cointegration::{engle_granger_statistic, hedge_ratio};
pub use describe::{correlation, mean, std_dev, zscore_last};
pub use error::StatError;
pub use ols::{ols, OlsFit};
pub use series::{align_trailing, spread};
pub use stationarity::{adf_statistic, half_life, kpss_statistic};
