//! Core types, traits, and configuration for the pairs screener.
//!
//! This crate provides:
//! - Application configuration structs and the figment-based loader
//! - The `HistoryProvider` trait that data sources implement
//! - The `ClosePoint` time-series point shared across crates

pub mod config;
pub mod config_loader;
pub mod traits;

pub use config::{AppConfig, BinanceConfig, OutputConfig, ScreenerConfig};
pub use config_loader::ConfigLoader;
pub use traits::{ClosePoint, HistoryProvider};
