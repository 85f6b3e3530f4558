//! Binance spot market data provider for the pairs screener.

pub mod client;
pub mod data_provider;

pub use client::BinanceClient;
pub use data_provider::BinanceHistoryProvider;
