//! CLI commands for the pairs screener.

pub mod fetch_data;
pub mod liquidity;
pub mod screen;

pub use fetch_data::{run_fetch_data, FetchDataArgs};
pub use liquidity::{run_liquidity, LiquidityArgs};
pub use screen::{run_screen, ScreenArgs};
