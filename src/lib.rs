//! Price poller - one-shot exchange price snapshot
//!
//! Fetches an exchange's symbol catalog, then looks up every symbol's
//! average price concurrently and collects the results into a table.

pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod exchange;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use data::store::PriceTable;
pub use error::{ExchangeError, PollError};
pub use exchange::binance::BinanceClient;
pub use exchange::traits::PriceSource;
pub use services::poller::PricePoller;
