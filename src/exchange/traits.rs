use async_trait::async_trait;

use crate::error::ExchangeError;

use super::types::{AvgPrice, ExchangeInfo};

pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Read-only market data needed for a polling run.
#[async_trait]
pub trait PriceSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn exchange_info(&self) -> ExchangeResult<ExchangeInfo>;
    async fn avg_price(&self, symbol: &str) -> ExchangeResult<AvgPrice>;
}
