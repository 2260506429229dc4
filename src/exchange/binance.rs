//! Binance Spot adapter (public REST, unsigned).

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{
    traits::{ExchangeResult, PriceSource},
    types::{AvgPrice, ExchangeInfo},
};

use crate::config::AppConfig;
use crate::constants::endpoints::{AVG_PRICE_PATH, EXCHANGE_INFO_PATH};
use crate::error::ExchangeError;

#[derive(Clone)]
pub struct BinanceClient {
    client: Client,
    base_url: String,
}

impl BinanceClient {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> ExchangeResult<T> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        if !status.is_success() {
            return Err(ExchangeError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        serde_json::from_str(&text).map_err(|e| {
            debug!("Binance decode failed: {} (body: {})", e, text);
            ExchangeError::Deserialization(e)
        })
    }
}

#[async_trait]
impl PriceSource for BinanceClient {
    fn name(&self) -> &'static str {
        "binance"
    }

    async fn exchange_info(&self) -> ExchangeResult<ExchangeInfo> {
        let endpoint = format!("{}{}", self.base_url, EXCHANGE_INFO_PATH);
        self.get_json(self.client.get(&endpoint)).await
    }

    async fn avg_price(&self, symbol: &str) -> ExchangeResult<AvgPrice> {
        let endpoint = format!("{}{}", self.base_url, AVG_PRICE_PATH);
        self.get_json(self.client.get(&endpoint).query(&[("symbol", symbol)]))
            .await
    }
}
