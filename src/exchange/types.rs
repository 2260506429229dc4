use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Response of `GET /api/v3/exchangeInfo`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    #[serde(default)]
    pub timezone: String,
    /// Milliseconds since the epoch
    #[serde(default)]
    pub server_time: i64,
    #[serde(default)]
    pub rate_limits: Vec<RateLimit>,
    #[serde(default)]
    pub exchange_filters: Vec<Value>,
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInfo {
    /// Symbol identifiers in catalog order.
    pub fn tickers(&self) -> Vec<String> {
        self.symbols.iter().map(|s| s.symbol.clone()).collect()
    }

    pub fn server_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.server_time)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub rate_limit_type: String,
    pub interval: String,
    pub limit: i64,
}

/// Catalog entry. Only `symbol` drives pricing; the rest is carried along.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub base_asset: String,
    #[serde(default)]
    pub base_asset_precision: u32,
    #[serde(default)]
    pub quote_asset: String,
    #[serde(default)]
    pub quote_precision: u32,
    #[serde(default)]
    pub order_types: Vec<String>,
    #[serde(default)]
    pub iceberg_allowed: bool,
    #[serde(default)]
    pub oco_allowed: bool,
    #[serde(default)]
    pub is_spot_trading_allowed: bool,
    #[serde(default)]
    pub is_margin_trading_allowed: bool,
    #[serde(default)]
    pub filters: Vec<Value>,
}

/// Response of `GET /api/v3/avgPrice`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AvgPrice {
    /// Averaging window in minutes
    #[serde(default)]
    pub mins: Option<u64>,
    #[serde(deserialize_with = "de_price")]
    pub price: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// Binance quotes decimals as JSON strings ("0.05123000").
fn de_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| serde::de::Error::custom(format!("invalid price {:?}: {}", s, e))),
    }
}
