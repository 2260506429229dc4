//! Application-wide constants
//!
//! Endpoints and fixed values used across the poller.

/// Exchange endpoints
pub mod endpoints {
    /// Public Binance spot REST root
    pub const DEFAULT_BASE_URL: &str = "https://api.binance.com";

    /// Symbol catalog
    pub const EXCHANGE_INFO_PATH: &str = "/api/v3/exchangeInfo";

    /// Current average price for one symbol (`?symbol=`)
    pub const AVG_PRICE_PATH: &str = "/api/v3/avgPrice";
}

/// Pricing constants
pub mod pricing {
    /// Placeholder written for any ticker whose price lookup failed
    pub const SENTINEL_PRICE: f64 = -420.0;

    /// Decimal places used when printing prices
    pub const PRINT_DECIMALS: usize = 6;
}

/// Logging defaults
pub mod logging {
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}
