//! One-shot price poll: fetch the symbol catalog, then look up every
//! symbol's average price concurrently.

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use tracing::{debug, error, info, warn};

use crate::data::store::PriceTable;
use crate::error::PollError;
use crate::exchange::traits::PriceSource;
use crate::exchange::types::ExchangeInfo;

#[derive(Clone)]
pub struct PricePoller {
    source: Arc<dyn PriceSource>,
}

impl PricePoller {
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self { source }
    }

    /// Fetch the symbol catalog. Any failure here ends the run.
    pub async fn fetch_catalog(&self) -> Result<ExchangeInfo, PollError> {
        let info = self.source.exchange_info().await.map_err(|e| {
            error!("❌ [CATALOG] {} exchangeInfo failed: {}", self.source.name(), e);
            PollError::Catalog(e)
        })?;

        match info.server_time_utc() {
            Some(ts) => info!(
                "📋 [CATALOG] {} symbols from {} (server time {})",
                info.symbols.len(),
                self.source.name(),
                ts.to_rfc3339()
            ),
            None => info!(
                "📋 [CATALOG] {} symbols from {}",
                info.symbols.len(),
                self.source.name()
            ),
        }
        Ok(info)
    }

    /// Spawn one lookup task per ticker and wait for all of them.
    ///
    /// Every ticker ends up in the returned table: failed lookups (and
    /// tasks that panicked) are recorded with the sentinel price.
    pub async fn poll_prices(&self, tickers: Vec<String>) -> PriceTable {
        let started = Instant::now();
        let table = PriceTable::new();

        let handles: Vec<_> = tickers
            .iter()
            .map(|ticker| {
                tokio::spawn(poll_one(
                    self.source.clone(),
                    table.clone(),
                    ticker.clone(),
                ))
            })
            .collect();

        let results = join_all(handles).await;

        for (ticker, result) in tickers.into_iter().zip(results) {
            if let Err(e) = result {
                error!("💥 [POLLER] lookup task for {} aborted: {}", ticker, e);
                table.record_failure(ticker);
            }
        }

        info!(
            "⏱️ [POLLER] poll_prices took {:?} ({} tickers)",
            started.elapsed(),
            table.len()
        );
        table
    }

    pub async fn run(&self) -> Result<PriceTable, PollError> {
        let info = self.fetch_catalog().await?;
        Ok(self.poll_prices(info.tickers()).await)
    }
}

async fn poll_one(source: Arc<dyn PriceSource>, table: PriceTable, ticker: String) {
    match source.avg_price(&ticker).await {
        Ok(avg) => {
            debug!("[POLLER] {} = {}", ticker, avg.price);
            table.record(ticker, avg.price);
        }
        Err(e) => {
            warn!("⚠️ [POLLER] price lookup for {} failed: {}", ticker, e);
            table.record_failure(ticker);
        }
    }
}
