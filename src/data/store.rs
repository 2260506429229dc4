use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::constants::pricing::SENTINEL_PRICE;

/// Ticker -> price table shared by all polling tasks.
#[derive(Clone, Debug, Default)]
pub struct PriceTable {
    pub(crate) prices: Arc<Mutex<HashMap<String, f64>>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    // A writer that panicked mid-insert cannot leave the map half-written,
    // so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, f64>> {
        self.prices.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, ticker: impl Into<String>, price: f64) {
        self.lock().insert(ticker.into(), price);
    }

    pub fn record_failure(&self, ticker: impl Into<String>) {
        self.record(ticker, SENTINEL_PRICE);
    }

    pub fn get(&self, ticker: &str) -> Option<f64> {
        self.lock().get(ticker).copied()
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.lock().contains_key(ticker)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Tickers holding the sentinel, sorted.
    pub fn failed_tickers(&self) -> Vec<String> {
        let mut failed: Vec<String> = self
            .lock()
            .iter()
            .filter(|(_, price)| is_sentinel(**price))
            .map(|(ticker, _)| ticker.clone())
            .collect();
        failed.sort();
        failed
    }

    /// Sorted copy of the table.
    pub fn snapshot(&self) -> BTreeMap<String, f64> {
        self.lock()
            .iter()
            .map(|(ticker, price)| (ticker.clone(), *price))
            .collect()
    }
}

pub fn is_sentinel(price: f64) -> bool {
    price == SENTINEL_PRICE
}
