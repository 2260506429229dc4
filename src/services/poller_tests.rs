//! Unit tests for PricePoller, run against an in-memory price source.

#[cfg(test)]
mod poller_tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::error::{ExchangeError, PollError};
    use crate::exchange::traits::{ExchangeResult, PriceSource};
    use crate::exchange::types::{AvgPrice, ExchangeInfo, SymbolInfo};
    use crate::services::poller::PricePoller;

    enum Lookup {
        Price(f64),
        HttpError,
        BadBody,
        Panic,
    }

    struct FakeSource {
        catalog_ok: bool,
        tickers: Vec<String>,
        lookups: HashMap<String, Lookup>,
        price_calls: AtomicUsize,
    }

    impl FakeSource {
        fn new(entries: Vec<(&str, Lookup)>) -> Self {
            let tickers = entries.iter().map(|(t, _)| t.to_string()).collect();
            let lookups = entries
                .into_iter()
                .map(|(t, l)| (t.to_string(), l))
                .collect();
            Self {
                catalog_ok: true,
                tickers,
                lookups,
                price_calls: AtomicUsize::new(0),
            }
        }

        fn failing_catalog() -> Self {
            let mut source = Self::new(vec![("ETHBTC", Lookup::Price(0.05))]);
            source.catalog_ok = false;
            source
        }
    }

    #[async_trait]
    impl PriceSource for FakeSource {
        fn name(&self) -> &'static str {
            "fake"
        }

        async fn exchange_info(&self) -> ExchangeResult<ExchangeInfo> {
            if !self.catalog_ok {
                return Err(ExchangeError::Http {
                    status: 503,
                    body: "maintenance".to_string(),
                });
            }
            Ok(ExchangeInfo {
                timezone: "UTC".to_string(),
                server_time: 1_700_000_000_000,
                symbols: self
                    .tickers
                    .iter()
                    .map(|t| SymbolInfo {
                        symbol: t.clone(),
                        status: "TRADING".to_string(),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
        }

        async fn avg_price(&self, symbol: &str) -> ExchangeResult<AvgPrice> {
            self.price_calls.fetch_add(1, Ordering::SeqCst);
            match self.lookups.get(symbol) {
                Some(Lookup::Price(p)) => Ok(AvgPrice {
                    mins: Some(5),
                    price: *p,
                }),
                Some(Lookup::HttpError) | None => Err(ExchangeError::Http {
                    status: 400,
                    body: r#"{"code":-1121,"msg":"Invalid symbol."}"#.to_string(),
                }),
                Some(Lookup::BadBody) => {
                    let err = serde_json::from_str::<AvgPrice>("{}").unwrap_err();
                    Err(ExchangeError::Deserialization(err))
                }
                Some(Lookup::Panic) => panic!("lookup blew up for {}", symbol),
            }
        }
    }

    #[tokio::test]
    async fn test_run_collects_all_prices() {
        let source = Arc::new(FakeSource::new(vec![
            ("ETHBTC", Lookup::Price(0.05)),
            ("LTCBTC", Lookup::Price(0.002)),
            ("BNBBTC", Lookup::Price(0.01)),
        ]));
        let poller = PricePoller::new(source.clone());

        let table = poller.run().await.unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("ETHBTC"), Some(0.05));
        assert_eq!(table.get("LTCBTC"), Some(0.002));
        assert_eq!(table.get("BNBBTC"), Some(0.01));
        assert_eq!(source.price_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_failed_lookups_record_sentinel() {
        let source = Arc::new(FakeSource::new(vec![
            ("ETHBTC", Lookup::Price(0.05)),
            ("BADPAIR", Lookup::HttpError),
            ("GARBLED", Lookup::BadBody),
        ]));
        let poller = PricePoller::new(source);

        let table = poller.run().await.unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("ETHBTC"), Some(0.05));
        assert_eq!(table.get("BADPAIR"), Some(-420.0));
        assert_eq!(table.get("GARBLED"), Some(-420.0));
        assert_eq!(table.failed_tickers(), vec!["BADPAIR", "GARBLED"]);
    }

    #[tokio::test]
    async fn test_panicking_lookup_records_sentinel() {
        let source = Arc::new(FakeSource::new(vec![
            ("ETHBTC", Lookup::Price(0.05)),
            ("BOOM", Lookup::Panic),
        ]));
        let poller = PricePoller::new(source);

        let table = poller.run().await.unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("ETHBTC"), Some(0.05));
        assert_eq!(table.get("BOOM"), Some(-420.0));
    }

    #[tokio::test]
    async fn test_catalog_failure_is_fatal() {
        let source = Arc::new(FakeSource::failing_catalog());
        let poller = PricePoller::new(source.clone());

        let result = poller.run().await;

        match result {
            Err(PollError::Catalog(e)) => assert_eq!(e.status(), Some(503)),
            other => panic!("expected catalog error, got {:?}", other.map(|t| t.len())),
        }
        assert_eq!(source.price_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_catalog() {
        let source = Arc::new(FakeSource::new(vec![
            ("ETHBTC", Lookup::Price(0.05)),
            ("LTCBTC", Lookup::Price(0.002)),
        ]));
        let poller = PricePoller::new(source);

        let info = poller.fetch_catalog().await.unwrap();
        assert_eq!(info.tickers(), vec!["ETHBTC", "LTCBTC"]);
    }

    #[tokio::test]
    async fn test_poll_prices_empty() {
        let source = Arc::new(FakeSource::new(vec![]));
        let poller = PricePoller::new(source.clone());

        let table = poller.poll_prices(Vec::new()).await;

        assert!(table.is_empty());
        assert_eq!(source.price_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_poll_prices_many_tickers() {
        let entries: Vec<(String, f64)> = (0..500)
            .map(|i| (format!("SYM{}BTC", i), i as f64 / 1000.0))
            .collect();
        let source = Arc::new(FakeSource::new(
            entries
                .iter()
                .map(|(t, p)| (t.as_str(), Lookup::Price(*p)))
                .collect(),
        ));
        let poller = PricePoller::new(source.clone());

        let table = poller.run().await.unwrap();

        assert_eq!(table.len(), 500);
        assert!(table.failed_tickers().is_empty());
        assert_eq!(table.get("SYM250BTC"), Some(0.25));
        assert_eq!(source.price_calls.load(Ordering::SeqCst), 500);
    }

    #[tokio::test]
    async fn test_unknown_ticker_gets_sentinel() {
        // Ticker requested but not known to the source
        let source = Arc::new(FakeSource::new(vec![("ETHBTC", Lookup::Price(0.05))]));
        let poller = PricePoller::new(source);

        let table = poller
            .poll_prices(vec!["ETHBTC".to_string(), "NOPE".to_string()])
            .await;

        assert_eq!(table.get("NOPE"), Some(-420.0));
        assert_eq!(table.get("ETHBTC"), Some(0.05));
    }
}
