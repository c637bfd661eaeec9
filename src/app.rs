use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, portfolio};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The dashboard frontend is served from a different origin, so CORS is wide open.
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/portfolio", portfolio::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::external::quote_provider::{
        Fundamentals, FundamentalsProvider, ProviderError, QuoteProvider, QuoteSnapshot,
    };
    use crate::models::Holding;
    use crate::services::enrichment_service::Enricher;
    use crate::services::quote_cache::QuoteCache;

    struct StubQuotes {
        prices: HashMap<String, f64>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl QuoteProvider for StubQuotes {
        async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(QuoteSnapshot {
                regular_market_price: self.prices.get(symbol).copied(),
            })
        }
    }

    struct StubFundamentals {
        answers: HashMap<String, Fundamentals>,
        panic_on_call: bool,
    }

    #[async_trait]
    impl FundamentalsProvider for StubFundamentals {
        async fn fundamentals(&self, symbol: &str) -> Result<Fundamentals, ProviderError> {
            if self.panic_on_call {
                panic!("stub provider detonated");
            }
            Ok(self.answers.get(symbol).copied().unwrap_or_default())
        }
    }

    fn test_app(
        holdings: Vec<Holding>,
        prices: &[(&str, f64)],
        fundamentals: &[(&str, f64, f64)],
        panic_on_call: bool,
    ) -> (Router, Arc<StubQuotes>) {
        let quotes = Arc::new(StubQuotes {
            prices: prices.iter().map(|(s, p)| (s.to_string(), *p)).collect(),
            calls: AtomicUsize::new(0),
        });
        let answers = fundamentals
            .iter()
            .map(|(s, pe, eps)| {
                (
                    s.to_string(),
                    Fundamentals {
                        pe_ratio: *pe,
                        latest_earnings: *eps,
                    },
                )
            })
            .collect();
        let enricher = Arc::new(Enricher::new(
            quotes.clone(),
            Arc::new(StubFundamentals {
                answers,
                panic_on_call,
            }),
            Arc::new(QuoteCache::new()),
        ));
        let state = AppState {
            holdings: Arc::new(holdings),
            enricher,
        };
        (create_app(state), quotes)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn hdfc() -> Holding {
        Holding::new(
            "1", "HDFC Bank", "HDFCBANK.NS", "Banking & Financial", 1490.0, 50, 4.83,
            "HDFCBANK", "HDFCBANK", 1650.0, 18.0, 90.0,
        )
    }

    fn bajaj() -> Holding {
        Holding::new(
            "2", "Bajaj Finance", "BAJFINANCE.NS", "Banking & Financial", 6466.0, 15, 6.29,
            "BAJFINANCE", "BAJFINANCE", 8000.0, 30.0, 250.0,
        )
    }

    #[tokio::test]
    async fn portfolio_endpoint_serves_enriched_snapshot() {
        let (app, _) = test_app(
            vec![hdfc()],
            &[("HDFCBANK.NS", 1700.15)],
            &[("HDFCBANK.NS", 18.69, 91.02)],
            false,
        );

        let (status, body) = get_json(app, "/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.get("error").is_none());

        let stock = &body["portfolio"]["stocks"][0];
        assert_eq!(stock["cmp"], 1700.15);
        assert_eq!(stock["investment"], 74500.0);
        assert_eq!(stock["presentValue"], 85007.5);
        assert_eq!(stock["gainLoss"], 10507.5);
        assert!((stock["gainLossPercentage"].as_f64().unwrap() - 14.10).abs() < 0.01);
        assert_eq!(stock["peRatio"], 18.69);
        assert_eq!(stock["latestEarnings"], 91.02);
        // wire contract field names
        assert_eq!(stock["nseCode"], "HDFCBANK");
        assert_eq!(stock["bseCode"], "HDFCBANK");
        assert_eq!(stock["portfolioPercentage"], 4.83);
        assert!(stock.get("lastUpdated").is_some());
    }

    #[tokio::test]
    async fn sector_rollup_spans_both_banking_holdings() {
        let (app, _) = test_app(
            vec![hdfc(), bajaj()],
            &[("HDFCBANK.NS", 1700.15), ("BAJFINANCE.NS", 8419.6)],
            &[],
            false,
        );

        let (status, body) = get_json(app, "/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);

        let summaries = body["portfolio"]["sectorSummaries"].as_array().unwrap();
        assert_eq!(summaries.len(), 1);
        let banking = &summaries[0];
        assert_eq!(banking["sector"], "Banking & Financial");
        assert_eq!(banking["stockCount"], 2);
        assert_eq!(banking["totalInvestment"], 171490.0);
        assert!((banking["totalGainLoss"].as_f64().unwrap() - 39811.5).abs() < 1e-6);

        // sector sums agree with the independently computed portfolio totals
        assert_eq!(body["portfolio"]["totalInvestment"], 171490.0);
        let total_gain = body["portfolio"]["totalGainLoss"].as_f64().unwrap();
        assert!((total_gain - 39811.5).abs() < 1e-6);
    }

    #[tokio::test]
    async fn empty_holdings_yield_empty_snapshot_without_network_calls() {
        let (app, quotes) = test_app(Vec::new(), &[], &[], false);

        let (status, body) = get_json(app, "/api/portfolio").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["portfolio"]["stocks"].as_array().unwrap().len(), 0);
        assert_eq!(
            body["portfolio"]["sectorSummaries"].as_array().unwrap().len(),
            0
        );
        assert_eq!(body["portfolio"]["totalInvestment"], 0.0);
        assert_eq!(body["portfolio"]["totalPresentValue"], 0.0);
        assert_eq!(quotes.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn pipeline_failure_returns_500_with_empty_snapshot_and_error() {
        let (app, _) = test_app(vec![hdfc()], &[("HDFCBANK.NS", 1700.15)], &[], true);

        let (status, body) = get_json(app, "/api/portfolio").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process portfolio data");
        assert_eq!(body["portfolio"]["stocks"].as_array().unwrap().len(), 0);
        assert_eq!(body["portfolio"]["totalInvestment"], 0.0);
    }

    #[tokio::test]
    async fn health_endpoint_answers_ok() {
        let (app, _) = test_app(Vec::new(), &[], &[], false);
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
