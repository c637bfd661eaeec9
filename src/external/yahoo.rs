use async_trait::async_trait;
use serde::Deserialize;

use crate::external::quote_provider::{ProviderError, QuoteProvider, QuoteSnapshot};

/// Yahoo Finance quote provider - free, no API key, good NSE (*.NS) coverage.
///
/// Uses the v8 chart endpoint; the current price comes from the chart `meta`
/// block rather than the candle arrays, so a one-day range is enough.
pub struct YahooQuoteProvider {
    client: reqwest::Client,
}

impl YahooQuoteProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("Mozilla/5.0 (compatible; Equitydash/0.1)")
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for YahooQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooChartResult>>,
    error: Option<YahooApiError>,
}

#[derive(Debug, Deserialize)]
struct YahooApiError {
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooChartResult {
    meta: YahooChartMeta,
}

#[derive(Debug, Deserialize)]
struct YahooChartMeta {
    #[serde(rename = "regularMarketPrice")]
    regular_market_price: Option<f64>,
}

#[async_trait]
impl QuoteProvider for YahooQuoteProvider {
    async fn quote(&self, symbol: &str) -> Result<QuoteSnapshot, ProviderError> {
        let url = format!("https://query1.finance.yahoo.com/v8/finance/chart/{}", symbol);

        let resp = self
            .client
            .get(&url)
            .query(&[("interval", "1d"), ("range", "1d")])
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            if resp.status().as_u16() == 404 {
                return Err(ProviderError::NotFound);
            }
            return Err(ProviderError::BadResponse(format!("HTTP {}", resp.status())));
        }

        let body: YahooChartResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        if let Some(error) = body.chart.error {
            if error.description.contains("No data found") {
                return Err(ProviderError::NotFound);
            }
            return Err(ProviderError::BadResponse(error.description));
        }

        let results = body
            .chart
            .result
            .ok_or_else(|| ProviderError::BadResponse("No results in response".into()))?;

        let result = results.first().ok_or(ProviderError::NotFound)?;

        Ok(QuoteSnapshot {
            regular_market_price: result.meta.regular_market_price,
        })
    }
}
