use async_trait::async_trait;

use crate::external::markup;
use crate::external::quote_provider::{Fundamentals, FundamentalsProvider, ProviderError};

/// Google Finance fundamentals provider.
///
/// There is no public fundamentals API, so this fetches the quote page with a
/// browser user-agent and hands the markup to `markup::parse_fundamentals`.
/// An upstream layout change degrades fields to 0 rather than erroring.
pub struct GoogleFinanceProvider {
    client: reqwest::Client,
}

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

impl GoogleFinanceProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(BROWSER_USER_AGENT)
                // Short timeout so one unreachable upstream cannot stall a whole batch
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for GoogleFinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FundamentalsProvider for GoogleFinanceProvider {
    async fn fundamentals(&self, symbol: &str) -> Result<Fundamentals, ProviderError> {
        let url = format!("https://www.google.com/finance/quote/{}", symbol);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ProviderError::BadResponse(format!("HTTP {}", resp.status())));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(markup::parse_fundamentals(&body))
    }
}
